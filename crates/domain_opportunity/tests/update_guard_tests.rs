//! Update workflow against the mock collaborator
//!
//! Exercises the review-status guard and the concurrency token handling
//! the way a caller would see them: raw document in, port traffic out.

use chrono::{TimeZone, Utc};
use core_kernel::{CollaboratorConfig, OpportunityId};
use domain_opportunity::model::{Catalog, LifeCycle, ReviewStatus};
use domain_opportunity::ports::mock::MockPartnerPort;
use domain_opportunity::requests::GetOpportunityResponse;
use domain_opportunity::services::OpportunityService;
use std::sync::Arc;

fn record(id: &str, status: ReviewStatus) -> GetOpportunityResponse {
    GetOpportunityResponse {
        catalog: Catalog::Aws,
        id: Some(OpportunityId::new(id)),
        last_modified_date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()),
        life_cycle: Some(LifeCycle {
            review_status: Some(status),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_blocked_statuses_never_reach_the_port() {
    for status in [ReviewStatus::Submitted, ReviewStatus::InReview] {
        let port = Arc::new(
            MockPartnerPort::new()
                .with_opportunity(record("O777", status))
                .await,
        );
        let service = OpportunityService::new(port.clone(), CollaboratorConfig::default());

        let err = service
            .update_from_document(r#"{"Identifier": "O777", "Project": {"Title": "Rename"}}"#)
            .await
            .unwrap_err();

        assert!(err.is_precondition_failed(), "status {status} should block");
        assert_eq!(port.update_calls(), 0, "no write for status {status}");
    }
}

#[tokio::test]
async fn test_unblocked_update_writes_exactly_once_with_remote_token() {
    let remote_token = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let port = Arc::new(
        MockPartnerPort::new()
            .with_opportunity(record("O888", ReviewStatus::Approved))
            .await,
    );
    let service = OpportunityService::new(port.clone(), CollaboratorConfig::default());

    // Document claims a different, stale LastModifiedDate on purpose.
    service
        .update_from_document(
            r#"{
                "Identifier": "O888",
                "LastModifiedDate": "2020-01-01T00:00:00Z",
                "Project": {"Title": "Rename"}
            }"#,
        )
        .await
        .unwrap();

    assert_eq!(port.update_calls(), 1);
    let sent = port.last_update().await.unwrap();
    assert_eq!(sent.last_modified_date, remote_token);
    assert_eq!(sent.identifier.as_str(), "O888");
    assert_eq!(
        sent.project.unwrap().title.as_deref(),
        Some("Rename")
    );
}

#[tokio::test]
async fn test_update_of_unknown_record_surfaces_not_found() {
    let service = OpportunityService::new(
        Arc::new(MockPartnerPort::new()),
        CollaboratorConfig::default(),
    );

    let err = service
        .update_from_document(r#"{"Identifier": "O404"}"#)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        domain_opportunity::OpportunityError::Collaborator(
            core_kernel::CollaboratorError::ResourceNotFound { .. }
        )
    ));
}

#[tokio::test]
async fn test_rejected_record_accepts_corrections() {
    let port = Arc::new(
        MockPartnerPort::new()
            .with_opportunity(record("O555", ReviewStatus::Rejected))
            .await,
    );
    let service = OpportunityService::new(port.clone(), CollaboratorConfig::default());

    service
        .update_from_document(
            r#"{"Identifier": "O555", "Project": {"CustomerBusinessProblem": "Clarified problem statement"}}"#,
        )
        .await
        .unwrap();
    assert_eq!(port.update_calls(), 1);
}
