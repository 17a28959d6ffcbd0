//! Collaborator port for the partner selling backend
//!
//! The services in this crate never talk to a concrete client directly;
//! they go through [`PartnerSellingPort`]. Production wires in an adapter
//! over the real AWS Partner Central client, tests wire in
//! [`mock::MockPartnerPort`]. Every method returns the unified
//! [`CollaboratorError`] so callers handle remote failures one way.

use crate::engagement::{
    EngagementTaskResponse, GetEngagementInvitationRequest, GetEngagementInvitationResponse,
    ListEngagementInvitationsRequest, ListEngagementInvitationsResponse,
    RejectEngagementInvitationRequest, StartEngagementByAcceptingInvitationTaskRequest,
    StartEngagementFromOpportunityTaskRequest,
};
use crate::requests::{
    AssignOpportunityRequest, AssociateOpportunityRequest, CreateOpportunityRequest,
    CreateOpportunityResponse, DisassociateOpportunityRequest, GetAwsOpportunitySummaryRequest,
    GetAwsOpportunitySummaryResponse, GetOpportunityRequest, GetOpportunityResponse,
    ListOpportunitiesRequest, ListOpportunitiesResponse, ListSolutionsRequest,
    ListSolutionsResponse, UpdateOpportunityRequest, UpdateOpportunityResponse,
};
use async_trait::async_trait;
use core_kernel::{CollaboratorError, DomainPort};

#[async_trait]
pub trait PartnerSellingPort: DomainPort {
    async fn create_opportunity(
        &self,
        request: CreateOpportunityRequest,
    ) -> Result<CreateOpportunityResponse, CollaboratorError>;

    async fn update_opportunity(
        &self,
        request: UpdateOpportunityRequest,
    ) -> Result<UpdateOpportunityResponse, CollaboratorError>;

    async fn get_opportunity(
        &self,
        request: GetOpportunityRequest,
    ) -> Result<GetOpportunityResponse, CollaboratorError>;

    async fn list_opportunities(
        &self,
        request: ListOpportunitiesRequest,
    ) -> Result<ListOpportunitiesResponse, CollaboratorError>;

    async fn associate_opportunity(
        &self,
        request: AssociateOpportunityRequest,
    ) -> Result<(), CollaboratorError>;

    async fn disassociate_opportunity(
        &self,
        request: DisassociateOpportunityRequest,
    ) -> Result<(), CollaboratorError>;

    async fn assign_opportunity(
        &self,
        request: AssignOpportunityRequest,
    ) -> Result<(), CollaboratorError>;

    /// Lists the partner solutions available for association
    async fn list_solutions(
        &self,
        request: ListSolutionsRequest,
    ) -> Result<ListSolutionsResponse, CollaboratorError>;

    /// Fetches the AWS-side summary of an engaged opportunity
    async fn get_aws_opportunity_summary(
        &self,
        request: GetAwsOpportunitySummaryRequest,
    ) -> Result<GetAwsOpportunitySummaryResponse, CollaboratorError>;

    /// Submits an opportunity for AWS engagement
    async fn start_engagement_from_opportunity_task(
        &self,
        request: StartEngagementFromOpportunityTaskRequest,
    ) -> Result<EngagementTaskResponse, CollaboratorError>;

    async fn list_engagement_invitations(
        &self,
        request: ListEngagementInvitationsRequest,
    ) -> Result<ListEngagementInvitationsResponse, CollaboratorError>;

    async fn get_engagement_invitation(
        &self,
        request: GetEngagementInvitationRequest,
    ) -> Result<GetEngagementInvitationResponse, CollaboratorError>;

    /// Accepts a pending invitation by starting an engagement task
    async fn start_engagement_by_accepting_invitation_task(
        &self,
        request: StartEngagementByAcceptingInvitationTaskRequest,
    ) -> Result<EngagementTaskResponse, CollaboratorError>;

    async fn reject_engagement_invitation(
        &self,
        request: RejectEngagementInvitationRequest,
    ) -> Result<(), CollaboratorError>;
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use crate::engagement::{InvitationStatus, TaskStatus};
    use chrono::Utc;
    use core_kernel::{OpportunityId, TaskId};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory stand-in for the remote partner selling service
    ///
    /// Records live in hash maps keyed by identifier. Write operations
    /// enforce the same concurrency and invitation-state rules as the
    /// real service, so guard logic can be tested against it.
    #[derive(Default)]
    pub struct MockPartnerPort {
        opportunities: Arc<RwLock<HashMap<String, GetOpportunityResponse>>>,
        invitations: Arc<RwLock<HashMap<String, GetEngagementInvitationResponse>>>,
        solutions: Arc<RwLock<Vec<crate::requests::SolutionSummary>>>,
        aws_summaries: Arc<RwLock<HashMap<String, GetAwsOpportunitySummaryResponse>>>,
        last_update: Arc<RwLock<Option<UpdateOpportunityRequest>>>,
        create_calls: AtomicUsize,
        update_calls: AtomicUsize,
        sequence: AtomicUsize,
    }

    impl MockPartnerPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seeds a stored opportunity, keyed by its id
        pub async fn with_opportunity(self, record: GetOpportunityResponse) -> Self {
            let key = record
                .id
                .as_ref()
                .map(|id| id.as_str().to_string())
                .unwrap_or_default();
            self.opportunities.write().await.insert(key, record);
            self
        }

        /// Seeds a stored invitation, keyed by its id
        pub async fn with_invitation(self, record: GetEngagementInvitationResponse) -> Self {
            let key = record
                .id
                .as_ref()
                .map(|id| id.as_str().to_string())
                .unwrap_or_default();
            self.invitations.write().await.insert(key, record);
            self
        }

        /// Seeds a listed solution
        pub async fn with_solution(self, solution: crate::requests::SolutionSummary) -> Self {
            self.solutions.write().await.push(solution);
            self
        }

        /// Seeds the AWS-side summary for an opportunity, keyed by its id
        pub async fn with_aws_summary(self, summary: GetAwsOpportunitySummaryResponse) -> Self {
            let key = summary
                .related_opportunity_id
                .as_ref()
                .map(|id| id.as_str().to_string())
                .unwrap_or_default();
            self.aws_summaries.write().await.insert(key, summary);
            self
        }

        pub fn create_calls(&self) -> usize {
            self.create_calls.load(Ordering::SeqCst)
        }

        pub fn update_calls(&self) -> usize {
            self.update_calls.load(Ordering::SeqCst)
        }

        /// The most recent update request received, if any
        pub async fn last_update(&self) -> Option<UpdateOpportunityRequest> {
            self.last_update.read().await.clone()
        }

        pub async fn stored_opportunity(&self, id: &str) -> Option<GetOpportunityResponse> {
            self.opportunities.read().await.get(id).cloned()
        }

        pub async fn stored_invitation(&self, id: &str) -> Option<GetEngagementInvitationResponse> {
            self.invitations.read().await.get(id).cloned()
        }

        fn next_id(&self) -> String {
            let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
            format!("O{seq:07}")
        }
    }

    impl DomainPort for MockPartnerPort {}

    #[async_trait]
    impl PartnerSellingPort for MockPartnerPort {
        async fn create_opportunity(
            &self,
            request: CreateOpportunityRequest,
        ) -> Result<CreateOpportunityResponse, CollaboratorError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            let id = OpportunityId::new(self.next_id());
            let now = Utc::now();

            let record = GetOpportunityResponse {
                catalog: request.catalog,
                id: Some(id.clone()),
                created_date: Some(now),
                last_modified_date: Some(now),
                opportunity_type: request.opportunity_type,
                origin: request.origin,
                national_security: request.national_security,
                partner_opportunity_identifier: request.partner_opportunity_identifier.clone(),
                primary_needs_from_aws: request.primary_needs_from_aws,
                life_cycle: request.life_cycle,
                marketing: request.marketing,
                customer: request.customer,
                project: request.project,
                software_revenue: request.software_revenue,
                opportunity_team: request.opportunity_team,
                ..Default::default()
            };
            self.opportunities
                .write()
                .await
                .insert(id.as_str().to_string(), record);

            Ok(CreateOpportunityResponse {
                id,
                last_modified_date: Some(now),
                partner_opportunity_identifier: request.partner_opportunity_identifier,
            })
        }

        async fn update_opportunity(
            &self,
            request: UpdateOpportunityRequest,
        ) -> Result<UpdateOpportunityResponse, CollaboratorError> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            let mut store = self.opportunities.write().await;
            let record = store.get_mut(request.identifier.as_str()).ok_or_else(|| {
                CollaboratorError::not_found("Opportunity", &request.identifier)
            })?;

            if record.last_modified_date != Some(request.last_modified_date) {
                return Err(CollaboratorError::conflict(
                    "concurrency token does not match current record",
                ));
            }

            let now = Utc::now();
            record.last_modified_date = Some(now);
            record.opportunity_type = request.opportunity_type.clone();
            record.life_cycle = request.life_cycle.clone();
            record.marketing = request.marketing.clone();
            record.customer = request.customer.clone();
            record.project = request.project.clone();
            record.software_revenue = request.software_revenue.clone();

            let id = request.identifier.clone();
            *self.last_update.write().await = Some(request);

            Ok(UpdateOpportunityResponse {
                id,
                last_modified_date: Some(now),
            })
        }

        async fn get_opportunity(
            &self,
            request: GetOpportunityRequest,
        ) -> Result<GetOpportunityResponse, CollaboratorError> {
            self.opportunities
                .read()
                .await
                .get(request.identifier.as_str())
                .cloned()
                .ok_or_else(|| CollaboratorError::not_found("Opportunity", &request.identifier))
        }

        async fn list_opportunities(
            &self,
            request: ListOpportunitiesRequest,
        ) -> Result<ListOpportunitiesResponse, CollaboratorError> {
            let store = self.opportunities.read().await;
            let mut summaries: Vec<_> = store
                .values()
                .filter(|record| {
                    let stage_ok = match &request.life_cycle_stage {
                        Some(stages) => record
                            .life_cycle
                            .as_ref()
                            .and_then(|lc| lc.stage)
                            .is_some_and(|s| stages.contains(&s)),
                        None => true,
                    };
                    let status_ok = match &request.life_cycle_review_status {
                        Some(statuses) => record
                            .review_status()
                            .is_some_and(|s| statuses.contains(&s)),
                        None => true,
                    };
                    stage_ok && status_ok
                })
                .map(|record| crate::requests::OpportunitySummary {
                    catalog: record.catalog,
                    id: record.id.clone(),
                    arn: record.arn.clone(),
                    created_date: record.created_date,
                    last_modified_date: record.last_modified_date,
                    opportunity_type: record.opportunity_type.clone(),
                    partner_opportunity_identifier: record
                        .partner_opportunity_identifier
                        .clone(),
                    life_cycle: record.life_cycle.clone(),
                    customer: record.customer.clone(),
                })
                .collect();

            summaries.sort_by(|a, b| a.id.cmp(&b.id));
            if let Some(max) = request.max_results {
                summaries.truncate(max as usize);
            }

            Ok(ListOpportunitiesResponse {
                opportunity_summaries: summaries,
                next_token: None,
            })
        }

        async fn associate_opportunity(
            &self,
            request: AssociateOpportunityRequest,
        ) -> Result<(), CollaboratorError> {
            let mut store = self.opportunities.write().await;
            let record = store
                .get_mut(request.opportunity_identifier.as_str())
                .ok_or_else(|| {
                    CollaboratorError::not_found("Opportunity", &request.opportunity_identifier)
                })?;
            record
                .related_entity_identifiers
                .get_or_insert_with(Vec::new)
                .push(request.related_entity_identifier);
            Ok(())
        }

        async fn disassociate_opportunity(
            &self,
            request: DisassociateOpportunityRequest,
        ) -> Result<(), CollaboratorError> {
            let mut store = self.opportunities.write().await;
            let record = store
                .get_mut(request.opportunity_identifier.as_str())
                .ok_or_else(|| {
                    CollaboratorError::not_found("Opportunity", &request.opportunity_identifier)
                })?;
            if let Some(related) = record.related_entity_identifiers.as_mut() {
                related.retain(|entry| entry != &request.related_entity_identifier);
            }
            Ok(())
        }

        async fn assign_opportunity(
            &self,
            request: AssignOpportunityRequest,
        ) -> Result<(), CollaboratorError> {
            let store = self.opportunities.read().await;
            if !store.contains_key(request.identifier.as_str()) {
                return Err(CollaboratorError::not_found(
                    "Opportunity",
                    &request.identifier,
                ));
            }
            Ok(())
        }

        async fn list_solutions(
            &self,
            request: ListSolutionsRequest,
        ) -> Result<ListSolutionsResponse, CollaboratorError> {
            let store = self.solutions.read().await;
            let mut summaries: Vec<_> = store
                .iter()
                .filter(|solution| {
                    let category_ok = match &request.category {
                        Some(categories) => solution
                            .category
                            .as_ref()
                            .is_some_and(|c| categories.contains(c)),
                        None => true,
                    };
                    let status_ok = match &request.status {
                        Some(statuses) => solution
                            .status
                            .as_ref()
                            .is_some_and(|s| statuses.contains(s)),
                        None => true,
                    };
                    category_ok && status_ok
                })
                .cloned()
                .collect();

            summaries.sort_by(|a, b| a.id.cmp(&b.id));
            if let Some(max) = request.max_results {
                summaries.truncate(max as usize);
            }

            Ok(ListSolutionsResponse {
                solution_summaries: summaries,
                next_token: None,
            })
        }

        async fn get_aws_opportunity_summary(
            &self,
            request: GetAwsOpportunitySummaryRequest,
        ) -> Result<GetAwsOpportunitySummaryResponse, CollaboratorError> {
            self.aws_summaries
                .read()
                .await
                .get(request.related_opportunity_identifier.as_str())
                .cloned()
                .ok_or_else(|| {
                    CollaboratorError::not_found(
                        "AwsOpportunitySummary",
                        &request.related_opportunity_identifier,
                    )
                })
        }

        async fn start_engagement_from_opportunity_task(
            &self,
            request: StartEngagementFromOpportunityTaskRequest,
        ) -> Result<EngagementTaskResponse, CollaboratorError> {
            let store = self.opportunities.read().await;
            if !store.contains_key(request.identifier.as_str()) {
                return Err(CollaboratorError::not_found(
                    "Opportunity",
                    &request.identifier,
                ));
            }
            Ok(EngagementTaskResponse {
                task_id: Some(TaskId::new(format!("task-{}", request.client_token))),
                task_status: Some(TaskStatus::InProgress),
                opportunity_id: Some(request.identifier),
                start_time: Some(Utc::now()),
                ..Default::default()
            })
        }

        async fn list_engagement_invitations(
            &self,
            request: ListEngagementInvitationsRequest,
        ) -> Result<ListEngagementInvitationsResponse, CollaboratorError> {
            let store = self.invitations.read().await;
            let mut summaries: Vec<_> = store
                .values()
                .map(|record| crate::engagement::EngagementInvitationSummary {
                    catalog: record.catalog,
                    id: record.id.clone(),
                    arn: record.arn.clone(),
                    engagement_title: record.engagement_title.clone(),
                    status: record.status,
                    invitation_date: record.invitation_date,
                    expiration_date: record.expiration_date,
                    sender_aws_account_id: record.sender_aws_account_id.clone(),
                    sender_company_name: record.sender_company_name.clone(),
                    receiver: record.receiver.clone(),
                    participant_type: None,
                })
                .collect();

            summaries.sort_by(|a, b| a.id.cmp(&b.id));
            if let Some(max) = request.max_results {
                summaries.truncate(max as usize);
            }

            Ok(ListEngagementInvitationsResponse {
                engagement_invitation_summaries: summaries,
                next_token: None,
            })
        }

        async fn get_engagement_invitation(
            &self,
            request: GetEngagementInvitationRequest,
        ) -> Result<GetEngagementInvitationResponse, CollaboratorError> {
            self.invitations
                .read()
                .await
                .get(request.identifier.as_str())
                .cloned()
                .ok_or_else(|| {
                    CollaboratorError::not_found("EngagementInvitation", &request.identifier)
                })
        }

        async fn start_engagement_by_accepting_invitation_task(
            &self,
            request: StartEngagementByAcceptingInvitationTaskRequest,
        ) -> Result<EngagementTaskResponse, CollaboratorError> {
            let mut store = self.invitations.write().await;
            let record = store.get_mut(request.identifier.as_str()).ok_or_else(|| {
                CollaboratorError::not_found("EngagementInvitation", &request.identifier)
            })?;

            if !record.status.is_some_and(|s| s.is_actionable()) {
                return Err(CollaboratorError::conflict(format!(
                    "invitation {} is not pending",
                    request.identifier
                )));
            }
            record.status = Some(InvitationStatus::Accepted);

            Ok(EngagementTaskResponse {
                task_id: Some(TaskId::new(format!("task-{}", request.client_token))),
                task_status: Some(TaskStatus::InProgress),
                engagement_invitation_id: Some(request.identifier.clone()),
                start_time: Some(Utc::now()),
                ..Default::default()
            })
        }

        async fn reject_engagement_invitation(
            &self,
            request: RejectEngagementInvitationRequest,
        ) -> Result<(), CollaboratorError> {
            let mut store = self.invitations.write().await;
            let record = store.get_mut(request.identifier.as_str()).ok_or_else(|| {
                CollaboratorError::not_found("EngagementInvitation", &request.identifier)
            })?;

            if !record.status.is_some_and(|s| s.is_actionable()) {
                return Err(CollaboratorError::conflict(format!(
                    "invitation {} is not pending",
                    request.identifier
                )));
            }
            record.status = Some(InvitationStatus::Rejected);
            record.rejection_reason = request.rejection_reason;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::model::Catalog;
        use core_kernel::{ClientToken, InvitationId};

        fn pending_invitation(id: &str) -> GetEngagementInvitationResponse {
            GetEngagementInvitationResponse {
                catalog: Catalog::Aws,
                id: Some(InvitationId::new(id)),
                status: Some(InvitationStatus::Pending),
                ..Default::default()
            }
        }

        #[tokio::test]
        async fn test_create_allocates_sequential_ids() {
            let port = MockPartnerPort::new();
            let request = CreateOpportunityRequest {
                catalog: Catalog::Aws,
                client_token: ClientToken::generate(),
                origin: None,
                opportunity_type: None,
                national_security: None,
                partner_opportunity_identifier: None,
                primary_needs_from_aws: None,
                life_cycle: None,
                marketing: None,
                customer: None,
                project: None,
                software_revenue: None,
                opportunity_team: None,
            };
            let first = port.create_opportunity(request.clone()).await.unwrap();
            let second = port.create_opportunity(request).await.unwrap();
            assert_eq!(first.id.as_str(), "O0000001");
            assert_eq!(second.id.as_str(), "O0000002");
            assert_eq!(port.create_calls(), 2);
        }

        #[tokio::test]
        async fn test_update_with_stale_token_conflicts() {
            let record = GetOpportunityResponse {
                catalog: Catalog::Aws,
                id: Some(OpportunityId::new("O1")),
                last_modified_date: Some(Utc::now()),
                ..Default::default()
            };
            let port = MockPartnerPort::new().with_opportunity(record).await;

            let request = UpdateOpportunityRequest {
                catalog: Catalog::Aws,
                identifier: OpportunityId::new("O1"),
                last_modified_date: chrono::DateTime::UNIX_EPOCH,
                opportunity_type: None,
                national_security: None,
                partner_opportunity_identifier: None,
                primary_needs_from_aws: None,
                life_cycle: None,
                marketing: None,
                customer: None,
                project: None,
                software_revenue: None,
            };
            let err = port.update_opportunity(request).await.unwrap_err();
            assert!(matches!(err, CollaboratorError::Conflict { .. }));
        }

        #[tokio::test]
        async fn test_accept_requires_pending_status() {
            let mut invitation = pending_invitation("inv-1");
            invitation.status = Some(InvitationStatus::Expired);
            let port = MockPartnerPort::new().with_invitation(invitation).await;

            let err = port
                .start_engagement_by_accepting_invitation_task(
                    StartEngagementByAcceptingInvitationTaskRequest {
                        catalog: Catalog::Aws,
                        identifier: InvitationId::new("inv-1"),
                        client_token: ClientToken::generate(),
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(err, CollaboratorError::Conflict { .. }));
        }

        #[tokio::test]
        async fn test_list_solutions_filters_and_caps() {
            let solution = |id: &str, category: &str| crate::requests::SolutionSummary {
                catalog: Catalog::Aws,
                id: Some(id.to_string()),
                category: Some(category.to_string()),
                ..Default::default()
            };
            let port = MockPartnerPort::new()
                .with_solution(solution("S-3", "Migration"))
                .await
                .with_solution(solution("S-1", "Migration"))
                .await
                .with_solution(solution("S-2", "Analytics"))
                .await;

            let response = port
                .list_solutions(
                    ListSolutionsRequest::new(Catalog::Aws)
                        .with_category("Migration")
                        .with_max_results(1),
                )
                .await
                .unwrap();

            let ids: Vec<_> = response
                .solution_summaries
                .iter()
                .filter_map(|s| s.id.clone())
                .collect();
            assert_eq!(ids, vec!["S-1".to_string()]);
        }

        #[tokio::test]
        async fn test_aws_summary_unknown_opportunity_is_not_found() {
            let port = MockPartnerPort::new();
            let err = port
                .get_aws_opportunity_summary(GetAwsOpportunitySummaryRequest {
                    catalog: Catalog::Aws,
                    related_opportunity_identifier: OpportunityId::new("O404"),
                })
                .await
                .unwrap_err();
            assert!(err.is_not_found());
        }

        #[tokio::test]
        async fn test_reject_records_reason() {
            let port = MockPartnerPort::new()
                .with_invitation(pending_invitation("inv-2"))
                .await;

            port.reject_engagement_invitation(RejectEngagementInvitationRequest {
                catalog: Catalog::Aws,
                identifier: InvitationId::new("inv-2"),
                rejection_reason: Some("Customer problem unclear".to_string()),
            })
            .await
            .unwrap();

            let stored = port.stored_invitation("inv-2").await.unwrap();
            assert_eq!(stored.status, Some(InvitationStatus::Rejected));
            assert_eq!(
                stored.rejection_reason.as_deref(),
                Some("Customer problem unclear")
            );
        }
    }
}
