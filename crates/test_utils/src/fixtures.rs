//! Pre-built Test Fixtures
//!
//! Ready-to-use documents and remote records for common scenarios.
//! Fixtures are consistent and predictable so tests can assert on exact
//! values.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{InvitationId, OpportunityId};
use domain_opportunity::engagement::{
    GetEngagementInvitationResponse, InvitationStatus, SalesInvolvementType, Visibility,
};
use domain_opportunity::model::{Catalog, LifeCycle, ReviewStatus, Stage};
use domain_opportunity::requests::{
    GetAwsOpportunitySummaryResponse, GetOpportunityResponse, SolutionSummary,
};

/// Fixture for raw opportunity documents
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// A minimal but valid create document
    pub fn minimal_create() -> &'static str {
        r#"{
            "Catalog": "AWS",
            "Origin": "Partner Referral",
            "Project": {"Title": "Minimal opportunity"}
        }"#
    }

    /// A create document exercising every mapped sub-record
    pub fn full_create() -> &'static str {
        r#"{
            "Catalog": "AWS",
            "Origin": "Partner Referral",
            "OpportunityType": "Net New Business",
            "PrimaryNeedsFromAws": ["Co-Sell - Architectural Validation"],
            "LifeCycle": {
                "ReviewStatus": "Pending Submission",
                "Stage": "Prospect",
                "NextSteps": "Schedule discovery call",
                "NextStepsHistory": [
                    {"Time": "2024-01-10T09:00:00Z", "Value": "Initial contact"}
                ],
                "TargetCloseDate": "2024-09-30"
            },
            "Marketing": {
                "AwsFundingUsed": "Yes",
                "CampaignName": "Q1 Migration Push",
                "Channels": ["Email"],
                "Source": "Marketing Activity",
                "UseCases": ["Cloud Migration"]
            },
            "Customer": {
                "Account": {
                    "CompanyName": "Example Corp",
                    "Industry": "Financial Services",
                    "WebsiteUrl": "https://example.com",
                    "Address": {"City": "Seattle", "CountryCode": "US", "PostalCode": "98101", "StateOrRegion": "WA"}
                },
                "Contacts": [
                    {"Email": "cto@example.com", "FirstName": "Pat", "LastName": "Doe", "BusinessTitle": "CTO"}
                ]
            },
            "Project": {
                "Title": "Core banking migration",
                "CustomerBusinessProblem": "Legacy datacenter exit",
                "CustomerUseCase": "Migration",
                "DeliveryModels": ["SaaS or PaaS"],
                "ExpectedCustomerSpend": [
                    {"Amount": "10000.0", "CurrencyCode": "USD", "Frequency": "Monthly", "TargetCompany": "AWS"}
                ],
                "SalesActivities": ["Initialized discussions with customer"]
            },
            "OpportunityTeam": [
                {"Email": "alice@partner.example", "FirstName": "Alice", "LastName": "Ng"}
            ],
            "SoftwareRevenue": {
                "DeliveryModel": "Contract",
                "EffectiveDate": "2024-10-01",
                "ExpirationDate": "2025-10-01",
                "Value": {"Amount": "120000", "CurrencyCode": "USD"}
            }
        }"#
    }

    /// An update document targeting the given identifier
    pub fn update_for(identifier: &str) -> String {
        format!(
            r#"{{
                "Identifier": "{identifier}",
                "LifeCycle": {{"NextSteps": "Follow up on proposal"}},
                "Project": {{"Title": "Updated title"}}
            }}"#
        )
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Token on every seeded remote record
    pub fn stored_token() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    /// A token that never matches a stored record
    pub fn stale_token() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    }
}

/// Fixture for remote opportunity records
pub struct RecordFixtures;

impl RecordFixtures {
    /// A stored record in the given review status
    pub fn opportunity(id: &str, status: ReviewStatus) -> GetOpportunityResponse {
        GetOpportunityResponse {
            catalog: Catalog::Aws,
            id: Some(OpportunityId::new(id)),
            created_date: Some(TemporalFixtures::stored_token()),
            last_modified_date: Some(TemporalFixtures::stored_token()),
            life_cycle: Some(LifeCycle {
                review_status: Some(status),
                stage: Some(Stage::Qualified),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// A stored record with no life cycle at all
    pub fn opportunity_without_life_cycle(id: &str) -> GetOpportunityResponse {
        GetOpportunityResponse {
            catalog: Catalog::Aws,
            id: Some(OpportunityId::new(id)),
            last_modified_date: Some(TemporalFixtures::stored_token()),
            ..Default::default()
        }
    }

    /// A listed partner solution
    pub fn solution(id: &str, name: &str, category: &str) -> SolutionSummary {
        SolutionSummary {
            catalog: Catalog::Aws,
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            status: Some("Active".to_string()),
            created_date: Some(TemporalFixtures::stored_token()),
            ..Default::default()
        }
    }

    /// The AWS-side summary of an engaged opportunity
    pub fn aws_summary(opportunity_id: &str) -> GetAwsOpportunitySummaryResponse {
        GetAwsOpportunitySummaryResponse {
            catalog: Catalog::Aws,
            related_opportunity_id: Some(OpportunityId::new(opportunity_id)),
            origin: Some("Partner Referral".to_string()),
            involvement_type: Some(SalesInvolvementType::CoSell),
            visibility: Some(Visibility::Full),
            ..Default::default()
        }
    }

    /// A pending engagement invitation
    pub fn pending_invitation(id: &str) -> GetEngagementInvitationResponse {
        GetEngagementInvitationResponse {
            catalog: Catalog::Aws,
            id: Some(InvitationId::new(id)),
            engagement_title: Some("Joint migration engagement".to_string()),
            status: Some(InvitationStatus::Pending),
            invitation_date: Some(TemporalFixtures::stored_token()),
            sender_company_name: Some("AWS".to_string()),
            ..Default::default()
        }
    }
}
