//! Request and response envelopes for the opportunity operations
//!
//! These shapes are a fixed external contract; this layer matches them
//! field for field and does not design them. Optional request fields are
//! omitted (not nulled) when absent, mirroring the fragment rules in
//! [`crate::model`].

use crate::model::{
    Catalog, Contact, Customer, LifeCycle, Marketing, Project, RelatedEntityType, ReviewStatus,
    SoftwareRevenue, Stage,
};
use chrono::{DateTime, Utc};
use core_kernel::{ClientToken, OpportunityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOpportunityRequest {
    pub catalog: Catalog,
    pub client_token: ClientToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_security: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_opportunity_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_needs_from_aws: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_cycle: Option<LifeCycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing: Option<Marketing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_revenue: Option<SoftwareRevenue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_team: Option<Vec<Contact>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOpportunityResponse {
    pub id: OpportunityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_opportunity_identifier: Option<String>,
}

/// Update payload
///
/// `last_modified_date` is the concurrency token: the service compares it
/// against the record's current value and rejects the write when they
/// differ, so stale updates never land.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateOpportunityRequest {
    pub catalog: Catalog,
    pub identifier: OpportunityId,
    pub last_modified_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_security: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_opportunity_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_needs_from_aws: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_cycle: Option<LifeCycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing: Option<Marketing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_revenue: Option<SoftwareRevenue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateOpportunityResponse {
    pub id: OpportunityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOpportunityRequest {
    pub catalog: Catalog,
    pub identifier: OpportunityId,
}

/// Full remote record as returned by the collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetOpportunityResponse {
    pub catalog: Catalog,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<OpportunityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_security: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_opportunity_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_needs_from_aws: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_cycle: Option<LifeCycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing: Option<Marketing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_revenue: Option<SoftwareRevenue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_team: Option<Vec<Contact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_entity_identifiers: Option<Vec<String>>,
}

impl GetOpportunityResponse {
    /// Review status of the remote record, if it has entered any workflow
    pub fn review_status(&self) -> Option<ReviewStatus> {
        self.life_cycle.as_ref().and_then(|lc| lc.review_status)
    }
}

/// Listing filters: workflow stage, review status, and a page-size cap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListOpportunitiesRequest {
    pub catalog: Catalog,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_cycle_stage: Option<Vec<Stage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_cycle_review_status: Option<Vec<ReviewStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListOpportunitiesRequest {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.life_cycle_stage.get_or_insert_with(Vec::new).push(stage);
        self
    }

    pub fn with_review_status(mut self, status: ReviewStatus) -> Self {
        self.life_cycle_review_status
            .get_or_insert_with(Vec::new)
            .push(status);
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListOpportunitiesResponse {
    pub opportunity_summaries: Vec<OpportunitySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OpportunitySummary {
    pub catalog: Catalog,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<OpportunityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_opportunity_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_cycle: Option<LifeCycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

/// Listing filters for partner solutions
///
/// Solutions are the catalog entries an opportunity gets associated with;
/// their identifiers feed `AssociateOpportunityRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSolutionsRequest {
    pub catalog: Catalog,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListSolutionsRequest {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category.get_or_insert_with(Vec::new).push(category.into());
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListSolutionsResponse {
    pub solution_summaries: Vec<SolutionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SolutionSummary {
    pub catalog: Catalog,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAwsOpportunitySummaryRequest {
    pub catalog: Catalog,
    pub related_opportunity_identifier: OpportunityId,
}

/// AWS-side view of an engaged opportunity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetAwsOpportunitySummaryResponse {
    pub catalog: Catalog,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_opportunity_id: Option<OpportunityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub involvement_type: Option<crate::engagement::SalesInvolvementType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<crate::engagement::Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_cycle: Option<LifeCycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_team: Option<Vec<Contact>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateOpportunityRequest {
    pub catalog: Catalog,
    pub opportunity_identifier: OpportunityId,
    pub related_entity_type: RelatedEntityType,
    pub related_entity_identifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociateOpportunityRequest {
    pub catalog: Catalog,
    pub opportunity_identifier: OpportunityId,
    pub related_entity_type: RelatedEntityType,
    pub related_entity_identifier: String,
}

/// New owner of an opportunity
///
/// Unlike the customer contacts, every assignee field is required by the
/// remote contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssigneeContact {
    pub business_title: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssignOpportunityRequest {
    pub catalog: Catalog,
    pub identifier: OpportunityId,
    pub assignee: AssigneeContact,
}
