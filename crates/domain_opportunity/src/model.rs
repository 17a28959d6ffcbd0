//! Typed fragments of the outbound request/response contract
//!
//! These are the shapes the partner service expects, field for field. All
//! optional fields use `skip_serializing_if` so an absent fragment is
//! omitted from the payload entirely rather than sent as `null` or as an
//! empty structure, which would change the remote semantics.
//!
//! Enum-valued fields (review status, stage, catalog, …) use the remote
//! service's exact vocabulary via serde renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog a request is scoped to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Catalog {
    #[default]
    #[serde(rename = "AWS")]
    Aws,
    #[serde(rename = "Sandbox")]
    Sandbox,
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Catalog::Aws => write!(f, "AWS"),
            Catalog::Sandbox => write!(f, "Sandbox"),
        }
    }
}

impl FromStr for Catalog {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AWS" => Ok(Catalog::Aws),
            "Sandbox" => Ok(Catalog::Sandbox),
            other => Err(format!("unknown catalog {other:?}")),
        }
    }
}

/// Workflow review status of an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewStatus {
    #[serde(rename = "Pending Submission")]
    PendingSubmission,
    #[serde(rename = "Submitted")]
    Submitted,
    #[serde(rename = "In-Review")]
    InReview,
    #[serde(rename = "Action Required")]
    ActionRequired,
    #[serde(rename = "Approved")]
    Approved,
    #[serde(rename = "Rejected")]
    Rejected,
}

impl ReviewStatus {
    /// Whether a record in this status rejects partner-side updates
    ///
    /// Exactly `Submitted` and `In-Review` block: the record is
    /// mid-approval and the remote service owns it. This two-value
    /// blocklist is the remote contract; do not widen it speculatively.
    pub fn blocks_update(&self) -> bool {
        matches!(self, ReviewStatus::Submitted | ReviewStatus::InReview)
    }

    /// The wire spelling of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::PendingSubmission => "Pending Submission",
            ReviewStatus::Submitted => "Submitted",
            ReviewStatus::InReview => "In-Review",
            ReviewStatus::ActionRequired => "Action Required",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending Submission" => Ok(ReviewStatus::PendingSubmission),
            "Submitted" => Ok(ReviewStatus::Submitted),
            "In-Review" => Ok(ReviewStatus::InReview),
            "Action Required" => Ok(ReviewStatus::ActionRequired),
            "Approved" => Ok(ReviewStatus::Approved),
            "Rejected" => Ok(ReviewStatus::Rejected),
            other => Err(format!("unknown review status {other:?}")),
        }
    }
}

/// Sales stage of an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "Prospect")]
    Prospect,
    #[serde(rename = "Qualified")]
    Qualified,
    #[serde(rename = "Technical Validation")]
    TechnicalValidation,
    #[serde(rename = "Business Validation")]
    BusinessValidation,
    #[serde(rename = "Committed")]
    Committed,
    #[serde(rename = "Launched")]
    Launched,
    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Prospect => "Prospect",
            Stage::Qualified => "Qualified",
            Stage::TechnicalValidation => "Technical Validation",
            Stage::BusinessValidation => "Business Validation",
            Stage::Committed => "Committed",
            Stage::Launched => "Launched",
            Stage::ClosedLost => "Closed Lost",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Prospect" => Ok(Stage::Prospect),
            "Qualified" => Ok(Stage::Qualified),
            "Technical Validation" => Ok(Stage::TechnicalValidation),
            "Business Validation" => Ok(Stage::BusinessValidation),
            "Committed" => Ok(Stage::Committed),
            "Launched" => Ok(Stage::Launched),
            "Closed Lost" => Ok(Stage::ClosedLost),
            other => Err(format!("unknown stage {other:?}")),
        }
    }
}

/// Kind of sub-resource an opportunity can be associated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelatedEntityType {
    #[serde(rename = "Solutions")]
    Solutions,
    #[serde(rename = "AwsProducts")]
    AwsProducts,
    #[serde(rename = "AwsMarketplaceOffers")]
    AwsMarketplaceOffers,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifeCycle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_lost_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps_history: Option<Vec<NextStepsHistory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_status: Option<ReviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_status_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_close_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NextStepsHistory {
    pub time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Marketing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_funding_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cases: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_or_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apn_programs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_business_problem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_use_case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_models: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_customer_spend: Option<Vec<ExpectedCustomerSpend>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_competitor_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_solution_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_opportunity_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_activities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Projected customer spend entry
///
/// `amount` is a string on the wire; it is never parsed into a numeric
/// type on its way through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpectedCustomerSpend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_company: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SoftwareRevenue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<MonetaryValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonetaryValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}
