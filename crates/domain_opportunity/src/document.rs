//! Wire document tree and decoder
//!
//! Input documents use a fixed, capitalized field vocabulary ("Catalog",
//! "LifeCycle", "ExpectedCustomerSpend", …) that does not follow Rust
//! naming. Every field below carries an explicit `#[serde(rename)]`
//! entry; taken together these attributes are the complete wire-name
//! table for the format, auditable in this one file. No convention-based
//! renaming is used.
//!
//! Every nested record and list is optional. An absent key stays `None`
//! all the way through mapping and assembly, so the outbound request
//! omits the field instead of sending an empty structure.
//!
//! Monetary amounts are kept as strings. The downstream request schema is
//! string-typed for amounts, and coercing through a float would corrupt
//! values like `"10000.0"`. A lenient deserializer still accepts a bare
//! JSON number and preserves its literal rendering.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors produced while decoding a wire document
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input text is not well-formed JSON
    #[error("Malformed document at line {line}, column {column}: {message}")]
    Malformed {
        message: String,
        line: usize,
        column: usize,
    },

    /// The document root is not a JSON object
    #[error("Document root must be a JSON object")]
    MissingRoot,

    /// The document is well-formed JSON but does not match the wire shape
    #[error("Invalid document structure: {message}")]
    InvalidStructure { message: String },
}

/// Decodes raw text into an [`OpportunityDocument`]
///
/// Fails fast: any decode failure means no mapping runs and no request is
/// ever assembled or sent.
pub fn decode_document(input: &str) -> Result<OpportunityDocument, DecodeError> {
    let tree: serde_json::Value =
        serde_json::from_str(input).map_err(|err| DecodeError::Malformed {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        })?;

    if !tree.is_object() {
        return Err(DecodeError::MissingRoot);
    }

    serde_json::from_value(tree).map_err(|err| DecodeError::InvalidStructure {
        message: err.to_string(),
    })
}

/// Root of the wire document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OpportunityDocument {
    #[serde(rename = "Catalog")]
    pub catalog: Option<String>,
    #[serde(rename = "Identifier")]
    pub identifier: Option<String>,
    #[serde(rename = "LastModifiedDate")]
    pub last_modified_date: Option<String>,
    #[serde(rename = "ClientToken")]
    pub client_token: Option<String>,
    #[serde(rename = "OpportunityType")]
    pub opportunity_type: Option<String>,
    #[serde(rename = "PartnerOpportunityIdentifier")]
    pub partner_opportunity_identifier: Option<String>,
    #[serde(rename = "PrimaryNeedsFromAws")]
    pub primary_needs_from_aws: Option<Vec<String>>,
    #[serde(rename = "NationalSecurity")]
    pub national_security: Option<String>,
    #[serde(rename = "Origin")]
    pub origin: Option<String>,
    #[serde(rename = "LifeCycle")]
    pub life_cycle: Option<LifeCycle>,
    #[serde(rename = "Marketing")]
    pub marketing: Option<Marketing>,
    #[serde(rename = "Customer")]
    pub customer: Option<Customer>,
    #[serde(rename = "Project")]
    pub project: Option<Project>,
    #[serde(rename = "OpportunityTeam")]
    pub opportunity_team: Option<Vec<Contact>>,
    #[serde(rename = "SoftwareRevenue")]
    pub software_revenue: Option<SoftwareRevenue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LifeCycle {
    #[serde(rename = "ClosedLostReason")]
    pub closed_lost_reason: Option<String>,
    #[serde(rename = "NextSteps")]
    pub next_steps: Option<String>,
    #[serde(rename = "NextStepsHistory")]
    pub next_steps_history: Option<Vec<NextStepsHistory>>,
    #[serde(rename = "ReviewComments")]
    pub review_comments: Option<String>,
    #[serde(rename = "ReviewStatus")]
    pub review_status: Option<String>,
    #[serde(rename = "ReviewStatusReason")]
    pub review_status_reason: Option<String>,
    #[serde(rename = "Stage")]
    pub stage: Option<String>,
    #[serde(rename = "TargetCloseDate")]
    pub target_close_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NextStepsHistory {
    #[serde(rename = "Time")]
    pub time: Option<String>,
    #[serde(rename = "Value")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Marketing {
    #[serde(rename = "AwsFundingUsed")]
    pub aws_funding_used: Option<String>,
    #[serde(rename = "CampaignName")]
    pub campaign_name: Option<String>,
    #[serde(rename = "Channels")]
    pub channels: Option<Vec<String>>,
    #[serde(rename = "Source")]
    pub source: Option<String>,
    #[serde(rename = "UseCases")]
    pub use_cases: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(rename = "Account")]
    pub account: Option<Account>,
    #[serde(rename = "Contacts")]
    pub contacts: Option<Vec<Contact>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(rename = "Address")]
    pub address: Option<Address>,
    #[serde(rename = "AWSAccountId")]
    pub aws_account_id: Option<String>,
    #[serde(rename = "CompanyName")]
    pub company_name: Option<String>,
    #[serde(rename = "Duns")]
    pub duns: Option<String>,
    #[serde(rename = "Industry")]
    pub industry: Option<String>,
    #[serde(rename = "OtherIndustry")]
    pub other_industry: Option<String>,
    #[serde(rename = "WebsiteUrl")]
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "CountryCode")]
    pub country_code: Option<String>,
    #[serde(rename = "PostalCode")]
    pub postal_code: Option<String>,
    #[serde(rename = "StateOrRegion")]
    pub state_or_region: Option<String>,
    #[serde(rename = "StreetAddress")]
    pub street_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(rename = "BusinessTitle")]
    pub business_title: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "FirstName")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(rename = "AdditionalComments")]
    pub additional_comments: Option<String>,
    #[serde(rename = "ApnPrograms")]
    pub apn_programs: Option<Vec<String>>,
    #[serde(rename = "CompetitorName")]
    pub competitor_name: Option<String>,
    #[serde(rename = "CustomerBusinessProblem")]
    pub customer_business_problem: Option<String>,
    #[serde(rename = "CustomerUseCase")]
    pub customer_use_case: Option<String>,
    #[serde(rename = "DeliveryModels")]
    pub delivery_models: Option<Vec<String>>,
    #[serde(rename = "ExpectedCustomerSpend")]
    pub expected_customer_spend: Option<Vec<ExpectedCustomerSpend>>,
    #[serde(rename = "OtherCompetitorNames")]
    pub other_competitor_names: Option<String>,
    #[serde(rename = "OtherSolutionDescription")]
    pub other_solution_description: Option<String>,
    #[serde(rename = "RelatedOpportunityIdentifier")]
    pub related_opportunity_identifier: Option<String>,
    #[serde(rename = "SalesActivities")]
    pub sales_activities: Option<Vec<String>>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExpectedCustomerSpend {
    #[serde(rename = "Amount", deserialize_with = "amount_string")]
    pub amount: Option<String>,
    #[serde(rename = "CurrencyCode")]
    pub currency_code: Option<String>,
    #[serde(rename = "Frequency")]
    pub frequency: Option<String>,
    #[serde(rename = "TargetCompany")]
    pub target_company: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SoftwareRevenue {
    #[serde(rename = "DeliveryModel")]
    pub delivery_model: Option<String>,
    #[serde(rename = "EffectiveDate")]
    pub effective_date: Option<String>,
    #[serde(rename = "ExpirationDate")]
    pub expiration_date: Option<String>,
    #[serde(rename = "Value")]
    pub value: Option<MonetaryValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonetaryValue {
    #[serde(rename = "Amount", deserialize_with = "amount_string")]
    pub amount: Option<String>,
    #[serde(rename = "CurrencyCode")]
    pub currency_code: Option<String>,
}

/// Accepts a string or a bare JSON number, preserving the literal form
///
/// serde_json renders `10000.0` back as `"10000.0"`, so nothing is lost
/// when a producer forgot to quote an amount.
fn amount_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(|raw| match raw {
        StringOrNumber::Text(text) => text,
        StringOrNumber::Number(number) => number.to_string(),
    }))
}
