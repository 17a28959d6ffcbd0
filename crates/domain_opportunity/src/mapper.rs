//! Nested structure mapping from the wire document to typed fragments
//!
//! One-way, field-by-field conversion. Presence rules are uniform at
//! every level:
//!
//! - absent sub-record: no fragment is produced (the request omits it)
//! - present-but-empty list: an empty list fragment (the request carries
//!   an explicit empty list, which is a different remote semantic)
//! - malformed list element: the whole mapping fails with the element's
//!   position; elements are never skipped silently
//!
//! The presence rules live in [`map_present`] and [`map_list`] rather
//! than in per-field null checks, so a missed guard at one nesting level
//! cannot reintroduce the null-propagation bugs this layer exists to
//! prevent.

use crate::document;
use crate::model;
use core_kernel::parse_timestamp;
use thiserror::Error;

/// Errors produced while mapping a decoded document
///
/// Always carries the wire-format field path of the offending value, and
/// the element index when the value sits inside a list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("Invalid value for {path}: {message}")]
    InvalidField { path: String, message: String },

    #[error("Invalid element {path}[{index}]: {message}")]
    InvalidElement {
        path: String,
        index: usize,
        message: String,
    },

    #[error("Missing required field {path}")]
    MissingField { path: String },
}

impl MappingError {
    pub fn invalid_field(path: impl Into<String>, message: impl Into<String>) -> Self {
        MappingError::InvalidField {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn missing_field(path: impl Into<String>) -> Self {
        MappingError::MissingField { path: path.into() }
    }

    /// Attaches a list position to a field-level error
    fn at_index(self, index: usize) -> Self {
        match self {
            MappingError::InvalidField { path, message } => {
                MappingError::InvalidElement { path, index, message }
            }
            positional => positional,
        }
    }
}

/// Maps an optional sub-record if it is present
///
/// `None` in produces `None` out; the conversion runs only on a present
/// value. This is the single place "absent parent means absent subtree"
/// is encoded.
pub fn map_present<T, U>(
    source: Option<&T>,
    convert: impl FnOnce(&T) -> Result<U, MappingError>,
) -> Result<Option<U>, MappingError> {
    source.map(convert).transpose()
}

/// Maps an optional list element-wise, preserving order and count
///
/// An absent list maps to `None`; a present list maps to a list of the
/// same length. A failing element aborts the mapping with its index.
pub fn map_list<T, U>(
    source: Option<&[T]>,
    convert: impl Fn(&T) -> Result<U, MappingError>,
) -> Result<Option<Vec<U>>, MappingError> {
    let Some(items) = source else {
        return Ok(None);
    };

    let mut mapped = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        mapped.push(convert(item).map_err(|err| err.at_index(index))?);
    }
    Ok(Some(mapped))
}

/// All fragments mapped out of one document
///
/// Each field is `Some` exactly when the corresponding wire key was
/// present. The assembler consumes this without re-checking presence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedFragments {
    pub life_cycle: Option<model::LifeCycle>,
    pub marketing: Option<model::Marketing>,
    pub customer: Option<model::Customer>,
    pub project: Option<model::Project>,
    pub software_revenue: Option<model::SoftwareRevenue>,
    pub opportunity_team: Option<Vec<model::Contact>>,
}

/// Maps every optional sub-record of a decoded document
pub fn map_document(doc: &document::OpportunityDocument) -> Result<MappedFragments, MappingError> {
    Ok(MappedFragments {
        life_cycle: map_present(doc.life_cycle.as_ref(), map_life_cycle)?,
        marketing: map_present(doc.marketing.as_ref(), map_marketing)?,
        customer: map_present(doc.customer.as_ref(), map_customer)?,
        project: map_present(doc.project.as_ref(), map_project)?,
        software_revenue: map_present(doc.software_revenue.as_ref(), map_software_revenue)?,
        opportunity_team: map_list(doc.opportunity_team.as_deref(), map_contact)?,
    })
}

pub fn map_life_cycle(source: &document::LifeCycle) -> Result<model::LifeCycle, MappingError> {
    Ok(model::LifeCycle {
        closed_lost_reason: source.closed_lost_reason.clone(),
        next_steps: source.next_steps.clone(),
        next_steps_history: map_list(source.next_steps_history.as_deref(), map_next_step)?,
        review_comments: source.review_comments.clone(),
        review_status: source
            .review_status
            .as_deref()
            .map(|raw| {
                raw.parse()
                    .map_err(|message: String| MappingError::invalid_field("LifeCycle.ReviewStatus", message))
            })
            .transpose()?,
        review_status_reason: source.review_status_reason.clone(),
        stage: source
            .stage
            .as_deref()
            .map(|raw| {
                raw.parse()
                    .map_err(|message: String| MappingError::invalid_field("LifeCycle.Stage", message))
            })
            .transpose()?,
        target_close_date: source.target_close_date.clone(),
    })
}

fn map_next_step(source: &document::NextStepsHistory) -> Result<model::NextStepsHistory, MappingError> {
    let raw_time = source
        .time
        .as_deref()
        .ok_or_else(|| MappingError::invalid_field("LifeCycle.NextStepsHistory", "missing Time"))?;
    let time = parse_timestamp(raw_time).map_err(|err| {
        MappingError::invalid_field("LifeCycle.NextStepsHistory", err.to_string())
    })?;

    Ok(model::NextStepsHistory {
        time,
        value: source.value.clone(),
    })
}

pub fn map_marketing(source: &document::Marketing) -> Result<model::Marketing, MappingError> {
    Ok(model::Marketing {
        aws_funding_used: source.aws_funding_used.clone(),
        campaign_name: source.campaign_name.clone(),
        channels: source.channels.clone(),
        source: source.source.clone(),
        use_cases: source.use_cases.clone(),
    })
}

pub fn map_customer(source: &document::Customer) -> Result<model::Customer, MappingError> {
    Ok(model::Customer {
        account: map_present(source.account.as_ref(), map_account)?,
        contacts: map_list(source.contacts.as_deref(), map_contact)?,
    })
}

fn map_account(source: &document::Account) -> Result<model::Account, MappingError> {
    Ok(model::Account {
        address: map_present(source.address.as_ref(), map_address)?,
        aws_account_id: source.aws_account_id.clone(),
        company_name: source.company_name.clone(),
        duns: source.duns.clone(),
        industry: source.industry.clone(),
        other_industry: source.other_industry.clone(),
        website_url: source.website_url.clone(),
    })
}

fn map_address(source: &document::Address) -> Result<model::Address, MappingError> {
    Ok(model::Address {
        city: source.city.clone(),
        country_code: source.country_code.clone(),
        postal_code: source.postal_code.clone(),
        state_or_region: source.state_or_region.clone(),
        street_address: source.street_address.clone(),
    })
}

fn map_contact(source: &document::Contact) -> Result<model::Contact, MappingError> {
    Ok(model::Contact {
        business_title: source.business_title.clone(),
        email: source.email.clone(),
        first_name: source.first_name.clone(),
        last_name: source.last_name.clone(),
        phone: source.phone.clone(),
    })
}

pub fn map_project(source: &document::Project) -> Result<model::Project, MappingError> {
    Ok(model::Project {
        additional_comments: source.additional_comments.clone(),
        apn_programs: source.apn_programs.clone(),
        competitor_name: source.competitor_name.clone(),
        customer_business_problem: source.customer_business_problem.clone(),
        customer_use_case: source.customer_use_case.clone(),
        delivery_models: source.delivery_models.clone(),
        expected_customer_spend: map_list(
            source.expected_customer_spend.as_deref(),
            map_expected_spend,
        )?,
        other_competitor_names: source.other_competitor_names.clone(),
        other_solution_description: source.other_solution_description.clone(),
        related_opportunity_identifier: source.related_opportunity_identifier.clone(),
        sales_activities: source.sales_activities.clone(),
        title: source.title.clone(),
    })
}

fn map_expected_spend(
    source: &document::ExpectedCustomerSpend,
) -> Result<model::ExpectedCustomerSpend, MappingError> {
    Ok(model::ExpectedCustomerSpend {
        amount: source.amount.clone(),
        currency_code: source.currency_code.clone(),
        frequency: source.frequency.clone(),
        target_company: source.target_company.clone(),
    })
}

pub fn map_software_revenue(
    source: &document::SoftwareRevenue,
) -> Result<model::SoftwareRevenue, MappingError> {
    Ok(model::SoftwareRevenue {
        delivery_model: source.delivery_model.clone(),
        effective_date: source.effective_date.clone(),
        expiration_date: source.expiration_date.clone(),
        value: map_present(source.value.as_ref(), |value| {
            Ok(model::MonetaryValue {
                amount: value.amount.clone(),
                currency_code: value.currency_code.clone(),
            })
        })?,
    })
}
