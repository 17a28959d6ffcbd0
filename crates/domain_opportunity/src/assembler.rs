//! Assembles operation requests out of decoded documents
//!
//! The assembler sits between [`crate::mapper`] and the port: the mapper
//! produces typed fragments, and the assembler wraps them in the right
//! request envelope for the operation at hand. Create and update differ in
//! two ways: create mints a client token and carries the create-only
//! fields (origin, team), update requires an identifier and a concurrency
//! token taken from the current remote record.

use crate::document::OpportunityDocument;
use crate::mapper::{map_document, MappingError};
use crate::model::Catalog;
use crate::requests::{CreateOpportunityRequest, UpdateOpportunityRequest};
use chrono::{DateTime, Utc};
use core_kernel::{ClientToken, OpportunityId};

/// Catalog stated in the document, falling back to the configured one
fn resolve_catalog(doc: &OpportunityDocument, fallback: Catalog) -> Result<Catalog, MappingError> {
    match doc.catalog.as_deref() {
        Some(raw) => raw
            .parse()
            .map_err(|message: String| MappingError::invalid_field("Catalog", message)),
        None => Ok(fallback),
    }
}

/// Builds a create request from a decoded document
///
/// A client token present in the document is reused so retries of the
/// same document stay idempotent; otherwise a fresh one is minted.
pub fn assemble_create(
    doc: &OpportunityDocument,
    catalog: Catalog,
) -> Result<CreateOpportunityRequest, MappingError> {
    let fragments = map_document(doc)?;

    Ok(CreateOpportunityRequest {
        catalog: resolve_catalog(doc, catalog)?,
        client_token: doc
            .client_token
            .as_deref()
            .map(ClientToken::new)
            .unwrap_or_else(ClientToken::generate),
        origin: doc.origin.clone(),
        opportunity_type: doc.opportunity_type.clone(),
        national_security: doc.national_security.clone(),
        partner_opportunity_identifier: doc.partner_opportunity_identifier.clone(),
        primary_needs_from_aws: doc.primary_needs_from_aws.clone(),
        life_cycle: fragments.life_cycle,
        marketing: fragments.marketing,
        customer: fragments.customer,
        project: fragments.project,
        software_revenue: fragments.software_revenue,
        opportunity_team: fragments.opportunity_team,
    })
}

/// Builds an update request from a decoded document
///
/// `token` must be the `LastModifiedDate` of the record as currently held
/// by the remote service, not whatever the document claims. Passing a
/// stale value makes the write fail with a conflict, which is the point.
pub fn assemble_update(
    doc: &OpportunityDocument,
    token: DateTime<Utc>,
    catalog: Catalog,
) -> Result<UpdateOpportunityRequest, MappingError> {
    let identifier = doc
        .identifier
        .as_deref()
        .map(OpportunityId::new)
        .ok_or_else(|| MappingError::missing_field("Identifier"))?;

    let fragments = map_document(doc)?;

    Ok(UpdateOpportunityRequest {
        catalog: resolve_catalog(doc, catalog)?,
        identifier,
        last_modified_date: token,
        opportunity_type: doc.opportunity_type.clone(),
        national_security: doc.national_security.clone(),
        partner_opportunity_identifier: doc.partner_opportunity_identifier.clone(),
        primary_needs_from_aws: doc.primary_needs_from_aws.clone(),
        life_cycle: fragments.life_cycle,
        marketing: fragments.marketing,
        customer: fragments.customer,
        project: fragments.project,
        software_revenue: fragments.software_revenue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::decode_document;
    use chrono::TimeZone;

    #[test]
    fn test_create_reuses_document_client_token() {
        let doc = decode_document(r#"{"ClientToken": "given-token"}"#).unwrap();
        let request = assemble_create(&doc, Catalog::Aws).unwrap();
        assert_eq!(request.client_token.as_str(), "given-token");
    }

    #[test]
    fn test_create_mints_token_when_document_has_none() {
        let doc = decode_document("{}").unwrap();
        let first = assemble_create(&doc, Catalog::Aws).unwrap();
        let second = assemble_create(&doc, Catalog::Aws).unwrap();
        assert!(!first.client_token.as_str().is_empty());
        assert_ne!(first.client_token, second.client_token);
    }

    #[test]
    fn test_catalog_in_document_wins_over_fallback() {
        let doc = decode_document(r#"{"Catalog": "Sandbox"}"#).unwrap();
        let request = assemble_create(&doc, Catalog::Aws).unwrap();
        assert_eq!(request.catalog, Catalog::Sandbox);
    }

    #[test]
    fn test_unknown_catalog_is_an_invalid_field() {
        let doc = decode_document(r#"{"Catalog": "Staging"}"#).unwrap();
        let err = assemble_create(&doc, Catalog::Aws).unwrap_err();
        assert!(matches!(
            err,
            MappingError::InvalidField { ref path, .. } if path == "Catalog"
        ));
    }

    #[test]
    fn test_update_requires_identifier() {
        let doc = decode_document(r#"{"Project": {"Title": "Migration"}}"#).unwrap();
        let token = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let err = assemble_update(&doc, token, Catalog::Aws).unwrap_err();
        assert!(matches!(
            err,
            MappingError::MissingField { ref path } if path == "Identifier"
        ));
    }

    #[test]
    fn test_update_carries_provided_token_not_document_date() {
        let doc = decode_document(
            r#"{"Identifier": "O1234567", "LastModifiedDate": "2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let token = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let request = assemble_update(&doc, token, Catalog::Aws).unwrap();
        assert_eq!(request.last_modified_date, token);
        assert_eq!(request.identifier.as_str(), "O1234567");
    }

    #[test]
    fn test_update_has_no_origin_or_team() {
        // Compile-time shape is the real assertion; this documents that
        // the update envelope drops the create-only fields.
        let doc = decode_document(
            r#"{"Identifier": "O1", "Origin": "Partner Referral", "OpportunityTeam": [{"Email": "a@b.c"}]}"#,
        )
        .unwrap();
        let token = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let request = assemble_update(&doc, token, Catalog::Aws).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("Origin").is_none());
        assert!(json.get("OpportunityTeam").is_none());
    }
}
