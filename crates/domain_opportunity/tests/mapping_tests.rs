//! Decode-and-map behavior over realistic documents

use domain_opportunity::document::decode_document;
use domain_opportunity::mapper::{map_document, MappingError};
use domain_opportunity::model::{ReviewStatus, Stage};
use proptest::prelude::*;

const FULL_DOCUMENT: &str = r#"{
    "Catalog": "AWS",
    "Origin": "Partner Referral",
    "OpportunityType": "Net New Business",
    "PrimaryNeedsFromAws": ["Co-Sell - Architectural Validation"],
    "LifeCycle": {
        "ReviewStatus": "Pending Submission",
        "Stage": "Prospect",
        "NextSteps": "Schedule discovery call",
        "NextStepsHistory": [
            {"Time": "2024-01-10T09:00:00Z", "Value": "Initial contact"},
            {"Time": "2024-02-02T15:30:00Z", "Value": "Demo delivered"}
        ],
        "TargetCloseDate": "2024-09-30"
    },
    "Marketing": {
        "AwsFundingUsed": "Yes",
        "CampaignName": "Q1 Migration Push",
        "Channels": ["Email", "Live Event"],
        "Source": "Marketing Activity",
        "UseCases": ["Cloud Migration"]
    },
    "Customer": {
        "Account": {
            "CompanyName": "Example Corp",
            "Industry": "Financial Services",
            "WebsiteUrl": "https://example.com",
            "Address": {
                "City": "Seattle",
                "CountryCode": "US",
                "PostalCode": "98101",
                "StateOrRegion": "WA"
            }
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
        {"Email": "alice@partner.example", "FirstName": "Alice", "LastName": "Ng"},
        {"Email": "bob@partner.example", "FirstName": "Bob", "LastName": "Reyes"}
    ],
    "SoftwareRevenue": {
        "DeliveryModel": "Contract",
        "EffectiveDate": "2024-10-01",
        "ExpirationDate": "2025-10-01",
        "Value": {"Amount": "120000", "CurrencyCode": "USD"}
    }
}"#;

#[test]
fn test_full_document_maps_every_fragment() {
    let doc = decode_document(FULL_DOCUMENT).unwrap();
    let fragments = map_document(&doc).unwrap();

    let life_cycle = fragments.life_cycle.unwrap();
    assert_eq!(life_cycle.review_status, Some(ReviewStatus::PendingSubmission));
    assert_eq!(life_cycle.stage, Some(Stage::Prospect));
    assert_eq!(life_cycle.next_steps_history.as_ref().unwrap().len(), 2);

    let customer = fragments.customer.unwrap();
    let account = customer.account.unwrap();
    assert_eq!(account.company_name.as_deref(), Some("Example Corp"));
    assert_eq!(
        account.address.unwrap().country_code.as_deref(),
        Some("US")
    );

    let team = fragments.opportunity_team.unwrap();
    assert_eq!(team.len(), 2);
    assert_eq!(team[1].email.as_deref(), Some("bob@partner.example"));
}

#[test]
fn test_amount_literal_survives_decode_and_map() {
    let doc = decode_document(FULL_DOCUMENT).unwrap();
    let fragments = map_document(&doc).unwrap();

    let project = fragments.project.unwrap();
    let spend = &project.expected_customer_spend.unwrap()[0];
    assert_eq!(spend.amount.as_deref(), Some("10000.0"));

    let revenue = fragments.software_revenue.unwrap();
    assert_eq!(
        revenue.value.unwrap().amount.as_deref(),
        Some("120000")
    );
}

#[test]
fn test_bad_history_entry_reported_by_position() {
    let doc = decode_document(
        r#"{
            "LifeCycle": {
                "NextStepsHistory": [
                    {"Time": "2024-01-10T09:00:00Z", "Value": "fine"},
                    {"Time": "not a date", "Value": "broken"}
                ]
            }
        }"#,
    )
    .unwrap();

    let err = map_document(&doc).unwrap_err();
    match err {
        MappingError::InvalidElement { path, index, .. } => {
            assert_eq!(path, "LifeCycle.NextStepsHistory");
            assert_eq!(index, 1);
        }
        other => panic!("expected positional error, got {other:?}"),
    }
}

#[test]
fn test_unknown_stage_names_its_path() {
    let doc = decode_document(r#"{"LifeCycle": {"Stage": "Daydreaming"}}"#).unwrap();
    let err = map_document(&doc).unwrap_err();
    assert!(matches!(
        err,
        MappingError::InvalidField { ref path, .. } if path == "LifeCycle.Stage"
    ));
}

proptest! {
    /// Mapping a contact list never reorders or drops entries
    #[test]
    fn prop_team_order_and_count_preserved(emails in proptest::collection::vec("[a-z]{1,8}@example\\.com", 0..8)) {
        let team: Vec<serde_json::Value> = emails
            .iter()
            .map(|email| serde_json::json!({"Email": email}))
            .collect();
        let raw = serde_json::json!({"OpportunityTeam": team}).to_string();

        let doc = decode_document(&raw).unwrap();
        let fragments = map_document(&doc).unwrap();
        let mapped = fragments.opportunity_team.unwrap_or_default();

        prop_assert_eq!(mapped.len(), emails.len());
        for (contact, email) in mapped.iter().zip(&emails) {
            prop_assert_eq!(contact.email.as_deref(), Some(email.as_str()));
        }
    }

    /// Every decimal amount literal round-trips through decode untouched
    #[test]
    fn prop_amount_literal_preserved(whole in 0u64..1_000_000, frac in 0u32..100) {
        let literal = format!("{whole}.{frac:02}");
        let raw = format!(
            r#"{{"Project": {{"ExpectedCustomerSpend": [{{"Amount": "{literal}", "CurrencyCode": "USD"}}]}}}}"#
        );
        let doc = decode_document(&raw).unwrap();
        let fragments = map_document(&doc).unwrap();
        let spend = fragments.project.unwrap().expected_customer_spend.unwrap();
        prop_assert_eq!(spend[0].amount.as_deref(), Some(literal.as_str()));
    }
}
