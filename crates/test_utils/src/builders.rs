//! Test Data Builders
//!
//! Builders for documents and seeded ports. Tests specify only the fields
//! they care about and take defaults for the rest.

use chrono::{DateTime, Utc};
use core_kernel::OpportunityId;
use domain_opportunity::model::{Catalog, LifeCycle, ReviewStatus, Stage};
use domain_opportunity::ports::mock::MockPartnerPort;
use domain_opportunity::requests::GetOpportunityResponse;
use serde_json::{json, Map, Value};

use crate::fixtures::TemporalFixtures;

/// Builds raw opportunity documents as JSON text
///
/// The output goes straight into `decode_document`, so tests construct
/// input the same way a caller would supply it.
pub struct DocumentBuilder {
    root: Map<String, Value>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self { root: Map::new() }
    }

    pub fn with_catalog(mut self, catalog: &str) -> Self {
        self.root.insert("Catalog".to_string(), json!(catalog));
        self
    }

    pub fn with_identifier(mut self, identifier: &str) -> Self {
        self.root.insert("Identifier".to_string(), json!(identifier));
        self
    }

    pub fn with_client_token(mut self, token: &str) -> Self {
        self.root.insert("ClientToken".to_string(), json!(token));
        self
    }

    pub fn with_origin(mut self, origin: &str) -> Self {
        self.root.insert("Origin".to_string(), json!(origin));
        self
    }

    pub fn with_project_title(mut self, title: &str) -> Self {
        let project = self
            .root
            .entry("Project".to_string())
            .or_insert_with(|| json!({}));
        if let Some(object) = project.as_object_mut() {
            object.insert("Title".to_string(), json!(title));
        }
        self
    }

    pub fn with_review_status(mut self, status: &str) -> Self {
        let life_cycle = self
            .root
            .entry("LifeCycle".to_string())
            .or_insert_with(|| json!({}));
        if let Some(object) = life_cycle.as_object_mut() {
            object.insert("ReviewStatus".to_string(), json!(status));
        }
        self
    }

    pub fn with_team_member(mut self, email: &str) -> Self {
        let team = self
            .root
            .entry("OpportunityTeam".to_string())
            .or_insert_with(|| json!([]));
        if let Some(list) = team.as_array_mut() {
            list.push(json!({"Email": email}));
        }
        self
    }

    /// Inserts an arbitrary top-level field
    pub fn with_field(mut self, name: &str, value: Value) -> Self {
        self.root.insert(name.to_string(), value);
        self
    }

    pub fn build(self) -> String {
        Value::Object(self.root).to_string()
    }
}

/// Builds seeded remote opportunity records
pub struct RecordBuilder {
    id: OpportunityId,
    review_status: Option<ReviewStatus>,
    stage: Option<Stage>,
    last_modified_date: Option<DateTime<Utc>>,
}

impl RecordBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: OpportunityId::new(id),
            review_status: Some(ReviewStatus::Approved),
            stage: Some(Stage::Qualified),
            last_modified_date: Some(TemporalFixtures::stored_token()),
        }
    }

    pub fn with_review_status(mut self, status: ReviewStatus) -> Self {
        self.review_status = Some(status);
        self
    }

    pub fn without_review_status(mut self) -> Self {
        self.review_status = None;
        self
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn with_last_modified(mut self, token: DateTime<Utc>) -> Self {
        self.last_modified_date = Some(token);
        self
    }

    pub fn build(self) -> GetOpportunityResponse {
        GetOpportunityResponse {
            catalog: Catalog::Aws,
            id: Some(self.id),
            last_modified_date: self.last_modified_date,
            life_cycle: Some(LifeCycle {
                review_status: self.review_status,
                stage: self.stage,
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

/// Seeds a mock port with a list of remote records
pub async fn seeded_port(records: Vec<GetOpportunityResponse>) -> MockPartnerPort {
    let mut port = MockPartnerPort::new();
    for record in records {
        port = port.with_opportunity(record).await;
    }
    port
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_builder_nests_project_fields() {
        let raw = DocumentBuilder::new()
            .with_catalog("AWS")
            .with_project_title("Test title")
            .with_team_member("a@b.c")
            .with_team_member("d@e.f")
            .build();

        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["Project"]["Title"], "Test title");
        assert_eq!(value["OpportunityTeam"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_record_builder_defaults_to_updatable_record() {
        let record = RecordBuilder::new("O1").build();
        assert_eq!(
            record.review_status(),
            Some(ReviewStatus::Approved)
        );
        assert!(record.last_modified_date.is_some());
    }
}
