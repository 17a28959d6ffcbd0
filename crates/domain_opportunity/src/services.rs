//! Opportunity and engagement services
//!
//! These services own the operation workflows: decode the input document,
//! map and assemble the request, consult the collaborator, and hand back a
//! typed response the caller can render. Update carries the one piece of
//! real business logic in this crate, the review-status guard.

use crate::assembler::{assemble_create, assemble_update};
use crate::document::decode_document;
use crate::engagement::{
    AwsSubmission, EngagementTaskResponse, GetEngagementInvitationRequest,
    GetEngagementInvitationResponse, ListEngagementInvitationsRequest,
    ListEngagementInvitationsResponse, RejectEngagementInvitationRequest,
    StartEngagementByAcceptingInvitationTaskRequest, StartEngagementFromOpportunityTaskRequest,
};
use crate::error::OpportunityError;
use crate::mapper::MappingError;
use crate::model::{Catalog, RelatedEntityType};
use crate::ports::PartnerSellingPort;
use crate::requests::{
    AssigneeContact, AssignOpportunityRequest, AssociateOpportunityRequest,
    CreateOpportunityResponse, DisassociateOpportunityRequest, GetAwsOpportunitySummaryRequest,
    GetAwsOpportunitySummaryResponse, GetOpportunityRequest, GetOpportunityResponse,
    ListOpportunitiesRequest, ListOpportunitiesResponse, ListSolutionsRequest,
    ListSolutionsResponse, OpportunitySummary, UpdateOpportunityResponse,
};
use core_kernel::{ClientToken, CollaboratorConfig, CollaboratorError, InvitationId, OpportunityId};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Workflows over partner opportunities
#[derive(Clone)]
pub struct OpportunityService {
    port: Arc<dyn PartnerSellingPort>,
    config: CollaboratorConfig,
}

impl OpportunityService {
    pub fn new(port: Arc<dyn PartnerSellingPort>, config: CollaboratorConfig) -> Self {
        Self { port, config }
    }

    /// Catalog from configuration; a value outside the contract
    /// vocabulary is an error, never silently rewritten
    fn catalog(&self) -> Result<Catalog, OpportunityError> {
        self.config
            .catalog
            .parse()
            .map_err(|message: String| OpportunityError::configuration(message))
    }

    /// Decodes a document and creates a new opportunity from it
    #[instrument(skip(self, input))]
    pub async fn create_from_document(
        &self,
        input: &str,
    ) -> Result<CreateOpportunityResponse, OpportunityError> {
        let doc = decode_document(input)?;
        let request = assemble_create(&doc, self.catalog()?)?;
        let response = self.port.create_opportunity(request).await?;
        info!(id = %response.id, "opportunity created");
        Ok(response)
    }

    /// Decodes a document and updates the opportunity it identifies
    ///
    /// The update only proceeds when the current remote record carries a
    /// review status outside the blocked set; a record that is Submitted
    /// or In-Review, or has no review status at all, is owned by the
    /// remote reviewers and the write is refused up front. The
    /// concurrency token is always the remote record's
    /// `LastModifiedDate`, never the one in the input document.
    #[instrument(skip(self, input))]
    pub async fn update_from_document(
        &self,
        input: &str,
    ) -> Result<UpdateOpportunityResponse, OpportunityError> {
        let doc = decode_document(input)?;
        let identifier = doc
            .identifier
            .as_deref()
            .map(OpportunityId::new)
            .ok_or_else(|| MappingError::missing_field("Identifier"))?;

        let remote = self
            .port
            .get_opportunity(GetOpportunityRequest {
                catalog: self.catalog()?,
                identifier: identifier.clone(),
            })
            .await?;

        match remote.review_status() {
            Some(status) if !status.blocks_update() => {}
            status => {
                warn!(id = %identifier, ?status, "update refused by review-status guard");
                return Err(OpportunityError::precondition_failed(
                    identifier,
                    status.map(|s| s.to_string()),
                ));
            }
        }

        let token = remote.last_modified_date.ok_or_else(|| {
            CollaboratorError::internal("remote record carries no LastModifiedDate")
        })?;

        let request = assemble_update(&doc, token, self.catalog()?)?;
        let response = self.port.update_opportunity(request).await?;
        info!(id = %response.id, "opportunity updated");
        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        identifier: OpportunityId,
    ) -> Result<GetOpportunityResponse, OpportunityError> {
        let response = self
            .port
            .get_opportunity(GetOpportunityRequest {
                catalog: self.catalog()?,
                identifier,
            })
            .await?;
        Ok(response)
    }

    #[instrument(skip(self, request))]
    pub async fn list(
        &self,
        request: ListOpportunitiesRequest,
    ) -> Result<ListOpportunitiesResponse, OpportunityError> {
        let response = self.port.list_opportunities(request).await?;
        info!(
            count = response.opportunity_summaries.len(),
            "opportunities listed"
        );
        Ok(response)
    }

    /// Lists every page of opportunities matching the request
    pub async fn list_all(
        &self,
        mut request: ListOpportunitiesRequest,
    ) -> Result<Vec<OpportunitySummary>, OpportunityError> {
        let mut summaries = Vec::new();
        loop {
            let response = self.port.list_opportunities(request.clone()).await?;
            summaries.extend(response.opportunity_summaries);
            match response.next_token {
                Some(token) => request.next_token = Some(token),
                None => break,
            }
        }
        Ok(summaries)
    }

    #[instrument(skip(self))]
    pub async fn associate(
        &self,
        identifier: OpportunityId,
        entity_type: RelatedEntityType,
        entity_identifier: impl Into<String> + std::fmt::Debug,
    ) -> Result<(), OpportunityError> {
        self.port
            .associate_opportunity(AssociateOpportunityRequest {
                catalog: self.catalog()?,
                opportunity_identifier: identifier,
                related_entity_type: entity_type,
                related_entity_identifier: entity_identifier.into(),
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn disassociate(
        &self,
        identifier: OpportunityId,
        entity_type: RelatedEntityType,
        entity_identifier: impl Into<String> + std::fmt::Debug,
    ) -> Result<(), OpportunityError> {
        self.port
            .disassociate_opportunity(DisassociateOpportunityRequest {
                catalog: self.catalog()?,
                opportunity_identifier: identifier,
                related_entity_type: entity_type,
                related_entity_identifier: entity_identifier.into(),
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self, assignee))]
    pub async fn assign(
        &self,
        identifier: OpportunityId,
        assignee: AssigneeContact,
    ) -> Result<(), OpportunityError> {
        self.port
            .assign_opportunity(AssignOpportunityRequest {
                catalog: self.catalog()?,
                identifier,
                assignee,
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self, request))]
    pub async fn list_solutions(
        &self,
        request: ListSolutionsRequest,
    ) -> Result<ListSolutionsResponse, OpportunityError> {
        let response = self.port.list_solutions(request).await?;
        info!(
            count = response.solution_summaries.len(),
            "solutions listed"
        );
        Ok(response)
    }

    /// Fetches the AWS-side summary of an engaged opportunity
    #[instrument(skip(self))]
    pub async fn aws_summary(
        &self,
        identifier: OpportunityId,
    ) -> Result<GetAwsOpportunitySummaryResponse, OpportunityError> {
        let response = self
            .port
            .get_aws_opportunity_summary(GetAwsOpportunitySummaryRequest {
                catalog: self.catalog()?,
                related_opportunity_identifier: identifier,
            })
            .await?;
        Ok(response)
    }

    /// Submits an opportunity to AWS by starting an engagement task
    #[instrument(skip(self, submission))]
    pub async fn submit(
        &self,
        identifier: OpportunityId,
        submission: AwsSubmission,
    ) -> Result<EngagementTaskResponse, OpportunityError> {
        let response = self
            .port
            .start_engagement_from_opportunity_task(StartEngagementFromOpportunityTaskRequest {
                catalog: self.catalog()?,
                identifier,
                client_token: ClientToken::generate(),
                aws_submission: submission,
            })
            .await?;
        info!(task_id = ?response.task_id, "engagement task started");
        Ok(response)
    }
}

/// Workflows over engagement invitations
#[derive(Clone)]
pub struct EngagementService {
    port: Arc<dyn PartnerSellingPort>,
    config: CollaboratorConfig,
}

impl EngagementService {
    pub fn new(port: Arc<dyn PartnerSellingPort>, config: CollaboratorConfig) -> Self {
        Self { port, config }
    }

    fn catalog(&self) -> Result<Catalog, OpportunityError> {
        self.config
            .catalog
            .parse()
            .map_err(|message: String| OpportunityError::configuration(message))
    }

    #[instrument(skip(self, request))]
    pub async fn list_invitations(
        &self,
        request: ListEngagementInvitationsRequest,
    ) -> Result<ListEngagementInvitationsResponse, OpportunityError> {
        let response = self.port.list_engagement_invitations(request).await?;
        info!(
            count = response.engagement_invitation_summaries.len(),
            "invitations listed"
        );
        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn get_invitation(
        &self,
        identifier: InvitationId,
    ) -> Result<GetEngagementInvitationResponse, OpportunityError> {
        let response = self
            .port
            .get_engagement_invitation(GetEngagementInvitationRequest {
                catalog: self.catalog()?,
                identifier,
            })
            .await?;
        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn accept_invitation(
        &self,
        identifier: InvitationId,
    ) -> Result<EngagementTaskResponse, OpportunityError> {
        let response = self
            .port
            .start_engagement_by_accepting_invitation_task(
                StartEngagementByAcceptingInvitationTaskRequest {
                    catalog: self.catalog()?,
                    identifier,
                    client_token: ClientToken::generate(),
                },
            )
            .await?;
        info!(task_id = ?response.task_id, "invitation accepted");
        Ok(response)
    }

    #[instrument(skip(self, reason))]
    pub async fn reject_invitation(
        &self,
        identifier: InvitationId,
        reason: Option<String>,
    ) -> Result<(), OpportunityError> {
        self.port
            .reject_engagement_invitation(RejectEngagementInvitationRequest {
                catalog: self.catalog()?,
                identifier: identifier.clone(),
                rejection_reason: reason,
            })
            .await?;
        info!(id = %identifier, "invitation rejected");
        Ok(())
    }
}
