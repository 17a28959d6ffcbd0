use crate::document::DecodeError;
use crate::mapper::MappingError;
use core_kernel::{CollaboratorError, OpportunityId};
use thiserror::Error;

/// Everything that can go wrong between a raw document and a completed
/// operation
#[derive(Debug, Error)]
pub enum OpportunityError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// The record is mid-review and the remote service owns it
    #[error("opportunity {identifier} cannot be updated in review status {status:?}")]
    PreconditionFailed {
        identifier: OpportunityId,
        status: Option<String>,
    },

    /// Local configuration is unusable; no call was attempted
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error(transparent)]
    Render(#[from] core_kernel::RenderError),
}

impl OpportunityError {
    pub fn precondition_failed(
        identifier: OpportunityId,
        status: Option<String>,
    ) -> Self {
        OpportunityError::PreconditionFailed { identifier, status }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        OpportunityError::Configuration {
            message: message.into(),
        }
    }

    pub fn is_precondition_failed(&self) -> bool {
        matches!(self, OpportunityError::PreconditionFailed { .. })
    }

    /// Callers can retry these without changing the input
    pub fn is_transient(&self) -> bool {
        matches!(self, OpportunityError::Collaborator(e) if e.is_transient())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_message_names_record_and_status() {
        let err = OpportunityError::precondition_failed(
            OpportunityId::new("O1234567"),
            Some("In-Review".to_string()),
        );
        let text = err.to_string();
        assert!(text.contains("O1234567"));
        assert!(text.contains("In-Review"));
        assert!(err.is_precondition_failed());
    }

    #[test]
    fn test_throttling_is_transient() {
        let err: OpportunityError =
            CollaboratorError::Throttling { message: "slow down".to_string() }.into();
        assert!(err.is_transient());
    }
}
