//! Ports and Adapters Infrastructure
//!
//! The outbound collaborator (the partner selling service) sits behind a
//! port trait defined in the domain crate. Adapters implement that trait:
//! a concrete SDK/HTTP adapter in production, an in-memory mock in tests.
//! This module provides the pieces shared by every adapter: the unified
//! error type each call returns, the marker trait ports extend, and the
//! adapter configuration.
//!
//! No retry, backoff, or caching happens at this layer. A failed call is
//! surfaced as a [`CollaboratorError`] with the remote status and message
//! attached; deciding whether to retry belongs to the transport adapter.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for outbound collaborator calls
///
/// Mirrors the failure vocabulary of the remote service so adapters can
/// translate transport-level responses one-to-one. Domain code matches on
/// the variant, never on the message text.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The addressed remote record does not exist
    #[error("Resource not found: {entity_type} {identifier}")]
    ResourceNotFound {
        entity_type: String,
        identifier: String,
    },

    /// The remote service rejected the request payload
    #[error("Validation rejected by collaborator: {message}")]
    Validation { message: String },

    /// The request conflicts with current remote state (stale concurrency token included)
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// The caller is not permitted to perform the operation
    #[error("Access denied: {message}")]
    AccessDenied { message: String },

    /// The remote service is shedding load
    #[error("Throttled by collaborator: {message}")]
    Throttling { message: String },

    /// The remote service failed internally
    #[error("Collaborator internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The call never reached the remote service
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CollaboratorError {
    /// Creates a ResourceNotFound error
    pub fn not_found(entity_type: impl Into<String>, identifier: impl fmt::Display) -> Self {
        CollaboratorError::ResourceNotFound {
            entity_type: entity_type.into(),
            identifier: identifier.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        CollaboratorError::Validation {
            message: message.into(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        CollaboratorError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Internal error without an underlying source
    pub fn internal(message: impl Into<String>) -> Self {
        CollaboratorError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Connection error without an underlying source
    pub fn connection(message: impl Into<String>) -> Self {
        CollaboratorError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if a later identical call could succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CollaboratorError::Throttling { .. } | CollaboratorError::Connection { .. }
        )
    }

    /// Returns true if the addressed record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, CollaboratorError::ResourceNotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// Port traits extend this marker so implementations are thread-safe and
/// usable behind `Arc<dyn …>` in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

/// Configuration shared by collaborator adapters
///
/// Carries the catalog every request is scoped to and connection hints for
/// concrete adapters. Credential resolution is the adapter's concern and
/// never appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaboratorConfig {
    /// Catalog every outbound request is scoped to ("AWS" or "Sandbox")
    pub catalog: String,
    /// Region hint for the concrete adapter (e.g. "us-east-1")
    pub region: Option<String>,
    /// Endpoint override, mainly for test stacks
    pub endpoint: Option<String>,
    /// Request timeout in milliseconds, enforced by the adapter
    pub timeout_ms: u64,
}

impl Default for CollaboratorConfig {
    fn default() -> Self {
        Self {
            catalog: "AWS".to_string(),
            region: Some("us-east-1".to_string()),
            endpoint: None,
            timeout_ms: 30_000,
        }
    }
}

impl CollaboratorConfig {
    /// Configuration pointing at the sandbox catalog
    pub fn sandbox() -> Self {
        Self {
            catalog: "Sandbox".to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_helper() {
        let err = CollaboratorError::not_found("Opportunity", "O1111111");
        assert!(err.is_not_found());
        assert!(!err.is_transient());
        assert!(err.to_string().contains("O1111111"));
    }

    #[test]
    fn test_transient_classification() {
        let throttled = CollaboratorError::Throttling {
            message: "rate exceeded".to_string(),
        };
        assert!(throttled.is_transient());

        let validation = CollaboratorError::validation("Catalog is required");
        assert!(!validation.is_transient());

        let conflict = CollaboratorError::conflict("stale LastModifiedDate");
        assert!(!conflict.is_transient());
    }

    #[test]
    fn test_config_defaults() {
        let config = CollaboratorConfig::default();
        assert_eq!(config.catalog, "AWS");
        assert_eq!(config.timeout_ms, 30_000);

        let sandbox = CollaboratorConfig::sandbox();
        assert_eq!(sandbox.catalog, "Sandbox");
        assert_eq!(sandbox.region.as_deref(), Some("us-east-1"));
    }
}
