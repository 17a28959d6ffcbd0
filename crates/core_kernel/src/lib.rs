//! Core Kernel - Foundational types and utilities for the partner selling toolkit
//!
//! This crate provides the fundamental building blocks used across the domain crates:
//! - String-backed identifiers for remote-allocated entities
//! - Timestamp parsing for the RFC3339 wire format
//! - Port abstractions and the unified collaborator error type
//! - Deterministic response rendering for inspection output

pub mod identifiers;
pub mod ports;
pub mod render;
pub mod temporal;

pub use identifiers::{ClientToken, InvitationId, OpportunityId, TaskId};
pub use ports::{CollaboratorConfig, CollaboratorError, DomainPort};
pub use render::{render_pretty, RenderError};
pub use temporal::{parse_timestamp, TemporalError};
