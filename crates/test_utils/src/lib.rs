//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! partner selling test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built documents and remote records for common scenarios
//! - `builders`: Builder patterns for document and record construction
//! - `assertions`: Custom assertion helpers for rendered output and errors
//! - `telemetry`: Tracing subscriber setup for tests

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod telemetry;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use telemetry::*;
