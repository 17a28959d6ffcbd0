//! Timestamp handling for the RFC3339 wire format
//!
//! The wire format carries timestamps as ISO-8601/RFC3339 strings
//! (`2024-01-15T10:30:00Z`). Parsing normalizes them to UTC; rendering is
//! handled by chrono's serde support, which always emits RFC3339.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors related to timestamp handling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid timestamp {value:?}: expected RFC3339")]
    InvalidTimestamp { value: String },
}

/// Parses an RFC3339 timestamp string into a UTC datetime
///
/// Offsets other than `Z` are accepted and normalized to UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TemporalError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| TemporalError::InvalidTimestamp {
            value: value.to_string(),
        })
}
