//! Deterministic rendering of response records for inspection
//!
//! Whatever a collaborator call returns is rendered as indented JSON with
//! stable key ordering so two renderings of the same value are
//! byte-identical and diffs across runs stay meaningful. Timestamps come
//! out as RFC3339 strings because every timestamp field in the contract
//! types serializes through chrono, never as a numeric epoch.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors produced while rendering a value
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Value cannot be rendered as JSON: {0}")]
    Unrenderable(#[from] serde_json::Error),
}

/// Renders a serializable value as deterministic, indented JSON
///
/// Keys are emitted in sorted order at every nesting level. Pure: the
/// caller decides whether and where to print the result.
pub fn render_pretty<T: Serialize>(value: &T) -> Result<String, RenderError> {
    // Round-tripping through Value sorts object keys: serde_json's map is
    // backed by a BTreeMap unless the preserve_order feature is enabled.
    let tree: Value = serde_json::to_value(value)?;
    Ok(serde_json::to_string_pretty(&tree)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        zulu: String,
        alpha: u32,
        created_at: chrono::DateTime<Utc>,
    }

    fn sample() -> Sample {
        Sample {
            zulu: "last".to_string(),
            alpha: 7,
            created_at: Utc.with_ymd_and_hms(2024, 5, 2, 14, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_keys_are_sorted() {
        let text = render_pretty(&sample()).unwrap();
        let alpha_pos = text.find("\"alpha\"").unwrap();
        let created_pos = text.find("\"created_at\"").unwrap();
        let zulu_pos = text.find("\"zulu\"").unwrap();
        assert!(alpha_pos < created_pos && created_pos < zulu_pos);
    }

    #[test]
    fn test_timestamps_render_as_rfc3339() {
        let text = render_pretty(&sample()).unwrap();
        assert!(text.contains("2024-05-02T14:30:00Z"));
        assert!(!text.contains("1714660200"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let value = sample();
        let first = render_pretty(&value).unwrap();
        let second = render_pretty(&value).unwrap();
        assert_eq!(first, second);
    }
}
