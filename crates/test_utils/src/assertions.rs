//! Custom Test Assertions
//!
//! Assertion helpers for rendered output and mapping errors that give
//! more meaningful failure messages than standard assertions.

use domain_opportunity::mapper::MappingError;
use serde_json::Value;

/// Asserts that rendered output is already in canonical form: valid JSON,
/// pretty-printed, keys sorted at every level
///
/// Parsing into a `Value` sorts object keys, so re-rendering produces the
/// canonical text; input that differs from it was not canonical.
///
/// # Panics
///
/// Panics if the text does not parse or is not byte-identical to its
/// canonical re-rendering.
pub fn assert_rendered_sorted(rendered: &str) {
    let value: Value = serde_json::from_str(rendered)
        .unwrap_or_else(|e| panic!("rendered output is not valid JSON: {e}\n{rendered}"));
    let canonical = serde_json::to_string_pretty(&value)
        .unwrap_or_else(|e| panic!("value failed to re-render: {e}"));
    assert_eq!(
        rendered, canonical,
        "rendered output is not in canonical sorted form"
    );
}

/// Asserts that a mapping error points at the expected field path
pub fn assert_error_path(error: &MappingError, expected: &str) {
    let path = match error {
        MappingError::InvalidField { path, .. } => path,
        MappingError::InvalidElement { path, .. } => path,
        MappingError::MissingField { path } => path,
    };
    assert_eq!(
        path, expected,
        "mapping error points at {path:?}, expected {expected:?} ({error})"
    );
}

/// Asserts that rendered output contains the given key exactly once
pub fn assert_rendered_contains_key(rendered: &str, key: &str) {
    let needle = format!("\"{key}\"");
    let count = rendered.matches(&needle).count();
    assert!(
        count >= 1,
        "rendered output does not contain key {key:?}:\n{rendered}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_assertion_accepts_canonical_output() {
        let value = serde_json::json!({"Alpha": 1, "Beta": {"Gamma": [{"Delta": 2}]}});
        let rendered = serde_json::to_string_pretty(&value).unwrap();
        assert_rendered_sorted(&rendered);
    }

    #[test]
    #[should_panic(expected = "canonical")]
    fn test_sorted_assertion_rejects_compact_output() {
        assert_rendered_sorted(r#"{"Beta": 1, "Alpha": 2}"#);
    }

    #[test]
    fn test_error_path_assertion_reads_every_variant() {
        let err = MappingError::missing_field("Identifier");
        assert_error_path(&err, "Identifier");
    }
}
