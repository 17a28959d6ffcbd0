//! Rendering determinism tests

use core_kernel::render_pretty;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashMap;

#[test]
fn nested_objects_sort_keys_at_every_level() {
    let value = json!({
        "Outer": {
            "Zebra": 1,
            "Apple": {"Nested2": true, "Nested1": false}
        },
        "Another": [{"B": 2, "A": 1}]
    });

    let text = render_pretty(&value).unwrap();
    assert!(text.find("\"Another\"").unwrap() < text.find("\"Outer\"").unwrap());
    assert!(text.find("\"Apple\"").unwrap() < text.find("\"Zebra\"").unwrap());
    assert!(text.find("\"Nested1\"").unwrap() < text.find("\"Nested2\"").unwrap());
    assert!(text.find("\"A\"").unwrap() < text.find("\"B\"").unwrap());
}

#[test]
fn hash_map_iteration_order_does_not_leak_into_output() {
    // HashMap iteration order varies between constructions; the renderer
    // must hide that.
    let mut a = HashMap::new();
    let mut b = HashMap::new();
    for key in ["Stage", "ReviewStatus", "Identifier", "Catalog"] {
        a.insert(key.to_string(), key.len());
    }
    for key in ["Catalog", "Identifier", "ReviewStatus", "Stage"] {
        b.insert(key.to_string(), key.len());
    }

    assert_eq!(render_pretty(&a).unwrap(), render_pretty(&b).unwrap());
}

proptest! {
    #[test]
    fn rendering_any_string_map_twice_is_byte_identical(
        entries in proptest::collection::hash_map("[A-Za-z]{1,12}", any::<i64>(), 0..16)
    ) {
        let first = render_pretty(&entries).unwrap();
        let second = render_pretty(&entries).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rendered_output_parses_back_to_the_same_tree(
        entries in proptest::collection::btree_map("[A-Za-z]{1,12}", any::<i32>(), 0..16)
    ) {
        let text = render_pretty(&entries).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(parsed, serde_json::to_value(&entries).unwrap());
    }
}
