//! JSON format tests.

use std::collections::HashMap;

use serde::Deserialize;

use crate::format::{FormatKind, deserialize};

#[derive(Debug, Deserialize, PartialEq)]
struct TestData {
    name: String,
    value: i32,
}

#[test]
fn json_decodes_struct() {
    let json = r#"{"name": "hello", "value": 123}"#;
    let result: TestData = deserialize(FormatKind::Json, json.as_bytes()).unwrap();
    assert_eq!(result.name, "hello");
    assert_eq!(result.value, 123);
}

#[test]
fn json_decodes_map_of_ints() {
    let result: HashMap<String, i64> = deserialize(FormatKind::Json, br#"{"a":1}"#).unwrap();
    assert_eq!(result, HashMap::from([("a".to_string(), 1)]));
}

#[test]
fn json_type_mismatch_is_serde_error() {
    let result: Result<TestData, _> = deserialize(FormatKind::Json, br#"{"name": 1}"#);
    assert!(matches!(result, Err(crate::format::FormatError::Serde(_))));
}
