#![cfg(feature = "serde")]

//! Integration tests for the JSON form of [`Sequence`].

use rstest::rstest;
use slicekit::Sequence;
use std::collections::BTreeMap;

#[rstest]
fn test_sequence_json_roundtrip() {
    let sequence: Sequence<i32> = (1..=5).collect();
    let json = serde_json::to_string(&sequence).unwrap();
    assert_eq!(json, "[1,2,3,4,5]");

    let restored: Sequence<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(sequence, restored);
}

#[rstest]
fn test_absent_sequence_serializes_like_empty() {
    let absent: Sequence<f64> = Sequence::new();
    let empty: Sequence<f64> = Vec::new().into();

    assert_eq!(
        serde_json::to_value(&absent).unwrap(),
        serde_json::to_value(&empty).unwrap()
    );
    assert_eq!(absent.to_json_string().unwrap(), "[]");
}

#[rstest]
fn test_json_string_of_strings() {
    let words: Sequence<String> = vec!["foo".to_string(), "bar".to_string()].into();
    assert_eq!(words.to_json_string().unwrap(), r#"["foo","bar"]"#);
}

#[rstest]
fn test_sequence_inside_struct_fields() {
    let mut record: BTreeMap<String, Sequence<i32>> = BTreeMap::new();
    record.insert("present".to_string(), vec![1].into());
    record.insert("absent".to_string(), Sequence::new());

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"absent":[],"present":[1]}"#);
}

#[rstest]
fn test_null_field_deserializes_to_absent() {
    let record: BTreeMap<String, Sequence<i32>> =
        serde_json::from_str(r#"{"readings":null,"empty":[]}"#).unwrap();

    assert!(record["readings"].is_absent());
    assert!(!record["empty"].is_absent());
    assert_eq!(record["readings"], record["empty"]);
}

#[rstest]
fn test_nested_sequences_roundtrip() {
    let inner_first: Sequence<i32> = vec![1, 2].into();
    let inner_second: Sequence<i32> = Sequence::new();
    let outer: Sequence<Sequence<i32>> = vec![inner_first, inner_second].into();

    let json = outer.to_json_string().unwrap();
    assert_eq!(json, "[[1,2],[]]");

    let restored: Sequence<Sequence<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, outer);
}

#[rstest]
fn test_invalid_json_fails() {
    let result: Result<Sequence<i32>, _> = serde_json::from_str(r#"{"not":"a list"}"#);
    assert!(result.is_err());
}
