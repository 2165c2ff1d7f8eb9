// ============================================================================
// Integration Tests for JSON ingestion
// ============================================================================

use rankshift::collection::group_by_field;
use rankshift::json::{JsonError, records_from_json, records_to_json, value_from_literal};
use rankshift::{RankError, Value, reorder, reorder_by_id};

const TASKS: &str = r#"[
    {"id": "t1", "title": "Write docs", "sort": 1, "tags": ["docs"]},
    {"id": "t2", "title": "Fix bug", "sort": 2, "done": false},
    {"id": "t3", "title": "Release", "sort": 3, "meta": {"owner": "ops"}}
]"#;

#[test]
fn test_parse_records() {
    let records = records_from_json(TASKS).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].get("sort"), Some(&Value::Integer(1)));
    assert_eq!(records[0].get("tags"), Some(&Value::from(r#"["docs"]"#)));
    assert_eq!(records[1].get("done"), Some(&Value::Boolean(false)));
    assert!(records[1].get("tags").is_none());
}

#[test]
fn test_reorder_round_trip() {
    let mut records = records_from_json(TASKS).unwrap();
    reorder_by_id(&mut records, "sort", "id", &"t3".into(), &"t1".into()).unwrap();

    let text = records_to_json(&records).unwrap();
    let back = records_from_json(&text).unwrap();

    let sorts: Vec<i64> = back
        .iter()
        .map(|r| r.get("sort").and_then(Value::as_i64).unwrap())
        .collect();
    assert_eq!(sorts, vec![2, 3, 1]);
    assert_eq!(back[2].get("title"), Some(&Value::from("Release")));
}

#[test]
fn test_reorder_with_cli_literals() {
    let mut records = records_from_json(r#"[{"k": 1, "r": 5}, {"k": 2, "r": 6}]"#).unwrap();
    let changed = reorder_by_id(
        &mut records,
        "r",
        "k",
        &value_from_literal("2"),
        &value_from_literal("1"),
    )
    .unwrap();

    assert_eq!(changed.len(), 2);
    assert_eq!(records[1].get("r"), Some(&Value::Integer(5)));
}

#[test]
fn test_string_rank_is_rejected() {
    let mut records = records_from_json(r#"[{"r": "1"}, {"r": 2}]"#).unwrap();
    let err = reorder(&mut records, "r", 0, 1).unwrap_err();
    assert!(matches!(err, RankError::TypeMismatch(_)));
}

#[test]
fn test_invalid_documents() {
    assert!(matches!(records_from_json("{"), Err(JsonError::ParseError(_))));
    assert!(matches!(
        records_from_json(r#"{"id": 1}"#),
        Err(JsonError::InvalidStructure(_))
    ));
    assert!(matches!(
        records_from_json(r#"[{"id": 1}, 2]"#),
        Err(JsonError::InvalidStructure(msg)) if msg.contains("Element 1")
    ));
}

#[test]
fn test_group_whole_float_with_integer() {
    let records = records_from_json(r#"[{"a": 1}, {"a": 1.0}, {"a": 2.5}]"#).unwrap();
    let groups = group_by_field(&records, "a").unwrap();

    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["1", "2.5"]);
    assert_eq!(groups[0].items.len(), 2);
}

#[test]
fn test_empty_array() {
    assert!(records_from_json("[]").unwrap().is_empty());
    assert_eq!(records_to_json(&[]).unwrap(), "[]");
}
