use chrono::DateTime;
use kafka_browser_web::browse::{BrowseResult, MessageDto};
use serde_json::json;

#[test]
fn dump_echoes_query_params_without_transformation() {
    let result = BrowseResult {
        brokers: Some("localhost:9092,other:9093".to_owned()),
        topic: Some("orders".to_owned()),
        errors: vec![],
        messages: vec![],
        available_topics: vec!["orders".to_owned(), "events".to_owned()],
    };

    let dump = serde_json::to_value(&result).unwrap();

    assert_eq!(dump["brokers"], json!("localhost:9092,other:9093"));
    assert_eq!(dump["topic"], json!("orders"));
    assert_eq!(dump["availableTopics"], json!(["orders", "events"]));
    assert_eq!(dump["errors"], json!([]));
    assert_eq!(dump["messages"], json!([]));
}

#[test]
fn absent_params_serialize_as_null() {
    let result = BrowseResult {
        brokers: None,
        topic: None,
        errors: vec![],
        messages: vec![],
        available_topics: vec![],
    };

    let dump = serde_json::to_value(&result).unwrap();

    assert_eq!(dump["brokers"], json!(null));
    assert_eq!(dump["topic"], json!(null));
}

#[test]
fn message_parts_are_independently_nullable() {
    let timestamp = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
    let result = BrowseResult {
        brokers: Some("localhost:9092".to_owned()),
        topic: Some("orders".to_owned()),
        errors: vec![],
        messages: vec![
            MessageDto {
                key: Some("k1".to_owned()),
                value: None,
                partition: 0,
                offset: 0,
                timestamp,
            },
            MessageDto {
                key: None,
                value: Some("v2".to_owned()),
                partition: 1,
                offset: 7,
                timestamp,
            },
        ],
        available_topics: vec!["orders".to_owned()],
    };

    let dump = serde_json::to_value(&result).unwrap();

    assert_eq!(dump["messages"][0]["key"], json!("k1"));
    assert_eq!(dump["messages"][0]["value"], json!(null));
    assert_eq!(dump["messages"][1]["key"], json!(null));
    assert_eq!(dump["messages"][1]["value"], json!("v2"));
    assert_eq!(dump["messages"][1]["partition"], json!(1));
    assert_eq!(dump["messages"][1]["offset"], json!(7));
}

#[test]
fn error_list_keeps_stage_tags() {
    let result = BrowseResult {
        brokers: Some("unreachable:9092".to_owned()),
        topic: None,
        errors: vec!["admin: While fetching cluster metadata: Connection refused".to_owned()],
        messages: vec![],
        available_topics: vec![],
    };

    let dump = serde_json::to_value(&result).unwrap();

    assert_eq!(
        dump["errors"],
        json!(["admin: While fetching cluster metadata: Connection refused"])
    );
}
