//! Integration tests for the encode pipeline
//!
//! These tests run records through import, sort, dedup and JSON encoding
//! and compare the produced request bodies structurally.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use pretty_assertions::assert_eq;
use serde_json::{Value as Json, json};

use esdoc_application::{EncodeConfig, EncodeError, EncodeModel, MappingMode};
use esdoc_domain::{AttributeMap, AttributeValue, Document, LogRecord, Value};
use esdoc_infrastructure::{
    ConfigFormat, LogRecordJson, SerializationError, apply_env_overrides, attributes_from_json,
    encode_document, encode_log, parse_config,
};

fn parse(bytes: &[u8]) -> Json {
    serde_json::from_slice(bytes).expect("encoder output should be valid JSON")
}

fn model(dedup: bool, dedot: bool) -> EncodeModel {
    EncodeModel::new(EncodeConfig {
        mode: MappingMode::None,
        dedup,
        dedot,
    })
    .expect("raw mode is supported")
}

fn record_from(json: &str) -> LogRecord {
    LogRecordJson::parse(json)
        .expect("record JSON should parse")
        .into_record()
        .expect("record should convert")
}

#[test]
fn test_flattening_from_attributes() {
    let attrs = attributes_from_json(&json!({"a": {"b": 1, "c": 2}}));
    let doc = Document::from_attributes(&attrs);
    let expected: Document = [("a.b", 1_i64), ("a.c", 2_i64)].into_iter().collect();
    assert_eq!(doc, expected);
}

#[test]
fn test_prefix_conflict_flat_and_dedotted() {
    let mut doc = Document::new();
    doc.add("a", 1_i64);
    doc.add("a.b", "x");
    doc.sort();
    doc.dedup();

    let flat = encode_document(&doc, false).unwrap();
    assert_eq!(parse(&flat), json!({"a.value": 1, "a.b": "x"}));

    let nested = encode_document(&doc, true).unwrap();
    assert_eq!(parse(&nested), json!({"a": {"value": 1, "b": "x"}}));
}

#[test]
fn test_dedotted_member_conflict_is_an_error() {
    let mut doc: Document = [("a", 1_i64), ("a-b", 2_i64), ("a.c", 3_i64)]
        .into_iter()
        .collect();
    doc.sort();
    doc.dedup();

    let flat = encode_document(&doc, false).unwrap();
    assert_eq!(parse(&flat), json!({"a.value": 1, "a-b": 2, "a.c": 3}));

    let err = encode_document(&doc, true).unwrap_err();
    assert!(matches!(
        err,
        SerializationError::Encode(EncodeError::KeyConflict(ref key)) if key == "a.c"
    ));
}

#[test]
fn test_duplicate_keys_emit_once() {
    let mut doc: Document = [("k", 1_i64), ("k", 2_i64)].into_iter().collect();
    doc.sort();
    doc.dedup();
    let out = String::from_utf8(encode_document(&doc, false).unwrap()).unwrap();
    assert_eq!(out, r#"{"k":2}"#);
    assert_eq!(out.matches("\"k\"").count(), 1);
}

#[test]
fn test_full_log_record_dedotted() {
    let record = record_from(
        r#"{
            "timeUnixNano": "1614811567123456789",
            "traceId": "0af7651916cd43dd8448eb211c80319c",
            "spanId": "b7ad6b7169203331",
            "flags": 1,
            "severityText": "ERROR",
            "severityNumber": 17,
            "body": {"message": "boom", "stack": []},
            "attributes": {
                "http": {"status": 500, "method": "GET"},
                "http.status": 503,
                "retry": null,
                "tags": ["a", {"x.y": 1}],
                "ratio": 1.5
            }
        }"#,
    );
    let resource = attributes_from_json(&json!({"service": {"name": "api"}}));

    let body = encode_log(&model(true, true), &resource, &record).unwrap();
    assert_eq!(
        parse(&body),
        json!({
            "Attributes": {
                "http": {"method": "GET", "status": 503},
                "ratio": 1.5,
                "tags": ["a", {"x": {"y": 1}}]
            },
            "Body": {"message": "boom"},
            "Resource": {"service": {"name": "api"}},
            "SeverityNumber": 17,
            "SeverityText": "ERROR",
            "SpanId": "b7ad6b7169203331",
            "Timestamp": "2021-03-03T22:46:07.123456789Z",
            "TraceFlags": 1,
            "TraceId": "0af7651916cd43dd8448eb211c80319c"
        })
    );
}

#[test]
fn test_full_log_record_flat_without_dedup() {
    let record = record_from(r#"{"attributes": {"k": 1}, "body": 7}"#);
    let body = encode_log(&model(false, false), &AttributeMap::new(), &record).unwrap();
    assert_eq!(
        parse(&body),
        json!({
            "Attributes.k": 1,
            "Body": 7,
            "SeverityNumber": 0,
            "Timestamp": "1970-01-01T00:00:00.000000000Z",
            "TraceFlags": 0
        })
    );
}

#[test]
fn test_output_keys_are_sorted() {
    let record = LogRecord {
        attributes: AttributeMap::new()
            .with("zeta", 1_i64)
            .with("alpha", 2_i64)
            .with("mid", AttributeValue::Double(f64::NAN)),
        ..LogRecord::default()
    };
    let body = encode_log(&model(true, false), &AttributeMap::new(), &record).unwrap();
    let text = String::from_utf8(body).unwrap();
    let alpha = text.find("Attributes.alpha").unwrap();
    let mid = text.find("Attributes.mid").unwrap();
    let zeta = text.find("Attributes.zeta").unwrap();
    assert!(alpha < mid && mid < zeta);
    assert!(text.contains(r#""Attributes.mid":null"#));
}

#[test]
fn test_empty_object_and_array_filtering() {
    let mut doc = Document::new();
    doc.add("empty_obj", Document::new());
    doc.add("empty_arr", Value::array([]));
    doc.add("arr", Value::array([Value::Object(Document::new())]));
    let out = encode_document(&doc, false).unwrap();
    assert_eq!(parse(&out), json!({"empty_obj": null, "arr": [null]}));
}

#[test]
fn test_config_drives_model() {
    let config = parse_config("dedot: false\n", ConfigFormat::Yaml).unwrap();
    let config = apply_env_overrides(config, |name| {
        (name == "ESDOC_DEDUP").then(|| "false".to_string())
    })
    .unwrap();
    let model = EncodeModel::new(config).unwrap();
    assert!(!model.config().dedup);
    assert!(!model.config().dedot);

    let ecs = parse_config(r#"{"mode": "ecs"}"#, ConfigFormat::Json).unwrap();
    assert!(matches!(
        EncodeModel::new(ecs),
        Err(EncodeError::UnsupportedMode(_))
    ));
}

#[test]
fn test_encode_error_converts() {
    let err: SerializationError = EncodeError::UnsupportedMode("ecs".into()).into();
    assert!(err.to_string().contains("unsupported mode"));
}
