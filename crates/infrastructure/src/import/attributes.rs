//! JSON values to attribute records.

use esdoc_domain::{AttributeMap, AttributeValue};
use serde_json::Value as JsonValue;

/// Converts a JSON object into an attribute record, keeping member order.
///
/// Anything other than an object yields an empty record.
#[must_use]
pub fn attributes_from_json(value: &JsonValue) -> AttributeMap {
    match value {
        JsonValue::Object(members) => members
            .iter()
            .map(|(k, v)| (k.as_str(), attribute_from_json(v)))
            .collect(),
        _ => AttributeMap::new(),
    }
}

/// Converts one JSON value into an attribute value.
///
/// Integers outside the `i64` range become doubles.
#[must_use]
pub fn attribute_from_json(value: &JsonValue) -> AttributeValue {
    match value {
        JsonValue::Null => AttributeValue::Null,
        JsonValue::Bool(b) => AttributeValue::Bool(*b),
        JsonValue::Number(n) => n
            .as_i64()
            .map(AttributeValue::Int)
            .or_else(|| n.as_f64().map(AttributeValue::Double))
            .unwrap_or(AttributeValue::Null),
        JsonValue::String(s) => AttributeValue::String(s.clone()),
        JsonValue::Array(items) => {
            AttributeValue::Array(items.iter().map(attribute_from_json).collect())
        }
        JsonValue::Object(_) => AttributeValue::Map(attributes_from_json(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_object_keeps_member_order() {
        let attrs = attributes_from_json(&json!({"z": 1, "a": "x", "m": null}));
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(attrs.get("m"), Some(&AttributeValue::Null));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(attribute_from_json(&json!(-3)), AttributeValue::Int(-3));
        assert_eq!(attribute_from_json(&json!(2.5)), AttributeValue::Double(2.5));
        assert_eq!(
            attribute_from_json(&json!(u64::MAX)),
            AttributeValue::Double(u64::MAX as f64)
        );
    }

    #[test]
    fn test_nested_values() {
        let value = attribute_from_json(&json!({"a": [true, {"b": "c"}]}));
        let expected = AttributeValue::Map(AttributeMap::new().with(
            "a",
            vec![
                AttributeValue::Bool(true),
                AttributeValue::Map(AttributeMap::new().with("b", "c")),
            ],
        ));
        assert_eq!(value, expected);
    }

    #[test]
    fn test_non_object_is_empty() {
        assert!(attributes_from_json(&json!([1, 2])).is_empty());
        assert!(attributes_from_json(&json!("s")).is_empty());
    }
}
