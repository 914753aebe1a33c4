//! Attribute import.
//!
//! Nested maps are flattened into dotted keys (`{"a": {"b": 1}}` becomes the
//! single field `a.b`). Arrays are kept as arrays; maps found inside array
//! elements become object values, flattened within themselves.

use crate::attribute::{AttributeMap, AttributeValue};
use crate::document::{Document, Field};
use crate::value::Value;

impl Document {
    /// Imports an attribute record with no key prefix.
    #[must_use]
    pub fn from_attributes(attributes: &AttributeMap) -> Self {
        Self::from_attributes_with_path("", attributes)
    }

    /// Imports an attribute record, prefixing every key with `path`.
    #[must_use]
    pub fn from_attributes_with_path(path: &str, attributes: &AttributeMap) -> Self {
        if attributes.is_empty() {
            return Self::new();
        }
        let mut fields = Vec::with_capacity(attributes.len());
        append_attribute_fields(&mut fields, path, attributes);
        Self::from(fields)
    }
}

impl Value {
    /// Converts a single attribute value.
    ///
    /// Maps become objects and arrays convert element by element. Kinds a
    /// document cannot hold (null, bytes) become [`Value::Nil`].
    #[must_use]
    pub fn from_attribute(attr: &AttributeValue) -> Self {
        match attr {
            AttributeValue::Bool(b) => Self::Bool(*b),
            AttributeValue::Int(i) => Self::Int(*i),
            AttributeValue::Double(d) => Self::Double(*d),
            AttributeValue::String(s) => Self::String(s.clone()),
            AttributeValue::Array(values) => Self::Array(values.iter().map(Self::from_attribute).collect()),
            AttributeValue::Map(map) => Self::Object(Document::from_attributes(map)),
            AttributeValue::Null | AttributeValue::Bytes(_) => Self::Nil,
        }
    }
}

pub(crate) fn append_attribute_fields(fields: &mut Vec<Field>, path: &str, attributes: &AttributeMap) {
    for (key, value) in attributes.iter() {
        append_attribute_value(fields, path, key, value);
    }
}

pub(crate) fn append_attribute_value(
    fields: &mut Vec<Field>,
    path: &str,
    key: &str,
    value: &AttributeValue,
) {
    match value {
        AttributeValue::Null => {}
        AttributeValue::Map(map) => append_attribute_fields(fields, &flatten_key(path, key), map),
        other => fields.push(Field::new(flatten_key(path, key), Value::from_attribute(other))),
    }
}

/// Joins a path prefix and a key with a dot. An empty prefix yields the key.
#[must_use]
pub fn flatten_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
