//! Flattened documents.

use chrono::{DateTime, Utc};

use crate::attribute::{AttributeMap, AttributeValue};
use crate::id::Identifier;
use crate::value::Value;

/// One `(key, value)` entry of a [`Document`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub(crate) key: String,
    pub(crate) value: Value,
}

impl Field {
    /// Creates a field.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The field key. Dots separate path segments.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The field value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

/// An ordered list of fields describing one flattened record.
///
/// Keys may repeat until [`dedup`](Self::dedup) runs. Field order is
/// insertion order until [`sort`](Self::sort) is called.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub(crate) fields: Vec<Field>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Creates an empty document with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Appends a field without any filtering.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.push(Field::new(key, value));
    }

    /// Appends a string field unless `value` is empty.
    pub fn add_string(&mut self, key: impl Into<String>, value: &str) {
        if !value.is_empty() {
            self.add(key, value);
        }
    }

    /// Appends an integer field.
    pub fn add_int(&mut self, key: impl Into<String>, value: i64) {
        self.add(key, value);
    }

    /// Appends the lowercase hex form of `id` unless the id is empty.
    pub fn add_id(&mut self, key: impl Into<String>, id: &impl Identifier) {
        if !id.is_empty() {
            self.add_string(key, &id.hex_string());
        }
    }

    /// Appends a timestamp field.
    pub fn add_timestamp(&mut self, key: impl Into<String>, ts: DateTime<Utc>) {
        self.add(key, ts);
    }

    /// Appends all `attributes` flattened under the path `key`.
    pub fn add_attributes(&mut self, key: &str, attributes: &AttributeMap) {
        crate::import::append_attribute_fields(&mut self.fields, key, attributes);
    }

    /// Appends a single typed value under `key`.
    ///
    /// Follows the attribute rules: null adds nothing and a map is
    /// flattened under `key`.
    pub fn add_attribute(&mut self, key: &str, value: &AttributeValue) {
        crate::import::append_attribute_value(&mut self.fields, "", key, value);
    }

    /// All fields in their current order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Iterates over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|f| (f.key.as_str(), &f.value))
    }

    /// Returns the value of the last field stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .rev()
            .find(|f| f.key == key)
            .map(|f| &f.value)
    }

    /// Number of fields, including duplicates and ignored fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| Field::new(k, v)).collect(),
        }
    }
}

impl From<Vec<Field>> for Document {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}
