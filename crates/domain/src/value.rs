//! Document tree values.

use chrono::{DateTime, Utc};

use crate::document::Document;

/// Kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// No value.
    Nil,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit float.
    Double,
    /// UTF-8 string.
    String,
    /// Ordered sequence of values.
    Array,
    /// Nested document.
    Object,
    /// UTC instant with nanosecond precision.
    Timestamp,
    /// Field shadowed by a later duplicate key.
    Ignore,
}

/// Marker carried by [`Value::Ignore`].
///
/// The private field keeps the marker out of reach of code outside this
/// crate, so only [`Document::dedup`] can produce an ignored value. The
/// marker is neither `Clone` nor `Copy`, so a borrowed one cannot be reused:
///
/// ```compile_fail
/// use esdoc_domain::Value;
///
/// fn reuse(value: &Value) -> Option<Value> {
///     match value {
///         Value::Ignore(marker) => Some(Value::Ignore(*marker)),
///         _ => None,
///     }
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Shadowed(());

/// A node in a document tree.
#[derive(Debug, PartialEq)]
pub enum Value {
    /// No value.
    Nil,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float, possibly non-finite.
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Nested document.
    Object(Document),
    /// UTC instant with nanosecond precision.
    Timestamp(DateTime<Utc>),
    /// Field shadowed by a later duplicate key.
    Ignore(Shadowed),
}

impl Value {
    pub(crate) const IGNORE: Self = Self::Ignore(Shadowed(()));

    /// Creates a string value.
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Creates an array value.
    #[must_use]
    pub fn array(values: impl IntoIterator<Item = Self>) -> Self {
        Self::Array(values.into_iter().collect())
    }

    /// Returns the kind tag.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Double(_) => Kind::Double,
            Self::String(_) => Kind::String,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
            Self::Timestamp(_) => Kind::Timestamp,
            Self::Ignore(_) => Kind::Ignore,
        }
    }

    /// Returns true for values a flat or dedotted object leaves out:
    /// ignored fields, nil, and arrays without elements.
    #[must_use]
    pub fn is_omitted(&self) -> bool {
        match self {
            Self::Ignore(_) | Self::Nil => true,
            Self::Array(values) => values.is_empty(),
            _ => false,
        }
    }

    /// Sorts every nested document, including documents inside arrays.
    pub fn sort(&mut self) {
        match self {
            Self::Object(doc) => doc.sort(),
            Self::Array(values) => values.iter_mut().for_each(Self::sort),
            _ => {}
        }
    }

    /// Deduplicates every nested document, including documents inside arrays.
    pub fn dedup(&mut self) {
        match self {
            Self::Object(doc) => doc.dedup(),
            Self::Array(values) => values.iter_mut().for_each(Self::dedup),
            _ => {}
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Self::Nil => Self::Nil,
            Self::Bool(b) => Self::Bool(*b),
            Self::Int(i) => Self::Int(*i),
            Self::Double(d) => Self::Double(*d),
            Self::String(s) => Self::String(s.clone()),
            Self::Array(values) => Self::Array(values.clone()),
            Self::Object(doc) => Self::Object(doc.clone()),
            Self::Timestamp(ts) => Self::Timestamp(*ts),
            Self::Ignore(_) => Self::IGNORE,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Self::Object(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Value::Nil.kind(), Kind::Nil);
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert_eq!(Value::from(3_i64).kind(), Kind::Int);
        assert_eq!(Value::from(1.5).kind(), Kind::Double);
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::array([]).kind(), Kind::Array);
        assert_eq!(Value::from(Document::new()).kind(), Kind::Object);
        assert_eq!(Value::from(DateTime::<Utc>::UNIX_EPOCH).kind(), Kind::Timestamp);
        assert_eq!(Value::IGNORE.kind(), Kind::Ignore);
    }

    #[test]
    fn test_omitted_values() {
        assert!(Value::Nil.is_omitted());
        assert!(Value::IGNORE.is_omitted());
        assert!(Value::array([]).is_omitted());
        assert!(!Value::array([Value::Nil]).is_omitted());
        assert!(!Value::from(Document::new()).is_omitted());
        assert!(!Value::from("").is_omitted());
    }

    #[test]
    fn test_clone_keeps_every_variant() {
        let mut doc = Document::new();
        doc.add("k", 1_i64);
        let values = [
            Value::Nil,
            Value::from(false),
            Value::from(-2_i64),
            Value::from(0.5),
            Value::from("s"),
            Value::array([Value::Nil]),
            Value::from(doc),
            Value::from(DateTime::<Utc>::UNIX_EPOCH),
            Value::IGNORE,
        ];
        for value in values {
            assert_eq!(value.clone(), value);
        }
    }
}
