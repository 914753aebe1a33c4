//! JSON log record adapter.

use esdoc_domain::{DomainError, LogRecord, SpanId, TraceId, timestamp_from_unix_nanos};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::attributes::{attribute_from_json, attributes_from_json};

/// Import error types
#[derive(Debug, Error)]
pub enum ImportError {
    /// JSON parsing failed
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// A trace or span id is malformed
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] DomainError),
}

/// A log record in its JSON form.
///
/// Ids are hex strings, the timestamp is nanoseconds since the Unix epoch
/// given as a number or a decimal string, and `body`/`attributes` are
/// plain JSON values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogRecordJson {
    /// Nanoseconds since the Unix epoch.
    #[serde(deserialize_with = "nanos")]
    pub time_unix_nano: u64,
    /// 32 hex digits, or empty.
    pub trace_id: String,
    /// 16 hex digits, or empty.
    pub span_id: String,
    /// W3C trace flags.
    pub flags: u32,
    /// Severity as reported by the source.
    pub severity_text: String,
    /// Normalized severity number.
    pub severity_number: i32,
    /// Short event identifier.
    pub name: String,
    /// Message body.
    pub body: serde_json::Value,
    /// Attribute object.
    pub attributes: serde_json::Value,
}

impl LogRecordJson {
    /// Parses a record from JSON text.
    ///
    /// # Errors
    /// Returns [`ImportError::InvalidJson`] if the text does not parse.
    pub fn parse(json: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts into a domain log record.
    ///
    /// # Errors
    /// Returns [`ImportError::InvalidIdentifier`] for malformed ids.
    pub fn into_record(self) -> Result<LogRecord, ImportError> {
        Ok(LogRecord {
            timestamp: timestamp_from_unix_nanos(self.time_unix_nano),
            trace_id: parse_id(&self.trace_id, TraceId::from_hex)?,
            span_id: parse_id(&self.span_id, SpanId::from_hex)?,
            flags: self.flags,
            severity_text: self.severity_text,
            severity_number: self.severity_number,
            name: self.name,
            body: attribute_from_json(&self.body),
            attributes: attributes_from_json(&self.attributes),
        })
    }
}

fn parse_id<T: Default>(
    hex: &str,
    parse: impl FnOnce(&str) -> Result<T, DomainError>,
) -> Result<T, DomainError> {
    if hex.is_empty() {
        Ok(T::default())
    } else {
        parse(hex)
    }
}

fn nanos<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Nanos {
        Number(u64),
        Text(String),
    }

    match Nanos::deserialize(deserializer)? {
        Nanos::Number(n) => Ok(n),
        Nanos::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
