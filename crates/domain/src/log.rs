//! Log records as handed over by receivers.

use chrono::{DateTime, Utc};

use crate::attribute::{AttributeMap, AttributeValue};
use crate::id::{SpanId, TraceId};

/// A single log record.
///
/// Field names follow the log data model: an unset trace or span id is all
/// zeroes, an unset text is empty and an unset body is
/// [`AttributeValue::Null`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogRecord {
    /// Time the event occurred.
    pub timestamp: DateTime<Utc>,
    /// Trace the record belongs to.
    pub trace_id: TraceId,
    /// Span the record belongs to.
    pub span_id: SpanId,
    /// W3C trace flags.
    pub flags: u32,
    /// Severity as reported by the source.
    pub severity_text: String,
    /// Normalized severity number.
    pub severity_number: i32,
    /// Short event identifier.
    pub name: String,
    /// Message body.
    pub body: AttributeValue,
    /// Additional attributes.
    pub attributes: AttributeMap,
}

/// Converts nanoseconds since the Unix epoch into a UTC instant.
///
/// Values past the range `i64` nanoseconds can express saturate.
#[must_use]
pub fn timestamp_from_unix_nanos(nanos: u64) -> DateTime<Utc> {
    DateTime::from_timestamp_nanos(i64::try_from(nanos).unwrap_or(i64::MAX))
}
