//! JSON serialization helpers for index documents.

use esdoc_application::{EncodeError, EncodeModel, serialize_document, serialize_value};
use esdoc_domain::{AttributeMap, Document, LogRecord, Value};
use std::io;

use super::sink::JsonSink;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Encoding a document failed.
    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Serializes a document to compact JSON bytes.
///
/// # Errors
///
/// Returns an error if the sink rejects the event stream.
pub fn encode_document(doc: &Document, dedot: bool) -> Result<Vec<u8>, SerializationError> {
    let mut sink = JsonSink::new(Vec::new());
    serialize_document(doc, &mut sink, dedot)?;
    Ok(sink.finish().map_err(EncodeError::from)?)
}

/// Serializes a document to JSON text with 2-space indentation.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_document_pretty(doc: &Document, dedot: bool) -> Result<String, SerializationError> {
    let mut sink = JsonSink::pretty(Vec::new(), b"  ");
    serialize_document(doc, &mut sink, dedot)?;
    let buffer = sink.finish().map_err(EncodeError::from)?;
    Ok(String::from_utf8(buffer)?)
}

/// Serializes a single value to compact JSON bytes.
///
/// # Errors
///
/// Returns an error if the sink rejects the event stream.
pub fn encode_value(value: &Value, dedot: bool) -> Result<Vec<u8>, SerializationError> {
    let mut sink = JsonSink::new(Vec::new());
    serialize_value(value, &mut sink, dedot)?;
    Ok(sink.finish().map_err(EncodeError::from)?)
}

/// Encodes a log record into an index request body.
///
/// # Errors
///
/// Returns an error if the sink rejects the event stream.
pub fn encode_log(
    model: &EncodeModel,
    resource: &AttributeMap,
    record: &LogRecord,
) -> Result<Vec<u8>, SerializationError> {
    let mut sink = JsonSink::new(Vec::new());
    model.encode(resource, record, &mut sink)?;
    Ok(sink.finish().map_err(EncodeError::from)?)
}

/// Streams a document into `writer` as compact JSON.
///
/// Nothing is buffered: on failure `writer` holds a truncated document.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_document<W: io::Write>(
    writer: W,
    doc: &Document,
    dedot: bool,
) -> Result<W, SerializationError> {
    let mut sink = JsonSink::new(writer);
    serialize_document(doc, &mut sink, dedot)?;
    Ok(sink.finish().map_err(EncodeError::from)?)
}
