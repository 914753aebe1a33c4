//! JSON encoding of documents.
//!
//! Produces index request bodies by:
//! - Streaming documents through [`JsonSink`] (no intermediate tree)
//! - Emitting flat dotted keys or nested objects, as configured
//! - Writing non-finite floats as `null`
//! - UTF-8 encoding without BOM or trailing newline

mod json;
mod sink;

pub use json::*;
pub use sink::JsonSink;
