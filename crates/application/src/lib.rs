//! esdoc Application - Encoding pipeline
//!
//! This crate drives documents from the domain layer into output sinks:
//! the [`ports::DocumentSink`] port, the serializer that walks a document
//! in flat or dedotted shape, and the log record encode model.

pub mod config;
pub mod error;
pub mod ports;
pub mod serializer;
pub mod use_cases;

pub use config::{EncodeConfig, MappingMode, UnknownMappingMode};
pub use error::{EncodeError, EncodeResult};
pub use serializer::{TIMESTAMP_FORMAT, serialize_document, serialize_value};
pub use use_cases::EncodeModel;
