//! esdoc Domain - Document model
//!
//! This crate defines the flattened document model used to build index
//! request bodies: values, documents, attribute records and the import and
//! normalization steps that turn one into the other.
//! All types here are pure Rust with no I/O dependencies.

pub mod attribute;
pub mod document;
pub mod error;
pub mod id;
pub mod import;
pub mod log;
pub mod normalize;
pub mod value;

pub use attribute::{AttributeMap, AttributeValue};
pub use document::{Document, Field};
pub use error::{DomainError, DomainResult};
pub use id::{Identifier, SpanId, TraceId};
pub use import::flatten_key;
pub use log::{LogRecord, timestamp_from_unix_nanos};
pub use value::{Kind, Shadowed, Value};
