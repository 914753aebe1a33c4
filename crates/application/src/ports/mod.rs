//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the encoding core and concrete
//! output formats. Adapters in the infrastructure layer implement them.

mod sink;

pub use sink::{DocumentSink, SinkError};
