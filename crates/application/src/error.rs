//! Application error types

use thiserror::Error;

use crate::ports::SinkError;

/// Errors raised while encoding a document.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Writing to the sink failed.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    /// The requested mode is not implemented by this encoder.
    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),

    /// A dedotted key would repeat a member name inside one object.
    #[error("conflicting key: {0}")]
    KeyConflict(String),
}

/// Result type alias for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;
