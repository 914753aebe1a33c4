//! Document sink port
//!
//! Defines the streaming encoder interface the serializer writes to.

/// Errors that can occur while writing to a sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An event arrived that the current nesting does not allow.
    #[error("invalid sink state: {0}")]
    InvalidState(String),
}

/// Streaming structured-output sink.
///
/// Events describe a single value tree: containers are opened and closed
/// explicitly and every value inside an object is preceded by a
/// [`key`](Self::key). Implementations decide the concrete encoding.
pub trait DocumentSink {
    /// Opens an object.
    ///
    /// # Errors
    /// Returns an error if the sink cannot accept a value here or the write fails.
    fn start_object(&mut self) -> Result<(), SinkError>;

    /// Closes the innermost object.
    ///
    /// # Errors
    /// Returns an error if no object is open or the write fails.
    fn end_object(&mut self) -> Result<(), SinkError>;

    /// Opens an array.
    ///
    /// # Errors
    /// Returns an error if the sink cannot accept a value here or the write fails.
    fn start_array(&mut self) -> Result<(), SinkError>;

    /// Closes the innermost array.
    ///
    /// # Errors
    /// Returns an error if no array is open or the write fails.
    fn end_array(&mut self) -> Result<(), SinkError>;

    /// Writes the key of the next object member.
    ///
    /// # Errors
    /// Returns an error outside of an object, after a key, or if the write fails.
    fn key(&mut self, key: &str) -> Result<(), SinkError>;

    /// Writes a null.
    ///
    /// # Errors
    /// Returns an error if the sink cannot accept a value here or the write fails.
    fn null(&mut self) -> Result<(), SinkError>;

    /// Writes a boolean.
    ///
    /// # Errors
    /// Returns an error if the sink cannot accept a value here or the write fails.
    fn bool(&mut self, value: bool) -> Result<(), SinkError>;

    /// Writes a signed integer.
    ///
    /// # Errors
    /// Returns an error if the sink cannot accept a value here or the write fails.
    fn int(&mut self, value: i64) -> Result<(), SinkError>;

    /// Writes a float.
    ///
    /// # Errors
    /// Returns an error if the sink cannot accept a value here or the write fails.
    fn float(&mut self, value: f64) -> Result<(), SinkError>;

    /// Writes a string.
    ///
    /// # Errors
    /// Returns an error if the sink cannot accept a value here or the write fails.
    fn string(&mut self, value: &str) -> Result<(), SinkError>;
}

impl<S: DocumentSink + ?Sized> DocumentSink for &mut S {
    fn start_object(&mut self) -> Result<(), SinkError> {
        (**self).start_object()
    }

    fn end_object(&mut self) -> Result<(), SinkError> {
        (**self).end_object()
    }

    fn start_array(&mut self) -> Result<(), SinkError> {
        (**self).start_array()
    }

    fn end_array(&mut self) -> Result<(), SinkError> {
        (**self).end_array()
    }

    fn key(&mut self, key: &str) -> Result<(), SinkError> {
        (**self).key(key)
    }

    fn null(&mut self) -> Result<(), SinkError> {
        (**self).null()
    }

    fn bool(&mut self, value: bool) -> Result<(), SinkError> {
        (**self).bool(value)
    }

    fn int(&mut self, value: i64) -> Result<(), SinkError> {
        (**self).int(value)
    }

    fn float(&mut self, value: f64) -> Result<(), SinkError> {
        (**self).float(value)
    }

    fn string(&mut self, value: &str) -> Result<(), SinkError> {
        (**self).string(value)
    }
}
