//! JSON implementation of the document sink port.

use std::io;

use esdoc_application::ports::{DocumentSink, SinkError};
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// Inside an object; `expect_value` is set between a key and its value.
    Object { first: bool, expect_value: bool },
    Array { first: bool },
}

/// Streams sink events as JSON text into a writer.
///
/// Separators and whitespace come from a [`serde_json`] formatter, strings
/// are escaped by `serde_json` itself. A write error is returned as-is and
/// leaves the output truncated.
pub struct JsonSink<W, F = CompactFormatter> {
    writer: W,
    formatter: F,
    stack: Vec<Frame>,
}

impl<W: io::Write> JsonSink<W> {
    /// Creates a sink producing compact JSON.
    pub const fn new(writer: W) -> Self {
        Self::with_formatter(writer, CompactFormatter)
    }
}

impl<'a, W: io::Write> JsonSink<W, PrettyFormatter<'a>> {
    /// Creates a sink producing JSON indented with `indent`.
    pub fn pretty(writer: W, indent: &'a [u8]) -> Self {
        Self::with_formatter(writer, PrettyFormatter::with_indent(indent))
    }
}

impl<W: io::Write, F: Formatter> JsonSink<W, F> {
    /// Creates a sink with a custom formatter.
    pub const fn with_formatter(writer: W, formatter: F) -> Self {
        Self {
            writer,
            formatter,
            stack: Vec::new(),
        }
    }

    /// Returns the writer, failing if a container is still open.
    ///
    /// # Errors
    /// Returns [`SinkError::InvalidState`] if objects or arrays remain open.
    pub fn finish(self) -> Result<W, SinkError> {
        if self.stack.is_empty() {
            Ok(self.writer)
        } else {
            Err(SinkError::InvalidState(format!(
                "{} container(s) left open",
                self.stack.len()
            )))
        }
    }

    /// Writes the separator due before a value at the current position.
    fn begin_value(&mut self) -> Result<(), SinkError> {
        match self.stack.last_mut() {
            None => Ok(()),
            Some(Frame::Array { first }) => {
                self.formatter.begin_array_value(&mut self.writer, *first)?;
                *first = false;
                Ok(())
            }
            Some(Frame::Object { expect_value, .. }) => {
                if *expect_value {
                    Ok(())
                } else {
                    Err(SinkError::InvalidState("object value without a key".into()))
                }
            }
        }
    }

    /// Writes the separator due after a completed value.
    fn end_value(&mut self) -> Result<(), SinkError> {
        match self.stack.last_mut() {
            None => {}
            Some(Frame::Array { .. }) => self.formatter.end_array_value(&mut self.writer)?,
            Some(Frame::Object { expect_value, .. }) => {
                self.formatter.end_object_value(&mut self.writer)?;
                *expect_value = false;
            }
        }
        Ok(())
    }

    fn scalar(
        &mut self,
        write: impl FnOnce(&mut F, &mut W) -> io::Result<()>,
    ) -> Result<(), SinkError> {
        self.begin_value()?;
        write(&mut self.formatter, &mut self.writer)?;
        self.end_value()
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, s).map_err(io::Error::from)
    }
}

impl<W: io::Write, F: Formatter> DocumentSink for JsonSink<W, F> {
    fn start_object(&mut self) -> Result<(), SinkError> {
        self.begin_value()?;
        self.formatter.begin_object(&mut self.writer)?;
        self.stack.push(Frame::Object {
            first: true,
            expect_value: false,
        });
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), SinkError> {
        match self.stack.last() {
            Some(Frame::Object {
                expect_value: false,
                ..
            }) => {}
            Some(Frame::Object { .. }) => {
                return Err(SinkError::InvalidState("object closed after a key".into()));
            }
            _ => return Err(SinkError::InvalidState("no object to close".into())),
        }
        self.stack.pop();
        self.formatter.end_object(&mut self.writer)?;
        self.end_value()
    }

    fn start_array(&mut self) -> Result<(), SinkError> {
        self.begin_value()?;
        self.formatter.begin_array(&mut self.writer)?;
        self.stack.push(Frame::Array { first: true });
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), SinkError> {
        if !matches!(self.stack.last(), Some(Frame::Array { .. })) {
            return Err(SinkError::InvalidState("no array to close".into()));
        }
        self.stack.pop();
        self.formatter.end_array(&mut self.writer)?;
        self.end_value()
    }

    fn key(&mut self, key: &str) -> Result<(), SinkError> {
        let first = match self.stack.last_mut() {
            Some(Frame::Object {
                first,
                expect_value,
            }) if !*expect_value => {
                *expect_value = true;
                std::mem::replace(first, false)
            }
            Some(Frame::Object { .. }) => {
                return Err(SinkError::InvalidState("key after key".into()));
            }
            _ => return Err(SinkError::InvalidState("key outside of an object".into())),
        };
        self.formatter.begin_object_key(&mut self.writer, first)?;
        self.write_str(key)?;
        self.formatter.end_object_key(&mut self.writer)?;
        self.formatter.begin_object_value(&mut self.writer)?;
        Ok(())
    }

    fn null(&mut self) -> Result<(), SinkError> {
        self.scalar(|f, w| f.write_null(w))
    }

    fn bool(&mut self, value: bool) -> Result<(), SinkError> {
        self.scalar(|f, w| f.write_bool(w, value))
    }

    fn int(&mut self, value: i64) -> Result<(), SinkError> {
        self.scalar(|f, w| f.write_i64(w, value))
    }

    fn float(&mut self, value: f64) -> Result<(), SinkError> {
        if value.is_finite() {
            self.scalar(|f, w| f.write_f64(w, value))
        } else {
            self.null()
        }
    }

    fn string(&mut self, value: &str) -> Result<(), SinkError> {
        self.begin_value()?;
        self.write_str(value)?;
        self.end_value()
    }
}
