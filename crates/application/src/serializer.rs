//! Document serializer.
//!
//! Walks a [`Document`] and reports it to a [`DocumentSink`] in one of two
//! shapes:
//!
//! - flat: one object whose member names are the field keys, dots included;
//! - dedotted: dotted keys are split into nested objects, so `a.b` and `a.c`
//!   become members `b` and `c` of an object `a`.
//!
//! Ignored fields, nil fields and empty arrays are left out of either shape.
//! In the dedotted shape a member name that would repeat inside one object
//! is an [`EncodeError::KeyConflict`].

use std::collections::HashSet;

use esdoc_domain::{Document, Value};

use crate::error::{EncodeError, EncodeResult};
use crate::ports::DocumentSink;

/// `strftime` layout for timestamps: UTC, nine fractional digits.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9fZ";

/// Writes `doc` as a single object.
///
/// With `dedot` set the document must be sorted, so that every group of
/// keys sharing a path prefix is contiguous.
///
/// # Errors
///
/// Returns the first sink error, or [`EncodeError::KeyConflict`] when a
/// dedotted key reuses a member name. Containers already opened are left
/// open.
pub fn serialize_document<S: DocumentSink + ?Sized>(
    doc: &Document,
    sink: &mut S,
    dedot: bool,
) -> EncodeResult<()> {
    if dedot {
        write_dedot(doc, sink)
    } else {
        write_flat(doc, sink)
    }
}

/// Writes a single value.
///
/// # Errors
///
/// Returns the first sink error. Containers already opened are left open.
pub fn serialize_value<S: DocumentSink + ?Sized>(
    value: &Value,
    sink: &mut S,
    dedot: bool,
) -> EncodeResult<()> {
    match value {
        Value::Nil | Value::Ignore(_) => sink.null()?,
        Value::Bool(b) => sink.bool(*b)?,
        Value::Int(i) => sink.int(*i)?,
        Value::Double(d) if !d.is_finite() => sink.null()?,
        Value::Double(d) => sink.float(*d)?,
        Value::String(s) => sink.string(s)?,
        Value::Timestamp(ts) => sink.string(&ts.format(TIMESTAMP_FORMAT).to_string())?,
        Value::Object(doc) if doc.is_empty() => sink.null()?,
        Value::Object(doc) => serialize_document(doc, sink, dedot)?,
        Value::Array(values) => {
            sink.start_array()?;
            for value in values {
                serialize_value(value, sink, dedot)?;
            }
            sink.end_array()?;
        }
    }
    Ok(())
}

fn write_flat<S: DocumentSink + ?Sized>(doc: &Document, sink: &mut S) -> EncodeResult<()> {
    sink.start_object()?;
    for field in doc.fields().iter().filter(|f| !f.value().is_omitted()) {
        sink.key(field.key())?;
        serialize_value(field.value(), sink, false)?;
    }
    sink.end_object()?;
    Ok(())
}

fn write_dedot<S: DocumentSink + ?Sized>(doc: &Document, sink: &mut S) -> EncodeResult<()> {
    sink.start_object()?;

    // Path segments of the objects currently open below the root.
    let mut open: Vec<&str> = Vec::new();
    // Member names written so far, one set per open object, root first.
    let mut written: Vec<HashSet<&str>> = vec![HashSet::new()];

    for field in doc.fields().iter().filter(|f| !f.value().is_omitted()) {
        let (path, leaf) = split_path(field.key());

        let common = open
            .iter()
            .zip(&path)
            .take_while(|(current, next)| current == next)
            .count();
        for _ in common..open.len() {
            sink.end_object()?;
        }
        open.truncate(common);
        written.truncate(common + 1);

        for segment in &path[common..] {
            claim(&mut written, *segment, field.key())?;
            sink.key(segment)?;
            sink.start_object()?;
            open.push(*segment);
            written.push(HashSet::new());
        }

        claim(&mut written, leaf, field.key())?;
        sink.key(leaf)?;
        serialize_value(field.value(), sink, true)?;
    }

    for _ in 0..open.len() {
        sink.end_object()?;
    }
    sink.end_object()?;
    Ok(())
}

/// Records `name` as a member of the innermost open object.
fn claim<'a>(written: &mut [HashSet<&'a str>], name: &'a str, key: &str) -> EncodeResult<()> {
    let inserted = written.last_mut().is_some_and(|names| names.insert(name));
    if inserted {
        Ok(())
    } else {
        Err(EncodeError::KeyConflict(key.to_string()))
    }
}

/// Splits `a.b.c` into `(["a", "b"], "c")`.
fn split_path(key: &str) -> (Vec<&str>, &str) {
    match key.rsplit_once('.') {
        Some((path, leaf)) => (path.split('.').collect(), leaf),
        None => (Vec::new(), key),
    }
}
