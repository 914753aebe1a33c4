//! Document normalization: stable sort and duplicate resolution.

use crate::document::Document;
use crate::value::Value;

/// Suffix given to a leaf whose path is also used as an object prefix.
pub const VALUE_SUFFIX: &str = ".value";

impl Document {
    /// Sorts fields by key, byte-wise and stable, recursing into objects and
    /// arrays.
    ///
    /// Fields with equal keys keep their insertion order, which
    /// [`dedup`](Self::dedup) relies on.
    pub fn sort(&mut self) {
        self.fields.sort_by(|a, b| a.key.as_bytes().cmp(b.key.as_bytes()));
        for field in &mut self.fields {
            field.value.sort();
        }
    }

    /// Resolves key conflicts between neighbouring fields.
    ///
    /// Must run right after [`sort`](Self::sort): only adjacent fields are
    /// compared.
    ///
    /// 1. A key directly followed by a longer key that starts with it is
    ///    renamed with a `.value` suffix, so a leaf `a` next to `a.b`
    ///    becomes `a.value`.
    /// 2. Of two adjacent fields with the same key the earlier one is marked
    ///    ignored, so the last write wins.
    /// 3. Nested objects and arrays are deduplicated the same way.
    pub fn dedup(&mut self) {
        for i in 1..self.fields.len() {
            let (head, tail) = self.fields.split_at_mut(i);
            let (prev, next) = (&mut head[i - 1], &tail[0]);
            if is_strict_prefix(&prev.key, &next.key) {
                tracing::trace!(key = %prev.key, shadowed_by = %next.key, "renaming leaf shadowed by object path");
                prev.key.push_str(VALUE_SUFFIX);
            }
        }

        for i in 1..self.fields.len() {
            let (head, tail) = self.fields.split_at_mut(i);
            let (prev, next) = (&mut head[i - 1], &tail[0]);
            if prev.key == next.key {
                tracing::trace!(key = %prev.key, "ignoring duplicate field");
                prev.value = Value::IGNORE;
            }
        }

        for field in &mut self.fields {
            field.value.dedup();
        }
    }
}

/// Returns true if `key` is strictly shorter than `other` and `other` starts
/// with it. No segment boundary is required, so `ab` prefixes `abc`.
fn is_strict_prefix(key: &str, other: &str) -> bool {
    other.len() > key.len() && other.starts_with(key)
}
