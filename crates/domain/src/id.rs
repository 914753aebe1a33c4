//! Trace and span identifiers.

use std::fmt::{self, Write as _};

use crate::error::{DomainError, DomainResult};

/// A fixed-width binary identifier that renders as lowercase hex.
pub trait Identifier {
    /// Returns true if every byte is zero.
    fn is_empty(&self) -> bool;

    /// Returns the lowercase hex form, two digits per byte.
    fn hex_string(&self) -> String;
}

/// 16-byte trace identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TraceId(pub [u8; 16]);

/// 8-byte span identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpanId(pub [u8; 8]);

impl TraceId {
    /// Parses a 32-digit hex string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidIdentifier`] if the input is not
    /// exactly 32 hex digits.
    pub fn from_hex(s: &str) -> DomainResult<Self> {
        decode_hex(s).map(Self)
    }
}

impl SpanId {
    /// Parses a 16-digit hex string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidIdentifier`] if the input is not
    /// exactly 16 hex digits.
    pub fn from_hex(s: &str) -> DomainResult<Self> {
        decode_hex(s).map(Self)
    }
}

impl Identifier for TraceId {
    fn is_empty(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    fn hex_string(&self) -> String {
        encode_hex(&self.0)
    }
}

impl Identifier for SpanId {
    fn is_empty(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    fn hex_string(&self) -> String {
        encode_hex(&self.0)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_string())
    }
}

impl fmt::Display for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_string())
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing into a String cannot fail.
        let _ = write!(out, "{b:02x}");
    }
    out
}

fn decode_hex<const N: usize>(s: &str) -> DomainResult<[u8; N]> {
    if s.len() != N * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DomainError::InvalidIdentifier(s.to_string()));
    }
    let mut out = [0_u8; N];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
            .map_err(|_| DomainError::InvalidIdentifier(s.to_string()))?;
    }
    Ok(out)
}
