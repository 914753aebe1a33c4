//! Encoder configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a log record is mapped onto document fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MappingMode {
    /// Keep the record close to its original shape.
    #[default]
    None,
    /// Elastic Common Schema field names. Not implemented by the encoder.
    Ecs,
}

impl MappingMode {
    /// Returns the config name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ecs => "ecs",
        }
    }
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mapping mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mapping mode: {0}")]
pub struct UnknownMappingMode(pub String);

impl FromStr for MappingMode {
    type Err = UnknownMappingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "no" | "raw" => Ok(Self::None),
            "ecs" => Ok(Self::Ecs),
            _ => Err(UnknownMappingMode(s.to_string())),
        }
    }
}

/// Options controlling document encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    /// Field mapping mode.
    pub mode: MappingMode,
    /// Resolve duplicate and conflicting keys before serializing.
    pub dedup: bool,
    /// Emit nested objects instead of dotted keys.
    pub dedot: bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            mode: MappingMode::None,
            dedup: true,
            dedot: true,
        }
    }
}
