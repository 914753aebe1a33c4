//! Config file and environment loader.

use std::path::{Path, PathBuf};

use esdoc_application::{EncodeConfig, MappingMode};
use thiserror::Error;

/// Environment variable overriding [`EncodeConfig::mode`].
pub const ENV_MAPPING_MODE: &str = "ESDOC_MAPPING_MODE";
/// Environment variable overriding [`EncodeConfig::dedup`].
pub const ENV_DEDUP: &str = "ESDOC_DEDUP";
/// Environment variable overriding [`EncodeConfig::dedot`].
pub const ENV_DEDOT: &str = "ESDOC_DEDOT";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The file extension is not a supported config format.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
    /// YAML content is invalid.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON content is invalid.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    /// An environment override has an invalid value.
    #[error("invalid value for {name}: {value}")]
    InvalidOverride {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detects the format from a file extension.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parses config text in the given format.
///
/// Missing fields take their defaults.
///
/// # Errors
/// Returns an error if the text is not valid for the format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<EncodeConfig, ConfigError> {
    let config = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(config)
}

/// Loads config from a file, picking the format by extension.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<EncodeConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content, format)?;
    tracing::debug!(path = %path.display(), ?config, "loaded encoder config");
    Ok(config)
}

/// Applies `ESDOC_*` overrides read through `lookup`.
///
/// Pass `|name| std::env::var(name).ok()` to read the process environment.
///
/// # Errors
/// Returns [`ConfigError::InvalidOverride`] for unparseable values.
pub fn apply_env_overrides(
    mut config: EncodeConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<EncodeConfig, ConfigError> {
    if let Some(value) = lookup(ENV_MAPPING_MODE) {
        config.mode = value
            .parse::<MappingMode>()
            .map_err(|_| ConfigError::InvalidOverride {
                name: ENV_MAPPING_MODE,
                value,
            })?;
    }
    if let Some(value) = lookup(ENV_DEDUP) {
        config.dedup = parse_bool(ENV_DEDUP, value)?;
    }
    if let Some(value) = lookup(ENV_DEDOT) {
        config.dedot = parse_bool(ENV_DEDOT, value)?;
    }
    Ok(config)
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidOverride { name, value }),
    }
}
