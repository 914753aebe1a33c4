//! esdoc Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus config and record loading.

pub mod config;
pub mod import;
pub mod logging;
pub mod serialization;

pub use config::{
    ConfigError, ConfigFormat, ENV_DEDOT, ENV_DEDUP, ENV_MAPPING_MODE, apply_env_overrides,
    load_config, parse_config,
};
pub use import::{ImportError, LogRecordJson, attribute_from_json, attributes_from_json};
pub use serialization::{
    JsonSink, SerializationError, encode_document, encode_document_pretty, encode_log,
    encode_value, write_document,
};
