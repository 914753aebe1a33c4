//! Encoder configuration loading.
//!
//! Reads [`EncodeConfig`](esdoc_application::EncodeConfig) from YAML or JSON
//! files and applies `ESDOC_*` environment overrides on top.

mod loader;

pub use loader::*;
