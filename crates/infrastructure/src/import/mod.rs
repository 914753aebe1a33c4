//! Record import adapters
//!
//! Converts already-parsed JSON payloads into domain attribute records and
//! log records.

mod attributes;
mod log_record;

pub use attributes::{attribute_from_json, attributes_from_json};
pub use log_record::{ImportError, LogRecordJson};
