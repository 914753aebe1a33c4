//! Application use cases (encoding orchestration).

mod encode_log;

pub use encode_log::*;
