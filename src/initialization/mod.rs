//! Application initialization.
//!
//! - Logger setup (`env_logger` with plain or JSON formatting)
//! - HTTP client construction

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
