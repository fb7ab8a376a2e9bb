//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults and output strings)
//! - The library `Config` struct and logging enums
//! - CLI parsing types

mod cli;
mod constants;
mod types;

pub use cli::{Cli, Command, FetchArgs, GetArgs, ServeArgs};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
