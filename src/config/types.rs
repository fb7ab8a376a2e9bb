//! Configuration types.
//!
//! This module defines the enums and the library-level `Config` struct. The
//! CLI layer in `cli.rs` produces a `Config`, but the library never needs clap
//! to build one.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_USER_AGENT, STDIN_PATH,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use parafetch::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("urls.txt"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read identifiers from (`-` for stdin)
    pub file: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds. `None` keeps the transport default,
    /// which never times out.
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Host the counter server binds to
    pub server_host: String,

    /// Port the counter server listens on
    pub server_port: u16,
}

impl Config {
    /// Request timeout as a `Duration`, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Whether identifiers are read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == STDIN_PATH
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(STDIN_PATH),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}
