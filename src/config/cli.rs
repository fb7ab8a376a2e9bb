//! Command-line interface.
//!
//! The binary is a thin wrapper: clap parses into these types, which are then
//! converted into the library `Config`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_USER_AGENT};
use crate::config::types::{Config, LogFormat, LogLevel};

/// Parallel URL fetcher and request-counting echo server.
#[derive(Debug, Parser)]
#[command(name = "parafetch", version, about)]
pub struct Cli {
    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch every URL listed one per line, in parallel, and print timings
    Fetch(FetchArgs),
    /// Run the echo server that counts handled requests
    Serve(ServeArgs),
    /// Fetch a single URL and print its body
    Get(GetArgs),
}

/// Arguments for `fetch`.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// File with one URL per line; `-` reads stdin
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

/// Arguments for `get`.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// URL to fetch
    pub url: String,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

/// Arguments for `serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_SERVER_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_SERVER_PORT)]
    pub port: u16,
}

impl Cli {
    /// Builds the library configuration from parsed arguments.
    pub fn to_config(&self) -> Config {
        let mut config = Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            ..Default::default()
        };
        match &self.command {
            Command::Fetch(args) => {
                config.file = args.file.clone();
                config.timeout_seconds = args.timeout_seconds;
                config.user_agent = args.user_agent.clone();
            }
            Command::Serve(args) => {
                config.server_host = args.host.clone();
                config.server_port = args.port;
            }
            Command::Get(args) => {
                config.timeout_seconds = args.timeout_seconds;
                config.user_agent = args.user_agent.clone();
            }
        }
        config
    }
}
