//! parafetch library: parallel fetch-and-aggregate.
//!
//! Given a list of URLs, parafetch issues one retrieval per URL concurrently,
//! prints one report line per URL in completion order, then the total elapsed
//! time. A small request-counting echo server shares the same synchronization
//! discipline (one lock around one counter).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use parafetch::{init_client, run_batch, Config, HttpFetcher};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_client(&Config::default())?;
//! let fetcher = Arc::new(HttpFetcher::new(client));
//! let urls = ["https://www.rust-lang.org", "https://crates.io"];
//!
//! let summary = run_batch(urls, fetcher, &mut std::io::stdout()).await?;
//! println!("{} ok, {} failed", summary.successful(), summary.failed());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Batches and the server require a Tokio runtime; use the multi-threaded
//! flavor so tasks run in parallel.

#![warn(missing_docs)]

pub mod config;
pub mod counter_server;
mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod input;
pub mod run;

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};

pub use config::{Config, LogFormat, LogLevel};
pub use counter_server::{bind_counter_server, start_counter_server, SharedCounter};
pub use error_handling::{BatchError, FetchStage, InitializationError, InputError, StageError};
pub use fetch::{HttpFetcher, ResourceBody, ResourceFetcher};
pub use initialization::{init_client, init_logger_with};
pub use run::{run_batch, BatchSummary, Outcome, Report};

/// Reads identifiers from `config.file` and fetches them over HTTP, writing
/// reports and the summary to `out`.
///
/// # Errors
///
/// Fails if the input cannot be read, the HTTP client cannot be built, or the
/// batch itself fails (`BatchError::NoInput` when there is nothing to fetch).
/// The `BatchError` can be recovered with `downcast_ref`.
pub async fn run_fetch<W: Write>(config: &Config, out: &mut W) -> Result<BatchSummary> {
    let identifiers = input::read_identifiers(&config.file)
        .await
        .context("Failed to read identifiers")?;
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let fetcher = Arc::new(HttpFetcher::new(client));

    let summary = run_batch(identifiers, fetcher, out).await?;
    log::info!(
        "Batch finished: {} succeeded, {} failed",
        summary.successful(),
        summary.failed()
    );
    Ok(summary)
}

/// Fetches a single URL and writes its body to `out`, returning the number of
/// bytes written.
///
/// The body is written only once it has been read completely, so a failed
/// retrieval writes nothing.
///
/// # Errors
///
/// Fails if the HTTP client cannot be built, with a [`StageError`] naming the
/// stage (fetch, transfer or close) that failed, or if writing to `out` fails.
pub async fn run_get<W: Write>(config: &Config, url: &str, out: &mut W) -> Result<u64> {
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let fetcher = HttpFetcher::new(client);
    let identifier: Arc<str> = Arc::from(url.trim());
    let stage_error =
        |stage, e: anyhow::Error| StageError::new(Arc::clone(&identifier), stage, format!("{e:#}"));

    let mut body = fetcher
        .open(&identifier)
        .await
        .map_err(|e| stage_error(FetchStage::Fetch, e))?;
    let content = body
        .read_all()
        .await
        .map_err(|e| stage_error(FetchStage::Transfer, e))?;
    body.close()
        .await
        .map_err(|e| stage_error(FetchStage::Close, e))?;

    out.write_all(&content).context("Failed to write body")?;
    out.flush().context("Failed to write body")?;
    log::info!("Fetched {} bytes from {}", content.len(), identifier);
    Ok(content.len() as u64)
}
