//! Error type definitions.
//!
//! Per-identifier failures (`StageError`) are values that end up in reports.
//! Everything else here is an error the caller actually has to handle.

use std::path::PathBuf;
use std::sync::Arc;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

use crate::config::ABORTED_NO_INPUT;

/// The step of a retrieval that failed.
///
/// Rendered in lowercase (`fetch`, `transfer`, `close`) in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIterMacro)]
#[strum(serialize_all = "lowercase")]
pub enum FetchStage {
    /// The initial request failed (DNS, refused connection, bad URL, ...).
    Fetch,
    /// Reading the body failed part way through.
    Transfer,
    /// Releasing the transport failed after a complete transfer.
    Close,
}

/// A failed retrieval of one identifier.
///
/// Never fatal: the engine turns it into a failure report and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{stage} failed for {identifier}: {cause}")]
pub struct StageError {
    /// Identifier whose retrieval failed
    pub identifier: Arc<str>,
    /// Step at which it failed
    pub stage: FetchStage,
    /// Transport-provided description of the failure
    pub cause: String,
}

impl StageError {
    /// Creates a stage error from any displayable cause.
    pub fn new(identifier: Arc<str>, stage: FetchStage, cause: impl std::fmt::Display) -> Self {
        Self {
            identifier,
            stage,
            cause: cause.to_string(),
        }
    }
}

/// Errors that end a batch.
#[derive(Error, Debug)]
pub enum BatchError {
    /// No non-blank identifiers were supplied, so nothing was launched.
    #[error("{}", ABORTED_NO_INPUT)]
    NoInput,

    /// The result channel closed before every launched task reported.
    ///
    /// Only reachable if a task panicked before publishing its report.
    #[error("result channel closed after {received} of {expected} reports")]
    MissingReports {
        /// Number of tasks launched
        expected: usize,
        /// Number of reports received before the channel closed
        received: usize,
    },

    /// Writing a report or the summary to the output failed.
    #[error("failed to write batch output: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors reading the identifier list.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file could not be opened.
    #[error("failed to open input file {}: {source}", .path.display())]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Reading a line from the input failed.
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}
