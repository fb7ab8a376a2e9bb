//! Configuration constants.
//!
//! Defaults for the batch fetcher and the counter server, plus the fixed
//! strings that make up the user-visible output contract.

/// Input path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Default User-Agent string for batch requests.
pub const DEFAULT_USER_AGENT: &str = concat!("parafetch/", env!("CARGO_PKG_VERSION"));

/// Default host the counter server binds to.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default port the counter server listens on.
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Message printed when a batch is started with no usable identifiers.
pub const ABORTED_NO_INPUT: &str = "aborted, no input";

/// Width of the right-aligned byte-count column in success reports.
pub const BYTE_COUNT_WIDTH: usize = 7;

/// Suffix of every failure report.
pub const SKIP_NOTE: &str = "skipping";
