//! Batch execution.
//!
//! A batch launches one task per identifier, then drains exactly that many
//! reports from a fresh result channel:
//!
//! ```text
//! identifiers ─▶ launch_tasks ─▶ N tasks ─▶ ResourceFetcher
//!                                   │
//!                                   ▼
//!                         result channel (mpsc) ─▶ aggregate ─▶ out
//! ```

mod aggregate;
mod channel;
mod report;
mod task;

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::error_handling::BatchError;
use crate::fetch::ResourceFetcher;

pub use aggregate::{aggregate, BatchSummary};
pub use channel::{result_channel, ReportReceiver, ReportSender};
pub use report::{Outcome, Report};
pub use task::{filter_identifiers, launch_tasks, retrieve};

/// Fetches every non-blank identifier concurrently and writes one report line
/// per identifier to `out`, followed by the total elapsed time.
///
/// Report lines appear in completion order. The batch clock starts before the
/// first task is spawned and stops after the last report is received.
///
/// # Errors
///
/// - `BatchError::NoInput` if no identifier survives filtering; nothing is
///   launched and nothing is written
/// - `BatchError::MissingReports` / `BatchError::Output` from [`aggregate`]
///
/// Per-identifier failures are not errors: they are reported as lines.
pub async fn run_batch<F, I, S, W>(
    identifiers: I,
    fetcher: Arc<F>,
    out: &mut W,
) -> Result<BatchSummary, BatchError>
where
    F: ResourceFetcher,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let identifiers = filter_identifiers(identifiers);
    if identifiers.is_empty() {
        return Err(BatchError::NoInput);
    }

    let batch_start = Instant::now();
    let (sender, mut receiver) = result_channel();
    let launched = launch_tasks(identifiers, fetcher, sender);
    info!("Launched {} fetch tasks", launched);

    aggregate(launched, &mut receiver, batch_start, out).await
}
