//! Draining the result channel and printing the batch summary.

use std::io::Write;
use std::time::{Duration, Instant};

use log::debug;

use crate::error_handling::BatchError;

use super::channel::ReportReceiver;
use super::report::Report;

/// What a completed batch produced.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Number of tasks launched (and reports received)
    pub launched: usize,
    /// Wall-clock time from batch start to the last received report
    pub elapsed: Duration,
    /// Reports in the order they were received
    pub reports: Vec<Report>,
}

impl BatchSummary {
    /// Number of successful retrievals.
    pub fn successful(&self) -> usize {
        self.reports.iter().filter(|r| r.is_success()).count()
    }

    /// Number of failed retrievals.
    pub fn failed(&self) -> usize {
        self.reports.len() - self.successful()
    }
}

/// Receives exactly `expected` reports, writing each line to `out` as soon as
/// it arrives, then writes `Total <secs>s elapsed`.
///
/// # Errors
///
/// - `BatchError::MissingReports` if every sender is dropped before
///   `expected` reports arrive (a task died without reporting)
/// - `BatchError::Output` if writing to `out` fails
pub async fn aggregate<W: Write>(
    expected: usize,
    receiver: &mut ReportReceiver,
    batch_start: Instant,
    out: &mut W,
) -> Result<BatchSummary, BatchError> {
    let mut reports = Vec::with_capacity(expected);

    while reports.len() < expected {
        let Some(report) = receiver.recv().await else {
            return Err(BatchError::MissingReports {
                expected,
                received: reports.len(),
            });
        };
        writeln!(out, "{report}")?;
        out.flush()?;
        reports.push(report);
    }

    let elapsed = batch_start.elapsed();
    writeln!(out, "Total {:.2}s elapsed", elapsed.as_secs_f64())?;
    out.flush()?;
    debug!("Drained {} reports in {:?}", expected, elapsed);

    Ok(BatchSummary {
        launched: expected,
        elapsed,
        reports,
    })
}
