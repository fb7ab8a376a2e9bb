//! Per-task outcomes and their rendered form.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{BYTE_COUNT_WIDTH, SKIP_NOTE};
use crate::error_handling::StageError;

/// Result of one retrieval.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Body fully read and transport released.
    Success {
        /// Bytes read from the body
        byte_count: u64,
        /// Time from task start to the end of the transfer (close excluded)
        elapsed: Duration,
    },
    /// One of the three stages failed.
    Failure(StageError),
}

/// The unit published on the result channel: one per launched task.
///
/// `Display` renders the user-visible report line.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    identifier: Arc<str>,
    outcome: Outcome,
}

impl Report {
    /// Creates a report for `identifier`.
    pub fn new(identifier: Arc<str>, outcome: Outcome) -> Self {
        Self {
            identifier,
            outcome,
        }
    }

    /// Identifier the task was launched for.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The underlying outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Whether the retrieval succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }

    /// Elapsed time of a successful retrieval.
    pub fn elapsed(&self) -> Option<Duration> {
        match self.outcome {
            Outcome::Success { elapsed, .. } => Some(elapsed),
            Outcome::Failure(_) => None,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Success {
                byte_count,
                elapsed,
            } => write!(
                f,
                "{:.2}s {:>width$} {}",
                elapsed.as_secs_f64(),
                byte_count,
                self.identifier,
                width = BYTE_COUNT_WIDTH
            ),
            Outcome::Failure(err) => write!(f, "{err}, {SKIP_NOTE}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::FetchStage;

    #[test]
    fn test_success_line_format() {
        let report = Report::new(
            Arc::from("http://ok1"),
            Outcome::Success {
                byte_count: 1234,
                elapsed: Duration::from_millis(1506),
            },
        );
        assert_eq!(report.to_string(), "1.51s    1234 http://ok1");
        assert!(report.is_success());
        assert_eq!(report.elapsed(), Some(Duration::from_millis(1506)));
    }

    #[test]
    fn test_success_line_wide_byte_count_is_not_truncated() {
        let report = Report::new(
            Arc::from("u"),
            Outcome::Success {
                byte_count: 123_456_789,
                elapsed: Duration::ZERO,
            },
        );
        assert_eq!(report.to_string(), "0.00s 123456789 u");
    }

    #[test]
    fn test_failure_line_ends_with_skip_note() {
        let report = Report::new(
            Arc::from("A"),
            Outcome::Failure(StageError::new(
                Arc::from("A"),
                FetchStage::Close,
                "connection reset",
            )),
        );
        let line = report.to_string();
        assert_eq!(line, "close failed for A: connection reset, skipping");
        assert!(!report.is_success());
        assert_eq!(report.elapsed(), None);
    }
}
