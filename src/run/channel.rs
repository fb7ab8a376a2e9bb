//! The result channel between tasks and the aggregator.
//!
//! Unbounded and multi-producer/single-consumer: sends never block, the
//! aggregator's receives do. Reports arrive in completion order.

use tokio::sync::mpsc;

use super::report::Report;

/// Producer half, cloned into every task.
pub type ReportSender = mpsc::UnboundedSender<Report>;

/// Consumer half, owned by the aggregator.
pub type ReportReceiver = mpsc::UnboundedReceiver<Report>;

/// Creates a fresh channel for one batch.
pub fn result_channel() -> (ReportSender, ReportReceiver) {
    mpsc::unbounded_channel()
}
