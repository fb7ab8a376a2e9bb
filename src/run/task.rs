//! Task launching and the per-identifier task body.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace};

use crate::error_handling::{FetchStage, StageError};
use crate::fetch::{ResourceBody, ResourceFetcher};

use super::channel::ReportSender;
use super::report::{Outcome, Report};

/// Trims identifiers and drops blank ones. Order and duplicates are kept.
pub fn filter_identifiers<I, S>(identifiers: I) -> Vec<Arc<str>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    identifiers
        .into_iter()
        .filter_map(|identifier| {
            let trimmed = identifier.as_ref().trim();
            (!trimmed.is_empty()).then(|| Arc::from(trimmed))
        })
        .collect()
}

/// Spawns one task per identifier and returns how many were spawned.
///
/// `identifiers` is expected to come from [`filter_identifiers`].
///
/// Fire-and-forget: no join handles are kept and nothing limits how many
/// tasks run at once. Each task publishes exactly one [`Report`] on `sender`.
/// The launcher's own sender is dropped on return, so once every task has
/// reported the channel closes.
///
/// Must be called from within a Tokio runtime.
pub fn launch_tasks<F: ResourceFetcher>(
    identifiers: Vec<Arc<str>>,
    fetcher: Arc<F>,
    sender: ReportSender,
) -> usize {
    let mut launched = 0usize;
    for identifier in identifiers {
        let fetcher = Arc::clone(&fetcher);
        let sender = sender.clone();
        trace!("Launching task for {}", identifier);
        tokio::spawn(async move {
            let outcome = retrieve(fetcher.as_ref(), &identifier).await;
            let report = Report::new(identifier, outcome);
            if let Err(e) = sender.send(report) {
                debug!("Report for {} dropped, receiver gone", e.0.identifier());
            }
        });
        launched += 1;
    }
    launched
}

/// Runs the three stages for one identifier.
///
/// Elapsed time is measured from this call to the end of the transfer. A close
/// failure replaces the success even though the bytes were already counted.
pub async fn retrieve<F: ResourceFetcher>(fetcher: &F, identifier: &Arc<str>) -> Outcome {
    let start = Instant::now();

    let mut body = match fetcher.open(identifier).await {
        Ok(body) => body,
        Err(e) => return failure(identifier, FetchStage::Fetch, e),
    };

    let byte_count = match body.transfer().await {
        Ok(byte_count) => byte_count,
        Err(e) => return failure(identifier, FetchStage::Transfer, e),
    };
    let elapsed = start.elapsed();

    if let Err(e) = body.close().await {
        debug!(
            "Discarding {} transferred bytes for {} after close failure",
            byte_count, identifier
        );
        return failure(identifier, FetchStage::Close, e);
    }

    Outcome::Success {
        byte_count,
        elapsed,
    }
}

fn failure(identifier: &Arc<str>, stage: FetchStage, error: anyhow::Error) -> Outcome {
    // Alternate format keeps the source chain (reqwest hides the root cause otherwise).
    Outcome::Failure(StageError::new(
        Arc::clone(identifier),
        stage,
        format!("{error:#}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_identifiers_drops_blank_lines() {
        let filtered = filter_identifiers(["http://ok1", "", "http://ok2"]);
        assert_eq!(
            filtered,
            vec![Arc::<str>::from("http://ok1"), Arc::from("http://ok2")]
        );
    }

    #[test]
    fn test_filter_identifiers_drops_whitespace_only_and_trims() {
        let filtered = filter_identifiers(vec![
            "  ".to_string(),
            "\t".to_string(),
            " http://a \r".to_string(),
        ]);
        assert_eq!(filtered, vec![Arc::<str>::from("http://a")]);
    }

    #[test]
    fn test_filter_identifiers_keeps_duplicates_in_order() {
        let filtered = filter_identifiers(["b", "a", "b"]);
        let as_str: Vec<&str> = filtered.iter().map(|s| s.as_ref()).collect();
        assert_eq!(as_str, vec!["b", "a", "b"]);
    }
}
