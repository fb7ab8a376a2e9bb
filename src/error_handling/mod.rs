//! Error handling.
//!
//! Library errors are `thiserror` enums; the binary wraps them in `anyhow`.

mod types;

pub use types::{BatchError, FetchStage, InitializationError, InputError, StageError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use strum::IntoEnumIterator;

    #[test]
    fn test_fetch_stage_display_is_lowercase() {
        let names: Vec<String> = FetchStage::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["fetch", "transfer", "close"]);
    }

    #[test]
    fn test_stage_error_message_names_identifier_stage_and_cause() {
        let err = StageError::new(Arc::from("A"), FetchStage::Close, "connection reset");
        assert_eq!(err.to_string(), "close failed for A: connection reset");
    }

    #[test]
    fn test_no_input_message() {
        assert_eq!(BatchError::NoInput.to_string(), "aborted, no input");
    }

    #[test]
    fn test_missing_reports_message() {
        let err = BatchError::MissingReports {
            expected: 3,
            received: 2,
        };
        assert_eq!(
            err.to_string(),
            "result channel closed after 2 of 3 reports"
        );
    }

    #[test]
    fn test_input_open_error_names_path() {
        let err = InputError::Open {
            path: "missing.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.txt"));
    }
}
