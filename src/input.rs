//! Identifier input.
//!
//! Identifiers are read one per line until end-of-input, from a file or from
//! stdin when the path is `-`. Lines are returned as-is; blank-line filtering
//! happens when the batch is launched.

use std::path::Path;

use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::STDIN_PATH;
use crate::error_handling::InputError;

/// Reads every line from `path`, or from stdin if `path` is `-`.
///
/// # Errors
///
/// Returns `InputError::Open` if the file cannot be opened and
/// `InputError::Read` if reading a line fails.
pub async fn read_identifiers(path: &Path) -> Result<Vec<String>, InputError> {
    if path.as_os_str() == STDIN_PATH {
        info!("Reading URLs from stdin");
        return read_lines(BufReader::new(tokio::io::stdin())).await;
    }

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let lines = read_lines(BufReader::new(file)).await?;
    info!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Reads every line from an async reader.
pub async fn read_lines<R>(reader: R) -> Result<Vec<String>, InputError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut collected = Vec::new();
    while let Some(line) = lines.next_line().await.map_err(InputError::Read)? {
        collected.push(line);
    }
    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_read_lines_keeps_blank_lines() {
        let input: &[u8] = b"http://ok1\n\nhttp://ok2\n";
        let lines = read_lines(input).await.expect("read");
        assert_eq!(lines, vec!["http://ok1", "", "http://ok2"]);
    }

    #[tokio::test]
    async fn test_read_lines_without_trailing_newline() {
        let input: &[u8] = b"a\nb";
        let lines = read_lines(input).await.expect("read");
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_read_identifiers_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "https://example.com").expect("write");
        writeln!(file).expect("write");
        writeln!(file, "https://example.com").expect("write");
        file.flush().expect("flush");

        let lines = read_identifiers(file.path()).await.expect("read");
        assert_eq!(
            lines,
            vec!["https://example.com", "", "https://example.com"]
        );
    }

    #[tokio::test]
    async fn test_read_identifiers_missing_file() {
        let result = read_identifiers(Path::new("/definitely/not/here.txt")).await;
        assert!(matches!(result, Err(InputError::Open { .. })));
    }
}
