//! Tests for `run_fetch` reading identifiers from a file.

use std::io::Write;
use std::path::PathBuf;

use parafetch::{run_fetch, BatchError, Config, LogFormat, LogLevel};
use tempfile::NamedTempFile;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_lines(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    file.flush().expect("Failed to flush file");
    file
}

fn create_test_config(file: PathBuf) -> Config {
    Config {
        file,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        timeout_seconds: Some(5),
        user_agent: "parafetch-test/1.0".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_run_fetch_reads_file_and_skips_blank_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .mount(&server)
        .await;

    let input = write_lines(&[
        format!("{}/one", server.uri()),
        String::new(),
        "   ".to_string(),
        format!("{}/two", server.uri()),
    ]);
    let config = create_test_config(input.path().to_path_buf());

    let mut out = Vec::new();
    let summary = run_fetch(&config, &mut out).await.expect("fetch should complete");

    assert_eq!(summary.launched, 2);
    assert_eq!(summary.successful(), 2);
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains(&format!("      5 {}/one", server.uri())));
}

#[tokio::test]
async fn test_run_fetch_empty_file_aborts() {
    let input = write_lines(&[String::new(), String::new()]);
    let config = create_test_config(input.path().to_path_buf());

    let mut out = Vec::new();
    let err = run_fetch(&config, &mut out)
        .await
        .expect_err("empty input should abort");

    assert!(matches!(
        err.downcast_ref::<BatchError>(),
        Some(BatchError::NoInput)
    ));
    assert_eq!(err.to_string(), "aborted, no input");
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_run_fetch_missing_file() {
    let config = create_test_config(PathBuf::from("/no/such/urls.txt"));
    let mut out = Vec::new();
    let err = run_fetch(&config, &mut out)
        .await
        .expect_err("missing file should fail");
    assert!(format!("{:#}", err).contains("Failed to read identifiers"));
}
