//! Logging setup: file destination receives engine events.
//!
//! Only one test may install the global subscriber per test binary, so the
//! file-output path carries the assertion and the remaining logging
//! behavior is covered by unit tests in src/logging.rs.

use std::fs;
use tempfile::TempDir;
use weft::logging::{init_logging, LoggingConfig};

#[test]
fn test_file_output_receives_events() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("weft.log");

    let config = LoggingConfig {
        level: "debug".to_string(),
        output: "file".to_string(),
        file: log_file.clone(),
        ..LoggingConfig::default()
    };
    init_logging(Some(&config)).unwrap();

    tracing::info!(marker = "logging-integration", "engine event");

    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("logging-integration"));
}
