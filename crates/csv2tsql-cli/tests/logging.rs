//! Subscriber installation with a file tee.
//!
//! Kept in its own test binary because the global subscriber can only be
//! installed once per process.

use std::fs;

use csv2tsql_cli::logging::{LogConfig, SharedFileWriter, init_logging_with_writers};
use tempfile::TempDir;

#[test]
fn test_events_are_teed_to_log_file() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("csv2tsql.log");
    let file = fs::File::create(&log_path).unwrap();

    let config = LogConfig::from_debug(true)
        .with_timestamps(false)
        .with_log_file(None);
    init_logging_with_writers(&config, std::io::sink, Some(SharedFileWriter::new(file)))
        .unwrap();

    tracing::info!(target: "csv2tsql_cli", "Starting CSV to T-SQL conversion");
    tracing::debug!(target: "csv2tsql_ingest", "Detected delimiter");
    tracing::trace!(target: "csv2tsql_ingest", "Row detail");
    tracing::info!(target: "some_dependency", "Dependency chatter");

    let text = fs::read_to_string(&log_path).unwrap();
    assert!(text.contains("Starting CSV to T-SQL conversion"));
    assert!(text.contains("Detected delimiter"));
    assert!(!text.contains("Row detail"));
    assert!(!text.contains("Dependency chatter"));
    // The file layer never carries color codes.
    assert!(!text.contains('\u{1b}'));

    let again = init_logging_with_writers(&config, std::io::sink, None::<SharedFileWriter>);
    assert!(again.is_err());
}
