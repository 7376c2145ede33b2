//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or reading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Root directory missing or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to open or read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// File content is not valid UTF-8.
    #[error("invalid UTF-8 in {path} at record {record}")]
    InvalidUtf8 { path: PathBuf, record: u64 },

    /// Malformed delimited content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

impl IngestError {
    /// Classify a `csv` crate error for `path`.
    pub(crate) fn from_csv(path: &std::path::Path, err: csv::Error) -> Self {
        let record = err.position().map(csv::Position::record).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::FileRead {
                path: path.to_path_buf(),
                source,
            },
            csv::ErrorKind::Utf8 { .. } => Self::InvalidUtf8 {
                path: path.to_path_buf(),
                record,
            },
            other => Self::CsvParse {
                path: path.to_path_buf(),
                message: format!("{other:?}"),
            },
        }
    }
}

/// Failure to infer a delimiter from a content sample.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SniffError {
    #[error("sample is empty")]
    EmptySample,

    #[error("sample is not valid UTF-8 (byte offset {offset})")]
    InvalidUtf8 { offset: usize },

    #[error("no delimiter is used consistently across {lines} sample lines")]
    NoConsistentDelimiter { lines: usize },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
