//! CSV ingestion for T-SQL generation.
//!
//! This crate turns a directory of delimited text files into header-aligned
//! tables:
//!
//! - **File Discovery**: recursively find `.csv` files (case-insensitive)
//! - **Delimiter Sniffing**: infer the separator from the first kilobyte
//! - **Table Reading**: sanitize the header row and align every data row to it
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use csv2tsql_ingest::{find_csv_files, read_table};
//!
//! for source in find_csv_files(Path::new("exports")) {
//!     let table = read_table(source.path());
//!     println!("{}: {} rows", source.file_name(), table.rows.len());
//! }
//! ```

mod delimiter;
mod discovery;
mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result, SniffError};

// === CSV Reading ===
pub use table::{
    duplicate_headers, read_csv_table, read_csv_table_with_delimiter, read_table,
    sanitize_headers,
};

// === Delimiter Sniffing ===
pub use delimiter::{
    CANDIDATE_DELIMITERS, DEFAULT_DELIMITER, SNIFF_SAMPLE_BYTES, detect_delimiter,
    detect_file_delimiter, display_delimiter, sniff_delimiter,
};

// === File Discovery ===
pub use discovery::{find_csv_files, list_csv_files};
