//! Header-driven table reading.

mod header;
mod reader;

pub use header::{duplicate_headers, sanitize_headers};
pub use reader::{read_csv_table, read_csv_table_with_delimiter, read_table};
