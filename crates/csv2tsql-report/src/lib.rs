//! T-SQL output generation.
//!
//! - **Statements**: comment header plus one `INSERT` per row, with every
//!   value rendered as a quoted string literal
//! - **Writer**: one `<base name>.sql` artifact per source file

mod error;
mod tsql;
mod writer;

pub use error::{ReportError, Result};
pub use tsql::{PROGRESS_INTERVAL, escape_sql_value, generate_statements, unescape_sql_literal};
pub use writer::{DEFAULT_OUTPUT_DIR, ensure_output_dir, output_path, write_statement_set};
