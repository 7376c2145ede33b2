//! Data model for CSV to T-SQL conversion.
//!
//! - **Identifiers**: sanitizing file stems and header tokens into SQL-safe names
//! - **Source files**: discovered inputs and the names derived from them
//! - **Tables**: headers plus rows as read from a delimited file
//! - **Statement sets**: the generated lines for one output artifact

pub mod naming;
pub mod source;
pub mod statement;
pub mod table;

pub use naming::{
    COLUMN_PREFIX, DEFAULT_TABLE_NAME, TABLE_PREFIX, TableName, is_identifier,
    sanitize_column_header, sanitize_identifier,
};
pub use source::{OUTPUT_EXTENSION, SourceFile};
pub use statement::StatementSet;
pub use table::CsvTable;
