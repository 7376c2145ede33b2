//! Identifier sanitization for table and column names.
//!
//! Every name emitted into a statement goes through this module. Table names
//! always match `[A-Za-z_][A-Za-z0-9_]*`; column names are restricted to
//! `[A-Za-z0-9_]+` and may start with a digit.

use std::fmt;

/// Prefix applied to table names that would otherwise start with a digit.
pub const TABLE_PREFIX: &str = "table_";

/// Prefix used for positional names of blank column headers.
pub const COLUMN_PREFIX: &str = "column_";

/// Table name used when a file stem sanitizes to nothing.
pub const DEFAULT_TABLE_NAME: &str = "data_table";

/// Replace every character outside `[A-Za-z0-9_]` with an underscore.
fn replace_unsafe_chars(raw: &str) -> String {
    raw.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

fn starts_like_identifier(value: &str) -> bool {
    value
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_')
}

/// Returns true if `value` matches `^[A-Za-z_][A-Za-z0-9_]*$`.
pub fn is_identifier(value: &str) -> bool {
    starts_like_identifier(value)
        && value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Sanitize an arbitrary string into an identifier.
///
/// Unsafe characters become `_`; an empty result returns `fallback`; a result
/// starting with a digit is prefixed with [`TABLE_PREFIX`].
///
/// ```
/// use csv2tsql_model::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("sales-data", "data_table"), "sales_data");
/// assert_eq!(sanitize_identifier("2024 report", "data_table"), "table_2024_report");
/// assert_eq!(sanitize_identifier("", "data_table"), "data_table");
/// ```
pub fn sanitize_identifier(raw: &str, fallback: &str) -> String {
    let replaced = replace_unsafe_chars(raw);
    if replaced.is_empty() {
        return fallback.to_string();
    }
    if starts_like_identifier(&replaced) {
        replaced
    } else {
        format!("{TABLE_PREFIX}{replaced}")
    }
}

/// Sanitize one raw header token at zero-based `index`.
///
/// Blank headers (after trimming) become `column_<index + 1>`. Unlike table
/// names, a header starting with a digit keeps its leading digit.
pub fn sanitize_column_header(raw: &str, index: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return format!("{COLUMN_PREFIX}{}", index + 1);
    }
    replace_unsafe_chars(trimmed)
}

/// A sanitized table name derived from a source file's base name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableName(String);

impl TableName {
    /// Derive a table name from a file stem (`sales-data` -> `sales_data`).
    pub fn from_stem(stem: &str) -> Self {
        Self(sanitize_identifier(stem, DEFAULT_TABLE_NAME))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
