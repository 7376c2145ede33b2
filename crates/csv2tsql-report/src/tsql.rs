//! T-SQL INSERT statement generation.

use tracing::debug;

use csv2tsql_model::{StatementSet, TableName};

/// Statements between progress log lines.
pub const PROGRESS_INTERVAL: usize = 1000;

/// Render a value as a T-SQL literal.
///
/// `None` becomes `NULL`; anything else is single-quoted with embedded quotes
/// doubled.
///
/// ```
/// use csv2tsql_report::escape_sql_value;
///
/// assert_eq!(escape_sql_value(Some("O'Brien")), "'O''Brien'");
/// assert_eq!(escape_sql_value(None), "NULL");
/// ```
pub fn escape_sql_value(value: Option<&str>) -> String {
    match value {
        None => "NULL".to_string(),
        Some(text) => format!("'{}'", text.replace('\'', "''")),
    }
}

/// Reverse [`escape_sql_value`] for a quoted literal.
///
/// Returns `None` for `NULL` or for text that is not a well-formed literal.
pub fn unescape_sql_literal(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\'' {
            // A lone quote inside the literal means it was not produced by us.
            if chars.next_if_eq(&'\'').is_none() {
                return None;
            }
        }
        out.push(ch);
    }
    Some(out)
}

fn header_comment(table_name: &TableName, headers: &[String], row_count: usize) -> Vec<String> {
    vec![
        format!("-- T-SQL INSERT statements for table: {table_name}"),
        "-- Generated from CSV file".to_string(),
        format!("-- Columns: {}", headers.join(", ")),
        format!("-- Total rows: {row_count}"),
        String::new(),
    ]
}

/// Generate the statement set for one table.
///
/// Returns an empty set when there are no headers or no rows. Values are
/// looked up positionally; a row shorter than `headers` renders the missing
/// positions as `NULL`.
pub fn generate_statements(
    table_name: &TableName,
    headers: &[String],
    rows: &[Vec<String>],
) -> StatementSet {
    if headers.is_empty() || rows.is_empty() {
        return StatementSet::empty(table_name.clone());
    }

    let mut lines = header_comment(table_name, headers, rows.len());
    lines.reserve(rows.len());
    let columns = headers.join(", ");

    for (idx, row) in rows.iter().enumerate() {
        let values: Vec<String> = (0..headers.len())
            .map(|col| escape_sql_value(row.get(col).map(String::as_str)))
            .collect();
        lines.push(format!(
            "INSERT INTO {table_name} ({columns}) VALUES ({});",
            values.join(", ")
        ));

        let generated = idx + 1;
        if generated % PROGRESS_INTERVAL == 0 {
            debug!(table = %table_name, generated, "Generated INSERT statements");
        }
    }

    StatementSet::new(table_name.clone(), lines, rows.len())
}
