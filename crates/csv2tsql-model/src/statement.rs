//! Generated statement sets.

use crate::naming::TableName;

/// Ordered output lines (comment block plus one statement per row) for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementSet {
    table_name: TableName,
    lines: Vec<String>,
    statement_count: usize,
}

impl StatementSet {
    pub fn new(table_name: TableName, lines: Vec<String>, statement_count: usize) -> Self {
        Self {
            table_name,
            lines,
            statement_count,
        }
    }

    /// A set with nothing to emit.
    pub fn empty(table_name: TableName) -> Self {
        Self::new(table_name, Vec::new(), 0)
    }

    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of INSERT statements (excludes comment and blank lines).
    pub fn statement_count(&self) -> usize {
        self.statement_count
    }

    /// Lines joined with `\n`, without a trailing newline.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}
