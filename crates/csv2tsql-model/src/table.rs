/// Headers and rows read from one delimited file.
///
/// Each row holds one trimmed value per header, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Field separator used to parse the file.
    pub delimiter: u8,
}

impl CsvTable {
    /// A table with no headers and no rows, used when a file cannot be read.
    pub fn empty() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            delimiter: b',',
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Value of `header` in row `row_idx`, using the first matching column.
    pub fn value(&self, row_idx: usize, header: &str) -> Option<&str> {
        let col_idx = self.headers.iter().position(|h| h == header)?;
        self.rows
            .get(row_idx)
            .and_then(|row| row.get(col_idx))
            .map(String::as_str)
    }
}
