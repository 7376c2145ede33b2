//! CSV file reading with sniffed delimiters and sanitized headers.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::{debug, error, warn};

use csv2tsql_model::CsvTable;

use crate::delimiter::{detect_file_delimiter, display_delimiter};
use crate::error::{IngestError, Result};

use super::header::{duplicate_headers, sanitize_headers};

fn open_reader(path: &Path, delimiter: u8) -> Result<Reader<File>> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| IngestError::from_csv(path, e))
}

/// Returns true when the file's first physical line is empty.
///
/// The csv parser skips blank lines, so this has to look at the raw bytes.
fn first_line_is_blank(path: &Path) -> Result<bool> {
    let mut file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut first = [0u8; 1];
    let read = file.read(&mut first).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read == 1 && matches!(first[0], b'\n' | b'\r'))
}

/// Reads the first physical line as raw header tokens.
///
/// Returns `None` for an empty file or one whose first line is blank.
fn read_header_record(path: &Path, delimiter: u8) -> Result<Option<StringRecord>> {
    if first_line_is_blank(path)? {
        debug!(path = %path.display(), "First line is blank; no headers");
        return Ok(None);
    }
    let mut reader = open_reader(path, delimiter)?;
    match reader.records().next() {
        Some(record) => record.map(Some).map_err(|e| IngestError::from_csv(path, e)),
        None => Ok(None),
    }
}

/// Aligns a record to `width` trimmed values; missing fields become empty and
/// extra fields are dropped.
fn align_record(record: &StringRecord, width: usize) -> Vec<String> {
    (0..width)
        .map(|idx| record.get(idx).map(str::trim).unwrap_or("").to_string())
        .collect()
}

/// Reads a CSV file using an explicit delimiter.
///
/// The first record supplies the headers. The file is then read again from the
/// start and every later record becomes one row aligned to those headers.
pub fn read_csv_table_with_delimiter(path: &Path, delimiter: u8) -> Result<CsvTable> {
    let Some(raw_headers) = read_header_record(path, delimiter)? else {
        return Ok(CsvTable {
            delimiter,
            ..CsvTable::empty()
        });
    };

    let raw: Vec<&str> = raw_headers.iter().collect();
    let headers = sanitize_headers(&raw);
    debug!(path = %path.display(), headers = ?headers, "Column headers found");

    let duplicates = duplicate_headers(&headers);
    if !duplicates.is_empty() {
        warn!(
            path = %path.display(),
            duplicates = ?duplicates,
            "Sanitized column headers are not unique"
        );
    }

    let mut reader = open_reader(path, delimiter)?;
    let mut rows = Vec::new();
    for record in reader.records().skip(1) {
        let record = record.map_err(|e| IngestError::from_csv(path, e))?;
        rows.push(align_record(&record, headers.len()));
    }

    debug!(
        path = %path.display(),
        rows = rows.len(),
        delimiter = %display_delimiter(delimiter),
        "Read data rows"
    );

    Ok(CsvTable {
        headers,
        rows,
        delimiter,
    })
}

/// Reads a CSV file, sniffing its delimiter first.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let delimiter = detect_file_delimiter(path);
    read_csv_table_with_delimiter(path, delimiter)
}

/// Reads a CSV file, reporting any failure and returning an empty table.
///
/// Callers treat an empty table as "nothing to convert" for this file.
pub fn read_table(path: &Path) -> CsvTable {
    match read_csv_table(path) {
        Ok(table) => table,
        Err(err) => {
            error!(path = %path.display(), error = %err, "Error reading CSV file");
            CsvTable::empty()
        }
    }
}
