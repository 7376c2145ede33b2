//! Recursive discovery of CSV files under a root directory.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use csv2tsql_model::SourceFile;

use crate::error::{IngestError, Result};

const CSV_SUFFIX: &[u8] = b".csv";

/// Returns true for names ending in `.csv`, case-insensitively.
///
/// Matches on the raw file name, so `.csv` itself and names that are not
/// valid UTF-8 still qualify.
fn has_csv_suffix(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let bytes = name.as_encoded_bytes();
        bytes.len() >= CSV_SUFFIX.len()
            && bytes[bytes.len() - CSV_SUFFIX.len()..].eq_ignore_ascii_case(CSV_SUFFIX)
    })
}

/// Lists all CSV files below `root`, descending into subdirectories.
///
/// Entries are visited in file-name order within each directory. Entries that
/// cannot be read are logged and skipped.
pub fn list_csv_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "Skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if has_csv_suffix(entry.path()) {
            debug!(path = %entry.path().display(), "CSV file found");
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Discovers CSV files under `root` as [`SourceFile`]s.
///
/// A missing root is reported and yields no files rather than an error.
pub fn find_csv_files(root: &Path) -> Vec<SourceFile> {
    info!(root = %root.display(), "Scanning directory");
    match list_csv_files(root) {
        Ok(paths) => {
            info!(count = paths.len(), "Total CSV files found");
            paths.into_iter().map(SourceFile::new).collect()
        }
        Err(err) => {
            error!(error = %err, "Directory does not exist");
            Vec::new()
        }
    }
}
