//! Discovered input files.

use std::path::{Path, PathBuf};

use crate::naming::TableName;

/// Extension of generated output artifacts.
pub const OUTPUT_EXTENSION: &str = "sql";

/// A CSV file found during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path to the CSV file as discovered.
    pub path: PathBuf,
    /// File stem (name without the final extension).
    pub base_name: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let base_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, base_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name including extension, for log messages.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn table_name(&self) -> TableName {
        TableName::from_stem(&self.base_name)
    }

    /// Output artifact name: `<base name>.sql`.
    pub fn output_file_name(&self) -> String {
        format!("{}.{OUTPUT_EXTENSION}", self.base_name)
    }
}
