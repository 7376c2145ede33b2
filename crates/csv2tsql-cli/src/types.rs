use std::fmt;
use std::path::{Path, PathBuf};

use csv2tsql_model::{SourceFile, TableName};
use csv2tsql_report::DEFAULT_OUTPUT_DIR;

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory scanned recursively for CSV files.
    pub input_root: PathBuf,
    /// Directory receiving generated `.sql` files.
    pub output_dir: PathBuf,
}

impl RunConfig {
    /// Configuration writing to the default `output_sql` directory.
    pub fn new(input_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// Why a file produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoHeaders,
    NoRows,
    NoStatements,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NoHeaders => "no headers",
            SkipReason::NoRows => "no data rows",
            SkipReason::NoStatements => "no statements",
        };
        f.write_str(text)
    }
}

/// Terminal state of one file's conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted {
        table_name: TableName,
        output: PathBuf,
        columns: usize,
        rows: usize,
    },
    Skipped(SkipReason),
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub source: SourceFile,
    pub outcome: FileOutcome,
}

/// Counters and per-file outcomes for a finished run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub input_root: PathBuf,
    pub output_dir: PathBuf,
    pub discovered: usize,
    pub attempted: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn new(input_root: &Path, output_dir: &Path, discovered: usize) -> Self {
        Self {
            input_root: input_root.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            discovered,
            ..Self::default()
        }
    }

    /// Fold one completed file into the counters.
    pub fn record(&mut self, report: FileReport) {
        self.attempted += 1;
        match report.outcome {
            FileOutcome::Converted { .. } => self.succeeded += 1,
            FileOutcome::Skipped(_) => self.skipped += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
        self.files.push(report);
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn outcome_for(&self, file_name: &str) -> Option<&FileOutcome> {
        self.files
            .iter()
            .find(|report| report.source.file_name() == file_name)
            .map(|report| &report.outcome)
    }
}
