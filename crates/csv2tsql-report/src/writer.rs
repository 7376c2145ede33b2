//! Output artifact writing.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use csv2tsql_model::{SourceFile, StatementSet};

use crate::error::{ReportError, Result};

/// Directory that receives generated `.sql` files unless configured otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "output_sql";

/// Create the output directory (and parents) if it does not exist.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    info!(output_dir = %dir.display(), "Output directory ensured");
    Ok(())
}

/// Destination of the artifact generated for `source`.
pub fn output_path(output_dir: &Path, source: &SourceFile) -> PathBuf {
    output_dir.join(source.output_file_name())
}

/// Write `statements` for `source`, replacing any previous artifact.
///
/// Lines are joined with `\n` and no trailing newline is added.
pub fn write_statement_set(
    output_dir: &Path,
    source: &SourceFile,
    statements: &StatementSet,
) -> Result<PathBuf> {
    let path = output_path(output_dir, source);
    std::fs::write(&path, statements.render()).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "SQL file saved");
    debug!(
        lines = statements.lines().len(),
        "Generated total lines (including comments)"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv2tsql_model::TableName;
    use tempfile::TempDir;

    fn sample_set() -> StatementSet {
        StatementSet::new(
            TableName::from_stem("orders"),
            vec![
                "-- header".to_string(),
                "INSERT INTO orders (id) VALUES ('1');".to_string(),
            ],
            1,
        )
    }

    #[test]
    fn test_write_statement_set() {
        let dir = TempDir::new().unwrap();
        let source = SourceFile::new("input/orders.csv");

        let path = write_statement_set(dir.path(), &source, &sample_set()).unwrap();

        assert_eq!(path, dir.path().join("orders.sql"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "-- header\nINSERT INTO orders (id) VALUES ('1');");
    }

    #[test]
    fn test_write_statement_set_overwrites() {
        let dir = TempDir::new().unwrap();
        let source = SourceFile::new("orders.csv");
        std::fs::write(dir.path().join("orders.sql"), "stale content that is longer").unwrap();

        write_statement_set(dir.path(), &source, &sample_set()).unwrap();

        let written = std::fs::read_to_string(dir.path().join("orders.sql")).unwrap();
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_write_statement_set_missing_dir() {
        let dir = TempDir::new().unwrap();
        let source = SourceFile::new("orders.csv");
        let result = write_statement_set(&dir.path().join("absent"), &source, &sample_set());
        assert!(matches!(result, Err(ReportError::Write { .. })));
    }

    #[test]
    fn test_ensure_output_dir_nested() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_output_dir_blocked_by_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("output_sql");
        std::fs::write(&blocker, "").unwrap();
        let result = ensure_output_dir(&blocker);
        assert!(matches!(result, Err(ReportError::CreateDir { .. })));
    }
}
