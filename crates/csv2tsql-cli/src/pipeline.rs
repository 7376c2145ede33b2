//! Conversion pipeline with explicit per-file outcomes.
//!
//! For every discovered file the pipeline runs these stages in order:
//! 1. **Name**: derive the table name from the file stem
//! 2. **Read**: sniff the delimiter, sanitize headers, align rows
//! 3. **Generate**: build the T-SQL statement set
//! 4. **Write**: persist `<base name>.sql` into the output directory
//!
//! A file that fails or has nothing to convert never stops the batch; its
//! outcome is recorded and the next file is processed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use csv2tsql_ingest::{find_csv_files, read_table};
use csv2tsql_model::SourceFile;
use csv2tsql_report::{ReportError, ensure_output_dir, generate_statements, write_statement_set};

use crate::types::{FileOutcome, FileReport, RunConfig, RunSummary, SkipReason};

/// Convert every CSV file under `config.input_root`.
///
/// # Errors
///
/// Fails only when the output directory cannot be created. Per-file problems
/// are reported in the returned summary.
pub fn convert_directory(config: &RunConfig) -> Result<RunSummary> {
    let run_span = info_span!("convert", root = %config.input_root.display());
    let _run_guard = run_span.enter();

    ensure_output_dir(&config.output_dir).with_context(|| {
        format!(
            "prepare output directory {}",
            config.output_dir.display()
        )
    })?;

    info!("Starting CSV to T-SQL conversion");
    let sources = find_csv_files(&config.input_root);
    let mut summary = RunSummary::new(&config.input_root, &config.output_dir, sources.len());

    if sources.is_empty() {
        warn!("No CSV files found in the specified directory");
        return Ok(summary);
    }

    // Output path -> source that last wrote it in this run.
    let mut written: BTreeMap<PathBuf, PathBuf> = BTreeMap::new();

    for source in sources {
        let outcome = process_file(&source, &config.output_dir);
        if let FileOutcome::Converted { output, .. } = &outcome
            && let Some(previous) = written.insert(output.clone(), source.path.clone())
        {
            warn!(
                output = %output.display(),
                previous = %previous.display(),
                current = %source.path.display(),
                "Output file overwritten by a later input with the same base name"
            );
        }
        summary.record(FileReport { source, outcome });
    }

    info!(
        succeeded = summary.succeeded,
        discovered = summary.discovered,
        skipped = summary.skipped,
        failed = summary.failed,
        "Conversion completed. Successfully processed {} out of {} CSV files",
        summary.succeeded,
        summary.discovered
    );
    info!(output_dir = %config.output_dir.display(), "Output files saved");

    Ok(summary)
}

/// Run one file through read, generate and write.
pub fn process_file(source: &SourceFile, output_dir: &Path) -> FileOutcome {
    let file_span = info_span!("process_file", source_file = %source.path.display());
    let _file_guard = file_span.enter();
    let start = Instant::now();
    info!("Processing CSV file");

    let outcome = match try_process_file(source, output_dir) {
        Ok(outcome) => outcome,
        Err(error) => {
            tracing::error!(error = %error, "Error processing file");
            FileOutcome::Failed {
                error: error.to_string(),
            }
        }
    };

    debug!(elapsed_ms = start.elapsed().as_millis(), "File finished");
    outcome
}

fn try_process_file(
    source: &SourceFile,
    output_dir: &Path,
) -> std::result::Result<FileOutcome, ReportError> {
    let table_name = source.table_name();
    debug!(table = %table_name, "Table name derived");

    let table = read_table(source.path());

    if table.headers.is_empty() {
        warn!("No headers found in CSV file");
        return Ok(FileOutcome::Skipped(SkipReason::NoHeaders));
    }

    if table.rows.is_empty() {
        warn!("No data rows found in CSV file");
        return Ok(FileOutcome::Skipped(SkipReason::NoRows));
    }

    info!(
        columns = table.column_count(),
        rows = table.row_count(),
        "Found {} columns and {} data rows",
        table.column_count(),
        table.row_count()
    );

    let statements = generate_statements(&table_name, &table.headers, &table.rows);
    if statements.is_empty() {
        warn!("No SQL statements generated");
        return Ok(FileOutcome::Skipped(SkipReason::NoStatements));
    }

    debug!(
        statements = statements.statement_count(),
        "Saving INSERT statements to output file"
    );
    let output = write_statement_set(output_dir, source, &statements)?;

    info!(
        "Successfully processed: {} -> {}",
        source.file_name(),
        source.output_file_name()
    );

    Ok(FileOutcome::Converted {
        table_name,
        output,
        columns: table.column_count(),
        rows: table.row_count(),
    })
}
