use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{FileOutcome, RunSummary};

/// Print the per-file table and the final counts to stdout.
pub fn print_summary(summary: &RunSummary) {
    println!("Input: {}", summary.input_root.display());
    if !summary.files.is_empty() {
        println!("{}", summary_table(summary));
    }
    println!("{}", completion_line(summary));
    println!("Output files saved to: {}", summary.output_dir.display());
    if summary.has_failures() {
        eprintln!("Errors:");
        for line in failure_lines(summary) {
            eprintln!("- {line}");
        }
    }
}

/// One `file: error` line per failed file, in processing order.
pub fn failure_lines(summary: &RunSummary) -> Vec<String> {
    summary
        .files
        .iter()
        .filter_map(|report| match &report.outcome {
            FileOutcome::Failed { error } => {
                Some(format!("{}: {error}", report.source.path.display()))
            }
            _ => None,
        })
        .collect()
}

/// The closing line reported after every run.
pub fn completion_line(summary: &RunSummary) -> String {
    format!(
        "Successfully processed {} out of {} CSV files",
        summary.succeeded, summary.discovered
    )
}

pub fn summary_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Table"),
        header_cell("Columns"),
        header_cell("Rows"),
        header_cell("Status"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    let mut total_rows = 0usize;
    for report in &summary.files {
        let file = Cell::new(report.source.file_name());
        let row = match &report.outcome {
            FileOutcome::Converted {
                table_name,
                output,
                columns,
                rows,
            } => {
                total_rows += rows;
                vec![
                    file,
                    Cell::new(table_name).fg(Color::Blue),
                    Cell::new(columns),
                    Cell::new(rows),
                    Cell::new("converted")
                        .fg(Color::Green)
                        .add_attribute(Attribute::Bold),
                    Cell::new(output.display()),
                ]
            }
            FileOutcome::Skipped(reason) => vec![
                file,
                dim_cell(report.source.table_name()),
                dim_cell("-"),
                dim_cell("-"),
                Cell::new(format!("skipped: {reason}")).fg(Color::Yellow),
                dim_cell("-"),
            ],
            FileOutcome::Failed { error } => vec![
                file,
                dim_cell(report.source.table_name()),
                dim_cell("-"),
                dim_cell("-"),
                Cell::new("failed")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                Cell::new(error).fg(Color::Red),
            ],
        };
        table.add_row(row);
    }

    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} files", summary.discovered))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        count_cell(summary.succeeded, summary.skipped, summary.failed),
        dim_cell("-"),
    ]);
    table
}

fn count_cell(succeeded: usize, skipped: usize, failed: usize) -> Cell {
    let text = format!("{succeeded} ok / {skipped} skipped / {failed} failed");
    let color = if failed > 0 {
        Color::Red
    } else if skipped > 0 {
        Color::Yellow
    } else {
        Color::Green
    };
    Cell::new(text).fg(color).add_attribute(Attribute::Bold)
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
