//! End-to-end tests for directory conversion.

use std::fs;
use std::path::Path;

use csv2tsql_cli::pipeline::convert_directory;
use csv2tsql_cli::types::{FileOutcome, RunConfig, SkipReason};
use tempfile::TempDir;

fn write(path: &Path, contents: impl AsRef<[u8]>) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn config_for(dir: &TempDir) -> RunConfig {
    RunConfig::new(dir.path().join("input")).with_output_dir(dir.path().join("output_sql"))
}

#[test]
fn test_sales_file_converted() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    write(
        &config.input_root.join("sales-data.csv"),
        "Name,Order Date,Total\nAnn,2024-01-01,19.99\nO'Neil,2024-01-02,\n",
    );

    let summary = convert_directory(&config).unwrap();

    assert_eq!(summary.discovered, 1);
    assert_eq!(summary.succeeded, 1);
    let sql = fs::read_to_string(config.output_dir.join("sales-data.sql")).unwrap();
    let expected = "-- T-SQL INSERT statements for table: sales_data\n\
                    -- Generated from CSV file\n\
                    -- Columns: Name, Order_Date, Total\n\
                    -- Total rows: 2\n\
                    \n\
                    INSERT INTO sales_data (Name, Order_Date, Total) VALUES ('Ann', '2024-01-01', '19.99');\n\
                    INSERT INTO sales_data (Name, Order_Date, Total) VALUES ('O''Neil', '2024-01-02', '');";
    assert_eq!(sql, expected);
}

#[test]
fn test_semicolon_file_with_blank_header() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    write(
        &config.input_root.join("people.csv"),
        "Name;Age;\nBob;42;x\nEve;7;\n",
    );

    let summary = convert_directory(&config).unwrap();

    assert_eq!(summary.succeeded, 1);
    let sql = fs::read_to_string(config.output_dir.join("people.sql")).unwrap();
    assert!(sql.contains("-- Columns: Name, Age, column_3"));
    assert!(sql.contains("INSERT INTO people (Name, Age, column_3) VALUES ('Bob', '42', 'x');"));
    assert!(sql.ends_with("INSERT INTO people (Name, Age, column_3) VALUES ('Eve', '7', '');"));
}

#[test]
fn test_digit_leading_stem_gets_table_prefix() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    write(&config.input_root.join("2024 report.csv"), "id\n1\n");

    let summary = convert_directory(&config).unwrap();

    assert_eq!(summary.succeeded, 1);
    let sql = fs::read_to_string(config.output_dir.join("2024 report.sql")).unwrap();
    assert!(sql.contains("INSERT INTO table_2024_report (id) VALUES ('1');"));
}

#[test]
fn test_skipped_files_produce_no_output() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    write(&config.input_root.join("empty.csv"), "");
    write(&config.input_root.join("header_only.csv"), "a,b,c\n");
    write(&config.input_root.join("bad_utf8.csv"), b"na\xffme,age\n1,2\n");
    write(&config.input_root.join("leading_blank.csv"), "\nName,Age\nAnn,3\n");

    let summary = convert_directory(&config).unwrap();

    assert_eq!(summary.discovered, 4);
    assert_eq!(summary.attempted, 4);
    assert_eq!(summary.succeeded, 0);
    assert_eq!(summary.skipped, 4);
    assert_eq!(
        summary.outcome_for("empty.csv"),
        Some(&FileOutcome::Skipped(SkipReason::NoHeaders))
    );
    assert_eq!(
        summary.outcome_for("header_only.csv"),
        Some(&FileOutcome::Skipped(SkipReason::NoRows))
    );
    assert_eq!(
        summary.outcome_for("bad_utf8.csv"),
        Some(&FileOutcome::Skipped(SkipReason::NoHeaders))
    );
    assert_eq!(
        summary.outcome_for("leading_blank.csv"),
        Some(&FileOutcome::Skipped(SkipReason::NoHeaders))
    );
    assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 0);
}

#[test]
fn test_failure_does_not_stop_batch() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    write(&config.input_root.join("a.csv"), "x\n1\n");
    write(&config.input_root.join("b.csv"), "y\n2\n");
    // A directory occupying a.sql makes the first write fail.
    fs::create_dir_all(config.output_dir.join("a.sql")).unwrap();

    let summary = convert_directory(&config).unwrap();

    assert_eq!(summary.discovered, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.succeeded, 1);
    assert!(matches!(
        summary.outcome_for("a.csv"),
        Some(FileOutcome::Failed { .. })
    ));
    assert!(config.output_dir.join("b.sql").is_file());
}

#[test]
fn test_missing_input_directory_reports_zero() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);

    let summary = convert_directory(&config).unwrap();

    assert_eq!(summary.discovered, 0);
    assert_eq!(summary.succeeded, 0);
    assert!(summary.files.is_empty());
    assert!(config.output_dir.is_dir());
}

#[test]
fn test_blocked_output_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    write(&config.input_root.join("a.csv"), "x\n1\n");
    write(&config.output_dir, "not a directory");

    let error = convert_directory(&config).unwrap_err();
    assert!(format!("{error:#}").contains("output directory"));
}

#[test]
fn test_nested_files_and_name_collision() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    write(&config.input_root.join("orders.csv"), "id\n1\n");
    write(&config.input_root.join("archive/orders.csv"), "id\n2\n");
    write(&config.input_root.join("archive/2023/items.tsv.csv"), "sku\tqty\nA\t3\n");

    let summary = convert_directory(&config).unwrap();

    assert_eq!(summary.discovered, 3);
    assert_eq!(summary.succeeded, 3);
    // Sorted traversal: archive/orders.csv is written before orders.csv.
    let orders = fs::read_to_string(config.output_dir.join("orders.sql")).unwrap();
    assert!(orders.ends_with("VALUES ('1');"));
    let items = fs::read_to_string(config.output_dir.join("items.tsv.sql")).unwrap();
    assert!(items.contains("INSERT INTO items_tsv (sku, qty) VALUES ('A', '3');"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    write(
        &config.input_root.join("data.csv"),
        "\u{feff}city|pop\r\nOslo|700000\r\nBergen|290000\r\n",
    );

    convert_directory(&config).unwrap();
    let first = fs::read(config.output_dir.join("data.sql")).unwrap();
    convert_directory(&config).unwrap();
    let second = fs::read(config.output_dir.join("data.sql")).unwrap();

    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("-- Columns: city, pop"));
    assert!(text.contains("INSERT INTO data (city, pop) VALUES ('Bergen', '290000');"));
}

#[test]
fn test_digit_leading_headers_kept() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    write(&config.input_root.join("q.csv"), "2024,Q1\n5,6\n");

    convert_directory(&config).unwrap();

    let sql = fs::read_to_string(config.output_dir.join("q.sql")).unwrap();
    assert!(sql.ends_with("INSERT INTO q (2024, Q1) VALUES ('5', '6');"));
}

#[test]
fn test_file_named_dot_csv_is_converted() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    write(&config.input_root.join(".csv"), "a,b\n1,2\n");

    let summary = convert_directory(&config).unwrap();

    assert_eq!(summary.discovered, 1);
    assert_eq!(summary.succeeded, 1);
    let sql = fs::read_to_string(config.output_dir.join(".csv.sql")).unwrap();
    assert!(sql.ends_with("INSERT INTO _csv (a, b) VALUES ('1', '2');"));
}
