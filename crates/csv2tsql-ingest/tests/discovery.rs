//! Tests for recursive CSV discovery.

use std::fs;
use std::path::Path;

use csv2tsql_ingest::{find_csv_files, list_csv_files};
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(&path, "A,B\n1,2\n").expect("write file");
}

#[test]
fn discovers_nested_csv_files_in_name_order() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "b.csv");
    touch(dir.path(), "a.CSV");
    touch(dir.path(), "sub/c.csv");
    touch(dir.path(), "sub/ignored.tsv");
    touch(dir.path(), "sub/deep/d.csv");

    let files = list_csv_files(dir.path()).expect("list csv");
    let relative: Vec<String> = files
        .iter()
        .map(|p| {
            p.strip_prefix(dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();

    assert_eq!(relative, vec!["a.CSV", "b.csv", "sub/c.csv", "sub/deep/d.csv"]);
}

#[test]
fn missing_root_yields_no_sources() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    assert!(list_csv_files(&missing).is_err());
    assert!(find_csv_files(&missing).is_empty());
}

#[test]
fn file_root_is_not_a_directory() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "only.csv");

    assert!(find_csv_files(&dir.path().join("only.csv")).is_empty());
}

#[test]
fn file_named_only_csv_suffix_is_discovered() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), ".csv");
    touch(dir.path(), "plain.csv");

    let sources = find_csv_files(dir.path());
    let names: Vec<String> = sources.iter().map(|s| s.file_name()).collect();

    assert_eq!(names, vec![".csv", "plain.csv"]);
    assert_eq!(sources[0].table_name().as_str(), "_csv");
    assert_eq!(sources[0].output_file_name(), ".csv.sql");
}
