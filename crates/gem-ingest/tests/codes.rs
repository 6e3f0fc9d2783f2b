//! Tests for code list reading.

use std::fs;

use gem_ingest::{IngestError, discover_code_files, read_code_list};
use tempfile::TempDir;

#[test]
fn reads_every_discovered_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("first.txt"), "0010\n0019\n0010\n").unwrap();
    fs::write(dir.path().join("nested").join("second.txt"), "V0001\n").unwrap();

    let files = discover_code_files(dir.path()).expect("discover");
    assert_eq!(files.len(), 2);

    let lists: Vec<Vec<String>> = files
        .iter()
        .map(|path| read_code_list(path).expect("read codes"))
        .collect();
    assert_eq!(lists[0], vec!["0010", "0019"]);
    assert_eq!(lists[1], vec!["V0001"]);
}

#[test]
fn missing_code_list_is_file_not_found() {
    let dir = TempDir::new().unwrap();
    let err = read_code_list(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
