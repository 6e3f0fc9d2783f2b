//! Integration tests for the batch driver.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use gem_cli::batch::{BatchJob, BatchOptions, process_file, run_batch};
use gem_map::{Crosswalk, GemEngine, MatchPipeline};
use gem_model::{CodeFamily, EquivalenceTable, GemEntry};
use tempfile::TempDir;

fn table(rows: &[(&str, &str, &str)]) -> EquivalenceTable {
    rows.iter()
        .map(|(source, target, flag)| GemEntry::new(*source, *target, *flag))
        .collect()
}

fn engine() -> GemEngine {
    let cm = Crosswalk::from_tables(
        CodeFamily::Cm,
        &table(&[("0010", "A000", "00000"), ("0011", "A000", "10000")]),
        &table(&[("A000", "0012", "10000")]),
    );
    let pcs = Crosswalk::from_tables(
        CodeFamily::Pcs,
        &table(&[("0001", "02HK3JZ", "10000")]),
        &table(&[("02HK3JZ", "0001", "10000")]),
    );
    GemEngine::from_crosswalks(cm, pcs)
}

fn only_output(dir: &Path) -> String {
    let entries: Vec<_> = fs::read_dir(dir).unwrap().map(|e| e.unwrap().path()).collect();
    assert_eq!(entries.len(), 1, "expected one output file");
    let name = entries[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.ends_with("_codes.txt.csv"), "unexpected name {name}");
    fs::read_to_string(&entries[0]).unwrap()
}

#[test]
fn forward_batch_writes_one_table_per_file() {
    let engine = engine();
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("codes.txt"), "0010\nV0001\n0010\n").unwrap();
    let out = TempDir::new().unwrap();

    let options = BatchOptions {
        output_dir: out.path().to_path_buf(),
        pipeline: MatchPipeline::Forward,
    };
    let result = run_batch(&engine, &BatchJob::new(root.path(), "cm"), &options).unwrap();

    assert!(!result.has_errors());
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].codes, 2);
    assert_eq!(result.files[0].matched, 1);
    assert_eq!(
        only_output(out.path()),
        "ICD9,ICD10,FLAG\n0010,A000,00000\nV0001,,\n"
    );
}

#[test]
fn unrecognized_mode_writes_empty_table() {
    let engine = engine();
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("codes.txt"), "0010\n").unwrap();
    let out = TempDir::new().unwrap();

    let options = BatchOptions {
        output_dir: out.path().to_path_buf(),
        pipeline: MatchPipeline::Forward,
    };
    let result = run_batch(&engine, &BatchJob::new(root.path(), "icd10"), &options).unwrap();

    assert!(!result.has_errors());
    assert_eq!(result.files[0].rows, 0);
    assert_eq!(only_output(out.path()), "ICD9,ICD10,FLAG\n");
}

#[test]
fn secondary_pipeline_adds_shared_target_codes() {
    let engine = engine();
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("codes.txt"), "0010\n").unwrap();
    let out = TempDir::new().unwrap();

    let options = BatchOptions {
        output_dir: out.path().to_path_buf(),
        pipeline: MatchPipeline::Secondary,
    };
    let result = run_batch(&engine, &BatchJob::new(root.path(), "cm"), &options).unwrap();

    // 0011 shares A000 in the forward table, 0012 in the backward table.
    assert_eq!(result.files[0].secondary_codes, 3);
    let csv = only_output(out.path());
    assert!(csv.contains("0011,A000,10000"));
    assert!(csv.contains("0012,,"));
}

#[test]
fn missing_root_is_an_error() {
    let engine = engine();
    let out = TempDir::new().unwrap();
    let options = BatchOptions {
        output_dir: out.path().to_path_buf(),
        pipeline: MatchPipeline::Forward,
    };
    let missing = out.path().join("nope");
    assert!(run_batch(&engine, &BatchJob::new(missing, "cm"), &options).is_err());
}

#[test]
fn same_named_files_never_overwrite_each_other() {
    let engine = engine();
    let root = TempDir::new().unwrap();
    for (folder, contents) in [("a", "0010\n"), ("b", "9999\n")] {
        fs::create_dir(root.path().join(folder)).unwrap();
        fs::write(root.path().join(folder).join("codes.txt"), contents).unwrap();
    }
    let out = TempDir::new().unwrap();
    let options = BatchOptions {
        output_dir: out.path().to_path_buf(),
        pipeline: MatchPipeline::Forward,
    };
    let at = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();

    let first = process_file(&engine, &root.path().join("a/codes.txt"), "cm", &options, at)
        .expect("first file");
    let second = process_file(&engine, &root.path().join("b/codes.txt"), "cm", &options, at);

    assert!(second.is_err(), "second table must not replace the first");
    assert_eq!(
        fs::read_to_string(&first.output).unwrap(),
        "ICD9,ICD10,FLAG\n0010,A000,00000\n"
    );
}

#[test]
fn batch_reports_every_file_it_could_not_write() {
    let engine = engine();
    let root = TempDir::new().unwrap();
    for folder in ["a", "b", "c"] {
        fs::create_dir(root.path().join(folder)).unwrap();
        fs::write(root.path().join(folder).join("codes.txt"), "0010\n").unwrap();
    }
    let out = TempDir::new().unwrap();
    let options = BatchOptions {
        output_dir: out.path().to_path_buf(),
        pipeline: MatchPipeline::Forward,
    };

    let result = run_batch(&engine, &BatchJob::new(root.path(), "cm"), &options).unwrap();

    // Files written in the same second collide; each collision is an error, not a loss.
    let on_disk = fs::read_dir(out.path()).unwrap().count();
    assert_eq!(result.files.len(), on_disk);
    assert_eq!(result.files.len() + result.errors.len(), 3);
}
