//! Batch driver: code list files in, timestamped CSV tables out.
//!
//! Each file under a root is read as one code per line, queried against the
//! family selected by the mode string, and written next to the others in the
//! output directory as `<timestamp>_<file name>.csv`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use gem_ingest::{discover_code_files, read_code_list};
use gem_map::{GemEngine, MatchPipeline, normalize};
use gem_model::CodeFamily;
use gem_output::{timestamped_output_path, write_csv};
use tracing::{debug, info, info_span, warn};

/// Roots processed when no root is given, with their modes.
pub const DEFAULT_JOBS: [(&str, CodeFamily); 2] = [
    ("ICD-9-cm_source", CodeFamily::Cm),
    ("ICD-9-pcs_source", CodeFamily::Pcs),
];

/// One root directory and the mode its files are queried with.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub root: PathBuf,
    /// Raw mode selector. Anything other than `cm`/`pcs` yields empty tables.
    pub mode: String,
}

impl BatchJob {
    pub fn new(root: impl Into<PathBuf>, mode: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            mode: mode.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub output_dir: PathBuf,
    pub pipeline: MatchPipeline,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            pipeline: MatchPipeline::Forward,
        }
    }
}

#[derive(Debug)]
pub struct FileSummary {
    pub source: PathBuf,
    pub output: PathBuf,
    pub codes: usize,
    pub matched: usize,
    pub rows: usize,
    pub secondary_codes: usize,
}

#[derive(Debug)]
pub struct BatchResult {
    pub root: PathBuf,
    pub mode: String,
    pub files: Vec<FileSummary>,
    /// Per-file failures; the remaining files are still processed.
    pub errors: Vec<String>,
}

impl BatchResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Jobs for the default roots that exist in the working directory.
pub fn default_jobs() -> Vec<BatchJob> {
    DEFAULT_JOBS
        .iter()
        .filter_map(|(root, family)| {
            let path = Path::new(root);
            if path.is_dir() {
                Some(BatchJob::new(path, family.as_str()))
            } else {
                warn!(root, "default batch root not found, skipping");
                None
            }
        })
        .collect()
}

/// Processes every file under `job.root`.
///
/// # Errors
///
/// Fails when the root cannot be walked or the output directory cannot be
/// created. Failures on individual files are collected in the result.
pub fn run_batch(engine: &GemEngine, job: &BatchJob, options: &BatchOptions) -> Result<BatchResult> {
    let span = info_span!("batch", root = %job.root.display(), mode = %job.mode);
    let _guard = span.enter();
    let start = Instant::now();

    std::fs::create_dir_all(&options.output_dir).with_context(|| {
        format!("create output directory {}", options.output_dir.display())
    })?;
    let files = discover_code_files(&job.root)
        .with_context(|| format!("discover code files under {}", job.root.display()))?;
    info!(file_count = files.len(), "discovered code files");

    let mut result = BatchResult {
        root: job.root.clone(),
        mode: job.mode.clone(),
        files: Vec::with_capacity(files.len()),
        errors: Vec::new(),
    };
    for path in files {
        match process_file(engine, &path, &job.mode, options, Local::now().naive_local()) {
            Ok(summary) => result.files.push(summary),
            Err(error) => {
                warn!(path = %path.display(), error = %error, "file failed");
                result.errors.push(format!("{}: {error:#}", path.display()));
            }
        }
    }

    info!(
        files = result.files.len(),
        errors = result.errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "batch complete"
    );
    Ok(result)
}

/// Queries one code list file and writes its result table, named after
/// `timestamp` and the file name.
///
/// # Errors
///
/// Fails when the file cannot be read or the table cannot be written,
/// including when a table with the same name already exists.
pub fn process_file(
    engine: &GemEngine,
    path: &Path,
    mode: &str,
    options: &BatchOptions,
    timestamp: NaiveDateTime,
) -> Result<FileSummary> {
    let codes = read_code_list(path)?;
    let outcome = engine.run_mode(mode, options.pipeline, &codes);
    let rows = normalize(&outcome.result);
    let output = timestamped_output_path(&options.output_dir, path, timestamp);
    write_csv(&output, &rows)?;
    debug!(
        source = %path.display(),
        output = %output.display(),
        codes = codes.len(),
        rows = rows.len(),
        "processed code file"
    );
    Ok(FileSummary {
        source: path.to_path_buf(),
        output,
        codes: codes.len(),
        matched: outcome.result.matched_count(),
        rows: rows.len(),
        secondary_codes: outcome.secondary_codes.len(),
    })
}
