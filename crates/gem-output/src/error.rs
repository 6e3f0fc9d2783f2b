use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing result tables.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("result table {path} already exists")]
    AlreadyExists { path: PathBuf },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
