//! Error types for GEM table loading.

use std::path::PathBuf;

use gem_model::{CodeFamily, Direction};
use thiserror::Error;

/// Errors that can occur while locating or loading GEM tables.
#[derive(Debug, Error)]
pub enum TableError {
    /// Table file does not exist.
    #[error("GEM table not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read table file.
    #[error("failed to read GEM table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line is not `<source> <target> <flag>`. The whole load fails.
    #[error("malformed record at {path}:{line_number}: {reason}: {line:?}")]
    MalformedRecord {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: String,
    },

    /// Table manifest could not be parsed.
    #[error("failed to parse table manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Manifest has an empty path for a table.
    #[error("manifest does not name a {direction} table for {family}")]
    MissingSource {
        family: CodeFamily,
        direction: Direction,
    },
}

impl TableError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
