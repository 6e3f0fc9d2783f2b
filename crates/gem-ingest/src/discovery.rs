//! Batch root traversal.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{IngestError, Result};

/// Lists every regular file under `root`, recursively.
///
/// Returns paths sorted so batch output order is stable.
pub fn discover_code_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| IngestError::DirectoryRead {
            path: e
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source: e.into(),
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), files = files.len(), "discovered code files");
    Ok(files)
}
