//! Delimited output of normalized rows.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use gem_model::NormalizedRow;
use tracing::info;

use crate::error::{OutputError, Result};

/// Header row: input code, related code, flag.
pub const OUTPUT_COLUMNS: [&str; 3] = ["ICD9", "ICD10", "FLAG"];

/// Writes the header and one record per row. Missing values are empty cells.
///
/// # Errors
///
/// Returns the underlying CSV error if a record cannot be written.
pub fn write_rows<W: Write>(writer: W, rows: &[NormalizedRow]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.write_record([
            row.input_code.as_str(),
            row.related_code.as_deref().unwrap_or(""),
            row.flag.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `rows` to a new file at `path`.
///
/// # Errors
///
/// An existing file at `path` is never replaced: it yields
/// [`OutputError::AlreadyExists`].
pub fn write_csv(path: &Path, rows: &[NormalizedRow]) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            ErrorKind::AlreadyExists => OutputError::AlreadyExists {
                path: path.to_path_buf(),
            },
            _ => OutputError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
    write_rows(file, rows).map_err(|source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = rows.len(), "wrote result table");
    Ok(())
}

/// Renders rows as a CSV string.
pub fn render_csv(rows: &[NormalizedRow]) -> csv::Result<String> {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, rows)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
