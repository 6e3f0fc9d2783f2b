//! GEM table text parsing.
//!
//! A table is plain text with one `<source> <target> <flag>` record per
//! line. Any non-conforming line fails the whole load.

use std::path::Path;

use gem_model::{EquivalenceTable, GemEntry};
use tracing::{debug, info};

use crate::error::{Result, TableError};

const FIELD_COUNT: usize = 3;

/// Reads and parses the table at `path`.
///
/// # Errors
///
/// Returns [`TableError::NotFound`] when the file is missing,
/// [`TableError::MalformedRecord`] for the first bad line.
pub fn load_table(path: &Path) -> Result<EquivalenceTable> {
    let text = std::fs::read_to_string(path).map_err(|e| TableError::io(path, e))?;
    let table = parse_table(&text, path)?;
    info!(
        path = %path.display(),
        entries = table.len(),
        "loaded GEM table"
    );
    Ok(table)
}

/// Parses table text. `origin` is only used in error messages.
///
/// Blank and whitespace-only lines are skipped.
pub fn parse_table(text: &str, origin: &Path) -> Result<EquivalenceTable> {
    let mut table = EquivalenceTable::new();
    let mut skipped = 0usize;
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            skipped += 1;
            continue;
        }
        let entry = parse_record(line).map_err(|reason| TableError::MalformedRecord {
            path: origin.to_path_buf(),
            line_number: idx + 1,
            line: line.to_string(),
            reason,
        })?;
        table.push(entry);
    }
    if skipped > 0 {
        debug!(path = %origin.display(), skipped, "skipped blank lines");
    }
    Ok(table)
}

/// Tokenizes one record: whitespace-separated runs of word characters,
/// exactly three of them.
///
/// # Errors
///
/// Returns a description of the defect when the line does not conform.
pub fn parse_record(line: &str) -> std::result::Result<GemEntry, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {FIELD_COUNT} fields, found {}",
            fields.len()
        ));
    }
    for (idx, field) in fields.iter().enumerate() {
        if let Some(bad) = field.chars().find(|c| !is_word_char(*c)) {
            return Err(format!("field {} contains invalid character {bad:?}", idx + 1));
        }
    }
    Ok(GemEntry::new(fields[0], fields[1], fields[2]))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
