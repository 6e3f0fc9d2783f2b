//! Newline-delimited code lists.

use std::path::Path;

use indexmap::IndexSet;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads one code per line from `path`.
///
/// See [`parse_code_list`] for the line rules.
pub fn read_code_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let codes = parse_code_list(&text);
    debug!(path = %path.display(), codes = codes.len(), "read code list");
    Ok(codes)
}

/// Trims each line, drops blank lines and removes repeats, keeping the
/// first occurrence's position.
pub fn parse_code_list(text: &str) -> Vec<String> {
    let codes: IndexSet<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    codes.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_in_first_seen_order() {
        let codes = parse_code_list("0020\n 0010 \r\n\n0020\n0030\n");
        assert_eq!(codes, vec!["0020", "0010", "0030"]);
    }

    #[test]
    fn empty_text_has_no_codes() {
        assert!(parse_code_list("\n\n").is_empty());
    }
}
