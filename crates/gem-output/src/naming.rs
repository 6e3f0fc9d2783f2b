//! Timestamped output file names.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// `YYYY-MM-DD_HHMMSS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// `<timestamp>_<original>.csv`. The original name keeps its extension.
pub fn output_file_name(at: NaiveDateTime, original: &str) -> String {
    format!("{}_{original}.csv", format_timestamp(at))
}

/// Output path in `output_dir` for the code list at `source`.
pub fn timestamped_output_path(output_dir: &Path, source: &Path, at: NaiveDateTime) -> PathBuf {
    let original = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(output_file_name(at, &original))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 2)
            .unwrap()
    }

    #[test]
    fn formats_timestamp() {
        assert_eq!(format_timestamp(at()), "2019-03-07_090502");
    }

    #[test]
    fn keeps_original_extension() {
        assert_eq!(
            output_file_name(at(), "codes.txt"),
            "2019-03-07_090502_codes.txt.csv"
        );
    }

    #[test]
    fn uses_file_name_only() {
        let path = timestamped_output_path(Path::new("out"), Path::new("src/dir/list"), at());
        assert_eq!(path, PathBuf::from("out/2019-03-07_090502_list.csv"));
    }
}
