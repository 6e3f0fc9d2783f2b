//! Default table directory resolution.

use std::path::PathBuf;

/// Environment variable for overriding the GEM table directory. The CLI reads
/// it as the fallback for `--tables-dir`.
pub const TABLES_ENV_VAR: &str = "GEM_TABLES_DIR";

/// GEM release used when none is given.
pub const DEFAULT_RELEASE: &str = "2018";

/// Default GEM table directory for `release`: `gem_files/<release>` relative
/// to the working directory.
pub fn tables_root(release: &str) -> PathBuf {
    PathBuf::from("gem_files").join(release)
}
