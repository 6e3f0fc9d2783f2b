//! Locations of the four GEM tables.

use std::path::{Path, PathBuf};

use gem_model::{CodeFamily, Direction};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TableError};

/// Forward and backward table paths for one family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilySources {
    pub forward: PathBuf,
    pub backward: PathBuf,
}

impl FamilySources {
    pub fn path(&self, direction: Direction) -> &Path {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Backward => &self.backward,
        }
    }
}

/// Table paths for both families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemSources {
    pub cm: FamilySources,
    pub pcs: FamilySources,
}

/// On-disk manifest layout.
///
/// ```toml
/// release = "2018"
///
/// [cm]
/// forward = "2018_I9_cm_gem.txt"
/// backward = "2018_I10_cm_gem.txt"
///
/// [pcs]
/// forward = "2018_I9_pcs_gem.txt"
/// backward = "2018_I10_pcs_gem.txt"
/// ```
#[derive(Debug, Deserialize)]
struct TableManifest {
    #[serde(default)]
    release: Option<String>,
    cm: FamilySources,
    pcs: FamilySources,
}

/// CMS file name for a table, e.g. `2018_I9_cm_gem.txt`.
pub fn table_file_name(release: &str, family: CodeFamily, direction: Direction) -> String {
    let scheme = match direction {
        Direction::Forward => "I9",
        Direction::Backward => "I10",
    };
    format!("{release}_{scheme}_{family}_gem.txt")
}

impl GemSources {
    /// Tables named by the CMS convention inside `dir`.
    pub fn from_dir(dir: &Path, release: &str) -> Self {
        let family = |family: CodeFamily| FamilySources {
            forward: dir.join(table_file_name(release, family, Direction::Forward)),
            backward: dir.join(table_file_name(release, family, Direction::Backward)),
        };
        Self {
            cm: family(CodeFamily::Cm),
            pcs: family(CodeFamily::Pcs),
        }
    }

    /// Reads a TOML manifest. Relative paths resolve against the manifest's directory.
    ///
    /// # Errors
    ///
    /// Fails when the manifest cannot be read or parsed, or names an empty path.
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| TableError::io(path, e))?;
        let manifest: TableManifest = toml::from_str(&text).map_err(|source| TableError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(release) = &manifest.release {
            debug!(manifest = %path.display(), %release, "read table manifest");
        }
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let sources = Self {
            cm: resolve_family(base, manifest.cm),
            pcs: resolve_family(base, manifest.pcs),
        };
        sources.validate()?;
        Ok(sources)
    }

    pub fn family(&self, family: CodeFamily) -> &FamilySources {
        match family {
            CodeFamily::Cm => &self.cm,
            CodeFamily::Pcs => &self.pcs,
        }
    }

    pub fn path(&self, family: CodeFamily, direction: Direction) -> &Path {
        self.family(family).path(direction)
    }

    fn validate(&self) -> Result<()> {
        for family in CodeFamily::ALL {
            for direction in [Direction::Forward, Direction::Backward] {
                if self.path(family, direction).as_os_str().is_empty() {
                    return Err(TableError::MissingSource { family, direction });
                }
            }
        }
        Ok(())
    }
}

fn resolve_family(base: &Path, sources: FamilySources) -> FamilySources {
    FamilySources {
        forward: resolve(base, sources.forward),
        backward: resolve(base, sources.backward),
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.as_os_str().is_empty() || path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cms_file_names() {
        assert_eq!(
            table_file_name("2018", CodeFamily::Cm, Direction::Forward),
            "2018_I9_cm_gem.txt"
        );
        assert_eq!(
            table_file_name("2018", CodeFamily::Pcs, Direction::Backward),
            "2018_I10_pcs_gem.txt"
        );
    }

    #[test]
    fn from_dir_uses_cms_names() {
        let sources = GemSources::from_dir(Path::new("gems"), "2017");
        assert_eq!(
            sources.path(CodeFamily::Pcs, Direction::Forward),
            Path::new("gems/2017_I9_pcs_gem.txt")
        );
        assert_eq!(sources.cm.backward, PathBuf::from("gems/2017_I10_cm_gem.txt"));
    }
}
