//! Parsed GEM table rows.

use serde::{Deserialize, Serialize};

/// One record of a GEM table: `<source> <target> <flag>`.
///
/// Column roles are positional. In a backward table (I10 → I9) the first
/// column holds the newer scheme's code, so `source` is the I10 code there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GemEntry {
    pub source: String,
    pub target: String,
    /// Opaque mapping flag, carried through unchanged.
    pub flag: String,
}

impl GemEntry {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            flag: flag.into(),
        }
    }
}

/// Ordered rows of one GEM table file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquivalenceTable {
    entries: Vec<GemEntry>,
}

impl EquivalenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: GemEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[GemEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GemEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<GemEntry> for EquivalenceTable {
    fn from_iter<I: IntoIterator<Item = GemEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EquivalenceTable {
    type Item = &'a GemEntry;
    type IntoIter = std::slice::Iter<'a, GemEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
