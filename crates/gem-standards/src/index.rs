//! Build-once, query-many lookup over one GEM table.

use gem_model::{EquivalenceTable, MappingPair};
use indexmap::IndexMap;

/// Which table column an index is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyColumn {
    /// First column; the other column is the second.
    Source,
    /// Second column; the other column is the first.
    Target,
}

/// Groups a table's rows by one column.
///
/// Each key maps to the `(other column, flag)` pairs of every row sharing it,
/// in table order. Duplicate rows are kept; deduplication happens when
/// results are merged.
#[derive(Debug, Clone)]
pub struct DirectionalIndex {
    key: KeyColumn,
    groups: IndexMap<String, Vec<MappingPair>>,
    rows: usize,
}

impl DirectionalIndex {
    pub fn build(table: &EquivalenceTable, key: KeyColumn) -> Self {
        let mut groups: IndexMap<String, Vec<MappingPair>> = IndexMap::new();
        for entry in table {
            let (key_value, other) = match key {
                KeyColumn::Source => (&entry.source, &entry.target),
                KeyColumn::Target => (&entry.target, &entry.source),
            };
            groups
                .entry(key_value.clone())
                .or_default()
                .push(MappingPair::new(other.clone(), entry.flag.clone()));
        }
        Self {
            key,
            groups,
            rows: table.len(),
        }
    }

    /// Pairs for `code`; empty when the code is not in the table.
    pub fn lookup(&self, code: &str) -> &[MappingPair] {
        self.groups.get(code).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.groups.contains_key(code)
    }

    pub fn key_column(&self) -> KeyColumn {
        self.key
    }

    /// Distinct key values.
    pub fn key_count(&self) -> usize {
        self.groups.len()
    }

    /// Rows the index was built from.
    pub fn row_count(&self) -> usize {
        self.rows
    }
}
