//! Mapping results and their merge semantics.

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// A related code together with the flag of the table row it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MappingPair {
    pub code: String,
    pub flag: String,
}

impl MappingPair {
    pub fn new(code: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            flag: flag.into(),
        }
    }
}

/// Pairs deduplicated by full `(code, flag)` equality, kept in first-seen order.
pub type PairSet = IndexSet<MappingPair>;

/// Queried code → related `(code, flag)` pairs.
///
/// Every queried code is present as a key, with an empty set when nothing
/// matched. Keys keep the order in which they were first inserted. Equality
/// compares keys and pair sets as sets, so two results built in different
/// orders compare equal when they hold the same data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingResult {
    entries: IndexMap<String, PairSet>,
}

impl MappingResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `code` is present, leaving existing pairs untouched.
    pub fn insert_empty(&mut self, code: impl Into<String>) {
        self.entries.entry(code.into()).or_default();
    }

    /// Adds pairs for `code`, creating the key if needed.
    pub fn insert_pairs<I>(&mut self, code: impl Into<String>, pairs: I)
    where
        I: IntoIterator<Item = MappingPair>,
    {
        self.entries.entry(code.into()).or_default().extend(pairs);
    }

    /// Merges `addition` into `self` and returns the merged result.
    ///
    /// Keys only in `addition` are inserted with their pairs; shared keys get
    /// the set union. Keys only in `self` are left as they are.
    #[must_use]
    pub fn merge(mut self, addition: MappingResult) -> Self {
        self.merge_from(addition);
        self
    }

    /// In-place form of [`Self::merge`].
    pub fn merge_from(&mut self, addition: MappingResult) {
        for (code, pairs) in addition.entries {
            match self.entries.entry(code) {
                Entry::Vacant(slot) => {
                    slot.insert(pairs);
                }
                Entry::Occupied(mut slot) => slot.get_mut().extend(pairs),
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&PairSet> {
        self.entries.get(code)
    }

    pub fn contains_key(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PairSet)> {
        self.entries.iter().map(|(code, pairs)| (code.as_str(), pairs))
    }

    /// Every related code across all keys, deduplicated in first-seen order.
    pub fn related_codes(&self) -> IndexSet<&str> {
        self.entries
            .values()
            .flat_map(|pairs| pairs.iter().map(|pair| pair.code.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of pairs over all keys.
    pub fn pair_count(&self) -> usize {
        self.entries.values().map(IndexSet::len).sum()
    }

    /// Number of keys with at least one pair.
    pub fn matched_count(&self) -> usize {
        self.entries.values().filter(|pairs| !pairs.is_empty()).count()
    }
}

impl<'a> IntoIterator for &'a MappingResult {
    type Item = (&'a String, &'a PairSet);
    type IntoIter = indexmap::map::Iter<'a, String, PairSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
