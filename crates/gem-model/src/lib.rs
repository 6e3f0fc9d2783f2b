//! Data model for GEM (General Equivalence Mapping) crosswalks.
//!
//! The types here carry no I/O. Tables are produced by `gem-standards`,
//! queried by `gem-map` and flattened for output by `gem-output`.

pub mod entry;
pub mod family;
pub mod result;
pub mod row;

pub use entry::{EquivalenceTable, GemEntry};
pub use family::{CodeFamily, Direction};
pub use result::{MappingPair, MappingResult, PairSet};
pub use row::NormalizedRow;
