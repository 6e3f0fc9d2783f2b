#![deny(unsafe_code)]

//! Crosswalk engine.
//!
//! A [`Crosswalk`] answers forward (I9 → I10), backward (I10 → I9) and
//! combined queries for one code family, and can widen a query by one hop
//! to secondary codes that share a target. [`GemEngine`] holds one crosswalk
//! per family.

mod crosswalk;
mod engine;
mod normalize;
mod pipeline;

pub use crosswalk::{Crosswalk, IndexView, MatchOutcome};
pub use engine::GemEngine;
pub use normalize::normalize;
pub use pipeline::MatchPipeline;

pub use gem_standards::{Result, TableError};
