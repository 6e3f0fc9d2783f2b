//! CLI library components for the GEM crosswalk.

pub mod batch;
pub mod logging;
