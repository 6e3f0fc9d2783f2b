use std::fmt;

use serde::{Deserialize, Serialize};

/// How much of the crosswalk a query runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPipeline {
    /// Forward table only. Batch runs default to this.
    #[default]
    Forward,
    /// Forward and backward results merged.
    ForwardBackward,
    /// Forward-backward plus one round of secondary expansion.
    Secondary,
}

impl MatchPipeline {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::ForwardBackward => "forward-backward",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for MatchPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
