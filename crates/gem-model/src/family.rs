//! Classification families and table directions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification family. Each family has its own independent pair of tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeFamily {
    /// Diagnosis codes (ICD-9-CM / ICD-10-CM).
    Cm,
    /// Procedure codes (ICD-9-CM volume 3 / ICD-10-PCS).
    Pcs,
}

impl CodeFamily {
    pub const ALL: [CodeFamily; 2] = [CodeFamily::Cm, CodeFamily::Pcs];

    /// Parse a mode selector. Only the exact strings `cm` and `pcs` match.
    ///
    /// Returns `None` for anything else; callers decide whether that is an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cm" => Some(Self::Cm),
            "pcs" => Some(Self::Pcs),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::Pcs => "pcs",
        }
    }
}

impl fmt::Display for CodeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a published GEM table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// I9 → I10 table, keyed by the older scheme's code.
    Forward,
    /// I10 → I9 table, curated separately from the forward table.
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_selectors() {
        assert_eq!(CodeFamily::parse("cm"), Some(CodeFamily::Cm));
        assert_eq!(CodeFamily::parse("pcs"), Some(CodeFamily::Pcs));
        assert_eq!(CodeFamily::parse(" PCS "), None);
        assert_eq!(CodeFamily::parse("CM"), None);
        assert_eq!(CodeFamily::parse(" pcs "), None);
        assert_eq!(CodeFamily::parse("icd10"), None);
        assert_eq!(CodeFamily::parse(""), None);
    }
}
