use serde::{Deserialize, Serialize};

/// One flattened output row.
///
/// `related_code` and `flag` are both `None` for a code that was queried
/// but matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub input_code: String,
    pub related_code: Option<String>,
    pub flag: Option<String>,
}

impl NormalizedRow {
    pub fn matched(
        input_code: impl Into<String>,
        related_code: impl Into<String>,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            input_code: input_code.into(),
            related_code: Some(related_code.into()),
            flag: Some(flag.into()),
        }
    }

    pub fn unmatched(input_code: impl Into<String>) -> Self {
        Self {
            input_code: input_code.into(),
            related_code: None,
            flag: None,
        }
    }

    pub fn is_unmatched(&self) -> bool {
        self.related_code.is_none()
    }
}
