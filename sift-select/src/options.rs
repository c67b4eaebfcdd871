#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling how a selector is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SelectOptions {
    /// Whether a missing value in a boolean mask yields a null row (`true`) or drops the row.
    pub keep_na: bool,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self { keep_na: true }
    }
}

impl SelectOptions {
    pub fn with_keep_na(mut self, keep_na: bool) -> Self {
        self.keep_na = keep_na;
        self
    }
}
