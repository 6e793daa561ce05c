use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A single dictionary hit.
///
/// `start` and `end` are code-point offsets, `end` exclusive. Offsets from
/// the automaton refer to the scanned text; the detector maps them back to
/// the caller's original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensitiveWord {
    pub word: String,
    pub start: usize,
    pub end: usize,
    pub category: Category,
}

impl SensitiveWord {
    /// Span length in code points.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the two spans share at least one code point.
    pub fn overlaps(&self, other: &SensitiveWord) -> bool {
        self.start < other.end && other.start < self.end
    }
}
