use serde::{Deserialize, Serialize};

/// A confirmed character range in the *original* text attributed to a
/// category. Accepted spans are pairwise non-overlapping and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub category: String,
    pub text: String,
}

impl EntitySpan {
    /// Whether this span shares any character index with `[start, end)`.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        start < self.end && self.start < end
    }
}
