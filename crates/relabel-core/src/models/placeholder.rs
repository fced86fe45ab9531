use serde::{Deserialize, Serialize};

/// One bracketed category marker found in the redacted text.
///
/// Offsets are byte offsets into the redacted document. The category is
/// whatever sat between the brackets; it is not checked against the
/// vocabulary at scan time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub start: usize,
    pub end: usize,
    pub category: String,
    /// The full literal tag, brackets included (e.g. `[email]`).
    pub literal: String,
}

impl Placeholder {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
