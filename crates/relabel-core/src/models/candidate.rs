use serde::{Deserialize, Serialize};

/// Which strategy produced a candidate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryMethod {
    /// Location-anchored pattern search around one placeholder.
    ContextMatch,
    /// Whole-document token diff.
    TokenAlign,
}

impl RecoveryMethod {
    /// Dedup weight: alignment-derived pairs come from global structure and
    /// count double.
    pub fn weight(&self) -> u32 {
        match self {
            RecoveryMethod::TokenAlign => 2,
            RecoveryMethod::ContextMatch => 1,
        }
    }
}

/// A hypothesized `(original substring, category)` mapping, not yet confirmed
/// against the full document. Ephemeral: consumed by the deduplicator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidatePair {
    pub value: String,
    pub category: String,
    pub method: RecoveryMethod,
}

/// A deduplicated candidate with its accumulated weight. Ranking only:
/// no minimum-weight threshold is applied before span location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPair {
    pub value: String,
    pub category: String,
    pub weight: u32,
    pub method: RecoveryMethod,
}
