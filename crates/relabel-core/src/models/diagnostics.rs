use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Why one unit of work produced no candidates.
///
/// These are expected outcomes, never run-level errors. Silently
/// under-labeling is the documented behavior; the diagnostics exist so
/// callers can judge recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// A placeholder at the very start or end of the document left no anchor
    /// text to search with.
    EmptyAnchor,
    /// The anchored pattern failed to compile.
    PatternBuild,
    /// The pattern matched nothing in the original text.
    NoMatch,
    /// Every match was rejected by value validation.
    FailedValidation,
    /// A replace opcode contained no placeholder.
    NoPlaceholder,
    /// A replace opcode contained more than one placeholder; attribution is
    /// never guessed.
    AmbiguousOpcode,
}

/// Per-stage accounting of work units, produced candidates, and skips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageReport {
    /// Units of work dispatched (placeholders, or replace opcodes).
    pub units: usize,
    /// Candidates the stage produced.
    pub produced: usize,
    /// Skip counts, keyed by reason.
    pub skips: BTreeMap<SkipReason, usize>,
}

impl StageReport {
    pub fn record_skip(&mut self, reason: SkipReason) {
        *self.skips.entry(reason).or_insert(0) += 1;
    }

    /// Total units that produced no candidates.
    pub fn skipped(&self) -> usize {
        self.skips.values().sum()
    }
}

/// Run-level diagnostic report: failure counts by stage, plus the sizes of
/// the merged candidate list and the accepted span set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunDiagnostics {
    pub context: StageReport,
    pub alignment: StageReport,
    pub candidates_merged: usize,
    pub entities_accepted: usize,
}
