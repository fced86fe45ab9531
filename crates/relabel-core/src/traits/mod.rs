//! The seam between the pipeline and its two candidate-recovery strategies.

use crate::models::{CandidatePair, RecoveryMethod, SkipReason, StageReport};

/// Everything one recovery strategy returns: the candidates it found plus
/// the per-unit accounting.
#[derive(Debug, Clone, Default)]
pub struct SourceOutcome {
    pub candidates: Vec<CandidatePair>,
    pub report: StageReport,
}

impl SourceOutcome {
    /// Fold per-unit results into one outcome. Order-independent: candidates
    /// are appended in unit order and later merged by key, skips are counted
    /// by reason.
    pub fn from_units(units: Vec<Result<Vec<CandidatePair>, SkipReason>>) -> Self {
        let mut outcome = Self {
            report: StageReport {
                units: units.len(),
                ..StageReport::default()
            },
            ..Self::default()
        };
        for unit in units {
            match unit {
                Ok(candidates) => {
                    outcome.report.produced += candidates.len();
                    outcome.candidates.extend(candidates);
                }
                Err(reason) => outcome.report.record_skip(reason),
            }
        }
        outcome
    }
}

/// A strategy that recovers candidate pairs from an (original, redacted)
/// document pair. Both input texts are read-only and shared; implementations
/// fan units of work out on the ambient rayon pool.
pub trait CandidateSource: Send + Sync {
    fn method(&self) -> RecoveryMethod;

    /// Recover candidates. Never fails as a whole: per-unit failures are
    /// recorded in the outcome's report.
    fn recover(&self, original: &str, redacted: &str) -> SourceOutcome;
}
