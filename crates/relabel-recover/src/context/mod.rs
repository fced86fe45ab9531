//! Context-window matcher.
//!
//! For each placeholder, derives a location-anchored pattern from the literal
//! text around it and searches the original document for the substring the
//! placeholder replaced. Each placeholder is one independent unit of work;
//! a failed unit contributes a skip, never an error.

mod pattern;

use rayon::prelude::*;
use relabel_core::models::{CandidatePair, Placeholder, RecoveryMethod, SkipReason};
use relabel_core::{CandidateSource, MatchStrategy, RelabelConfig, SourceOutcome};
use tracing::debug;

use crate::scanner;
use crate::validate::{clean_value, internal_spaces, validate_value};

/// Recovers at most one candidate per placeholder from the literal context
/// around it.
pub struct ContextMatcher {
    config: RelabelConfig,
}

impl ContextMatcher {
    pub fn new(config: &RelabelConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// One unit of work: one placeholder.
    fn recover_one(
        &self,
        ph: &Placeholder,
        redacted: &str,
        original: &str,
    ) -> Result<Vec<CandidatePair>, SkipReason> {
        let window = pattern::context_window(redacted, ph, &self.config);
        let re = pattern::build_pattern(&window, self.config.bracket_style)?;

        let mut saw_match = false;
        let mut accepted: Vec<(usize, String)> = Vec::new();
        for caps in re.captures_iter(original) {
            saw_match = true;
            let Some(group) = caps.get(1) else { continue };
            let value = clean_value(group.as_str());
            if validate_value(
                &value,
                &ph.category,
                window.close_neighbor,
                self.config.max_value_len,
            )
            .is_err()
            {
                continue;
            }
            // Extra overreach guard for tight neighborhoods.
            if window.close_neighbor && internal_spaces(&value) > 4 {
                continue;
            }
            accepted.push((group.start(), value));
            if self.config.match_strategy == MatchStrategy::FirstInDocument {
                break;
            }
        }

        let chosen = match self.config.match_strategy {
            MatchStrategy::FirstInDocument => accepted.into_iter().next(),
            MatchStrategy::NearestPosition => {
                nearest_by_relative_position(accepted, ph, original.len(), redacted.len())
            }
        };

        match chosen {
            Some((_, value)) => Ok(vec![CandidatePair {
                value,
                category: ph.category.clone(),
                method: RecoveryMethod::ContextMatch,
            }]),
            None if saw_match => Err(SkipReason::FailedValidation),
            None => Err(SkipReason::NoMatch),
        }
    }
}

/// Pick the validated match whose relative position in the original document
/// is closest to the placeholder's relative position in the redacted text.
fn nearest_by_relative_position(
    accepted: Vec<(usize, String)>,
    ph: &Placeholder,
    original_len: usize,
    redacted_len: usize,
) -> Option<(usize, String)> {
    let ph_rel = ph.start as f64 / redacted_len.max(1) as f64;
    accepted.into_iter().min_by(|a, b| {
        let da = (a.0 as f64 / original_len.max(1) as f64 - ph_rel).abs();
        let db = (b.0 as f64 / original_len.max(1) as f64 - ph_rel).abs();
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    })
}

impl CandidateSource for ContextMatcher {
    fn method(&self) -> RecoveryMethod {
        RecoveryMethod::ContextMatch
    }

    fn recover(&self, original: &str, redacted: &str) -> SourceOutcome {
        let placeholders = scanner::find_placeholders(redacted, self.config.bracket_style);
        let units: Vec<_> = placeholders
            .par_iter()
            .map(|ph| self.recover_one(ph, redacted, original))
            .collect();
        let outcome = SourceOutcome::from_units(units);
        debug!(
            placeholders = placeholders.len(),
            produced = outcome.report.produced,
            skipped = outcome.report.skipped(),
            "context matching complete"
        );
        outcome
    }
}
