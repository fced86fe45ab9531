//! Token aligner.
//!
//! Tokenizes both texts into whitespace-delimited sequences and computes a
//! Myers edit script between them. Every `replace` opcode whose redacted side
//! contains exactly one placeholder yields the opposite original-side tokens
//! as a candidate. Zero or multiple placeholders in one opcode are skipped:
//! ambiguous attribution is never guessed.

use rayon::prelude::*;
use relabel_core::models::{CandidatePair, RecoveryMethod, SkipReason};
use relabel_core::{CandidateSource, RelabelConfig, SourceOutcome};
use similar::{capture_diff_slices, Algorithm, DiffOp};
use tracing::debug;

use crate::scanner;
use crate::validate::{clean_value, validate_value};

/// Recovers candidates from a whole-document token diff.
pub struct TokenAligner {
    config: RelabelConfig,
}

impl TokenAligner {
    pub fn new(config: &RelabelConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// One unit of work: one `replace` opcode.
    fn recover_one(
        &self,
        orig_tokens: &[&str],
        red_tokens: &[&str],
        old_range: (usize, usize),
        new_range: (usize, usize),
    ) -> Result<Vec<CandidatePair>, SkipReason> {
        let Some(re) = scanner::tag_regex(self.config.bracket_style) else {
            return Err(SkipReason::PatternBuild);
        };

        let red_part = red_tokens[new_range.0..new_range.1].join(" ");
        let mut tags = re.captures_iter(&red_part);
        let (first, second) = (tags.next(), tags.next());
        let category = match (first, second) {
            (Some(caps), None) => match caps.get(1) {
                Some(group) => group.as_str().to_string(),
                None => return Err(SkipReason::NoPlaceholder),
            },
            (None, _) => return Err(SkipReason::NoPlaceholder),
            (Some(_), Some(_)) => return Err(SkipReason::AmbiguousOpcode),
        };

        let value = clean_value(&orig_tokens[old_range.0..old_range.1].join(" "));
        // Close-neighbor tightening never applies here: the opcode boundary
        // already isolates this placeholder from its neighbors.
        validate_value(&value, &category, false, self.config.max_value_len)?;

        Ok(vec![CandidatePair {
            value,
            category,
            method: RecoveryMethod::TokenAlign,
        }])
    }
}

impl CandidateSource for TokenAligner {
    fn method(&self) -> RecoveryMethod {
        RecoveryMethod::TokenAlign
    }

    fn recover(&self, original: &str, redacted: &str) -> SourceOutcome {
        let orig_tokens: Vec<&str> = original.split_whitespace().collect();
        let red_tokens: Vec<&str> = redacted.split_whitespace().collect();

        let opcodes = capture_diff_slices(Algorithm::Myers, &orig_tokens, &red_tokens);
        let replaces: Vec<((usize, usize), (usize, usize))> = opcodes
            .iter()
            .filter_map(|op| match *op {
                DiffOp::Replace {
                    old_index,
                    old_len,
                    new_index,
                    new_len,
                } => Some((
                    (old_index, old_index + old_len),
                    (new_index, new_index + new_len),
                )),
                _ => None,
            })
            .collect();

        let units: Vec<_> = replaces
            .par_iter()
            .map(|&(old_range, new_range)| {
                self.recover_one(&orig_tokens, &red_tokens, old_range, new_range)
            })
            .collect();
        let outcome = SourceOutcome::from_units(units);
        debug!(
            opcodes = opcodes.len(),
            replace_opcodes = replaces.len(),
            produced = outcome.report.produced,
            skipped = outcome.report.skipped(),
            "token alignment complete"
        );
        outcome
    }
}
