//! Pair deduplicator.
//!
//! Merges candidates from both strategies keyed by `(value, category)`.
//! Alignment-derived occurrences weigh 2, context-derived 1; any touch by the
//! aligner upgrades the key's recorded provenance. Output is a ranking, not a
//! filter: every key survives, sorted by descending accumulated weight with
//! deterministic tie-breaks.

use std::collections::HashMap;

use relabel_core::models::{CandidatePair, RankedPair, RecoveryMethod};

pub fn merge_candidates(candidates: &[CandidatePair]) -> Vec<RankedPair> {
    let mut merged: HashMap<(&str, &str), (u32, RecoveryMethod)> = HashMap::new();

    for candidate in candidates {
        let entry = merged
            .entry((candidate.value.as_str(), candidate.category.as_str()))
            .or_insert((0, candidate.method));
        entry.0 += candidate.method.weight();
        if candidate.method == RecoveryMethod::TokenAlign {
            entry.1 = RecoveryMethod::TokenAlign;
        }
    }

    let mut ranked: Vec<RankedPair> = merged
        .into_iter()
        .map(|((value, category), (weight, method))| RankedPair {
            value: value.to_string(),
            category: category.to_string(),
            weight,
            method,
        })
        .collect();

    // Weight descending; ties broken by value then category so repeated runs
    // produce an identical ordering regardless of merge arrival order.
    ranked.sort_by(|a, b| {
        b.weight
            .cmp(&a.weight)
            .then_with(|| a.value.cmp(&b.value))
            .then_with(|| a.category.cmp(&b.category))
    });
    ranked
}
