//! Entity span locator.
//!
//! Greedy, first-fit, longest-first interval placement over the whole
//! document: longer values claim their spans before shorter substrings of the
//! same text are considered. Deliberately favors specificity over coverage;
//! this is not a global-optimum cover.

use relabel_core::models::{EntitySpan, RankedPair};
use tracing::debug;

/// Scan the original text for every literal occurrence of each candidate
/// value, longest value first, accepting only occurrences that do not
/// intersect an already-accepted span. Returns spans sorted by start offset.
pub fn locate_spans(original: &str, ranked: &[RankedPair]) -> Vec<EntitySpan> {
    let mut order: Vec<&RankedPair> = ranked.iter().filter(|p| !p.value.is_empty()).collect();
    // Longest first; ties broken by weight, then value/category for
    // deterministic placement.
    order.sort_by(|a, b| {
        b.value
            .chars()
            .count()
            .cmp(&a.value.chars().count())
            .then_with(|| b.weight.cmp(&a.weight))
            .then_with(|| a.value.cmp(&b.value))
            .then_with(|| a.category.cmp(&b.category))
    });

    let mut accepted: Vec<EntitySpan> = Vec::new();
    for pair in order {
        for (start, occurrence) in original.match_indices(pair.value.as_str()) {
            let end = start + occurrence.len();
            if accepted.iter().any(|span| span.overlaps(start, end)) {
                continue;
            }
            accepted.push(EntitySpan {
                start,
                end,
                category: pair.category.clone(),
                text: pair.value.clone(),
            });
        }
    }

    accepted.sort_by_key(|span| span.start);
    debug!(
        candidates = ranked.len(),
        accepted = accepted.len(),
        "span location complete"
    );
    accepted
}
