use relabel_core::models::{RecoveryMethod, SkipReason};
use relabel_core::{CandidateSource, MatchStrategy, RelabelConfig};
use relabel_recover::ContextMatcher;

fn matcher(config: &RelabelConfig) -> ContextMatcher {
    ContextMatcher::new(config)
}

#[test]
fn recovers_value_from_surrounding_context() {
    let original = "To jest Jan, mieszka w Krakowie.";
    let redacted = "To jest [name], mieszka w [city].";
    let config = RelabelConfig::default();
    let outcome = matcher(&config).recover(original, redacted);

    // "[name]" is anchored by literal text on both sides and recovered.
    // "[city]"'s before-anchor contains the "[name]" literal, which never
    // occurs in the original: a documented per-unit miss.
    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].value, "Jan");
    assert_eq!(outcome.candidates[0].category, "name");
    assert_eq!(outcome.candidates[0].method, RecoveryMethod::ContextMatch);
    assert_eq!(outcome.report.units, 2);
    assert_eq!(outcome.report.skips[&SkipReason::NoMatch], 1);
}

#[test]
fn placeholder_at_document_start_has_no_anchor() {
    let pair = test_fixtures::separated_note();
    let config = RelabelConfig::default();
    let outcome = matcher(&config).recover(pair.original, pair.redacted);
    assert_eq!(outcome.report.skips[&SkipReason::EmptyAnchor], 1);
}

#[test]
fn anchor_tolerates_rewrapped_lines() {
    // The redaction re-wrapped the line: anchor whitespace must match both.
    let original = "Pacjent zgłosił się do\nlekarza Piotra w środę.";
    let redacted = "Pacjent zgłosił się do lekarza [name] w środę.";
    let config = RelabelConfig::default();
    let outcome = matcher(&config).recover(original, redacted);
    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].value, "Piotra");
}

#[test]
fn close_neighbor_with_delimiter_restricts_capture() {
    let pair = test_fixtures::parenthesized_age();
    let config = RelabelConfig::default();
    let outcome = matcher(&config).recover(pair.original, pair.redacted);

    // "[name]" is recovered without bleeding into the parenthesized part;
    // "[age]"'s before-anchor contains the "[name]" literal, so it finds
    // no match in the original.
    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].value, "Piotr");
    assert_eq!(outcome.candidates[0].category, "name");
    assert_eq!(outcome.report.skips[&SkipReason::NoMatch], 1);
}

#[test]
fn adjacent_placeholder_anchor_is_bounded_to_three_words() {
    // Close neighbor, no delimiter in the gap: capture must stop early
    // instead of swallowing the rest of the sentence.
    let original = "nazywam się Jan Kowalski i mieszkam w Krakowie";
    let redacted = "nazywam się [name] [surname] i mieszkam w Krakowie";
    let config = RelabelConfig::default();
    let outcome = matcher(&config).recover(original, redacted);

    let name: Vec<_> = outcome
        .candidates
        .iter()
        .filter(|c| c.category == "name")
        .collect();
    assert_eq!(name.len(), 1);
    assert_eq!(name[0].value, "Jan");
}

#[test]
fn first_in_document_takes_first_match_of_repeated_context() {
    let pair = test_fixtures::vehicle_registry();
    let config = RelabelConfig::default();
    let outcome = matcher(&config).recover(pair.original, pair.redacted);

    assert_eq!(outcome.candidates.len(), 1);
    // Known misattribution: the anchor repeats verbatim and the first
    // document match wins even though the placeholder is in the second
    // sentence.
    assert_eq!(outcome.candidates[0].value, "KR111");
}

#[test]
fn nearest_position_strategy_prefers_the_nearer_match() {
    let pair = test_fixtures::vehicle_registry();
    let config = RelabelConfig {
        match_strategy: MatchStrategy::NearestPosition,
        ..RelabelConfig::default()
    };
    let outcome = matcher(&config).recover(pair.original, pair.redacted);

    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].value, "KR222");
}

#[test]
fn one_candidate_per_placeholder_even_when_context_repeats() {
    let pair = test_fixtures::duplicated_email();
    let config = RelabelConfig::default();
    let outcome = matcher(&config).recover(pair.original, pair.redacted);

    assert_eq!(outcome.report.units, 1);
    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].value, "jan@firma.pl");
    assert_eq!(outcome.candidates[0].category, "email");
}

#[test]
fn failed_validation_is_reported_not_fatal() {
    // The only match for [email] contains whitespace, which the identifier
    // rule rejects.
    let original = "adres: to nie jest mail wcale, koniec.";
    let redacted = "adres: [email], koniec.";
    let config = RelabelConfig::default();
    let outcome = matcher(&config).recover(original, redacted);

    assert!(outcome.candidates.is_empty());
    assert_eq!(outcome.report.skips[&SkipReason::FailedValidation], 1);
}
