use relabel_core::{BioTag, EntitySpan};
use relabel_label::{assign_tags, locate_spans, tokenize_with_offsets};
use relabel_core::{RankedPair, RecoveryMethod};

fn span(text: &str, value: &str, category: &str) -> EntitySpan {
    let start = text.find(value).expect("value present in text");
    EntitySpan {
        start,
        end: start + value.len(),
        category: category.into(),
        text: value.into(),
    }
}

#[test]
fn tokenizer_reports_byte_offsets() {
    let text = "Jan  mieszka\nw Krakowie.";
    let tokens = tokenize_with_offsets(text);
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Jan", "mieszka", "w", "Krakowie."]);
    for token in &tokens {
        assert_eq!(&text[token.start..token.end], token.text);
    }
}

#[test]
fn first_token_begins_rest_are_inside() {
    let text = "Jan Kowalski mieszka w Krakowie.";
    let tokens = tokenize_with_offsets(text);
    let tags = assign_tags(&tokens, &[span(text, "Jan Kowalski", "name")], 4);

    assert_eq!(tags[0], BioTag::Begin("name".into()));
    assert_eq!(tags[1], BioTag::Inside("name".into()));
    assert_eq!(tags[2], BioTag::Outside);
}

#[test]
fn partial_token_overlap_is_tagged() {
    // The span excludes the trailing dot; the token includes it.
    let text = "mieszka w Krakowie.";
    let tokens = tokenize_with_offsets(text);
    let tags = assign_tags(&tokens, &[span(text, "Krakowie", "city")], 4);
    assert_eq!(tags[2], BioTag::Begin("city".into()));
}

#[test]
fn untouched_tokens_stay_outside() {
    let text = "a b c d e";
    let tokens = tokenize_with_offsets(text);
    let tags = assign_tags(&tokens, &[span(text, "c", "name")], 4);
    assert_eq!(
        tags,
        vec![
            BioTag::Outside,
            BioTag::Outside,
            BioTag::Begin("name".into()),
            BioTag::Outside,
            BioTag::Outside,
        ]
    );
}

#[test]
fn no_entities_yields_all_outside() {
    let tokens = tokenize_with_offsets("kilka słów bez encji");
    let tags = assign_tags(&tokens, &[], 4);
    assert!(tags.iter().all(|t| t.is_outside()));
}

#[test]
fn chunked_tagging_matches_across_worker_counts() {
    // Many single-token entities, disjoint by construction: the chunk merge
    // must be independent of pool width.
    let words: Vec<String> = (0..40).map(|i| format!("w{i:02}")).collect();
    let text = words.join(" ");
    let tokens = tokenize_with_offsets(&text);
    let pairs: Vec<RankedPair> = words
        .iter()
        .step_by(3)
        .map(|w| RankedPair {
            value: w.clone(),
            category: "username".into(),
            weight: 1,
            method: RecoveryMethod::ContextMatch,
        })
        .collect();
    let entities = locate_spans(&text, &pairs);

    let one = assign_tags(&tokens, &entities, 1);
    let many = assign_tags(&tokens, &entities, 8);
    assert_eq!(one, many);
    assert_eq!(
        one.iter().filter(|t| !t.is_outside()).count(),
        entities.len()
    );
}
