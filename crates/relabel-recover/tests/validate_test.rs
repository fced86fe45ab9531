use relabel_recover::validate::{clean_value, validate_value};

const MAX: usize = 100;

#[test]
fn cleanup_collapses_whitespace_and_trims_punctuation() {
    assert_eq!(clean_value("  Jan   Kowalski,"), "Jan Kowalski");
    assert_eq!(clean_value("Krakowie."), "Krakowie");
    assert_eq!(clean_value("601\n202 303.;"), "601 202 303");
    assert_eq!(clean_value(", . ;"), "");
}

#[test]
fn rejects_structural_garbage() {
    assert!(validate_value("", "name", false, MAX).is_err());
    assert!(validate_value(&"x".repeat(101), "name", false, MAX).is_err());
    assert!(validate_value("Jan (Kowalski", "name", false, MAX).is_err());
    assert!(validate_value("Kowalski) tak", "name", false, MAX).is_err());
    assert!(validate_value(") Jan", "name", false, MAX).is_err());
    assert!(validate_value("Jan (", "name", false, MAX).is_err());
    assert!(validate_value("] Jan", "name", false, MAX).is_err());
}

#[test]
fn balanced_parentheses_accepted() {
    assert!(validate_value("Firma (dawniej Orlen)", "company", false, MAX).is_ok());
}

#[test]
fn identifier_categories_reject_internal_whitespace() {
    assert!(validate_value("jan@firma.pl", "email", false, MAX).is_ok());
    assert!(validate_value("jan @firma.pl", "email", false, MAX).is_err());
    assert!(validate_value("90010112345", "pesel", false, MAX).is_ok());
    assert!(validate_value("9001011 2345", "pesel", false, MAX).is_err());
}

#[test]
fn phone_requires_two_thirds_digits_or_spaces() {
    assert!(validate_value("601 202 303", "phone", false, MAX).is_ok());
    assert!(validate_value("+48 601 202 303", "phone", false, MAX).is_ok());
    assert!(validate_value("zadzwoń do mnie", "phone", false, MAX).is_err());
}

#[test]
fn numeric_categories_require_a_digit() {
    assert!(validate_value("44 lata", "age", false, MAX).is_ok());
    assert!(validate_value("czterdzieści", "age", false, MAX).is_err());
}

#[test]
fn close_neighbor_tightens_rules() {
    // Semicolons are delimiter bleed when a neighbor is close.
    assert!(validate_value("Jan; Kowalski", "name", false, MAX).is_ok());
    assert!(validate_value("Jan; Kowalski", "name", true, MAX).is_err());

    // Name-like categories get a word-count cap near neighbors.
    let long = "Jan Maria Anna Piotr Tomasz";
    assert!(validate_value(long, "name", false, MAX).is_ok());
    assert!(validate_value(long, "name", true, MAX).is_err());
    // Non-name-like categories are exempt from the cap.
    assert!(validate_value("ul. Długa 12 m. 3", "zip-code", true, MAX).is_ok());
}

// ── properties ──────────────────────────────────────────────────────────────

mod properties {
    use proptest::prelude::*;
    use relabel_recover::validate::clean_value;

    const EDGE: &[char] = &[',', '.', ';', ':', ' '];

    proptest! {
        #[test]
        fn cleanup_is_idempotent(raw in "[ a-zA-Z0-9,.;:()@-]{0,40}") {
            let once = clean_value(&raw);
            prop_assert_eq!(&clean_value(&once), &once);
        }

        #[test]
        fn cleaned_values_have_bare_edges(raw in ".{0,40}") {
            let cleaned = clean_value(&raw);
            if let Some(first) = cleaned.chars().next() {
                prop_assert!(!EDGE.contains(&first));
            }
            if let Some(last) = cleaned.chars().last() {
                prop_assert!(!EDGE.contains(&last));
            }
        }
    }
}
