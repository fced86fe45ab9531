use relabel_core::categories;

#[test]
fn vocabulary_covers_both_classes() {
    assert_eq!(categories::FIXED_FORMAT_CATEGORIES.len(), 7);
    assert!(categories::CONTEXTUAL_CATEGORIES.len() >= 20);
    assert!(categories::is_known_category("pesel"));
    assert!(categories::is_known_category("sexual-orientation"));
    assert!(!categories::is_known_category("made-up-tag"));
}

#[test]
fn category_class_predicates() {
    assert!(categories::is_identifier_like("email"));
    assert!(categories::is_identifier_like("pesel"));
    assert!(!categories::is_identifier_like("name"));

    assert!(categories::is_phone_like("phone"));
    assert!(categories::is_numeric("age"));
    assert!(!categories::is_numeric("city"));

    assert!(categories::is_name_like("surname"));
    assert!(categories::is_name_like("company"));
    assert!(!categories::is_name_like("email"));
}
