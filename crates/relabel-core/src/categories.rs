//! The closed category vocabulary and the category-class predicates used by
//! value validation.
//!
//! The vocabulary mirrors the upstream detector: fixed-format categories are
//! produced by pattern recognizers, contextual categories by a neural tagger.
//! The scanner itself never validates against this list; unknown categories
//! flow through and simply fail downstream validation lookups.

/// Categories detected upstream by fixed-format recognizers.
pub const FIXED_FORMAT_CATEGORIES: &[&str] = &[
    "pesel",
    "email",
    "phone",
    "bank-account",
    "credit-card-number",
    "document-number",
    "date",
];

/// Categories detected upstream by the contextual (NER) tagger.
pub const CONTEXTUAL_CATEGORIES: &[&str] = &[
    "name",
    "surname",
    "age",
    "date-of-birth",
    "sex",
    "religion",
    "political-view",
    "ethnicity",
    "sexual-orientation",
    "health",
    "relative",
    "city",
    "address",
    "company",
    "school-name",
    "job-title",
    "nationality",
    "country",
    "voivodeship",
    "district",
    "zip-code",
    "username",
    "secret",
];

/// Whether a category name belongs to the known vocabulary.
pub fn is_known_category(name: &str) -> bool {
    FIXED_FORMAT_CATEGORIES.contains(&name) || CONTEXTUAL_CATEGORIES.contains(&name)
}

/// Categories whose values are single opaque identifiers: no internal
/// whitespace or parentheses allowed.
pub fn is_identifier_like(category: &str) -> bool {
    matches!(category, "email" | "pesel")
}

/// Categories whose values are mostly digits and spaces.
pub fn is_phone_like(category: &str) -> bool {
    category == "phone"
}

/// Categories whose values must contain at least one digit.
pub fn is_numeric(category: &str) -> bool {
    matches!(category, "age" | "number")
}

/// Short-phrase categories guarded against capture overreach when another
/// placeholder sits nearby.
pub fn is_name_like(category: &str) -> bool {
    matches!(
        category,
        "name" | "surname" | "relative" | "street" | "city" | "company"
    )
}
