//! Value cleanup and validation, shared by both recovery strategies.
//!
//! These checks reject the common capture-overreach failure modes: values
//! that swallowed a delimiter, bled into a neighboring entity, or matched
//! something structurally impossible for the category.

use relabel_core::categories;
use relabel_core::models::SkipReason;

/// Characters trimmed from both ends of a recovered value.
const EDGE_PUNCTUATION: &[char] = &[',', '.', ';', ':', ' '];

/// Collapse internal whitespace runs to single spaces and trim boundary
/// punctuation.
pub fn clean_value(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_matches(EDGE_PUNCTUATION).to_string()
}

/// Validate a cleaned value for a category.
///
/// `close_neighbor` is true when another placeholder sat within the
/// close-neighbor distance in the redacted text, which tightens the rules
/// against capture bleed.
pub fn validate_value(
    value: &str,
    category: &str,
    close_neighbor: bool,
    max_len: usize,
) -> Result<(), SkipReason> {
    if value.is_empty() {
        return Err(SkipReason::FailedValidation);
    }
    if value.chars().count() > max_len {
        return Err(SkipReason::FailedValidation);
    }
    if value.contains('\n') {
        return Err(SkipReason::FailedValidation);
    }

    // Unbalanced parentheses (presence-based, not counted).
    if value.contains('(') != value.contains(')') {
        return Err(SkipReason::FailedValidation);
    }

    // A value starting or ending inside a bracket pair captured part of a tag
    // or a parenthesized aside.
    if value.ends_with('(')
        || value.ends_with('[')
        || value.starts_with(')')
        || value.starts_with(']')
    {
        return Err(SkipReason::FailedValidation);
    }

    if categories::is_identifier_like(category)
        && (value.contains(' ') || value.contains('(') || value.contains(')'))
    {
        return Err(SkipReason::FailedValidation);
    }

    if categories::is_phone_like(category) {
        let digits_and_spaces = value
            .chars()
            .filter(|c| c.is_ascii_digit() || c.is_whitespace())
            .count();
        if (digits_and_spaces as f64) < value.chars().count() as f64 * 0.66 {
            return Err(SkipReason::FailedValidation);
        }
    }

    if categories::is_numeric(category) && !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(SkipReason::FailedValidation);
    }

    if close_neighbor {
        if value.contains(';') {
            return Err(SkipReason::FailedValidation);
        }
        if categories::is_name_like(category) && internal_spaces(value) > 3 {
            return Err(SkipReason::FailedValidation);
        }
    }

    Ok(())
}

/// Number of space characters inside a value.
pub fn internal_spaces(value: &str) -> usize {
    value.chars().filter(|&c| c == ' ').count()
}
