//! Placeholder scanner.
//!
//! Pure function of the redacted text: finds every bracketed `[a-z-]+` tag in
//! document order. Non-overlapping by construction (regex scan). Category
//! names are *not* checked against the vocabulary here; unknown categories
//! pass through and simply find no validator downstream.

use std::sync::LazyLock;

use regex::Regex;
use relabel_core::models::Placeholder;
use relabel_core::BracketStyle;

static SQUARE_TAG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\[([a-z-]+)\]").ok());
static CURLY_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\{([a-z-]+)\}").ok());

/// The compiled tag pattern for a bracket style.
pub(crate) fn tag_regex(style: BracketStyle) -> Option<&'static Regex> {
    match style {
        BracketStyle::Square => SQUARE_TAG.as_ref(),
        BracketStyle::Curly => CURLY_TAG.as_ref(),
    }
}

/// Scan the redacted text for placeholders, in document order.
pub fn find_placeholders(redacted: &str, style: BracketStyle) -> Vec<Placeholder> {
    let Some(re) = tag_regex(style) else {
        return Vec::new();
    };
    re.captures_iter(redacted)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let category = caps.get(1)?;
            Some(Placeholder {
                start: whole.start(),
                end: whole.end(),
                category: category.as_str().to_string(),
                literal: whole.as_str().to_string(),
            })
        })
        .collect()
}
