//! Whitespace tokenization with byte offsets.

use std::sync::LazyLock;

use regex::Regex;
use relabel_core::models::Token;

static TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\S+").ok());

/// Split a document into maximal whitespace-delimited tokens with their byte
/// offsets, in document order.
pub fn tokenize_with_offsets(text: &str) -> Vec<Token> {
    let Some(re) = TOKEN.as_ref() else {
        return Vec::new();
    };
    re.find_iter(text)
        .map(|m| Token {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}
