//! Anchored pattern construction for one placeholder.

use std::collections::BTreeSet;

use regex::Regex;
use relabel_core::models::{Placeholder, SkipReason};
use relabel_core::{BracketStyle, RelabelConfig};

/// Delimiters that stop the capture when a neighbor placeholder is close.
const DELIMITERS: &str = "()[]{};<>,.:!?";

/// The anchor windows and neighbor flag derived from one placeholder's
/// surroundings in the redacted text.
#[derive(Debug)]
pub(crate) struct ContextWindow<'a> {
    pub before: &'a str,
    pub after: &'a str,
    pub close_neighbor: bool,
}

/// Slice up to `context_window` characters of literal text on each side of
/// the placeholder. The "after" side is truncated at the next placeholder's
/// opening bracket so it never swallows a second tag.
pub(crate) fn context_window<'a>(
    redacted: &'a str,
    ph: &Placeholder,
    config: &RelabelConfig,
) -> ContextWindow<'a> {
    let head = &redacted[..ph.start];
    let before = match head.char_indices().rev().nth(config.context_window - 1) {
        Some((i, _)) => &head[i..],
        None => head,
    };

    let next_open = redacted[ph.end..]
        .find(config.bracket_style.open())
        .map(|i| ph.end + i);
    let cap = next_open.unwrap_or(redacted.len());
    let tail = &redacted[ph.end..cap];
    let after = match tail.char_indices().nth(config.context_window) {
        Some((i, _)) => &tail[..i],
        None => tail,
    };

    let close_neighbor = match next_open {
        Some(open) => redacted[ph.end..open].chars().count() < config.close_neighbor_distance,
        None => false,
    };

    ContextWindow {
        before,
        after,
        close_neighbor,
    }
}

/// Escape anchor text for regex, widening each whitespace run to `\s+` so the
/// anchor tolerates re-wrapped line breaks between the two texts.
pub(crate) fn escape_anchor(text: &str) -> String {
    let mut out = String::new();
    let mut in_whitespace = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push_str(r"\s+");
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            push_escaped(&mut out, ch);
        }
    }
    out
}

fn push_escaped(out: &mut String, ch: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
}

/// Pick the capture group per the tie-break policy:
/// close neighbor + trailing delimiters → exclude the delimiters;
/// close neighbor alone → at most three whitespace-separated words;
/// otherwise → anything that is not a bracket.
pub(crate) fn capture_group(after: &str, close_neighbor: bool, style: BracketStyle) -> String {
    let delimiters: BTreeSet<char> = after.chars().filter(|c| DELIMITERS.contains(*c)).collect();

    if close_neighbor && !delimiters.is_empty() {
        let mut class = String::new();
        for d in &delimiters {
            push_escaped(&mut class, *d);
        }
        format!("([^{class}]+?)")
    } else if close_neighbor {
        r"(\S+(?:\s+\S+){0,2}?)".to_string()
    } else {
        match style {
            BracketStyle::Square => r"([^\[\]]+?)".to_string(),
            BracketStyle::Curly => r"([^\{\}]+?)".to_string(),
        }
    }
}

/// Build the anchored search pattern `<before><capture><after>`.
pub(crate) fn build_pattern(
    window: &ContextWindow<'_>,
    style: BracketStyle,
) -> Result<Regex, SkipReason> {
    if window.before.is_empty() || window.after.is_empty() {
        return Err(SkipReason::EmptyAnchor);
    }
    let before = escape_anchor(window.before);
    let after = escape_anchor(window.after);
    let capture = capture_group(window.after, window.close_neighbor, style);
    Regex::new(&format!("(?s){before}{capture}{after}")).map_err(|_| SkipReason::PatternBuild)
}
