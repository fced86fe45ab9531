//! # relabel-recover
//!
//! Recovers `(original value, category)` candidate pairs from a redacted
//! document and its original. Two independent strategies, a context-window
//! matcher and a whole-document token aligner, feed a weighted deduplicator.

pub mod align;
pub mod context;
pub mod dedup;
pub mod scanner;
pub mod validate;

pub use align::TokenAligner;
pub use context::ContextMatcher;
pub use dedup::merge_candidates;
pub use scanner::find_placeholders;
