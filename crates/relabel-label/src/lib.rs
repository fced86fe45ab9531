//! # relabel-label
//!
//! Places confirmed candidate values back onto the original text as
//! non-overlapping entity spans and stamps every token with a BIO label.

pub mod bio;
pub mod spans;
pub mod tokenize;

pub use bio::assign_tags;
pub use spans::locate_spans;
pub use tokenize::tokenize_with_offsets;
