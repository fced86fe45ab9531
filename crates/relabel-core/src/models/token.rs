use serde::{Deserialize, Serialize};

/// A maximal whitespace-delimited substring of a document with its byte
/// offsets. Immutable once tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}
