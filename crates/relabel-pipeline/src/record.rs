//! The emitted training record.

use std::path::Path;

use relabel_core::errors::{RelabelError, RelabelResult};
use relabel_core::models::{BioTag, Token};
use serde::{Deserialize, Serialize};

/// Byte-offset pair for one token, index-aligned with `tokens`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPosition {
    pub start: usize,
    pub end: usize,
}

/// The pipeline's sole output artifact: the full original text, its token
/// list, the index-aligned BIO tags, and per-token offsets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledRecord {
    pub text: String,
    pub tokens: Vec<String>,
    pub tags: Vec<BioTag>,
    pub token_positions: Vec<TokenPosition>,
}

impl LabeledRecord {
    pub fn from_parts(text: &str, tokens: &[Token], tags: Vec<BioTag>) -> Self {
        Self {
            text: text.to_string(),
            tokens: tokens.iter().map(|t| t.text.clone()).collect(),
            tags,
            token_positions: tokens
                .iter()
                .map(|t| TokenPosition {
                    start: t.start,
                    end: t.end,
                })
                .collect(),
        }
    }

    /// Serialize as pretty-printed JSON to `path`.
    pub fn write_json(&self, path: &Path) -> RelabelResult<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| RelabelError::UnwritableOutput {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        std::fs::write(path, json).map_err(|e| RelabelError::UnwritableOutput {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
