//! BIO tag assigner.
//!
//! Walks the token list once per entity, stamping the first overlapping token
//! `B-<category>` and every subsequent overlapping token `I-<category>`.
//! Partial token overlap counts, to tolerate offset drift at span boundaries.
//! Entities are sharded into balanced chunks for the worker pool; chunk
//! results merge by token index into an `O`-seeded tag array. Entity spans
//! are non-overlapping, so merge order does not matter.

use std::collections::HashMap;

use rayon::prelude::*;
use relabel_core::models::{BioTag, EntitySpan, Token};

/// Assign one BIO tag per token for the accepted entity spans.
///
/// `workers` is the pool width used to size the entity chunks; the actual
/// threads come from the ambient rayon pool.
pub fn assign_tags(tokens: &[Token], entities: &[EntitySpan], workers: usize) -> Vec<BioTag> {
    let mut tags = vec![BioTag::Outside; tokens.len()];
    if entities.is_empty() || tokens.is_empty() {
        return tags;
    }

    let chunk_size = (entities.len() / (workers.max(1) * 4)).max(1);
    let updates: Vec<HashMap<usize, BioTag>> = entities
        .par_chunks(chunk_size)
        .map(|chunk| tag_chunk(tokens, chunk))
        .collect();

    for update in updates {
        for (index, tag) in update {
            tags[index] = tag;
        }
    }
    tags
}

/// Tag every token overlapping any entity in this chunk. Returns a
/// token-index → tag map private to the chunk.
fn tag_chunk(tokens: &[Token], chunk: &[EntitySpan]) -> HashMap<usize, BioTag> {
    let mut updates = HashMap::new();

    for entity in chunk {
        // Tokens are in document order; skip straight to the first one whose
        // range can still touch this entity.
        let first = tokens.partition_point(|t| t.end <= entity.start);
        let mut is_first = true;
        for (index, token) in tokens.iter().enumerate().skip(first) {
            if token.start >= entity.end {
                break;
            }
            let tag = if is_first {
                BioTag::Begin(entity.category.clone())
            } else {
                BioTag::Inside(entity.category.clone())
            };
            updates.insert(index, tag);
            is_first = false;
        }
    }

    updates
}
