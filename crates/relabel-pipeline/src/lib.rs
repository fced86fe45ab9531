//! # relabel-pipeline
//!
//! Orchestrates the full reconciliation run: candidate recovery (context
//! matching and token alignment in parallel), weighted deduplication, span
//! placement, BIO tagging, and record emission.

pub mod engine;
pub mod record;

pub use engine::{RelabelEngine, RunOutput};
pub use record::{LabeledRecord, TokenPosition};
