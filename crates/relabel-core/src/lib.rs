//! # relabel-core
//!
//! Foundation crate for the relabel pipeline.
//! Defines all types, errors, config, the category vocabulary, and the
//! candidate-source trait. Every other crate in the workspace depends on this.

pub mod categories;
pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{BracketStyle, MatchStrategy, RelabelConfig};
pub use errors::{RelabelError, RelabelResult};
pub use models::{BioTag, CandidatePair, EntitySpan, Placeholder, RankedPair, RecoveryMethod, Token};
pub use traits::{CandidateSource, SourceOutcome};
