//! Data model for the pipeline stages.

mod candidate;
mod diagnostics;
mod placeholder;
mod span;
mod tag;
mod token;

pub use candidate::{CandidatePair, RankedPair, RecoveryMethod};
pub use diagnostics::{RunDiagnostics, SkipReason, StageReport};
pub use placeholder::Placeholder;
pub use span::EntitySpan;
pub use tag::{BioTag, ParseTagError};
pub use token::Token;
