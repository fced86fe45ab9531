//! Fatal error types for a relabel run.
//!
//! Per-unit recovery failures are *not* errors; they are `SkipReason` values
//! aggregated into `RunDiagnostics`. Only conditions that prevent a run from
//! starting (or its output from being written) surface here.

/// Run-level errors for the relabel pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RelabelError {
    #[error("could not read input file {path}: {reason}")]
    UnreadableInput { path: String, reason: String },

    #[error("could not write output file {path}: {reason}")]
    UnwritableOutput { path: String, reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type RelabelResult<T> = Result<T, RelabelError>;
