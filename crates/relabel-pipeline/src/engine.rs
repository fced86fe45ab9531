//! The orchestrating engine.
//!
//! A single controlling flow dispatches independent units of work onto a
//! bounded, caller-owned rayon pool, with a strict barrier between stages.
//! The two recovery strategies are independent passes over the same two
//! read-only texts and run concurrently with each other.
//!
//! Only unreadable input is fatal, and only before any stage begins. Every
//! later failure is a per-unit skip recorded in the diagnostics; the run
//! always completes and emits a record.

use std::path::Path;

use relabel_core::errors::{RelabelError, RelabelResult};
use relabel_core::models::{EntitySpan, RunDiagnostics};
use relabel_core::{CandidateSource, RelabelConfig, SourceOutcome};
use relabel_label::{assign_tags, locate_spans, tokenize_with_offsets};
use relabel_recover::{merge_candidates, ContextMatcher, TokenAligner};
use tracing::{debug, info};

use crate::record::LabeledRecord;

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub record: LabeledRecord,
    pub entities: Vec<EntitySpan>,
    /// Accepted span count, the caller's only quality signal for a
    /// silently under-labeled run.
    pub num_entities: usize,
    pub diagnostics: RunDiagnostics,
}

/// The relabel pipeline engine. Owns its worker pool; no global state.
pub struct RelabelEngine {
    config: RelabelConfig,
    pool: rayon::ThreadPool,
}

impl RelabelEngine {
    pub fn new(config: RelabelConfig) -> RelabelResult<Self> {
        config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()
            .map_err(|e| RelabelError::InvalidConfig {
                reason: format!("could not build worker pool: {e}"),
            })?;
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &RelabelConfig {
        &self.config
    }

    /// Run the full pipeline over two in-memory documents.
    ///
    /// Infallible by design: per-unit recovery failures only lower recall.
    pub fn run(&self, original: &str, redacted: &str) -> RunOutput {
        let matcher = ContextMatcher::new(&self.config);
        let aligner = TokenAligner::new(&self.config);

        let (context_out, align_out) = self.pool.install(|| {
            if self.config.skip_alignment {
                (recover_with(&matcher, original, redacted), SourceOutcome::default())
            } else {
                rayon::join(
                    || recover_with(&matcher, original, redacted),
                    || recover_with(&aligner, original, redacted),
                )
            }
        });

        let mut candidates = align_out.candidates.clone();
        candidates.extend(context_out.candidates.iter().cloned());
        let ranked = merge_candidates(&candidates);
        debug!(
            raw = candidates.len(),
            merged = ranked.len(),
            "candidate merge complete"
        );

        let entities = locate_spans(original, &ranked);
        let tokens = tokenize_with_offsets(original);
        let tags = self
            .pool
            .install(|| assign_tags(&tokens, &entities, self.config.workers));

        info!(
            entities = entities.len(),
            tokens = tokens.len(),
            "relabel run complete"
        );

        let diagnostics = RunDiagnostics {
            context: context_out.report,
            alignment: align_out.report,
            candidates_merged: ranked.len(),
            entities_accepted: entities.len(),
        };
        RunOutput {
            record: LabeledRecord::from_parts(original, &tokens, tags),
            num_entities: entities.len(),
            entities,
            diagnostics,
        }
    }

    /// Read both input files, run the pipeline, and return the output.
    /// Unreadable input aborts before any stage begins.
    pub fn run_files(&self, original_path: &Path, redacted_path: &Path) -> RelabelResult<RunOutput> {
        let original = read_input(original_path)?;
        let redacted = read_input(redacted_path)?;
        Ok(self.run(&original, &redacted))
    }
}

fn recover_with(source: &dyn CandidateSource, original: &str, redacted: &str) -> SourceOutcome {
    source.recover(original, redacted)
}

fn read_input(path: &Path) -> RelabelResult<String> {
    std::fs::read_to_string(path).map_err(|e| RelabelError::UnreadableInput {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
