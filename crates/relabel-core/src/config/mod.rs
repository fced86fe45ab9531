//! Pipeline configuration.
//!
//! A single serde-derived struct covers every tunable in the pipeline.
//! All components take the config by reference; there is no process-wide
//! mutable state.

mod defaults;

use serde::{Deserialize, Serialize};

use crate::errors::{RelabelError, RelabelResult};

/// Bracket style used by placeholders in the redacted text.
///
/// Caller-supplied, never auto-detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BracketStyle {
    /// `[category]`
    Square,
    /// `{category}`
    Curly,
}

impl BracketStyle {
    pub fn open(&self) -> char {
        match self {
            BracketStyle::Square => '[',
            BracketStyle::Curly => '{',
        }
    }

    pub fn close(&self) -> char {
        match self {
            BracketStyle::Square => ']',
            BracketStyle::Curly => '}',
        }
    }
}

/// How the context matcher picks among multiple matches of an anchored
/// pattern in the original document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Take the first validated match in document order. Known to misattribute
    /// when anchor context repeats verbatim.
    FirstInDocument,
    /// Among validated matches, take the one whose relative document position
    /// is closest to the placeholder's relative position in the redacted text.
    NearestPosition,
}

/// Configuration for a relabel run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RelabelConfig {
    /// Placeholder bracket style in the redacted text.
    pub bracket_style: BracketStyle,
    /// Literal characters of context taken on each side of a placeholder.
    pub context_window: usize,
    /// A placeholder within this many characters after the current one counts
    /// as a close neighbor, tightening the capture group.
    pub close_neighbor_distance: usize,
    /// Recovered values longer than this are rejected.
    pub max_value_len: usize,
    /// Worker threads for the per-stage fan-out.
    pub workers: usize,
    /// Tie-break strategy for repeated anchor context.
    pub match_strategy: MatchStrategy,
    /// Run the context matcher only, skipping token alignment.
    pub skip_alignment: bool,
}

impl Default for RelabelConfig {
    fn default() -> Self {
        Self {
            bracket_style: BracketStyle::Square,
            context_window: defaults::DEFAULT_CONTEXT_WINDOW,
            close_neighbor_distance: defaults::DEFAULT_CLOSE_NEIGHBOR_DISTANCE,
            max_value_len: defaults::DEFAULT_MAX_VALUE_LEN,
            workers: defaults::DEFAULT_WORKERS,
            match_strategy: MatchStrategy::FirstInDocument,
            skip_alignment: false,
        }
    }
}

impl RelabelConfig {
    /// Parse a config from TOML. Unknown keys are ignored; missing keys take
    /// their defaults.
    pub fn from_toml_str(input: &str) -> RelabelResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| RelabelError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no stage can run with.
    pub fn validate(&self) -> RelabelResult<()> {
        if self.workers == 0 {
            return Err(RelabelError::InvalidConfig {
                reason: "workers must be at least 1".to_string(),
            });
        }
        if self.context_window == 0 {
            return Err(RelabelError::InvalidConfig {
                reason: "context_window must be at least 1".to_string(),
            });
        }
        if self.max_value_len == 0 {
            return Err(RelabelError::InvalidConfig {
                reason: "max_value_len must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
