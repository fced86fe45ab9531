//! Default values for `RelabelConfig`.

/// Literal characters of anchor context on each side of a placeholder.
pub const DEFAULT_CONTEXT_WINDOW: usize = 30;

/// Character distance under which the next placeholder counts as close.
pub const DEFAULT_CLOSE_NEIGHBOR_DISTANCE: usize = 15;

/// Maximum length (chars) of a recovered value.
pub const DEFAULT_MAX_VALUE_LEN: usize = 100;

/// Worker threads for the per-stage fan-out.
pub const DEFAULT_WORKERS: usize = 8;
