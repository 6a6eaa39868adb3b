//! Analysis tuning knobs.
//!
//! The N+1 detector windows are a precision/recall trade-off, exposed
//! here so they can be tuned without touching matching logic.

use serde::{Deserialize, Serialize};

/// Lines inspected before a fetch call when looking for eager loading.
pub const DEFAULT_NPLUSONE_LOOKBEHIND: usize = 2;

/// Lines inspected after a fetch call when looking for eager loading.
pub const DEFAULT_NPLUSONE_LOOKAHEAD: usize = 2;

/// How many lines past a fetch call association use is searched for.
pub const DEFAULT_NPLUSONE_USAGE_WINDOW: usize = 20;

/// Boolean-index findings itemized before the listing is truncated.
pub const DEFAULT_BOOLEAN_PREVIEW: usize = 5;

/// Unique WHERE-clause columns itemized before the listing is truncated.
pub const DEFAULT_WHERE_PREVIEW: usize = 10;

/// Configuration for the analysis subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Lines inspected before a fetch call for eager loading. Default: 2.
    pub nplusone_lookbehind: Option<usize>,
    /// Lines inspected after a fetch call for eager loading. Default: 2.
    pub nplusone_lookahead: Option<usize>,
    /// Forward search distance for association use. Default: 20.
    pub nplusone_usage_window: Option<usize>,
    /// Boolean-index findings itemized in reports. Default: 5.
    pub boolean_preview: Option<usize>,
    /// Unique WHERE-clause columns itemized in reports. Default: 10.
    pub where_preview: Option<usize>,
}

impl AnalysisConfig {
    pub fn effective_nplusone_lookbehind(&self) -> usize {
        self.nplusone_lookbehind.unwrap_or(DEFAULT_NPLUSONE_LOOKBEHIND)
    }

    pub fn effective_nplusone_lookahead(&self) -> usize {
        self.nplusone_lookahead.unwrap_or(DEFAULT_NPLUSONE_LOOKAHEAD)
    }

    pub fn effective_nplusone_usage_window(&self) -> usize {
        self.nplusone_usage_window.unwrap_or(DEFAULT_NPLUSONE_USAGE_WINDOW)
    }

    pub fn effective_boolean_preview(&self) -> usize {
        self.boolean_preview.unwrap_or(DEFAULT_BOOLEAN_PREVIEW)
    }

    pub fn effective_where_preview(&self) -> usize {
        self.where_preview.unwrap_or(DEFAULT_WHERE_PREVIEW)
    }
}
