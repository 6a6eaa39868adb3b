//! Pipeline errors and non-fatal error collection.

use super::{ConfigError, ProjectError, ScanError, SchemaError};

/// Errors that can abort an analysis run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Report error: {0}")]
    Report(String),
}

/// Result of a source scan that accumulates non-fatal errors.
/// Partial results are returned even when some files fail to read.
#[derive(Debug, Default)]
pub struct ScanOutcome<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Files skipped during the scan, with the error that caused each skip.
    pub skipped: Vec<ScanError>,
}

impl<T: Default> ScanOutcome<T> {
    /// Create a new outcome with no skipped files.
    pub fn new(data: T) -> Self {
        Self {
            data,
            skipped: Vec::new(),
        }
    }

    /// Record a skipped file.
    pub fn skip(&mut self, error: ScanError) {
        self.skipped.push(error);
    }

    /// Returns true if no file was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Number of skipped files.
    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }
}
