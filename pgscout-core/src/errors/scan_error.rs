//! Per-file scan errors. Non-fatal: the scan skips the file and
//! continues.

use std::path::{Path, PathBuf};

/// Errors that can occur while reading a single source file.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// The file this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            ScanError::FileRead { path, .. } => path,
        }
    }
}
