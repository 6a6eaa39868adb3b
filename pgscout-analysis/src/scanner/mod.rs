//! Source scanner — file discovery over the fixed application
//! subdirectories, parallel per-file analysis, per-file failure
//! skipping.
//!
//! Analyzers are pure functions of file content, so files are analyzed
//! in parallel. A file that cannot be read is recorded and skipped; the
//! scan continues (partial-failure tolerance at file granularity, not
//! all-or-nothing).

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;
use tracing::{debug, warn};

use pgscout_core::errors::{ScanError, ScanOutcome};
use pgscout_core::Finding;

use crate::analyzers::SourceAnalyzer;

/// A file-glob scope an analyzer group runs over.
#[derive(Debug, Clone, Copy)]
pub struct SourceScope {
    pub dirs: &'static [&'static str],
    pub extensions: &'static [&'static str],
}

/// Model and controller sources.
pub const MODELS_AND_CONTROLLERS: SourceScope = SourceScope {
    dirs: &["app/models", "app/controllers"],
    extensions: &["rb"],
};

/// Controller sources only.
pub const CONTROLLERS: SourceScope = SourceScope {
    dirs: &["app/controllers"],
    extensions: &["rb"],
};

/// Template sources.
pub const VIEWS: SourceScope = SourceScope {
    dirs: &["app/views"],
    extensions: &["erb", "haml"],
};

/// Discover files in scope, sorted for deterministic output.
pub fn discover(root: &Path, scope: SourceScope) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for dir in scope.dirs {
        let base = root.join(dir);
        if !base.is_dir() {
            continue;
        }
        for entry in WalkBuilder::new(&base).build().flatten() {
            let path = entry.into_path();
            if !path.is_file() {
                continue;
            }
            let in_scope = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| scope.extensions.contains(&e))
                .unwrap_or(false);
            if in_scope {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

/// Run the given analyzers over every file in scope.
pub fn scan(
    root: &Path,
    scope: SourceScope,
    analyzers: &[&dyn SourceAnalyzer],
) -> ScanOutcome<Vec<Finding>> {
    let files = discover(root, scope);
    debug!(files = files.len(), "scanning sources");

    let results: Vec<Result<Vec<Finding>, ScanError>> = files
        .into_par_iter()
        .map(|path| match std::fs::read_to_string(&path) {
            Ok(content) => Ok(analyzers
                .iter()
                .flat_map(|analyzer| analyzer.analyze(&path, &content))
                .collect()),
            Err(source) => Err(ScanError::FileRead { path, source }),
        })
        .collect();

    let mut outcome = ScanOutcome::new(Vec::new());
    for result in results {
        match result {
            Ok(findings) => outcome.data.extend(findings),
            Err(error) => {
                warn!(%error, "skipping unreadable file");
                outcome.skip(error);
            }
        }
    }
    outcome
}
