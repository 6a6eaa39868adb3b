//! Project root discovery.
//!
//! Walks upward from a starting directory until the application marker
//! (`config/application.rb`) is found. The fixed schema and database
//! configuration locations hang off the discovered root.

use std::path::{Path, PathBuf};

use crate::errors::ProjectError;

/// Marker file identifying an application root.
pub const ROOT_MARKER: &str = "config/application.rb";

/// Schema definition location, relative to the project root.
pub const SCHEMA_PATH: &str = "db/schema.rb";

/// Database configuration location, relative to the project root.
pub const DATABASE_CONFIG_PATH: &str = "config/database.yml";

/// Walk upward from `start` until a directory containing the root marker
/// is found.
pub fn find_project_root(start: &Path) -> Result<PathBuf, ProjectError> {
    let mut current = start.to_path_buf();
    if let Ok(canonical) = current.canonicalize() {
        current = canonical;
    }
    loop {
        if current.join(ROOT_MARKER).is_file() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(ProjectError::RootNotFound {
                start: start.display().to_string(),
            });
        }
    }
}

/// The fixed schema file path under a project root.
pub fn schema_path(root: &Path) -> PathBuf {
    root.join(SCHEMA_PATH)
}

/// The fixed database configuration path under a project root.
pub fn database_config_path(root: &Path) -> PathBuf {
    root.join(DATABASE_CONFIG_PATH)
}
