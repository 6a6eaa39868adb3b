//! Project discovery errors.

/// Errors that can occur while locating the project root.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("could not find project root above {start} (no config/application.rb)")]
    RootNotFound { start: String },
}
