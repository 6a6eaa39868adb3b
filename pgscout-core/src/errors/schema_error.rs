//! Schema file errors.
//!
//! Parsing itself never fails — these cover only reading the file.

/// Errors that can occur while loading the schema file.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("schema file not found: {path}")]
    FileMissing { path: String },

    #[error("failed to read schema file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
