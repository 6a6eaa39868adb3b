//! Error handling for pgscout.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod pipeline_error;
pub mod project_error;
pub mod scan_error;
pub mod schema_error;

pub use config_error::ConfigError;
pub use pipeline_error::{PipelineError, ScanOutcome};
pub use project_error::ProjectError;
pub use scan_error::ScanError;
pub use schema_error::SchemaError;
