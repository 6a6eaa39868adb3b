//! Configuration: tool tuning (`pgscout.toml`) and the database
//! configuration record the settings analyzers inspect.

pub mod analysis_config;
pub mod database;
pub mod scout_config;

pub use analysis_config::AnalysisConfig;
pub use database::{ConnectionSettings, DatabaseConfig, ANALYZED_ENVIRONMENTS};
pub use scout_config::ScoutConfig;
