//! Rule engine — independent analyzers over the schema model, raw
//! source text, and connection settings.
//!
//! Analyzers never share mutable state and may run in any order; the
//! aggregator imposes the only ordering that matters. Absence of
//! matches yields zero findings, never an error.

pub mod indexes;
pub mod nplusone;
pub mod queries;
pub mod settings;

use std::path::Path;

use pgscout_core::config::{ConnectionSettings, DatabaseConfig, ANALYZED_ENVIRONMENTS};
use pgscout_core::Finding;

use crate::schema::SchemaModel;

/// An analyzer over the structured schema model.
pub trait SchemaAnalyzer {
    fn id(&self) -> &'static str;
    fn analyze(&self, model: &SchemaModel) -> Vec<Finding>;
}

/// An analyzer over a single source file's raw content.
pub trait SourceAnalyzer: Sync {
    fn id(&self) -> &'static str;
    fn analyze(&self, file: &Path, content: &str) -> Vec<Finding>;
}

/// An analyzer over one environment's connection settings.
pub trait SettingsAnalyzer {
    fn id(&self) -> &'static str;
    fn analyze(&self, environment: &str, settings: &ConnectionSettings) -> Vec<Finding>;
}

/// Every schema-based analyzer, in report order.
pub fn schema_analyzers() -> Vec<Box<dyn SchemaAnalyzer>> {
    vec![
        Box::new(indexes::MissingForeignKeyIndex),
        Box::new(indexes::BooleanIndexOpportunity),
    ]
}

/// Every connection-settings analyzer, in report order.
pub fn settings_analyzers() -> Vec<Box<dyn SettingsAnalyzer>> {
    vec![
        Box::new(settings::ConnectionPool),
        Box::new(settings::Timeouts),
        Box::new(settings::PreparedStatements),
        Box::new(settings::ReapingFrequency),
        Box::new(settings::SslConfiguration),
    ]
}

/// Run every schema analyzer against the model.
pub fn analyze_schema(model: &SchemaModel) -> Vec<Finding> {
    schema_analyzers()
        .iter()
        .flat_map(|analyzer| analyzer.analyze(model))
        .collect()
}

/// Run every settings analyzer against each analyzed environment, then
/// append the run-wide extension suggestions.
pub fn analyze_database_config(config: &DatabaseConfig) -> Vec<Finding> {
    let analyzers = settings_analyzers();
    let mut findings = Vec::new();
    for env in ANALYZED_ENVIRONMENTS {
        let Some(settings) = config.environment(env) else {
            continue;
        };
        for analyzer in &analyzers {
            findings.extend(analyzer.analyze(env, settings));
        }
    }
    findings.extend(settings::extension_suggestions());
    findings
}
