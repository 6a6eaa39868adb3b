//! Schema-based index analyzers.

use pgscout_core::{Finding, FindingKind, Severity};

use super::SchemaAnalyzer;
use crate::schema::SchemaModel;

/// Conventional boolean column names checked in addition to the
/// `is_`/`has_` prefixes.
const BOOLEAN_NAMES: [&str; 4] = ["active", "enabled", "published", "deleted"];

/// Flags foreign-key-shaped columns that have no declared index.
///
/// Unindexed foreign keys are a common source of slow joins and slow
/// cascading deletes. Composite or partial indexes the parser
/// under-captures show up as false positives here.
pub struct MissingForeignKeyIndex;

impl SchemaAnalyzer for MissingForeignKeyIndex {
    fn id(&self) -> &'static str {
        "missing-foreign-key-index"
    }

    fn analyze(&self, model: &SchemaModel) -> Vec<Finding> {
        let mut findings = Vec::new();
        for table in model.tables() {
            for fk in &table.foreign_keys {
                if table.has_index_on(fk) {
                    continue;
                }
                findings.push(
                    Finding::column(
                        FindingKind::MissingForeignKeyIndex,
                        Severity::Warning,
                        &table.name,
                        fk,
                        format!("Foreign key {fk} on {} should have an index", table.name),
                    )
                    .with_suggestion(format!("add_index :{}, :{fk}", table.name)),
                );
            }
        }
        findings
    }
}

/// Flags unindexed boolean-looking columns as partial-index candidates.
///
/// Boolean columns have low cardinality, so a full index is wasteful but
/// a partial index on the minority value is often worth having. This is
/// directional guidance, not a guarantee.
pub struct BooleanIndexOpportunity;

impl SchemaAnalyzer for BooleanIndexOpportunity {
    fn id(&self) -> &'static str {
        "boolean-index-opportunity"
    }

    fn analyze(&self, model: &SchemaModel) -> Vec<Finding> {
        let mut findings = Vec::new();
        for table in model.tables() {
            for column in &table.columns {
                if !is_boolean_shaped(column) || table.has_index_on(column) {
                    continue;
                }
                findings.push(
                    Finding::column(
                        FindingKind::BooleanIndexOpportunity,
                        Severity::Info,
                        &table.name,
                        column,
                        format!(
                            "Boolean column {column} on {} might benefit from a partial index",
                            table.name
                        ),
                    )
                    .with_suggestion(format!(
                        "add_index :{}, :{column}, where: \"{column} = true\"",
                        table.name
                    )),
                );
            }
        }
        findings
    }
}

fn is_boolean_shaped(column: &str) -> bool {
    column.starts_with("is_") || column.starts_with("has_") || BOOLEAN_NAMES.contains(&column)
}
