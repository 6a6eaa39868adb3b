//! Finding model — the unit of analyzer output.
//!
//! A `Finding` is an immutable value object: a typed, severity-tagged,
//! located observation with an optional literal remediation suggestion.
//! Findings have no identity beyond their content.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Severity of a finding. Warnings fail the N+1 entry point; everything
/// else is advisory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed enumeration of everything the analyzers can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    MissingForeignKeyIndex,
    BooleanIndexOpportunity,
    WhereClauseColumn,
    PotentialNPlusOne,
    ViewAssociationAccess,
    ConnectionPoolSize,
    StatementTimeout,
    ConnectTimeout,
    CheckoutTimeout,
    PreparedStatements,
    ReapingFrequency,
    SslConfiguration,
    PerformanceExtension,
}

impl FindingKind {
    /// Every kind, in report order.
    pub const ALL: [FindingKind; 13] = [
        FindingKind::MissingForeignKeyIndex,
        FindingKind::BooleanIndexOpportunity,
        FindingKind::WhereClauseColumn,
        FindingKind::PotentialNPlusOne,
        FindingKind::ViewAssociationAccess,
        FindingKind::ConnectionPoolSize,
        FindingKind::StatementTimeout,
        FindingKind::ConnectTimeout,
        FindingKind::CheckoutTimeout,
        FindingKind::PreparedStatements,
        FindingKind::ReapingFrequency,
        FindingKind::SslConfiguration,
        FindingKind::PerformanceExtension,
    ];

    /// Position in report order.
    pub fn ordinal(&self) -> usize {
        match self {
            FindingKind::MissingForeignKeyIndex => 0,
            FindingKind::BooleanIndexOpportunity => 1,
            FindingKind::WhereClauseColumn => 2,
            FindingKind::PotentialNPlusOne => 3,
            FindingKind::ViewAssociationAccess => 4,
            FindingKind::ConnectionPoolSize => 5,
            FindingKind::StatementTimeout => 6,
            FindingKind::ConnectTimeout => 7,
            FindingKind::CheckoutTimeout => 8,
            FindingKind::PreparedStatements => 9,
            FindingKind::ReapingFrequency => 10,
            FindingKind::SslConfiguration => 11,
            FindingKind::PerformanceExtension => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::MissingForeignKeyIndex => "missing_foreign_key_index",
            FindingKind::BooleanIndexOpportunity => "boolean_index_opportunity",
            FindingKind::WhereClauseColumn => "where_clause_column",
            FindingKind::PotentialNPlusOne => "potential_n_plus_one",
            FindingKind::ViewAssociationAccess => "view_association_access",
            FindingKind::ConnectionPoolSize => "connection_pool_size",
            FindingKind::StatementTimeout => "statement_timeout",
            FindingKind::ConnectTimeout => "connect_timeout",
            FindingKind::CheckoutTimeout => "checkout_timeout",
            FindingKind::PreparedStatements => "prepared_statements",
            FindingKind::ReapingFrequency => "reaping_frequency",
            FindingKind::SslConfiguration => "ssl_configuration",
            FindingKind::PerformanceExtension => "performance_extension",
        }
    }

    /// Section heading used by the console reporter.
    pub fn heading(&self) -> &'static str {
        match self {
            FindingKind::MissingForeignKeyIndex => "MISSING FOREIGN KEY INDEXES",
            FindingKind::BooleanIndexOpportunity => "BOOLEAN COLUMN INDEXING OPPORTUNITIES",
            FindingKind::WhereClauseColumn => "COLUMNS USED IN WHERE CLAUSES",
            FindingKind::PotentialNPlusOne => "POTENTIAL N+1 QUERIES",
            FindingKind::ViewAssociationAccess => "ASSOCIATION ACCESS IN VIEWS",
            FindingKind::ConnectionPoolSize => "CONNECTION POOL SIZE",
            FindingKind::StatementTimeout => "STATEMENT TIMEOUT",
            FindingKind::ConnectTimeout => "CONNECT TIMEOUT",
            FindingKind::CheckoutTimeout => "CHECKOUT TIMEOUT",
            FindingKind::PreparedStatements => "PREPARED STATEMENTS",
            FindingKind::ReapingFrequency => "CONNECTION REAPING",
            FindingKind::SslConfiguration => "SSL CONFIGURATION",
            FindingKind::PerformanceExtension => "PERFORMANCE EXTENSIONS",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a finding points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum FindingLocation {
    /// Schema-derived: a table/column pair.
    Column { table: String, column: String },
    /// Query-derived: a column referenced from a source file.
    Query { file: PathBuf, column: String },
    /// Source-derived: a file position.
    Source { file: PathBuf, line: u32 },
    /// Configuration-derived: an environment/setting pair.
    Setting { environment: String, setting: String },
}

/// A single analyzer observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub location: FindingLocation,
}

impl Finding {
    pub fn column(
        kind: FindingKind,
        severity: Severity,
        table: impl Into<String>,
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            suggestion: None,
            location: FindingLocation::Column {
                table: table.into(),
                column: column.into(),
            },
        }
    }

    pub fn query(
        kind: FindingKind,
        severity: Severity,
        file: &Path,
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            suggestion: None,
            location: FindingLocation::Query {
                file: file.to_path_buf(),
                column: column.into(),
            },
        }
    }

    pub fn source(
        kind: FindingKind,
        severity: Severity,
        file: &Path,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            suggestion: None,
            location: FindingLocation::Source {
                file: file.to_path_buf(),
                line,
            },
        }
    }

    pub fn setting(
        kind: FindingKind,
        severity: Severity,
        environment: impl Into<String>,
        setting: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            suggestion: None,
            location: FindingLocation::Setting {
                environment: environment.into(),
                setting: setting.into(),
            },
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Explicit dedup key, where the emitting analyzer defines one.
    ///
    /// WHERE-clause findings collapse to one per (file stem, column) so
    /// repeated filters on the same column do not flood the report.
    pub fn dedup_key(&self) -> Option<String> {
        match (&self.kind, &self.location) {
            (FindingKind::WhereClauseColumn, FindingLocation::Query { file, column }) => {
                let stem = file
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Some(format!("{stem}:{column}"))
            }
            _ => None,
        }
    }
}
