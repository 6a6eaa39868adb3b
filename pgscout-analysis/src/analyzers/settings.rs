//! Connection-settings analyzers over the database configuration record.
//!
//! Each check inspects one environment's settings and never mutates
//! them. Several checks only apply to production, matching how the
//! corresponding risks actually bite.

use pgscout_core::config::ConnectionSettings;
use pgscout_core::{Finding, FindingKind, Severity};

use super::SettingsAnalyzer;

/// Pool sizes below this are flagged as small.
const POOL_SMALL: i64 = 5;

/// Pool sizes above this are flagged as large.
const POOL_LARGE: i64 = 20;

/// Connection pool sizing.
pub struct ConnectionPool;

impl SettingsAnalyzer for ConnectionPool {
    fn id(&self) -> &'static str {
        "connection-pool"
    }

    fn analyze(&self, environment: &str, settings: &ConnectionSettings) -> Vec<Finding> {
        let mut findings = Vec::new();
        if settings.pool.is_none() {
            findings.push(
                Finding::setting(
                    FindingKind::ConnectionPoolSize,
                    Severity::Warning,
                    environment,
                    "pool",
                    "Connection pool size not explicitly set (defaults to 5)",
                )
                .with_suggestion(
                    "Set pool size based on your application threads/workers. For Puma with 5 threads: pool: 5",
                ),
            );
        } else if let Some(size) = settings.pool_size() {
            // Non-integer pools (unstripped ERB leftovers) are not judged.
            if size < POOL_SMALL {
                findings.push(
                    Finding::setting(
                        FindingKind::ConnectionPoolSize,
                        Severity::Warning,
                        environment,
                        "pool",
                        format!("Connection pool size ({size}) is quite small"),
                    )
                    .with_suggestion(
                        "Consider increasing pool size to match your web server threads/workers",
                    ),
                );
            } else if size > POOL_LARGE {
                findings.push(
                    Finding::setting(
                        FindingKind::ConnectionPoolSize,
                        Severity::Info,
                        environment,
                        "pool",
                        format!("Connection pool size ({size}) is quite large"),
                    )
                    .with_suggestion(
                        "Verify this matches your actual concurrency needs. Too many connections can strain PostgreSQL",
                    ),
                );
            }
        }
        findings
    }
}

/// Statement, connect, and checkout timeouts.
pub struct Timeouts;

impl SettingsAnalyzer for Timeouts {
    fn id(&self) -> &'static str {
        "timeouts"
    }

    fn analyze(&self, environment: &str, settings: &ConnectionSettings) -> Vec<Finding> {
        let mut findings = Vec::new();

        if !settings.has_statement_timeout() {
            findings.push(
                Finding::setting(
                    FindingKind::StatementTimeout,
                    Severity::Warning,
                    environment,
                    "statement_timeout",
                    "statement_timeout not configured",
                )
                .with_suggestion(
                    "Add to database.yml:\n  variables:\n    statement_timeout: 30000  # 30 seconds in milliseconds",
                ),
            );
        }

        if settings.connect_timeout.is_none() {
            findings.push(
                Finding::setting(
                    FindingKind::ConnectTimeout,
                    Severity::Info,
                    environment,
                    "connect_timeout",
                    "connect_timeout not configured",
                )
                .with_suggestion(
                    "Add connect_timeout: 5 to prevent hanging on database connection issues",
                ),
            );
        }

        if settings.checkout_timeout.is_none() {
            findings.push(
                Finding::setting(
                    FindingKind::CheckoutTimeout,
                    Severity::Info,
                    environment,
                    "checkout_timeout",
                    "checkout_timeout not configured (defaults to 5 seconds)",
                )
                .with_suggestion("Explicitly set checkout_timeout: 5 for clarity"),
            );
        }

        findings
    }
}

/// Prepared-statements usage.
pub struct PreparedStatements;

impl SettingsAnalyzer for PreparedStatements {
    fn id(&self) -> &'static str {
        "prepared-statements"
    }

    fn analyze(&self, environment: &str, settings: &ConnectionSettings) -> Vec<Finding> {
        let mut findings = Vec::new();
        if settings.prepared_statements_flag() == Some(false) {
            findings.push(
                Finding::setting(
                    FindingKind::PreparedStatements,
                    Severity::Info,
                    environment,
                    "prepared_statements",
                    "Prepared statements are disabled",
                )
                .with_suggestion(
                    "Prepared statements improve performance. Only disable if using PgBouncer in transaction mode",
                ),
            );
        } else if settings.prepared_statements.is_none() && environment == "production" {
            findings.push(
                Finding::setting(
                    FindingKind::PreparedStatements,
                    Severity::Info,
                    environment,
                    "prepared_statements",
                    "Prepared statements setting not explicit",
                )
                .with_suggestion(
                    "Add prepared_statements: true for better query performance (enabled by default)",
                ),
            );
        }
        findings
    }
}

/// Stale-connection reaping, production only.
pub struct ReapingFrequency;

impl SettingsAnalyzer for ReapingFrequency {
    fn id(&self) -> &'static str {
        "reaping-frequency"
    }

    fn analyze(&self, environment: &str, settings: &ConnectionSettings) -> Vec<Finding> {
        let mut findings = Vec::new();
        if settings.reaping_frequency.is_none() && environment == "production" {
            findings.push(
                Finding::setting(
                    FindingKind::ReapingFrequency,
                    Severity::Info,
                    environment,
                    "reaping_frequency",
                    "reaping_frequency not configured",
                )
                .with_suggestion(
                    "Consider adding reaping_frequency: 60 to clean up stale connections (seconds)",
                ),
            );
        }
        findings
    }
}

/// SSL/TLS enforcement, production only.
pub struct SslConfiguration;

impl SettingsAnalyzer for SslConfiguration {
    fn id(&self) -> &'static str {
        "ssl-configuration"
    }

    fn analyze(&self, environment: &str, settings: &ConnectionSettings) -> Vec<Finding> {
        let mut findings = Vec::new();
        if environment == "production" {
            let enforced = matches!(settings.sslmode_str(), Some(mode) if !mode.is_empty() && mode != "disable");
            if !enforced {
                findings.push(
                    Finding::setting(
                        FindingKind::SslConfiguration,
                        Severity::Warning,
                        environment,
                        "sslmode",
                        "SSL/TLS not enforced for production database connections",
                    )
                    .with_suggestion(
                        "Add sslmode: require or sslmode: verify-full for secure connections",
                    ),
                );
            }
        }
        findings
    }
}

/// Run-wide extension suggestions, independent of any environment.
pub fn extension_suggestions() -> Vec<Finding> {
    vec![Finding::setting(
        FindingKind::PerformanceExtension,
        Severity::Info,
        "all",
        "extensions",
        "Consider enabling pg_stat_statements extension",
    )
    .with_suggestion(
        "Enable in PostgreSQL config:\n  shared_preload_libraries = 'pg_stat_statements'\nThen run: CREATE EXTENSION IF NOT EXISTS pg_stat_statements;",
    )]
}
