//! Console reporter — human-readable report with preview caps.
//!
//! Long groups are truncated for display; counts are always full. This
//! is a volume-control policy, not data loss.

use pgscout_core::config::AnalysisConfig;
use pgscout_core::{Finding, FindingKind, FindingLocation, Severity};

use super::aggregate::FindingSet;

/// Renders findings grouped by kind, warnings first within each group.
pub struct ConsoleReporter {
    boolean_preview: usize,
    where_preview: usize,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            boolean_preview: config.effective_boolean_preview(),
            where_preview: config.effective_where_preview(),
        }
    }

    pub fn render(&self, set: &FindingSet) -> String {
        let mut out = String::new();

        out.push_str("╔══════════════════════════════════════════╗\n");
        out.push_str("║          pgscout Analysis Report         ║\n");
        out.push_str("╚══════════════════════════════════════════╝\n\n");

        if set.is_empty() {
            out.push_str("✓ No issues detected\n");
            return out;
        }

        for (kind, findings) in set.groups() {
            if kind == FindingKind::WhereClauseColumn {
                self.render_where_group(&mut out, findings);
            } else {
                self.render_group(&mut out, kind, findings);
            }
        }

        out.push_str(&format!(
            "─── Summary: {} findings, {} warnings ───\n",
            set.total(),
            set.warning_count()
        ));
        out
    }

    fn render_group(&self, out: &mut String, kind: FindingKind, findings: &[Finding]) {
        let symbol = if findings.iter().any(|f| f.severity == Severity::Warning) {
            "⚠"
        } else {
            "ℹ"
        };
        out.push_str(&format!("{symbol} {} ({})\n", kind.heading(), findings.len()));

        let cap = self.cap_for(kind);
        for finding in findings.iter().take(cap) {
            out.push_str(&format!(
                "  {}: {}\n",
                format_location(&finding.location),
                finding.message
            ));
            if let Some(ref suggestion) = finding.suggestion {
                for (i, line) in suggestion.lines().enumerate() {
                    if i == 0 {
                        out.push_str(&format!("    💡 {line}\n"));
                    } else {
                        out.push_str(&format!("       {line}\n"));
                    }
                }
            }
        }
        if findings.len() > cap {
            out.push_str(&format!("  … and {} more\n", findings.len() - cap));
        }
        out.push('\n');
    }

    /// WHERE-clause findings display as unique column names rather than
    /// call sites.
    fn render_where_group(&self, out: &mut String, findings: &[Finding]) {
        let mut columns: Vec<&str> = findings
            .iter()
            .filter_map(|f| match &f.location {
                FindingLocation::Query { column, .. } => Some(column.as_str()),
                _ => None,
            })
            .collect();
        columns.sort_unstable();
        columns.dedup();

        out.push_str(&format!(
            "ℹ {} ({} columns)\n",
            FindingKind::WhereClauseColumn.heading(),
            columns.len()
        ));
        out.push_str("  Consider adding indexes to these columns if queries are slow:\n");
        for column in columns.iter().take(self.where_preview) {
            out.push_str(&format!("  • {column}\n"));
        }
        if columns.len() > self.where_preview {
            out.push_str(&format!("  • … and {} more\n", columns.len() - self.where_preview));
        }
        out.push('\n');
    }

    fn cap_for(&self, kind: FindingKind) -> usize {
        match kind {
            FindingKind::BooleanIndexOpportunity => self.boolean_preview,
            _ => usize::MAX,
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_location(location: &FindingLocation) -> String {
    match location {
        FindingLocation::Column { table, column } => format!("{table}.{column}"),
        FindingLocation::Query { file, column } => {
            format!("{} ({column})", file.display())
        }
        FindingLocation::Source { file, line } => format!("{}:{line}", file.display()),
        FindingLocation::Setting {
            environment,
            setting,
        } => format!("[{environment}] {setting}"),
    }
}
