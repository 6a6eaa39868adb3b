//! WHERE-clause column analyzer.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;

use pgscout_core::{Finding, FindingKind, Severity};

use super::SourceAnalyzer;

/// `.where(column: value)` — keyword-argument filter.
static WHERE_KWARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.where\(\s*(\w+):\s*").expect("kwarg filter pattern"));

/// `.where("column = ?")` — raw-condition filter.
static WHERE_RAW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\.where\(["'](\w+)\s*="#).expect("raw filter pattern"));

/// Reports columns referenced in query filters.
///
/// One finding per (file, column): repeated filters on the same column
/// within a file collapse to a single observation, bounding output
/// volume without losing per-file granularity.
pub struct WhereClauseColumns;

impl SourceAnalyzer for WhereClauseColumns {
    fn id(&self) -> &'static str {
        "where-clause-columns"
    }

    fn analyze(&self, file: &Path, content: &str) -> Vec<Finding> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut findings = Vec::new();
        for pattern in [&*WHERE_KWARG, &*WHERE_RAW] {
            for caps in pattern.captures_iter(content) {
                let column = &caps[1];
                if !seen.insert(column.to_string()) {
                    continue;
                }
                findings.push(Finding::query(
                    FindingKind::WhereClauseColumn,
                    Severity::Info,
                    file,
                    column,
                    format!(
                        "Column \"{column}\" used in WHERE clause - consider indexing if queries are slow"
                    ),
                ));
            }
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_filter_shapes_are_matched() {
        assert_eq!(
            WHERE_KWARG.captures(".where(status: 'active')").map(|c| c[1].to_string()),
            Some("status".to_string())
        );
        assert_eq!(
            WHERE_RAW.captures(".where(\"status = ?\", x)").map(|c| c[1].to_string()),
            Some("status".to_string())
        );
    }

    #[test]
    fn repeated_filters_collapse_within_a_file() {
        let content = "Post.where(status: 'a')\nPost.where(status: 'b')\n";
        let findings =
            WhereClauseColumns.analyze(Path::new("app/models/post.rb"), content);
        assert_eq!(findings.len(), 1);
    }
}
