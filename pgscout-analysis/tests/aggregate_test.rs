//! Tests for finding aggregation and report rendering.

use std::path::Path;

use pgscout_analysis::report::{ConsoleReporter, JsonReport};
use pgscout_analysis::FindingSet;
use pgscout_core::{Finding, FindingKind, Severity};

fn fk_finding(table: &str, column: &str) -> Finding {
    Finding::column(
        FindingKind::MissingForeignKeyIndex,
        Severity::Warning,
        table,
        column,
        format!("Foreign key {column} on {table} should have an index"),
    )
    .with_suggestion(format!("add_index :{table}, :{column}"))
}

fn boolean_finding(table: &str, column: &str) -> Finding {
    Finding::column(
        FindingKind::BooleanIndexOpportunity,
        Severity::Info,
        table,
        column,
        format!("Boolean column {column} on {table} might benefit from a partial index"),
    )
}

fn where_finding(file: &str, column: &str) -> Finding {
    Finding::query(
        FindingKind::WhereClauseColumn,
        Severity::Info,
        Path::new(file),
        column,
        format!("Column \"{column}\" used in WHERE clause"),
    )
}

#[test]
fn test_groups_follow_kind_order_regardless_of_input_order() {
    let set = FindingSet::collect(vec![
        where_finding("app/models/post.rb", "status"),
        boolean_finding("users", "is_active"),
        fk_finding("posts", "user_id"),
    ]);

    let kinds: Vec<FindingKind> = set.groups().map(|(kind, _)| kind).collect();
    assert_eq!(
        kinds,
        vec![
            FindingKind::MissingForeignKeyIndex,
            FindingKind::BooleanIndexOpportunity,
            FindingKind::WhereClauseColumn,
        ]
    );
}

#[test]
fn test_warnings_sort_before_info_within_a_group() {
    let warning = Finding::setting(
        FindingKind::ConnectionPoolSize,
        Severity::Warning,
        "development",
        "pool",
        "small",
    );
    let info = Finding::setting(
        FindingKind::ConnectionPoolSize,
        Severity::Info,
        "production",
        "pool",
        "large",
    );
    let set = FindingSet::collect(vec![info.clone(), warning.clone()]);

    let group = set.of_kind(FindingKind::ConnectionPoolSize);
    assert_eq!(group[0], warning);
    assert_eq!(group[1], info);
}

#[test]
fn test_where_findings_dedup_across_files_with_same_stem() {
    let set = FindingSet::collect(vec![
        where_finding("app/models/post.rb", "status"),
        where_finding("app/controllers/post.rb", "status"),
        where_finding("app/models/post.rb", "author_id"),
    ]);
    assert_eq!(set.of_kind(FindingKind::WhereClauseColumn).len(), 2);
}

#[test]
fn test_counts_and_warning_detection() {
    let set = FindingSet::collect(vec![
        fk_finding("posts", "user_id"),
        boolean_finding("users", "is_active"),
    ]);
    assert_eq!(set.total(), 2);
    assert_eq!(set.warning_count(), 1);
    assert!(set.has_warnings());

    let calm = FindingSet::collect(vec![boolean_finding("users", "is_active")]);
    assert!(!calm.has_warnings());
}

#[test]
fn test_aggregation_is_idempotent_over_identical_input() {
    let input = || {
        vec![
            fk_finding("posts", "user_id"),
            where_finding("app/models/post.rb", "status"),
            boolean_finding("users", "is_active"),
        ]
    };
    let first: Vec<Finding> = FindingSet::collect(input()).iter().cloned().collect();
    let second: Vec<Finding> = FindingSet::collect(input()).iter().cloned().collect();
    assert_eq!(first, second);
}

#[test]
fn test_empty_input_renders_clean_report() {
    let set = FindingSet::collect(Vec::new());
    assert!(set.is_empty());
    let rendered = ConsoleReporter::new().render(&set);
    assert!(rendered.contains("No issues detected"));
}

#[test]
fn test_boolean_preview_caps_listing_but_not_count() {
    let findings: Vec<Finding> = (0..7)
        .map(|i| boolean_finding("users", &format!("is_flag{i}")))
        .collect();
    let set = FindingSet::collect(findings);
    let rendered = ConsoleReporter::new().render(&set);

    // Full count in the heading, five itemized, overflow summarized.
    assert!(rendered.contains("BOOLEAN COLUMN INDEXING OPPORTUNITIES (7)"));
    assert!(rendered.contains("users.is_flag4"));
    assert!(!rendered.contains("users.is_flag5"));
    assert!(rendered.contains("… and 2 more"));
}

#[test]
fn test_where_preview_lists_unique_sorted_columns() {
    let findings: Vec<Finding> = (0..12)
        .map(|i| where_finding(&format!("app/models/m{i:02}.rb"), &format!("col{i:02}")))
        .collect();
    let set = FindingSet::collect(findings);
    let rendered = ConsoleReporter::new().render(&set);

    assert!(rendered.contains("COLUMNS USED IN WHERE CLAUSES (12 columns)"));
    assert!(rendered.contains("• col00"));
    assert!(rendered.contains("• col09"));
    assert!(!rendered.contains("• col10\n"));
    assert!(rendered.contains("… and 2 more"));
}

#[test]
fn test_suggestions_render_indented() {
    let set = FindingSet::collect(vec![fk_finding("posts", "user_id")]);
    let rendered = ConsoleReporter::new().render(&set);
    assert!(rendered.contains("💡 add_index :posts, :user_id"));
}

#[test]
fn test_json_report_carries_full_counts_and_findings() {
    let set = FindingSet::collect(vec![
        fk_finding("posts", "user_id"),
        boolean_finding("users", "is_active"),
    ]);
    let json = JsonReport::from_set(&set).render().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["total"], 2);
    assert_eq!(value["warnings"], 1);
    assert_eq!(value["findings"][0]["kind"], "missing_foreign_key_index");
    assert_eq!(value["findings"][0]["severity"], "warning");
    assert_eq!(value["findings"][0]["location"]["scope"], "column");
    assert_eq!(value["findings"][0]["location"]["table"], "posts");
}
