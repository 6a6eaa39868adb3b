//! Tests for the schema-based index analyzers.

use pgscout_analysis::analyzers::indexes::{BooleanIndexOpportunity, MissingForeignKeyIndex};
use pgscout_analysis::analyzers::SchemaAnalyzer;
use pgscout_analysis::parse_schema;
use pgscout_core::{FindingKind, FindingLocation, Severity};

#[test]
fn test_unindexed_foreign_key_reported_once() {
    let model = parse_schema(
        r#"
  create_table "posts" do |t|
    t.integer "user_id"
  end
"#,
    );
    let findings = MissingForeignKeyIndex.analyze(&model);
    assert_eq!(findings.len(), 1);

    let finding = &findings[0];
    assert_eq!(finding.kind, FindingKind::MissingForeignKeyIndex);
    assert_eq!(finding.severity, Severity::Warning);
    assert_eq!(
        finding.location,
        FindingLocation::Column {
            table: "posts".to_string(),
            column: "user_id".to_string(),
        }
    );
    // Suggestion names the exact table/column pair verbatim.
    assert_eq!(
        finding.suggestion.as_deref(),
        Some("add_index :posts, :user_id")
    );
}

#[test]
fn test_indexed_foreign_key_not_reported() {
    let model = parse_schema(
        r#"
  create_table "posts" do |t|
    t.integer "user_id"
  end

  add_index "posts", "user_id"
"#,
    );
    assert!(MissingForeignKeyIndex.analyze(&model).is_empty());
}

#[test]
fn test_every_unindexed_foreign_key_reported() {
    let model = parse_schema(
        r#"
  create_table "comments" do |t|
    t.integer "post_id"
    t.integer "user_id"
  end

  add_index "comments", "post_id"
"#,
    );
    let findings = MissingForeignKeyIndex.analyze(&model);
    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].location,
        FindingLocation::Column {
            table: "comments".to_string(),
            column: "user_id".to_string(),
        }
    );
}

#[test]
fn test_unindexed_boolean_column_reported() {
    let model = parse_schema(
        r#"
  create_table "users" do |t|
    t.boolean "is_active"
    t.string "name"
  end
"#,
    );
    let findings = BooleanIndexOpportunity.analyze(&model);
    assert_eq!(findings.len(), 1);

    let finding = &findings[0];
    assert_eq!(finding.kind, FindingKind::BooleanIndexOpportunity);
    assert_eq!(finding.severity, Severity::Info);
    assert_eq!(
        finding.suggestion.as_deref(),
        Some("add_index :users, :is_active, where: \"is_active = true\"")
    );
}

#[test]
fn test_indexed_boolean_column_not_reported() {
    let model = parse_schema(
        r#"
  create_table "users" do |t|
    t.boolean "is_active"
  end

  add_index "users", "is_active"
"#,
    );
    assert!(BooleanIndexOpportunity.analyze(&model).is_empty());
}

#[test]
fn test_conventional_boolean_names_reported() {
    let model = parse_schema(
        r#"
  create_table "articles" do |t|
    t.boolean "published"
    t.boolean "deleted"
    t.string "title"
  end
"#,
    );
    let findings = BooleanIndexOpportunity.analyze(&model);
    assert_eq!(findings.len(), 2);
}

#[test]
fn test_empty_model_yields_no_findings() {
    let model = parse_schema("");
    assert!(MissingForeignKeyIndex.analyze(&model).is_empty());
    assert!(BooleanIndexOpportunity.analyze(&model).is_empty());
}
