//! Schema DSL parser.
//!
//! Best-effort, pattern-per-entity extraction: table blocks, column
//! declarations, and index statements are matched independently rather
//! than through a grammar. Unrecognized text is ignored — the model
//! under-approximates rather than failing on syntax this parser does
//! not cover.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use pgscout_core::errors::SchemaError;

use super::model::{SchemaModel, Table};

/// `create_table "name" ... do |t| ... end`. Blocks do not nest in the
/// schema DSL, so a single non-greedy span per block is sufficient.
static TABLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)create_table\s+"(\w+)".*?do\s*\|t\|(.*?)end"#)
        .expect("table block pattern")
});

/// `t.<type> "name"` — captures the column regardless of declared type.
static COLUMN_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"t\.(\w+)\s+"(\w+)""#).expect("column pattern"));

/// Declared columns ending in `_id` are treated as foreign-key-shaped.
/// A naming-convention heuristic, not a constraint check.
static FOREIGN_KEY_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"t\.\w+\s+"(\w+_id)""#).expect("foreign key pattern"));

/// `add_index "table", "column"` or `add_index "table", ["col", ...]`.
/// Only the first column of a multi-column index is recorded.
static INDEX_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"add_index\s+"(\w+)",\s+\[?"(\w+)"?\]?"#).expect("index pattern")
});

/// Parse schema text into a model. Never fails: unmatched regions are
/// simply absent from the model.
pub fn parse_schema(content: &str) -> SchemaModel {
    let mut model = SchemaModel::default();

    for block in TABLE_BLOCK.captures_iter(content) {
        let body = &block[2];
        let mut table = Table::new(&block[1]);
        for col in COLUMN_DECL.captures_iter(body) {
            table.columns.push(col[2].to_string());
        }
        for fk in FOREIGN_KEY_DECL.captures_iter(body) {
            table.foreign_keys.push(fk[1].to_string());
        }
        model.insert(table);
    }

    // Index statements are matched across the whole file, then merged
    // into tables already in the model. Statements naming tables absent
    // from the model are skipped.
    for idx in INDEX_DECL.captures_iter(content) {
        if let Some(table) = model.get_mut(&idx[1]) {
            table.indexed.push(idx[2].to_string());
        }
    }

    model
}

/// Read and parse a schema file.
pub fn load_schema(path: &Path) -> Result<SchemaModel, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SchemaError::FileMissing {
                path: path.display().to_string(),
            }
        } else {
            SchemaError::Unreadable {
                path: path.display().to_string(),
                source,
            }
        }
    })?;
    Ok(parse_schema(&content))
}
