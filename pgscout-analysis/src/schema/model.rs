//! In-memory schema model.
//!
//! Built once per analysis run and read-only to every analyzer. The
//! model captures structure as it appears in the source text; it does
//! not enforce referential correctness.

use rustc_hash::FxHashMap;
use serde::Serialize;

/// A single table captured from the schema file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Table {
    pub name: String,
    /// Column names in declaration order.
    pub columns: Vec<String>,
    /// Columns recognized as foreign-key-shaped (`*_id` naming convention).
    pub foreign_keys: Vec<String>,
    /// Columns with a declared index.
    pub indexed: Vec<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn has_index_on(&self, column: &str) -> bool {
        self.indexed.iter().any(|c| c == column)
    }
}

/// Mapping from table name to its captured structure.
///
/// Tables keep first-encounter order; redeclaring a table name replaces
/// the earlier entry in place (last wins).
#[derive(Debug, Clone, Default)]
pub struct SchemaModel {
    tables: Vec<Table>,
    by_name: FxHashMap<String, usize>,
}

impl SchemaModel {
    pub fn insert(&mut self, table: Table) {
        match self.by_name.get(&table.name) {
            Some(&i) => self.tables[i] = table,
            None => {
                self.by_name.insert(table.name.clone(), self.tables.len());
                self.tables.push(table);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Table> {
        self.by_name.get(name).map(|&i| &self.tables[i])
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.by_name.get(name).map(|&i| &mut self.tables[i])
    }

    /// Tables in first-encounter order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
