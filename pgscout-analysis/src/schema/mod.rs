//! Schema subsystem — parses the schema DSL into a structured model.

pub mod model;
pub mod parser;

pub use model::{SchemaModel, Table};
pub use parser::{load_schema, parse_schema};
