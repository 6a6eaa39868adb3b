//! Analysis engine: schema parser, rule engine, source scanner, and
//! finding aggregation.
//!
//! Everything here is a pure computation over already-read text. The
//! scanner is the only module that touches the filesystem, and it
//! tolerates per-file failures without aborting the run.

pub mod analyzers;
pub mod report;
pub mod scanner;
pub mod schema;

pub use report::aggregate::FindingSet;
pub use schema::{load_schema, parse_schema, SchemaModel};
