//! Finding aggregation and report rendering.

pub mod aggregate;
pub mod console;
pub mod json;

pub use aggregate::FindingSet;
pub use console::ConsoleReporter;
pub use json::JsonReport;
