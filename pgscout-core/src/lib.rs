//! Core types for pgscout: the findings model, error taxonomy,
//! configuration records, and project-root discovery.
//!
//! Analysis logic lives in `pgscout-analysis`; this crate only defines
//! what analyzers consume and produce.

pub mod config;
pub mod errors;
pub mod findings;
pub mod project;

pub use findings::{Finding, FindingKind, FindingLocation, Severity};
