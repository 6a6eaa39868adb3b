//! JSON reporter — machine-readable report payload.

use serde::Serialize;

use pgscout_core::Finding;

use super::aggregate::FindingSet;

/// The serialized report: full counts plus every finding in report
/// order. Preview caps do not apply here.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub total: usize,
    pub warnings: usize,
    pub findings: Vec<&'a Finding>,
}

impl<'a> JsonReport<'a> {
    pub fn from_set(set: &'a FindingSet) -> Self {
        Self {
            total: set.total(),
            warnings: set.warning_count(),
            findings: set.iter().collect(),
        }
    }

    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
