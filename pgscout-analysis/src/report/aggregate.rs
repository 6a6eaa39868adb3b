//! Finding aggregation: dedup, kind/severity grouping, counts.
//!
//! The aggregator imposes the only ordering the pipeline guarantees:
//! findings partition by kind in enumeration order, and warnings sort
//! before info within each group. Input order is irrelevant, which
//! makes the whole pipeline idempotent over unchanged input.

use rustc_hash::FxHashSet;

use pgscout_core::{Finding, FindingKind, Severity};

/// Aggregated findings, partitioned by kind, warnings first within each
/// group.
#[derive(Debug, Default)]
pub struct FindingSet {
    groups: Vec<(FindingKind, Vec<Finding>)>,
}

impl FindingSet {
    /// Collect raw analyzer output in any order.
    ///
    /// Analyzer-defined dedup keys are applied before counting, so
    /// repeated WHERE-clause observations collapse here even across
    /// analyzer invocations.
    pub fn collect(findings: impl IntoIterator<Item = Finding>) -> Self {
        let mut seen_keys: FxHashSet<String> = FxHashSet::default();
        let mut buckets: Vec<Vec<Finding>> = (0..FindingKind::ALL.len()).map(|_| Vec::new()).collect();

        for finding in findings {
            if let Some(key) = finding.dedup_key() {
                if !seen_keys.insert(key) {
                    continue;
                }
            }
            buckets[finding.kind.ordinal()].push(finding);
        }

        let mut groups = Vec::new();
        for (kind, mut bucket) in FindingKind::ALL.into_iter().zip(buckets) {
            if bucket.is_empty() {
                continue;
            }
            // Stable sort: analyzer emission order survives within a
            // severity level.
            bucket.sort_by_key(|f| f.severity);
            groups.push((kind, bucket));
        }
        Self { groups }
    }

    /// Non-empty groups in report order.
    pub fn groups(&self) -> impl Iterator<Item = (FindingKind, &[Finding])> {
        self.groups.iter().map(|(kind, bucket)| (*kind, bucket.as_slice()))
    }

    /// Findings of one kind (empty slice when none were reported).
    pub fn of_kind(&self, kind: FindingKind) -> &[Finding] {
        self.groups
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, bucket)| bucket.as_slice())
            .unwrap_or(&[])
    }

    /// Flat view over every finding, in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.groups.iter().flat_map(|(_, bucket)| bucket.iter())
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, bucket)| bucket.len()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.iter().filter(|f| f.severity == Severity::Warning).count()
    }

    pub fn has_warnings(&self) -> bool {
        self.iter().any(|f| f.severity == Severity::Warning)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
