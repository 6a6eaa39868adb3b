//! N+1 heuristics: controller fetch sites and view association access.
//!
//! The controller detector is a bounded-window heuristic. Eager loading
//! declared outside the window, or association use past the usage
//! window, goes undetected — an accepted precision/recall trade-off.
//! The windows are tunable through `AnalysisConfig`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use pgscout_core::config::AnalysisConfig;
use pgscout_core::{Finding, FindingKind, Severity};

use super::SourceAnalyzer;

/// A bare query-fetch call.
static FETCH_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(all|where|find_by|find)\b").expect("fetch pattern"));

/// An eager-loading call that defuses the heuristic.
static EAGER_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(includes|preload|eager_load)\b").expect("eager-load pattern")
});

/// Fetch result assigned to an instance variable.
static IVAR_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)\s*=").expect("assignment pattern"));

/// Two-level member access on an instance variable (`@var.a.b`).
static IVAR_CHAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)\.\w+\.\w+").expect("access chain pattern"));

/// Three-segment member-access chain in a template.
static VIEW_CHAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+\.\w+\.\w+").expect("view chain pattern"));

/// Controller N+1 detector.
///
/// A fetch with no eager loading nearby, assigned to an instance
/// variable that is later dereferenced two levels deep, is the signal
/// that an association is resolved per element.
pub struct ControllerNPlusOne {
    lookbehind: usize,
    lookahead: usize,
    usage_window: usize,
}

impl ControllerNPlusOne {
    pub fn new() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            lookbehind: config.effective_nplusone_lookbehind(),
            lookahead: config.effective_nplusone_lookahead(),
            usage_window: config.effective_nplusone_usage_window(),
        }
    }
}

impl Default for ControllerNPlusOne {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceAnalyzer for ControllerNPlusOne {
    fn id(&self) -> &'static str {
        "controller-n-plus-one"
    }

    fn analyze(&self, file: &Path, content: &str) -> Vec<Finding> {
        let lines: Vec<&str> = content.lines().collect();
        let mut findings = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            if !FETCH_CALL.is_match(line) {
                continue;
            }

            // Eager loading anywhere in the surrounding window defuses
            // the heuristic, including on the fetch line itself.
            let start = idx.saturating_sub(self.lookbehind);
            let end = (idx + self.lookahead + 1).min(lines.len());
            if lines[start..end].iter().any(|l| EAGER_CALL.is_match(l)) {
                continue;
            }

            let Some(var) = IVAR_ASSIGN.captures(line).map(|c| c[1].to_string()) else {
                continue;
            };

            // A two-level access on the same variable within the usage
            // window signals a per-element association dereference.
            let usage_end = (idx + 1 + self.usage_window).min(lines.len());
            let dereferenced = lines[idx + 1..usage_end]
                .iter()
                .any(|l| IVAR_CHAIN.captures_iter(l).any(|c| &c[1] == var.as_str()));

            if dereferenced {
                let line_number = (idx + 1) as u32;
                findings.push(Finding::source(
                    FindingKind::PotentialNPlusOne,
                    Severity::Warning,
                    file,
                    line_number,
                    format!(
                        "Potential N+1 query: Query at line {line_number} may need eager loading"
                    ),
                ));
            }
        }

        findings
    }
}

/// View association-access prompt.
///
/// A low-confidence nudge to verify eager loading was arranged upstream,
/// not a determination of an actual problem.
pub struct ViewAssociationAccess;

impl SourceAnalyzer for ViewAssociationAccess {
    fn id(&self) -> &'static str {
        "view-association-access"
    }

    fn analyze(&self, file: &Path, content: &str) -> Vec<Finding> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| VIEW_CHAIN.is_match(line))
            .map(|(idx, _)| {
                Finding::source(
                    FindingKind::ViewAssociationAccess,
                    Severity::Info,
                    file,
                    (idx + 1) as u32,
                    "Association access in view - verify eager loading in controller",
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_pattern_prefers_longer_alternatives() {
        let caps = FETCH_CALL.captures("User.find_by(email: e)").unwrap();
        assert_eq!(&caps[1], "find_by");
    }

    #[test]
    fn ivar_chain_requires_two_levels() {
        assert!(IVAR_CHAIN.is_match("@post.user.name"));
        assert!(!IVAR_CHAIN.is_match("@post.user"));
    }
}
