use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Finding, Severity};
use crate::scanner::ScanResult;

/// Policy verdict — the pass/fail decision after applying the ignore list
/// and severity threshold to scan findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyVerdict {
    pub pass: bool,
    pub total_findings: usize,
    pub effective_findings: usize,
    pub highest_severity: Option<Severity>,
    pub fail_threshold: Severity,
}

/// Policy configuration loaded from `.leakscan.toml`. The rule catalog's
/// `action` field stays advisory; policy only decides the exit status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Minimum severity at which a scan fails.
    #[serde(default = "default_fail_on")]
    pub fail_on: Severity,
    /// Rule ids to ignore entirely (e.g. "DLP-007").
    #[serde(default)]
    pub ignore_rules: HashSet<String>,
}

fn default_fail_on() -> Severity {
    Severity::High
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            fail_on: Severity::High,
            ignore_rules: HashSet::new(),
        }
    }
}

impl Policy {
    fn is_ignored(&self, finding: &Finding) -> bool {
        crate::rules::catalog()
            .iter()
            .find(|r| r.name == finding.rule)
            .is_some_and(|r| self.ignore_rules.contains(r.id))
    }

    /// Evaluate a scan result against this policy and produce a verdict.
    pub fn evaluate(&self, result: &ScanResult) -> PolicyVerdict {
        let effective: Vec<Severity> = result
            .findings
            .iter()
            .filter(|f| !self.is_ignored(f))
            .map(|f| f.severity)
            .collect();

        let highest = effective.iter().copied().max();
        let failed = effective.iter().any(|&sev| sev >= self.fail_on);

        PolicyVerdict {
            pass: !failed,
            total_findings: result.findings.len(),
            effective_findings: effective.len(),
            highest_severity: highest,
            fail_threshold: self.fail_on,
        }
    }

    /// Filter findings: remove ignored rules.
    pub fn apply(&self, findings: &[Finding]) -> Vec<Finding> {
        findings
            .iter()
            .filter(|f| !self.is_ignored(f))
            .cloned()
            .collect()
    }
}
