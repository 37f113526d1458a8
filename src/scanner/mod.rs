//! The scan operation: evaluate the rule catalog against one input string.
//!
//! A scan is a pure function of the immutable catalog and its input. It holds
//! no mutable state, performs no I/O, and may run concurrently from any
//! number of threads. Matched substrings are sensitive by definition and are
//! never emitted through tracing; events carry rule ids and counts only.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Result, ScanError};
use crate::rules::{catalog, Category, Finding, Rule, MATCH_PREVIEW_LIMIT};

/// Default cap on scannable content size. Regex matching here is linear in
/// input length, but unbounded attacker-controlled input is still a cost
/// concern; callers can raise or lower the cap via config.
pub const DEFAULT_MAX_CONTENT_BYTES: usize = 1024 * 1024;

/// Result of scanning one piece of content.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// True iff at least one rule matched.
    pub detected: bool,
    /// Sum of `count` across all findings.
    pub total_matches: usize,
    /// One finding per rule that matched, in catalog order.
    pub findings: Vec<Finding>,
    /// Distinct categories across findings, first-seen order.
    pub categories: Vec<Category>,
    /// Wall-clock scan duration. Observability only; two scans of the same
    /// input are equal in every other field.
    pub elapsed: Duration,
}

impl ScanResult {
    /// Short descriptor of how the result was produced, including timing.
    /// This is the `method` field of the wire response.
    pub fn method_descriptor(&self) -> String {
        format!("regex-catalog ({:.2}ms)", self.elapsed.as_secs_f64() * 1000.0)
    }
}

/// Stateless scanner over the static rule catalog.
pub struct Scanner {
    rules: &'static [Rule],
    max_content_bytes: usize,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            rules: catalog(),
            max_content_bytes: DEFAULT_MAX_CONTENT_BYTES,
        }
    }

    /// Override the content size cap (from `[limits]` config).
    pub fn with_max_content_bytes(mut self, max: usize) -> Self {
        self.max_content_bytes = max;
        self
    }

    /// Scan `content` against every catalog rule.
    ///
    /// Empty content is an input error, not an empty result. Oversized
    /// content is rejected before any matching happens; there are no
    /// partial results.
    pub fn scan(&self, content: &str) -> Result<ScanResult> {
        if content.is_empty() {
            return Err(ScanError::EmptyContent);
        }
        if content.len() > self.max_content_bytes {
            return Err(ScanError::ContentTooLarge {
                limit: self.max_content_bytes,
                actual: content.len(),
            });
        }

        let start = Instant::now();
        let mut findings = Vec::new();
        let mut total_matches = 0usize;
        let mut categories: Vec<Category> = Vec::new();

        for rule in self.rules {
            let mut count = 0usize;
            let mut matches = Vec::new();
            for m in rule.pattern.find_iter(content) {
                count += 1;
                if matches.len() < MATCH_PREVIEW_LIMIT {
                    matches.push(m.as_str().to_string());
                }
            }
            if count == 0 {
                continue;
            }

            debug!(rule = rule.id, count, "rule matched");
            total_matches += count;
            if !categories.contains(&rule.category) {
                categories.push(rule.category);
            }
            findings.push(Finding {
                rule: rule.name.to_string(),
                severity: rule.severity,
                action: rule.action,
                category: rule.category,
                count,
                matches,
            });
        }

        let elapsed = start.elapsed();
        debug!(
            rules = self.rules.len(),
            findings = findings.len(),
            total_matches,
            elapsed_us = elapsed.as_micros() as u64,
            "scan complete"
        );

        Ok(ScanResult {
            detected: !findings.is_empty(),
            total_matches,
            findings,
            categories,
            elapsed,
        })
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Action, Severity};
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_input_yields_no_findings() {
        let result = Scanner::new().scan("Hello world").unwrap();
        assert!(!result.detected);
        assert!(result.findings.is_empty());
        assert_eq!(result.total_matches, 0);
        assert!(result.categories.is_empty());
    }

    #[test]
    fn email_scenario() {
        let result = Scanner::new()
            .scan("Contact me at john.doe@example.com")
            .unwrap();
        assert!(result.detected);
        assert_eq!(result.findings.len(), 1);
        let f = &result.findings[0];
        assert_eq!(f.rule, "Email Address");
        assert_eq!(f.count, 1);
        assert_eq!(f.matches, vec!["john.doe@example.com"]);
        assert_eq!(f.severity, Severity::Medium);
        assert_eq!(f.action, Action::Quarantine);
        assert_eq!(result.categories, vec![Category::Pii]);
    }

    #[test]
    fn credit_card_scenario() {
        let result = Scanner::new().scan("Card: 4111 1111 1111 1111").unwrap();
        assert!(result.detected);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].rule, "Credit Card Number");
        assert_eq!(result.findings[0].count, 1);
        assert_eq!(result.categories, vec![Category::Financial]);
    }

    #[test]
    fn memo_scenario_two_findings() {
        let result = Scanner::new()
            .scan("This memo is CONFIDENTIAL, password: abc123")
            .unwrap();
        assert_eq!(result.findings.len(), 2);
        assert_eq!(result.total_matches, 2);
        assert_eq!(result.findings[0].rule, "Sensitive Keyword");
        assert_eq!(result.findings[1].rule, "Password in Text");
        assert!(result.categories.contains(&Category::Classification));
        assert!(result.categories.contains(&Category::Credential));
        assert_eq!(result.categories.len(), 2);
    }

    #[test]
    fn empty_content_is_an_input_error() {
        let err = Scanner::new().scan("").unwrap_err();
        assert!(matches!(err, ScanError::EmptyContent));
        assert!(err.is_input_error());
    }

    #[test]
    fn oversized_content_is_rejected_before_matching() {
        let scanner = Scanner::new().with_max_content_bytes(16);
        let err = scanner.scan("a@b.co plus padding beyond the cap").unwrap_err();
        assert!(matches!(err, ScanError::ContentTooLarge { limit: 16, .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn match_preview_is_capped_at_five() {
        let content = (0..8)
            .map(|i| format!("user{i}@example.com"))
            .collect::<Vec<_>>()
            .join(" ");
        let result = Scanner::new().scan(&content).unwrap();
        let f = &result.findings[0];
        assert_eq!(f.count, 8);
        assert_eq!(f.matches.len(), 5);
        assert_eq!(f.matches[0], "user0@example.com");
        assert_eq!(f.matches[4], "user4@example.com");
    }

    #[test]
    fn findings_follow_catalog_order() {
        // Password (DLP-008) placed before email (DLP-003) in the input;
        // output order still follows the catalog.
        let result = Scanner::new()
            .scan("pwd=hunter2 then mail root@example.org")
            .unwrap();
        assert_eq!(result.findings[0].rule, "Email Address");
        assert_eq!(result.findings[1].rule, "Password in Text");
    }

    #[test]
    fn categories_deduplicated_across_rules() {
        // Email and HK phone are both PII.
        let result = Scanner::new()
            .scan("a@b.co and +852 1234 5678")
            .unwrap();
        assert_eq!(result.findings.len(), 2);
        assert_eq!(result.categories, vec![Category::Pii]);
    }

    #[test]
    fn scan_is_idempotent_modulo_timing() {
        let scanner = Scanner::new();
        let input = "HKID A123456(7), acct 123-456-789012-001";
        let a = scanner.scan(input).unwrap();
        let b = scanner.scan(input).unwrap();
        assert_eq!(a.detected, b.detected);
        assert_eq!(a.total_matches, b.total_matches);
        assert_eq!(a.findings, b.findings);
        assert_eq!(a.categories, b.categories);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Structural invariants hold for arbitrary input.
            #[test]
            fn totals_and_caps(content in ".{1,400}") {
                let result = Scanner::new().scan(&content).unwrap();
                let sum: usize = result.findings.iter().map(|f| f.count).sum();
                prop_assert_eq!(result.total_matches, sum);
                prop_assert_eq!(result.detected, !result.findings.is_empty());
                for f in &result.findings {
                    prop_assert!(f.count >= 1);
                    prop_assert!(f.matches.len() <= MATCH_PREVIEW_LIMIT);
                    prop_assert!(f.matches.len() <= f.count);
                }
                let mut seen = Vec::new();
                for c in &result.categories {
                    prop_assert!(!seen.contains(c));
                    seen.push(*c);
                }
            }

            #[test]
            fn idempotent_for_arbitrary_input(content in ".{1,400}") {
                let scanner = Scanner::new();
                let a = scanner.scan(&content).unwrap();
                let b = scanner.scan(&content).unwrap();
                prop_assert_eq!(a.findings, b.findings);
                prop_assert_eq!(a.total_matches, b.total_matches);
            }
        }
    }
}
