//! leakscan — rule-based DLP content scanner.
//!
//! Evaluates a fixed catalog of eight detection rules (HKID, credit card,
//! email, HK phone, SWIFT, bank account, sensitive keyword, password-in-text)
//! against submitted text and reports findings with severity, recommended
//! action, and category. Detection only; nothing is blocked or redacted.
//!
//! # Quick Start
//!
//! ```
//! use leakscan::{scan_content, ScanOptions};
//!
//! let report = scan_content("Contact me at john.doe@example.com", &ScanOptions::default()).unwrap();
//! println!("detected: {}, findings: {}", report.result.detected, report.result.findings.len());
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod output;
pub mod rules;
pub mod scanner;

use std::path::{Path, PathBuf};

use config::Config;
use error::Result;
use output::OutputFormat;
use rules::policy::PolicyVerdict;
use scanner::{ScanResult, Scanner};

/// Options for a scan invocation.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Path to config file (defaults to `.leakscan.toml` in the working dir).
    pub config_path: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// CLI override for the fail_on threshold.
    pub fail_on_override: Option<rules::Severity>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            format: OutputFormat::Console,
            fail_on_override: None,
        }
    }
}

/// Complete scan report: the scan result plus the policy verdict.
#[derive(Debug)]
pub struct ScanReport {
    pub result: ScanResult,
    pub verdict: PolicyVerdict,
}

/// Run a complete scan: load config, scan content, evaluate policy.
///
/// The scanner itself is pure; config only supplies the content size cap and
/// the policy applied on top of the findings.
pub fn scan_content(content: &str, options: &ScanOptions) -> Result<ScanReport> {
    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(|| Path::new(".leakscan.toml").to_path_buf());
    let mut config = Config::load(&config_path)?;

    if let Some(fail_on) = options.fail_on_override {
        config.policy.fail_on = fail_on;
    }

    let scanner = Scanner::new().with_max_content_bytes(config.limits.max_content_bytes);
    let result = scanner.scan(content)?;
    let verdict = config.policy.evaluate(&result);

    // Drop ignored findings and recompute the summary so the reported
    // result keeps its internal invariants (totalMatches = sum of counts).
    let findings = config.policy.apply(&result.findings);
    let total_matches = findings.iter().map(|f| f.count).sum();
    let mut categories = Vec::new();
    for f in &findings {
        if !categories.contains(&f.category) {
            categories.push(f.category);
        }
    }

    Ok(ScanReport {
        result: ScanResult {
            detected: !findings.is_empty(),
            total_matches,
            findings,
            categories,
            elapsed: result.elapsed,
        },
        verdict,
    })
}

/// Render a scan report in the specified format.
pub fn render_report(report: &ScanReport, format: OutputFormat) -> Result<String> {
    output::render(&report.result, &report.verdict, format)
}
