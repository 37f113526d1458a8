use crate::rules::policy::PolicyVerdict;
use crate::rules::Severity;
use crate::scanner::ScanResult;

/// Render a scan result as console output, one block per finding.
///
/// Match previews are masked: console reports end up in terminals, CI logs,
/// and pasted tickets, and the matched substrings are the sensitive data
/// the scan exists to catch.
pub fn render(result: &ScanResult, verdict: &PolicyVerdict) -> String {
    let mut output = String::new();

    if result.findings.is_empty() {
        output.push_str("\n  No sensitive content detected.\n\n");
        return output;
    }

    output.push_str(&format!(
        "\n  {} finding(s), {} match(es) detected:\n\n",
        result.findings.len(),
        result.total_matches
    ));

    for finding in &result.findings {
        let severity_tag = match finding.severity {
            Severity::Critical => "[CRITICAL]",
            Severity::High => "[HIGH]    ",
            Severity::Medium => "[MEDIUM]  ",
            Severity::Low => "[LOW]     ",
        };

        output.push_str(&format!(
            "  {} {} ({}, {} match(es), action: {})\n",
            severity_tag, finding.rule, finding.category, finding.count, finding.action
        ));
        output.push_str(&format!(
            "           preview: {}\n",
            finding.masked_matches().join(", ")
        ));
        output.push('\n');
    }

    let categories: Vec<String> = result.categories.iter().map(|c| c.to_string()).collect();
    output.push_str(&format!("  Categories: {}\n", categories.join(", ")));

    let status = if verdict.pass { "PASS" } else { "FAIL" };
    output.push_str(&format!(
        "  Result: {} (threshold: {}, highest: {})\n\n",
        status,
        verdict.fail_threshold,
        verdict
            .highest_severity
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".into()),
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::policy::Policy;
    use crate::scanner::Scanner;

    #[test]
    fn raw_matches_never_appear_in_console_output() {
        let result = Scanner::new()
            .scan("Contact me at john.doe@example.com")
            .unwrap();
        let verdict = Policy::default().evaluate(&result);
        let rendered = render(&result, &verdict);
        assert!(!rendered.contains("john.doe@example.com"));
        assert!(rendered.contains("jo****om"));
        assert!(rendered.contains("Email Address"));
    }

    #[test]
    fn clean_result_renders_short_message() {
        let result = Scanner::new().scan("Hello world").unwrap();
        let verdict = Policy::default().evaluate(&result);
        let rendered = render(&result, &verdict);
        assert!(rendered.contains("No sensitive content detected"));
    }

    #[test]
    fn verdict_line_reports_fail() {
        let result = Scanner::new().scan("password: hunter2").unwrap();
        let verdict = Policy::default().evaluate(&result);
        let rendered = render(&result, &verdict);
        assert!(rendered.contains("Result: FAIL"));
        assert!(rendered.contains("CRITICAL"));
    }
}
