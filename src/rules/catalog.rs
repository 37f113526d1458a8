//! The fixed detection rule catalog.
//!
//! Catalog order is the order findings appear in scan output; it carries no
//! evaluation priority beyond that. Rule ids and names are unique.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Action, Category, Severity};

/// A single detection rule. Configuration data, defined once at process
/// start and immutable thereafter.
#[derive(Debug)]
pub struct Rule {
    /// Stable identifier (e.g. "DLP-003"), used by policy ignore lists.
    pub id: &'static str,
    /// Human-readable name, unique within the catalog.
    pub name: &'static str,
    /// Compiled pattern. All non-overlapping occurrences are enumerated.
    pub pattern: Regex,
    pub severity: Severity,
    pub action: Action,
    pub category: Category,
}

static CATALOG: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule {
            id: "DLP-001",
            name: "HKID Number",
            // 1-2 uppercase letters, 6 digits, check digit (0-9 or A) in
            // parentheses, e.g. A123456(7).
            pattern: Regex::new(r"\b[A-Z]{1,2}[0-9]{6}\([0-9A]\)").unwrap(),
            severity: Severity::High,
            action: Action::Block,
            category: Category::Pii,
        },
        Rule {
            id: "DLP-002",
            name: "Credit Card Number",
            // 16-digit Visa / MasterCard (51-55, 2xxx) / Amex (34, 37) /
            // Discover (6011, 65xx) prefixes, optionally grouped in fours
            // with space or hyphen separators.
            pattern: Regex::new(
                r"\b(?:4[0-9]{3}|5[1-5][0-9]{2}|2[0-9]{3}|6011|65[0-9]{2}|3[47][0-9]{2})[-\s]?[0-9]{4}[-\s]?[0-9]{4}[-\s]?[0-9]{4}\b",
            )
            .unwrap(),
            severity: Severity::Critical,
            action: Action::Block,
            category: Category::Financial,
        },
        Rule {
            id: "DLP-003",
            name: "Email Address",
            pattern: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap(),
            severity: Severity::Medium,
            action: Action::Quarantine,
            category: Category::Pii,
        },
        Rule {
            id: "DLP-004",
            name: "Phone Number (HK)",
            // Optional +, 852 country code, two 4-digit groups with optional
            // separators.
            pattern: Regex::new(r"\+?852[-\s]?[0-9]{4}[-\s]?[0-9]{4}\b").unwrap(),
            severity: Severity::Medium,
            action: Action::Quarantine,
            category: Category::Pii,
        },
        Rule {
            id: "DLP-005",
            name: "SWIFT Code",
            // Bank (4 letters) + country (2 letters) + location (2 alnum) +
            // optional branch (3 alnum).
            pattern: Regex::new(r"\b[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}(?:[A-Z0-9]{3})?\b").unwrap(),
            severity: Severity::High,
            action: Action::Block,
            category: Category::Financial,
        },
        Rule {
            id: "DLP-006",
            name: "Bank Account Number",
            pattern: Regex::new(r"\b[0-9]{3}-[0-9]{3}-[0-9]{6,9}-[0-9]{3}\b").unwrap(),
            severity: Severity::Critical,
            action: Action::Block,
            category: Category::Financial,
        },
        Rule {
            id: "DLP-007",
            name: "Sensitive Keyword",
            // TOP SECRET listed before SECRET so the longer phrase wins at
            // the same start position (leftmost-first alternation).
            pattern: Regex::new(
                r"(?i)\b(?:TOP\s+SECRET|CONFIDENTIAL|SECRET|CLASSIFIED|RESTRICTED)\b",
            )
            .unwrap(),
            severity: Severity::High,
            action: Action::Block,
            category: Category::Classification,
        },
        Rule {
            id: "DLP-008",
            name: "Password in Text",
            pattern: Regex::new(r"(?i)\b(?:password|passwd|pwd)\s*[:=]\s*\S+").unwrap(),
            severity: Severity::Critical,
            action: Action::Block,
            category: Category::Credential,
        },
    ]
});

/// The full rule catalog, in evaluation order.
pub fn catalog() -> &'static [Rule] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_eight_rules() {
        assert_eq!(catalog().len(), 8);
    }

    #[test]
    fn rule_ids_and_names_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|r| r.id).collect();
        let names: HashSet<_> = catalog().iter().map(|r| r.name).collect();
        assert_eq!(ids.len(), catalog().len());
        assert_eq!(names.len(), catalog().len());
    }

    fn rule(name: &str) -> &'static Rule {
        catalog().iter().find(|r| r.name == name).unwrap()
    }

    fn all_matches(name: &str, text: &str) -> Vec<String> {
        rule(name)
            .pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    #[test]
    fn hkid_matches_standard_form() {
        assert_eq!(all_matches("HKID Number", "id A123456(7) on file"), vec!["A123456(7)"]);
        assert_eq!(all_matches("HKID Number", "AB987654(A)"), vec!["AB987654(A)"]);
        assert!(all_matches("HKID Number", "a123456(7)").is_empty());
        assert!(all_matches("HKID Number", "A12345(7)").is_empty());
    }

    #[test]
    fn credit_card_matches_major_networks() {
        assert_eq!(
            all_matches("Credit Card Number", "Card: 4111 1111 1111 1111"),
            vec!["4111 1111 1111 1111"]
        );
        assert_eq!(
            all_matches("Credit Card Number", "5500-0000-0000-0004"),
            vec!["5500-0000-0000-0004"]
        );
        assert_eq!(
            all_matches("Credit Card Number", "6011000000000004"),
            vec!["6011000000000004"]
        );
        // Unknown prefix
        assert!(all_matches("Credit Card Number", "9999 9999 9999 9999").is_empty());
    }

    #[test]
    fn email_requires_tld() {
        assert_eq!(
            all_matches("Email Address", "mail john.doe@example.com now"),
            vec!["john.doe@example.com"]
        );
        assert!(all_matches("Email Address", "john@localhost").is_empty());
    }

    #[test]
    fn hk_phone_accepts_separator_variants() {
        assert_eq!(all_matches("Phone Number (HK)", "+852 1234 5678"), vec!["+852 1234 5678"]);
        assert_eq!(all_matches("Phone Number (HK)", "852-9876-5432"), vec!["852-9876-5432"]);
        assert_eq!(all_matches("Phone Number (HK)", "85212345678"), vec!["85212345678"]);
    }

    #[test]
    fn swift_code_with_and_without_branch() {
        assert_eq!(all_matches("SWIFT Code", "pay via HSBCHKHH"), vec!["HSBCHKHH"]);
        assert_eq!(all_matches("SWIFT Code", "HSBCHKHHXXX ok"), vec!["HSBCHKHHXXX"]);
        assert!(all_matches("SWIFT Code", "hsbchkhh").is_empty());
    }

    #[test]
    fn bank_account_grouping() {
        assert_eq!(
            all_matches("Bank Account Number", "acct 123-456-789012-001"),
            vec!["123-456-789012-001"]
        );
        assert!(all_matches("Bank Account Number", "123-456-78901-001 short").is_empty());
    }

    #[test]
    fn keyword_is_whole_word_case_insensitive() {
        assert_eq!(all_matches("Sensitive Keyword", "this is Confidential"), vec!["Confidential"]);
        assert_eq!(all_matches("Sensitive Keyword", "TOP SECRET file"), vec!["TOP SECRET"]);
        // Substring inside a larger word does not count
        assert!(all_matches("Sensitive Keyword", "secretary").is_empty());
    }

    #[test]
    fn password_token_forms() {
        assert_eq!(
            all_matches("Password in Text", "password: abc123"),
            vec!["password: abc123"]
        );
        assert_eq!(all_matches("Password in Text", "PWD=hunter2"), vec!["PWD=hunter2"]);
        assert!(all_matches("Password in Text", "my password is safe").is_empty());
    }
}
