use serde::{Deserialize, Serialize};

/// Maximum number of matched substrings kept per finding. Bounds response
/// size and limits how much sensitive payload a report can carry.
pub const MATCH_PREVIEW_LIMIT: usize = 5;

/// A detection produced by one rule that matched at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Name of the triggering rule (unique within the catalog).
    pub rule: String,
    /// Severity level, copied from the rule.
    pub severity: Severity,
    /// Recommended disposition, copied from the rule. Advisory only.
    pub action: Action,
    /// Classification tag, copied from the rule.
    pub category: Category,
    /// Total number of non-overlapping matches in the input.
    pub count: usize,
    /// First `MATCH_PREVIEW_LIMIT` matched substrings, in order of appearance.
    pub matches: Vec<String>,
}

impl Finding {
    /// Masked copies of the match previews, safe for console output and logs.
    pub fn masked_matches(&self) -> Vec<String> {
        self.matches.iter().map(|m| mask(m)).collect()
    }
}

/// Mask a matched substring for display: keep the first and last two
/// characters, replace the middle. Short matches are fully masked.
fn mask(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{head}****{tail}")
}

/// Ordered risk level. Serializes UPPERCASE on the wire; lowercase is
/// accepted on input so config files can write `fail_on = "high"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
    #[serde(alias = "critical")]
    Critical,
}

impl Severity {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" | "crit" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Recommended disposition for matched content. The scanner only reports;
/// enforcement belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Block,
    Quarantine,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Block => write!(f, "BLOCK"),
            Self::Quarantine => write!(f, "QUARANTINE"),
        }
    }
}

/// Classification tag grouping related rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "PII")]
    Pii,
    Financial,
    Classification,
    Credential,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pii => write!(f, "PII"),
            Self::Financial => write!(f, "Financial"),
            Self::Classification => write!(f, "Classification"),
            Self::Credential => write!(f, "Credential"),
        }
    }
}
