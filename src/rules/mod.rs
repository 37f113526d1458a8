pub mod catalog;
pub mod finding;
pub mod policy;

use serde::{Deserialize, Serialize};

pub use catalog::{catalog, Rule};
pub use finding::{Action, Category, Finding, Severity, MATCH_PREVIEW_LIMIT};

/// Metadata about a catalog rule, used for `list-rules` output. The compiled
/// pattern is rendered back to its source string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMetadata {
    pub id: String,
    pub name: String,
    pub pattern: String,
    pub severity: Severity,
    pub action: Action,
    pub category: Category,
}

/// List metadata for every rule in the catalog, in catalog order.
pub fn list_rules() -> Vec<RuleMetadata> {
    catalog()
        .iter()
        .map(|r| RuleMetadata {
            id: r.id.to_string(),
            name: r.name.to_string(),
            pattern: r.pattern.as_str().to_string(),
            severity: r.severity,
            action: r.action,
            category: r.category,
        })
        .collect()
}
