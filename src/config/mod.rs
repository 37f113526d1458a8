use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::policy::Policy;
use crate::scanner::DEFAULT_MAX_CONTENT_BYTES;

/// Top-level configuration from `.leakscan.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: Policy,
    #[serde(default)]
    pub limits: Limits,
}

/// Resource limits applied before scanning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Largest content size the scanner will accept, in bytes.
    #[serde(default = "default_max_content_bytes")]
    pub max_content_bytes: usize,
}

fn default_max_content_bytes() -> usize {
    DEFAULT_MAX_CONTENT_BYTES
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_content_bytes: DEFAULT_MAX_CONTENT_BYTES,
        }
    }
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# leakscan configuration

[policy]
# Minimum severity at which a scan fails (low, medium, high, critical).
fail_on = "high"

# Rule ids to ignore entirely.
# ignore_rules = ["DLP-007"]

[limits]
# Largest content size the scanner accepts, in bytes.
max_content_bytes = 1048576
"#
    }
}
