// Configuration for how failures are rendered

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Append a diff when two lists or maps are not equal
    #[serde(default = "default_diff")]
    pub diff: bool,

    /// Colorize diffs with ANSI styles
    #[serde(default)]
    pub color: bool,

    /// Truncate rendered values to this many characters (0 = unlimited)
    #[serde(default)]
    pub max_value_len: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            diff: default_diff(),
            color: false,
            max_value_len: 0,
        }
    }
}

fn default_diff() -> bool {
    true
}

impl Config {
    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to render config as TOML")
    }

    /// Shorten `text` to the configured limit, marking the cut
    pub fn truncate(&self, text: String) -> String {
        let limit = self.output.max_value_len;
        if limit == 0 || text.chars().count() <= limit {
            return text;
        }

        let mut cut: String = text.chars().take(limit).collect();
        cut.push_str("...<truncated>");
        cut
    }
}
