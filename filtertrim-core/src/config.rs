use crate::error::{Result, TrimError};
use crate::types::RuleLimit;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Default value functions for serde
fn default_max_rules() -> RuleLimit {
    RuleLimit::default()
}

fn default_comment_prefixes() -> Vec<String> {
    vec!["!".to_string(), "#".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimConfig {
    /// Rules kept below the header; negative keeps all but the last N
    #[serde(default = "default_max_rules")]
    pub max_rules: RuleLimit,
    /// Lines starting with any of these are comments
    #[serde(default = "default_comment_prefixes")]
    pub comment_prefixes: Vec<String>,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            max_rules: default_max_rules(),
            comment_prefixes: default_comment_prefixes(),
        }
    }
}

impl TrimConfig {
    /// Load config from a YAML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TrimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| TrimError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                log::warn!("{e}; using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn with_max_rules(self, max_rules: usize) -> Self {
        self.with_rule_limit(RuleLimit::keep_first(max_rules))
    }

    pub fn with_rule_limit(mut self, max_rules: RuleLimit) -> Self {
        self.max_rules = max_rules;
        self
    }
}
