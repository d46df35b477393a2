//! Configuration types for lintframe.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::types::Severity;

/// Top-level configuration, usually loaded from `lintframe.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable experimental rules that are not explicitly configured.
    #[serde(default)]
    pub include_experimental: bool,

    /// Glob patterns excluded from directory walks.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// File extensions picked up from directory walks.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_experimental: false,
            exclude: default_exclude(),
            extensions: default_extensions(),
            rules: HashMap::new(),
        }
    }
}

fn default_exclude() -> Vec<String> {
    vec!["**/target/**".to_string(), "**/.git/**".to_string()]
}

fn default_extensions() -> Vec<String> {
    vec!["rs".to_string()]
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Explicit enable/disable for a rule, if configured.
    #[must_use]
    pub fn rule_enabled(&self, rule_name: &str) -> Option<bool> {
        self.rules.get(rule_name).and_then(|c| c.enabled)
    }

    /// Checks if a rule is enabled (rules are enabled unless disabled).
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rule_enabled(rule_name).unwrap_or(true)
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Gets the configuration block for a rule.
    #[must_use]
    pub fn rule(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }

    /// Gets an integer option with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.options
            .get(key)
            .and_then(toml::Value::as_integer)
            .unwrap_or(default)
    }

    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.options
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.include_experimental);
        assert!(config.rules.is_empty());
        assert_eq!(config.extensions, ["rs"]);
        assert!(config.is_rule_enabled("Anything"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
include_experimental = true
extensions = ["rs", "txt"]

[rules.LineLength]
enabled = true
severity = "error"
max = 100

[rules.TrailingWhitespace]
enabled = false
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert!(config.include_experimental);
        assert_eq!(config.extensions, ["rs", "txt"]);
        assert_eq!(config.exclude, default_exclude());
        assert!(config.is_rule_enabled("LineLength"));
        assert!(!config.is_rule_enabled("TrailingWhitespace"));
        assert_eq!(config.rule_enabled("AvoidUnwrap"), None);
        assert_eq!(config.rule_severity("LineLength"), Some(Severity::Error));

        let rule = config.rule("LineLength").unwrap();
        assert_eq!(rule.get_int("max", 80), 100);
        assert_eq!(rule.get_int("missing", 80), 80);
        assert!(rule.get_bool("missing", true));
        assert_eq!(rule.get_str("missing", "x"), "x");
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("rules = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lintframe.toml");
        std::fs::write(&path, "[rules.LineLength]\nmax = 120\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.rule("LineLength").unwrap().get_int("max", 80), 120);

        let missing = Config::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
