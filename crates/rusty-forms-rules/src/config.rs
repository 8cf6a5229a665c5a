// File: src/config.rs
// Purpose: Validator configuration parsing from TOML

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::form::CONDITION_ATTRIBUTE;

/// What to do with a condition naming a rule that is not registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownRulePolicy {
    /// Append the message formatted from the (absent) template, i.e. `""`
    #[default]
    Report,
    /// Ignore the condition
    Skip,
}

/// Validator configuration
///
/// ```toml
/// condition_attribute = "data-validation-condition"
/// unknown_rules = "report"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Attribute holding each field's raw condition string
    #[serde(default = "default_condition_attribute")]
    pub condition_attribute: String,

    #[serde(default)]
    pub unknown_rules: UnknownRulePolicy,
}

fn default_condition_attribute() -> String {
    CONDITION_ATTRIBUTE.to_string()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            condition_attribute: default_condition_attribute(),
            unknown_rules: UnknownRulePolicy::default(),
        }
    }
}

impl ValidatorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from a TOML file, falling back to defaults when it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path.as_ref()) {
            Err(Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.as_ref().display(), "No validator config, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn with_unknown_rules(mut self, policy: UnknownRulePolicy) -> Self {
        self.unknown_rules = policy;
        self
    }

    pub fn with_condition_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.condition_attribute = attribute.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.condition_attribute, "data-validation-condition");
        assert_eq!(config.unknown_rules, UnknownRulePolicy::Report);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ValidatorConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let config = ValidatorConfig::from_toml_str(
            r#"
            condition_attribute = "data-rules"
            unknown_rules = "skip"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.condition_attribute, "data-rules");
        assert_eq!(config.unknown_rules, UnknownRulePolicy::Skip);
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let err = ValidatorConfig::from_toml_str(r#"unknown_rules = "panic""#).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = std::env::temp_dir().join("rusty-forms-rules-does-not-exist.toml");
        let config = ValidatorConfig::load_or_default(&path).expect("defaults");
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("rusty-forms-rules-does-not-exist.toml");
        assert!(matches!(ValidatorConfig::load(&path), Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "rusty-forms-rules-config-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "unknown_rules = \"skip\"\n").expect("write temp config");

        let config = ValidatorConfig::load(&path).expect("load config");
        let _ = fs::remove_file(&path);

        assert_eq!(config.unknown_rules, UnknownRulePolicy::Skip);
        assert_eq!(config.condition_attribute, CONDITION_ATTRIBUTE);
    }

    #[test]
    fn test_builders() {
        let config = ValidatorConfig::default()
            .with_unknown_rules(UnknownRulePolicy::Skip)
            .with_condition_attribute("data-check");
        assert_eq!(config.unknown_rules, UnknownRulePolicy::Skip);
        assert_eq!(config.condition_attribute, "data-check");
    }
}
