// File: src/engine.rs
// Purpose: Evaluate every field's conditions against the rule registry and collect messages

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::conditions::{parse_conditions, ConditionSet};
use crate::config::{UnknownRulePolicy, ValidatorConfig};
use crate::form::Form;
use crate::message::{format_message, FIELD_NAME_TOKEN};
use crate::registry::{Rule, RuleRegistry};

/// One failed (field, rule) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub rule: String,
    pub limit: String,
    pub message: String,
}

/// Validates forms against a [`RuleRegistry`].
///
/// Every condition on every field is evaluated; nothing short-circuits, and
/// nothing here returns an error. Bad limits and values fail their rule,
/// malformed condition pairs are dropped while parsing, and unknown rules are
/// handled according to [`ValidatorConfig::unknown_rules`].
#[derive(Debug, Clone)]
pub struct FormValidator {
    registry: RuleRegistry,
    config: ValidatorConfig,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(RuleRegistry::with_builtins())
    }
}

impl FormValidator {
    pub fn new(registry: RuleRegistry) -> Self {
        Self::with_config(registry, ValidatorConfig::default())
    }

    pub fn with_config(registry: RuleRegistry, config: ValidatorConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Register (or replace) a rule and its default message
    pub fn register_validator<F>(&mut self, name: impl Into<String>, predicate: F, message: impl Into<String>)
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        self.registry.register(name, predicate, message);
    }

    /// All failure messages, in field order then condition order
    pub fn validate_form<F: Form + ?Sized>(&self, form: &F) -> Vec<String> {
        self.validate_form_detailed(form)
            .into_iter()
            .map(|error| error.message)
            .collect()
    }

    /// Like [`validate_form`](Self::validate_form), keeping the field and rule
    /// behind each message
    pub fn validate_form_detailed<F: Form + ?Sized>(&self, form: &F) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut checked = 0usize;

        for field in form.fields() {
            // Fields without the attribute are not part of validation
            let Some(raw) = field.attribute(&self.config.condition_attribute) else {
                continue;
            };
            checked += 1;
            errors.extend(self.validate_field(field.name(), field.value(), raw));
        }

        tracing::debug!(fields = checked, errors = errors.len(), "Validated form");
        errors
    }

    /// Validate a single value against a raw condition string
    pub fn validate_field<'a>(
        &self,
        name: &str,
        value: &str,
        raw_conditions: impl Into<Option<&'a str>>,
    ) -> Vec<FieldError> {
        let conditions = parse_conditions(raw_conditions);
        self.check_conditions(name, value, &conditions)
    }

    /// Validate a single value against already-parsed conditions
    pub fn check_conditions(&self, name: &str, value: &str, conditions: &ConditionSet) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for (rule_name, limit) in conditions.iter() {
            let rule = self.registry.get(rule_name);

            match rule {
                Some(rule) if rule.check(value, limit) => {
                    tracing::trace!(field = name, rule = rule_name, limit, "Condition passed");
                    continue;
                }
                Some(_) => {
                    tracing::trace!(field = name, rule = rule_name, limit, "Condition failed");
                }
                None if self.config.unknown_rules == UnknownRulePolicy::Skip => {
                    tracing::debug!(field = name, rule = rule_name, "Skipping unknown rule");
                    continue;
                }
                None => {
                    tracing::debug!(field = name, rule = rule_name, "Reporting unknown rule");
                }
            }

            errors.push(FieldError {
                field: name.to_string(),
                rule: rule_name.to_string(),
                limit: limit.to_string(),
                message: render(rule, rule_name, limit, name),
            });
        }

        errors
    }
}

// A missing rule has no template, so its message formats to "".
fn render(rule: Option<&Rule>, rule_name: &str, limit: &str, field_name: &str) -> String {
    let template = rule.map(Rule::message).unwrap_or_default();

    let params = HashMap::from([
        (rule_name.to_string(), limit.to_string()),
        (FIELD_NAME_TOKEN.to_string(), field_name.to_string()),
    ]);

    format_message(template, field_name, &params)
}
