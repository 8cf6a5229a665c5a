// File: src/registry.rs
// Purpose: Named rule predicates with their default message templates

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::builtin::BUILTIN_RULES;

/// A rule check: `(value, limit) -> passes`
pub type Predicate = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// A registered rule: its predicate and default message template
#[derive(Clone)]
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl Rule {
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Run the predicate
    pub fn check(&self, value: &str, limit: &str) -> bool {
        (self.predicate)(value, limit)
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Registry of rules keyed by name.
///
/// Predicates and messages are stored together, so registering a name always
/// replaces both. [`RuleRegistry::new`] starts empty; use
/// [`RuleRegistry::with_builtins`] for the four built-in rules.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registry pre-loaded with `min_char`, `max_char`, `min_age` and `max_age`
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, predicate, message) in BUILTIN_RULES {
            registry.insert(name, Rule::new(predicate, message));
        }
        registry
    }

    /// Register a rule, replacing any rule of the same name
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F, message: impl Into<String>)
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        self.insert(name, Rule::new(predicate, message));
    }

    /// Insert an already-built rule, returning the one it replaced
    pub fn insert(&mut self, name: impl Into<String>, rule: Rule) -> Option<Rule> {
        let name = name.into();
        let previous = self.rules.insert(name.clone(), rule);
        if previous.is_some() {
            tracing::debug!(rule = %name, "Replaced validation rule");
        } else {
            tracing::debug!(rule = %name, "Registered validation rule");
        }
        previous
    }

    /// Remove a rule; returns whether it was registered
    pub fn unregister(&mut self, name: &str) -> bool {
        self.rules.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn predicate(&self, name: &str) -> Option<&Predicate> {
        self.rules.get(name).map(Rule::predicate)
    }

    /// Default message template for a rule
    pub fn message(&self, name: &str) -> Option<&str> {
        self.rules.get(name).map(Rule::message)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
