//! Rusty Forms Rules
//!
//! Declarative form validation driven by condition attributes.
//!
//! Each field carries a raw condition string such as
//! `data-validation-condition="{min_char:3 max_char:6}"`. The validator parses
//! it into rule/limit pairs, runs each named rule against the field's value and
//! formats a message for every rule that fails.
//!
//! ```
//! use rusty_forms_rules::{FormValidator, InputField};
//!
//! let form = vec![
//!     InputField::new("age", "15").with_conditions("min_age:18"),
//!     InputField::new("bio", "0123456789").with_conditions("min_char:3,max_char:6"),
//! ];
//!
//! let errors = FormValidator::default().validate_form(&form);
//! assert_eq!(errors, vec![
//!     "age must be at least 18",
//!     "bio must be at most 6 characters",
//! ]);
//! ```
//!
//! Custom rules are registered by name together with a default message:
//!
//! ```
//! use rusty_forms_rules::{FormValidator, InputField};
//!
//! let mut validator = FormValidator::default();
//! validator.register_validator("required", |value: &str, _: &str| !value.is_empty(), "{field_name} is required");
//!
//! let form = vec![InputField::new("email", "").with_conditions("required:true")];
//! assert_eq!(validator.validate_form(&form), vec!["email is required"]);
//! ```

pub mod builtin;
pub mod conditions;
pub mod config;
pub mod engine;
pub mod error;
pub mod form;
pub mod global;
pub mod message;
pub mod numeric;
pub mod registry;

pub use conditions::{parse_conditions, ConditionSet};
pub use config::{UnknownRulePolicy, ValidatorConfig};
pub use engine::{FieldError, FormValidator};
pub use error::{Error, Result};
pub use form::{Field, Form, HtmlForm, InputField, CONDITION_ATTRIBUTE};
pub use global::{register_validator, validate_form};
pub use message::format_message;
pub use registry::{Predicate, Rule, RuleRegistry};
