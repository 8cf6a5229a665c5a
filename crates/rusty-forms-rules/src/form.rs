// File: src/form.rs
// Purpose: Read-only view of form fields (name, value, attributes) consumed by the validator

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

/// Attribute carrying a field's raw condition string
pub const CONDITION_ATTRIBUTE: &str = "data-validation-condition";

/// A single input as seen by the validator.
///
/// Implement this for whatever your UI layer uses to represent inputs; the
/// validator only ever reads through it.
pub trait Field {
    /// Name used in messages (`{field_name}`)
    fn name(&self) -> &str;

    /// Current value
    fn value(&self) -> &str;

    /// Raw attribute value, `None` when the attribute is not set
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl<T: Field + ?Sized> Field for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn value(&self) -> &str {
        (**self).value()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }
}

/// Anything that can enumerate its fields in document order
pub trait Form {
    fn fields(&self) -> Vec<&dyn Field>;
}

impl<F: Field> Form for [F] {
    fn fields(&self) -> Vec<&dyn Field> {
        self.iter().map(|f| f as &dyn Field).collect()
    }
}

impl<F: Field> Form for Vec<F> {
    fn fields(&self) -> Vec<&dyn Field> {
        self.as_slice().fields()
    }
}

/// Owned form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    pub name: String,

    #[serde(default)]
    pub value: String,

    /// Raw attributes, e.g. `data-validation-condition`
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl InputField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the `data-validation-condition` attribute
    pub fn with_conditions(self, conditions: impl Into<String>) -> Self {
        self.with_attribute(CONDITION_ATTRIBUTE, conditions)
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl Field for InputField {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Ordered collection of inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlForm {
    #[serde(default)]
    pub fields: Vec<InputField>,
}

impl HtmlForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a form snapshot from JSON:
    /// `{"fields": [{"name": "age", "value": "15", "attributes": {...}}]}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn push(&mut self, field: InputField) {
        self.fields.push(field);
    }

    pub fn with_field(mut self, field: InputField) -> Self {
        self.push(field);
        self
    }

    /// First field with the given name
    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut InputField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }
}

impl Form for HtmlForm {
    fn fields(&self) -> Vec<&dyn Field> {
        self.fields.fields()
    }
}

impl FromIterator<InputField> for HtmlForm {
    fn from_iter<I: IntoIterator<Item = InputField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
