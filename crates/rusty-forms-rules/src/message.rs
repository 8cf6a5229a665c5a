// File: src/message.rs
// Purpose: Fill `{field_name}` and `{rule}` tokens in message templates

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Token name that always resolves to the field being validated
pub const FIELD_NAME_TOKEN: &str = "field_name";

static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap());

/// Format a message template.
///
/// `{field_name}` becomes `field_name`; any other `{identifier}` is looked up
/// in `params` and replaced with its value, or with nothing when the key is
/// absent or empty. Substitution is one left-to-right pass, so braces inside
/// a substituted value are left as they are.
///
/// ```
/// use std::collections::HashMap;
/// use rusty_forms_rules::format_message;
///
/// let params = HashMap::from([("min_age".to_string(), "18".to_string())]);
/// let message = format_message("{field_name} must be at least {min_age}", "age", &params);
/// assert_eq!(message, "age must be at least 18");
/// ```
pub fn format_message(template: &str, field_name: &str, params: &HashMap<String, String>) -> String {
    TOKEN_REGEX
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            if key == FIELD_NAME_TOKEN {
                return field_name.to_string();
            }
            params.get(key).cloned().unwrap_or_default()
        })
        .into_owned()
}
