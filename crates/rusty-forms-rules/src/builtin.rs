// File: src/builtin.rs
// Purpose: Built-in rules (min_char, max_char, min_age, max_age) and their default messages

use crate::numeric::{at_least, at_most, parse_int};

pub const MIN_CHAR: &str = "min_char";
pub const MAX_CHAR: &str = "max_char";
pub const MIN_AGE: &str = "min_age";
pub const MAX_AGE: &str = "max_age";

pub const MIN_CHAR_MESSAGE: &str = "{field_name} must be at least {min_char} characters";
pub const MAX_CHAR_MESSAGE: &str = "{field_name} must be at most {max_char} characters";
pub const MIN_AGE_MESSAGE: &str = "{field_name} must be at least {min_age}";
pub const MAX_AGE_MESSAGE: &str = "{field_name} must be at most {max_age}";

/// Signature shared by every built-in rule
pub type BuiltinPredicate = fn(&str, &str) -> bool;

/// Every built-in rule as `(name, predicate, default message)`
pub const BUILTIN_RULES: [(&str, BuiltinPredicate, &str); 4] = [
    (MIN_CHAR, min_char, MIN_CHAR_MESSAGE),
    (MAX_CHAR, max_char, MAX_CHAR_MESSAGE),
    (MIN_AGE, min_age, MIN_AGE_MESSAGE),
    (MAX_AGE, max_age, MAX_AGE_MESSAGE),
];

/// Length of a value as a browser reports it (UTF-16 code units)
pub fn char_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Passes when the value is at least `limit` characters long
pub fn min_char(value: &str, limit: &str) -> bool {
    at_least(Some(char_length(value) as f64), parse_int(limit))
}

/// Passes when the value is at most `limit` characters long
pub fn max_char(value: &str, limit: &str) -> bool {
    at_most(Some(char_length(value) as f64), parse_int(limit))
}

/// Passes when the value, read as an integer, is at least `limit`
pub fn min_age(value: &str, limit: &str) -> bool {
    at_least(parse_int(value), parse_int(limit))
}

/// Passes when the value, read as an integer, is at most `limit`
pub fn max_age(value: &str, limit: &str) -> bool {
    at_most(parse_int(value), parse_int(limit))
}
