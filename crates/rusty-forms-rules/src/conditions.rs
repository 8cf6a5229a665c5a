// File: src/conditions.rs
// Purpose: Parse raw condition attributes ("{min_char:3 max_char:6}") into ordered rule/limit pairs

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,]+").unwrap());

/// Rule name to limit parameter, in the order the rules were first written.
///
/// Writing the same rule twice keeps its original position and takes the
/// later limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionSet {
    entries: Vec<(String, String)>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a condition, returning the previous limit if any
    pub fn insert(&mut self, rule: impl Into<String>, limit: impl Into<String>) -> Option<String> {
        let rule = rule.into();
        let limit = limit.into();

        match self.entries.iter_mut().find(|(name, _)| *name == rule) {
            Some((_, existing)) => Some(std::mem::replace(existing, limit)),
            None => {
                self.entries.push((rule, limit));
                None
            }
        }
    }

    /// Limit parameter for a rule
    pub fn get(&self, rule: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == rule)
            .map(|(_, limit)| limit.as_str())
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.get(rule).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(rule, limit)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(rule, limit)| (rule.as_str(), limit.as_str()))
    }

    pub fn rules(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(rule, _)| rule.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ConditionSet::new();
        for (rule, limit) in iter {
            set.insert(rule, limit);
        }
        set
    }
}

impl IntoIterator for ConditionSet {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Parse a raw condition string into a [`ConditionSet`].
///
/// Accepted shapes:
/// - `min_char:3, max_char:6`
/// - `{min_char:3 max_char:6}`
/// - `min_char=3,max_char=6`
///
/// Pairs are separated by any run of whitespace and commas. Each pair is split
/// at `:` or `=`; the limit ends at the next `:` or `=` if there is one. Pairs
/// missing a rule name or a limit are dropped. `None` and `""` parse to an
/// empty set.
///
/// There is no escaping, so limits cannot contain separators or delimiters.
pub fn parse_conditions<'a>(raw: impl Into<Option<&'a str>>) -> ConditionSet {
    let mut set = ConditionSet::new();

    let raw = match raw.into() {
        Some(raw) if !raw.is_empty() => raw,
        _ => return set,
    };

    let body = if raw.starts_with('{') {
        strip_outer(raw)
    } else {
        raw
    };

    for token in SEPARATOR_REGEX.split(body) {
        let mut parts = token.split(&[':', '='][..]);
        let rule = parts.next().unwrap_or("").trim();
        let limit = parts.next().unwrap_or("").trim();

        if !rule.is_empty() && !limit.is_empty() {
            set.insert(rule, limit);
        }
    }

    set
}

// Drops the first and last character; the closing brace is assumed, not checked.
fn strip_outer(raw: &str) -> &str {
    let mut chars = raw.char_indices();
    let start = chars.next().map(|(i, c)| i + c.len_utf8()).unwrap_or(0);
    let end = chars.next_back().map(|(i, _)| i).unwrap_or(start);
    &raw[start..end.max(start)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(set: &ConditionSet) -> Vec<(&str, &str)> {
        set.iter().collect()
    }

    #[test]
    fn test_comma_separated() {
        let set = parse_conditions("min_char:3, max_char:6");
        assert_eq!(pairs(&set), vec![("min_char", "3"), ("max_char", "6")]);
    }

    #[test]
    fn test_brace_wrapped_space_separated() {
        let braced = parse_conditions("{min_char:3 max_char:6}");
        assert_eq!(braced, parse_conditions("min_char:3, max_char:6"));
    }

    #[test]
    fn test_equals_delimiter() {
        let set = parse_conditions("min_age=18,max_age=65");
        assert_eq!(pairs(&set), vec![("min_age", "18"), ("max_age", "65")]);
    }

    #[test]
    fn test_empty_and_missing_input() {
        assert!(parse_conditions("").is_empty());
        assert!(parse_conditions(None).is_empty());
        assert!(parse_conditions("{}").is_empty());
        assert!(parse_conditions(" , ,, ").is_empty());
    }

    #[test]
    fn test_incomplete_pairs_are_dropped() {
        let set = parse_conditions("min_char max_char: :6 =3 min_age:18");
        assert_eq!(pairs(&set), vec![("min_age", "18")]);
    }

    #[test]
    fn test_limit_stops_at_next_delimiter() {
        let set = parse_conditions("pattern:a:b");
        assert_eq!(set.get("pattern"), Some("a"));

        let set = parse_conditions("range=1=5");
        assert_eq!(set.get("range"), Some("1"));
    }

    #[test]
    fn test_duplicate_rule_keeps_position_takes_last_value() {
        let set = parse_conditions("min_char:3 max_char:6 min_char:5");
        assert_eq!(pairs(&set), vec![("min_char", "5"), ("max_char", "6")]);
    }

    #[test]
    fn test_brace_strip_does_not_check_closing_char() {
        // Last character is dropped whether or not it is a brace
        let set = parse_conditions("{min_char:30");
        assert_eq!(set.get("min_char"), Some("3"));

        // A trailing brace without an opening one is kept in the limit
        let set = parse_conditions("min_char:3}");
        assert_eq!(set.get("min_char"), Some("3}"));
    }

    #[test]
    fn test_single_brace() {
        assert!(parse_conditions("{").is_empty());
    }

    #[test]
    fn test_multibyte_brace_content() {
        let set = parse_conditions("{label:é}");
        assert_eq!(set.get("label"), Some("é"));
    }

    #[test]
    fn test_condition_set_insert_returns_previous() {
        let mut set = ConditionSet::new();
        assert_eq!(set.insert("min_char", "3"), None);
        assert_eq!(set.insert("min_char", "4"), Some("3".to_string()));
        assert_eq!(set.len(), 1);
        assert!(set.contains("min_char"));
        assert_eq!(set.rules().collect::<Vec<_>>(), vec!["min_char"]);
    }

    #[test]
    fn test_collect_from_pairs() {
        let set: ConditionSet = vec![("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]);
    }
}
