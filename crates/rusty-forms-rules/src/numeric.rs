// File: src/numeric.rs
// Purpose: Lenient integer parsing for numeric rule limits and values

/// Parses the leading integer prefix of `input`.
///
/// Leading whitespace (including a byte order mark) is skipped, a single `+` or `-` sign is accepted, and a
/// `0x`/`0X` prefix switches to hexadecimal. Digits are read until the first
/// character that is not a digit in the active radix; anything after that is
/// ignored, so `"18 years"` parses as `18`.
///
/// Returns `None` when no digit is found (not-a-number). Callers compare the
/// result with [`at_least`] / [`at_most`], which treat `None` as a failed
/// comparison.
pub fn parse_int(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value = 0f64;
    let mut seen = false;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => {
                value = value * f64::from(radix) + f64::from(d);
                seen = true;
            }
            None => break,
        }
    }

    if !seen {
        return None;
    }

    Some(if negative { -value } else { value })
}

/// `lhs >= rhs`, false if either side is not a number.
pub fn at_least(lhs: Option<f64>, rhs: Option<f64>) -> bool {
    matches!((lhs, rhs), (Some(l), Some(r)) if l >= r)
}

/// `lhs <= rhs`, false if either side is not a number.
pub fn at_most(lhs: Option<f64>, rhs: Option<f64>) -> bool {
    matches!((lhs, rhs), (Some(l), Some(r)) if l <= r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_int("18"), Some(18.0));
        assert_eq!(parse_int("0"), Some(0.0));
        assert_eq!(parse_int("-5"), Some(-5.0));
        assert_eq!(parse_int("+7"), Some(7.0));
    }

    #[test]
    fn test_leading_prefix() {
        assert_eq!(parse_int("  42"), Some(42.0));
        assert_eq!(parse_int("18 years"), Some(18.0));
        assert_eq!(parse_int("3.9"), Some(3.0));
        assert_eq!(parse_int("12abc"), Some(12.0));
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(parse_int("\u{FEFF}18"), Some(18.0));
        assert_eq!(parse_int(" \u{FEFF}\t-4"), Some(-4.0));
        assert_eq!(parse_int("\u{FEFF}"), None);
    }

    #[test]
    fn test_hex_prefix() {
        assert_eq!(parse_int("0x10"), Some(16.0));
        assert_eq!(parse_int("0XfF"), Some(255.0));
        assert_eq!(parse_int("-0x1"), Some(-1.0));
        // "0x" alone has no hex digits
        assert_eq!(parse_int("0x"), None);
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("+-3"), None);
        assert_eq!(parse_int("x12"), None);
    }

    #[test]
    fn test_comparisons_fail_closed() {
        assert!(at_least(Some(18.0), Some(18.0)));
        assert!(!at_least(Some(17.0), Some(18.0)));
        assert!(!at_least(None, Some(18.0)));
        assert!(!at_least(Some(18.0), None));
        assert!(!at_least(None, None));

        assert!(at_most(Some(3.0), Some(6.0)));
        assert!(!at_most(Some(7.0), Some(6.0)));
        assert!(!at_most(None, Some(6.0)));
        assert!(!at_most(Some(1.0), None));
    }
}
