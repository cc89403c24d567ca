//! Compact decimal formatting for CSS values.

/// Format a number with at most six decimals and no trailing zeros.
///
/// `1.0` prints as `1`, `0.25` as `0.25` and `1.0 / 3.0` as `0.333333`.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let text = format!("{:.6}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Parse an unsigned decimal integer made only of ASCII digits.
pub fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Whether `value` is a decimal like `1.5` or `.5` (digits on either side optional).
pub fn is_decimal(value: &str) -> bool {
    match value.split_once('.') {
        Some((int, frac)) => {
            !(int.is_empty() && frac.is_empty())
                && !frac.contains('.')
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(100.0 / 3.0), "33.333333");
        assert_eq!(format_number(-0.5), "-0.5");
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("42"), Some(42));
        assert_eq!(parse_digits(""), None);
        assert_eq!(parse_digits("4a"), None);
        assert_eq!(parse_digits("-4"), None);
    }

    #[test]
    fn test_is_decimal() {
        assert!(is_decimal("0.5"));
        assert!(is_decimal(".5"));
        assert!(is_decimal("2."));
        assert!(!is_decimal("."));
        assert!(!is_decimal("1.2.3"));
        assert!(!is_decimal("12"));
    }
}
