//! Size and color argument conversion.

use fryx_carton::{format_number, is_decimal, parse_digits};

use crate::tables::{COLORS, SIZES};

/// Whether `value` is `a/b` with both sides made of digits.
pub fn is_fraction(value: &str) -> bool {
    match value.split_once('/') {
        Some((a, b)) => parse_digits(a).is_some() && parse_digits(b).is_some(),
        None => false,
    }
}

/// Whether `value` is `N%` with `0 <= N <= 100`.
pub fn is_percent(value: &str) -> bool {
    value
        .strip_suffix('%')
        .and_then(parse_digits)
        .is_some_and(|n| n <= 100)
}

pub fn is_hex(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Convert a size argument.
///
/// Named sizes come from the table; `n` becomes `n/4 rem`, `n.m` likewise,
/// `a/b` becomes a percentage, anything else passes through verbatim.
pub fn convert_size(value: &str, negative: bool) -> String {
    let size = if let Some(named) = SIZES.get(value) {
        (*named).to_string()
    } else if let Some(n) = parse_digits(value) {
        format!("{}rem", format_number(f64::from(n) / 4.0))
    } else if is_decimal(value) {
        let n: f64 = if value.ends_with('.') {
            value.trim_end_matches('.').parse().unwrap_or(0.0)
        } else if value.starts_with('.') {
            format!("0{}", value).parse().unwrap_or(0.0)
        } else {
            value.parse().unwrap_or(0.0)
        };
        format!("{}rem", format_number(n / 4.0))
    } else if is_fraction(value) {
        let (a, b) = value.split_once('/').unwrap_or(("0", "1"));
        let a = parse_digits(a).unwrap_or(0);
        let b = parse_digits(b).unwrap_or(1);
        if b == 0 {
            value.to_string()
        } else {
            format!("{}%", format_number(f64::from(a) * 100.0 / f64::from(b)))
        }
    } else {
        value.to_string()
    };
    if negative && !size.is_empty() && !size.starts_with('-') {
        format!("-{}", size)
    } else {
        size
    }
}

/// Convert color arguments (`["red", "500"]`, `["hex", "0af"]`, `["black/50"]`).
///
/// Opacity is given as `/N` or, where `/` cannot appear (attribute names),
/// as `@N`. Returns `None` when the arguments are not a color.
pub fn convert_color(args: &[String]) -> Option<String> {
    if args.is_empty() {
        return None;
    }
    let value = args.join("-");
    let (color, opacity) = match value.split('/').count() {
        1 => match value.split_once('@') {
            Some((color, opacity)) if !opacity.contains('@') => (color, Some(opacity)),
            Some(_) => return None,
            None => (value.as_str(), None),
        },
        2 => {
            let (color, opacity) = value.split_once('/')?;
            (color, Some(opacity))
        }
        _ => return None,
    };

    let base = if let Some(hex) = color.strip_prefix("hex-") {
        if !is_hex(hex) || ![3, 4, 6, 8].contains(&hex.len()) {
            return None;
        }
        format!("#{}", hex)
    } else {
        (*COLORS.get(color)?).to_string()
    };

    match opacity {
        None | Some("") => Some(base),
        Some(opacity) => {
            let opacity = parse_digits(opacity).filter(|n| *n <= 100)?;
            with_opacity(&base, opacity)
        }
    }
}

/// Re-express a resolved color with the given opacity percentage.
///
/// `rgb(r g b)` palette colors and `#hex` colors are understood. Keywords
/// such as `currentColor` have no channels and yield `None`.
pub fn with_opacity(color: &str, opacity: u32) -> Option<String> {
    let alpha = format_number(f64::from(opacity) / 100.0);
    if let Some(channels) = color
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels = channels.split('/').next().unwrap_or(channels).trim();
        return Some(format!("rgb({} / {})", channels, alpha));
    }
    let (r, g, b) = hex_channels(color)?;
    Some(format!("rgb({} {} {} / {})", r, g, b, alpha))
}

/// The fully transparent end of a gradient starting at `color`. Keyword
/// colors fade to transparent white.
pub fn transparent_stop(color: &str) -> String {
    with_opacity(color, 0).unwrap_or_else(|| "rgb(255 255 255 / 0)".to_string())
}

fn hex_channels(color: &str) -> Option<(u32, u32, u32)> {
    let hex = color.strip_prefix('#')?;
    if !is_hex(hex) {
        return None;
    }
    let digit = |i: usize| u32::from_str_radix(&hex[i..i + 1], 16).ok();
    let pair = |i: usize| u32::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 | 4 => Some((
            digit(0)? * 255 / 15,
            digit(1)? * 255 / 15,
            digit(2)? * 255 / 15,
        )),
        6 | 8 => Some((pair(0)?, pair(2)?, pair(4)?)),
        _ => None,
    }
}

/// Join arbitrary-value arguments back with `-`; `_` stands for a space.
pub fn merge_value(args: &[String], negative: bool) -> String {
    let value = args.join("-");
    let value = if negative && !value.is_empty() && !value.starts_with('-') {
        format!("-{}", value)
    } else {
        value
    };
    value.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_convert_size() {
        assert_eq!(convert_size("4", false), "1rem");
        assert_eq!(convert_size("1", false), "0.25rem");
        assert_eq!(convert_size("2.5", false), "0.625rem");
        assert_eq!(convert_size("1/2", false), "50%");
        assert_eq!(convert_size("1/3", false), "33.333333%");
        assert_eq!(convert_size("px", false), "1px");
        assert_eq!(convert_size("full", false), "100%");
        assert_eq!(convert_size("14px", false), "14px");
        assert_eq!(convert_size("4", true), "-1rem");
        assert_eq!(convert_size("0", true), "-0px");
    }

    #[test]
    fn test_convert_color() {
        assert_eq!(
            convert_color(&args(&["red", "500"])).as_deref(),
            Some("rgb(239 68 68)")
        );
        assert_eq!(
            convert_color(&args(&["black/50"])).as_deref(),
            Some("rgb(0 0 0 / 0.5)")
        );
        assert_eq!(
            convert_color(&args(&["pink", "900@25"])).as_deref(),
            Some("rgb(131 24 67 / 0.25)")
        );
        assert_eq!(convert_color(&args(&["hex", "0af"])).as_deref(), Some("#0af"));
        assert_eq!(
            convert_color(&args(&["hex", "ffffff/10"])).as_deref(),
            Some("rgb(255 255 255 / 0.1)")
        );
        assert_eq!(
            convert_color(&args(&["current"])).as_deref(),
            Some("currentColor")
        );
        assert_eq!(convert_color(&args(&["current/50"])), None);
        assert_eq!(convert_color(&args(&["red", "500/101"])), None);
        assert_eq!(convert_color(&args(&["hex", "0afz"])), None);
        assert_eq!(convert_color(&args(&["4"])), None);
        assert_eq!(convert_color(&[]), None);
    }

    #[test]
    fn test_with_opacity() {
        assert_eq!(with_opacity("rgb(239 68 68)", 0).unwrap(), "rgb(239 68 68 / 0)");
        assert_eq!(with_opacity("#fff", 0).unwrap(), "rgb(255 255 255 / 0)");
        assert_eq!(with_opacity("#102030", 100).unwrap(), "rgb(16 32 48 / 1)");
        assert_eq!(with_opacity("transparent", 0), None);
        assert_eq!(with_opacity("currentColor", 50), None);
        assert_eq!(transparent_stop("currentColor"), "rgb(255 255 255 / 0)");
    }

    #[test]
    fn test_merge_value() {
        assert_eq!(merge_value(&args(&["1fr", "auto"]), false), "1fr-auto");
        assert_eq!(
            merge_value(&args(&["url(a.png)_no-repeat"]), false),
            "url(a.png) no-repeat"
        );
        assert_eq!(merge_value(&args(&["2px"]), true), "-2px");
    }

    #[test]
    fn test_predicates() {
        assert!(is_percent("50%"));
        assert!(!is_percent("150%"));
        assert!(!is_percent("%"));
        assert!(is_fraction("2/3"));
        assert!(!is_fraction("2/"));
        assert!(is_hex("0aF"));
    }
}
