//! Quoting and escaping helpers.
//!
//! Three different targets need escaping: CSS selectors built from utility
//! class names, string literals in generated server code, and attribute
//! values in serialized HTML.

/// Characters that must be backslash-escaped inside a CSS class selector.
const SELECTOR_SPECIAL: &[char] = &[
    '~', '!', '@', '$', '%', '^', '&', '*', '(', ')', '+', '=', ',', '.', '/', '\'', ';', ':',
    '"', '?', '>', '<', '[', ']', '\\', '{', '}', '|', '`', '#',
];

/// Escape a class name so it can be used verbatim after a `.` in a selector.
///
/// Only ASCII punctuation is escaped; non-ASCII identifiers are passed through.
pub fn quote_selector(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for ch in value.chars() {
        if SELECTOR_SPECIAL.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Escape a value for use inside a double-quoted string literal in generated code.
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render `value` as a double-quoted string literal.
#[inline]
pub fn quoted(value: &str) -> String {
    format!("\"{}\"", escape_string(value))
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape HTML text content.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Collapse every whitespace run to one space and trim both ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_selector() {
        assert_eq!(quote_selector("p-4"), "p-4");
        assert_eq!(quote_selector("hover:text-red-500"), "hover\\:text-red-500");
        assert_eq!(quote_selector("w-1/2"), "w-1\\/2");
        assert_eq!(quote_selector("p-0.5"), "p-0\\.5");
        assert_eq!(quote_selector("group-hover@nav"), "group-hover\\@nav");
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_string(r"a\b"), r"a\\b");
        assert_eq!(quoted("x"), "\"x\"");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_attr(r#"a "b" & c"#), "a &quot;b&quot; &amp; c");
        assert_eq!(escape_text("1 < 2 & 3"), "1 &lt; 2 &amp; 3");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  hello \n   world\t"), "hello world");
        assert_eq!(collapse_whitespace(" \n "), "");
    }
}
