//! Utility rules and their CSS text.
//!
//! [`resolve`] turns one `(key, value)` attribute pair into a [`CssRule`]:
//! modifiers and utility arguments are split out of both sides, the rule
//! gets a canonical class selector built from them, modifiers rewrite the
//! selector or add wrapper contexts, and the utility handler appends the
//! declarations. A rule that fails anywhere is kept but marked invalid and
//! renders to nothing.

use fryx_carton::{quote_selector, SmallVec};

use crate::keyframes::keyframes;
use crate::modifiers::{apply_modifier, is_modifier};
use crate::utilities::Utility;

/// Cascade weight added once when a rule carries any modifier.
pub const MODIFIER_ORDER: i32 = 10;

/// A resolved utility rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssRule {
    pub key: String,
    pub value: String,
    /// Final selector after modifiers were applied. Empty for addons, which
    /// reuse their parent's selector.
    pub selector: String,
    pub modifiers: SmallVec<[String; 2]>,
    /// Utility name followed by its arguments; a negative utility keeps the
    /// leading `-` on the name.
    pub args: SmallVec<[String; 4]>,
    pub wrappers: SmallVec<[String; 2]>,
    pub styles: Vec<String>,
    pub addons: Vec<CssRule>,
    /// Animation keyframes emitted after the rule.
    pub keyframes: Option<&'static str>,
    pub order: i32,
    pub valid: bool,
}

/// Resolve a utility attribute.
///
/// `key` is the attribute name (empty for a `class` token) and `value` the
/// token. Both sides may carry `:`-separated modifiers.
///
/// ```
/// use fryx_pigment::resolve;
///
/// let rule = resolve("", "p-4");
/// assert_eq!(rule.text(), ".p-4 {\n  padding: 1rem;\n}\n\n");
/// ```
pub fn resolve(key: &str, value: &str) -> CssRule {
    let mut rule = CssRule {
        key: key.to_string(),
        value: value.to_string(),
        ..CssRule::default()
    };

    let keys: Vec<&str> = if key.is_empty() {
        Vec::new()
    } else {
        key.split(':').collect()
    };
    let values: Vec<&str> = if value.is_empty() {
        Vec::new()
    } else {
        value.split(':').collect()
    };

    let mut negative = false;
    match keys.split_last() {
        Some((utility, modifiers)) if !is_modifier(utility) => {
            rule.modifiers
                .extend(modifiers.iter().map(|m| m.to_string()));
            push_utility(&mut rule.args, utility, &mut negative);
        }
        _ => rule.modifiers.extend(keys.iter().map(|m| m.to_string())),
    }
    if let Some((utility, modifiers)) = values.split_last() {
        rule.modifiers
            .extend(modifiers.iter().map(|m| m.to_string()));
        push_utility(&mut rule.args, utility, &mut negative);
    }
    if negative {
        if let Some(name) = rule.args.first_mut() {
            name.insert(0, '-');
        }
    }
    // `border="~ red-500"`: the bare `~` argument stands for no argument
    if rule.args.len() > 1 && rule.args.last().is_some_and(|arg| arg == "~") {
        rule.args.pop();
    }

    rule.selector = format!(".{}", quote_selector(&rule.class_name()));

    let modifiers = rule.modifiers.clone();
    for modifier in &modifiers {
        if !apply_modifier(&mut rule, modifier) {
            return rule.invalidated();
        }
    }
    if !modifiers.is_empty() {
        rule.order = rule.order.saturating_add(MODIFIER_ORDER);
    }

    let args = rule.args.clone();
    if Utility::new(&mut rule, args).dispatch() {
        rule.valid = true;
        rule
    } else {
        rule.invalidated()
    }
}

fn push_utility(args: &mut SmallVec<[String; 4]>, utility: &str, negative: &mut bool) {
    let utility = match utility.strip_prefix('-') {
        Some(rest) => {
            *negative = !*negative;
            rest
        }
        None => utility,
    };
    if !utility.is_empty() {
        args.extend(utility.split('-').map(str::to_string));
    }
}

impl CssRule {
    /// A nested rule sharing its parent's selector.
    pub fn addon() -> Self {
        Self {
            valid: true,
            ..Self::default()
        }
    }

    /// The canonical class name: `modifiers:utility-args`.
    pub fn class_name(&self) -> String {
        let modifiers = self.modifiers.join(":");
        let utility = self.args.join("-");
        match (modifiers.is_empty(), utility.is_empty()) {
            (false, false) => format!("{}:{}", modifiers, utility),
            (false, true) => modifiers,
            _ => utility,
        }
    }

    fn invalidated(mut self) -> Self {
        self.valid = false;
        self.styles.clear();
        self.addons.clear();
        self.keyframes = None;
        self
    }

    /// Output lines: wrappers outermost, then the selector block, then each
    /// addon as a sibling block.
    pub fn lines(&self) -> Vec<String> {
        self.lines_with_parent("")
    }

    fn lines_with_parent(&self, parent_selector: &str) -> Vec<String> {
        if !self.valid {
            return Vec::new();
        }
        let mut lines = Vec::new();
        let mut indent = String::new();
        for wrapper in &self.wrappers {
            lines.push(format!("{}{} {{", indent, wrapper));
            indent.push_str("  ");
        }
        let selector = if self.selector.is_empty() {
            parent_selector
        } else {
            self.selector.as_str()
        };
        lines.push(format!("{}{} {{", indent, selector));
        for style in &self.styles {
            lines.push(format!("{}  {}", indent, style));
        }
        lines.push(format!("{}}}", indent));
        for addon in &self.addons {
            lines.push(String::new());
            for line in addon.lines_with_parent(selector) {
                lines.push(format!("{}{}", indent, line));
            }
        }
        while !indent.is_empty() {
            indent.truncate(indent.len() - 2);
            lines.push(format!("{}}}", indent));
        }
        lines
    }

    /// The rule as stylesheet text, followed by a blank line. Empty for an
    /// invalid rule.
    pub fn text(&self) -> String {
        if !self.valid {
            return String::new();
        }
        let mut text = self.lines().join("\n");
        text.push_str("\n\n");
        if let Some(frames) = self.keyframes.and_then(keyframes) {
            text.push_str(frames);
            text.push_str("\n\n");
        }
        text
    }
}

/// Sort rules by cascade order, keeping insertion order among equals.
pub fn sort_by_order(rules: &mut [CssRule]) {
    rules.sort_by_key(|rule| rule.order);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_class_token() {
        let rule = resolve("", "p-4");
        assert!(rule.valid);
        assert_eq!(rule.selector, ".p-4");
        assert_eq!(rule.styles, vec!["padding: 1rem;"]);
        assert_eq!(rule.order, 0);
    }

    #[test]
    fn test_resolve_modifier_on_key() {
        let rule = resolve("hover:text", "red-500");
        assert_eq!(rule.class_name(), "hover:text-red-500");
        assert_eq!(rule.selector, ".hover\\:text-red-500:hover");
        assert_eq!(rule.styles, vec!["color: rgb(239 68 68);"]);
        assert_eq!(
            rule.text(),
            ".hover\\:text-red-500:hover {\n  color: rgb(239 68 68);\n}\n\n"
        );
    }

    #[test]
    fn test_resolve_modifier_only_key() {
        let rule = resolve("md", "p-2");
        assert_eq!(rule.class_name(), "md:p-2");
        assert_eq!(
            rule.lines(),
            vec![
                "@media (min-width: 768px) {",
                "  .md\\:p-2 {",
                "    padding: 0.5rem;",
                "  }",
                "}",
            ]
        );
    }

    #[test]
    fn test_resolve_novalue_attribute() {
        let rule = resolve("flex", "");
        assert!(rule.valid);
        assert_eq!(rule.selector, ".flex");
        assert_eq!(rule.styles, vec!["display: flex;"]);
    }

    #[test]
    fn test_resolve_negative() {
        let rule = resolve("", "-m-2");
        assert_eq!(rule.class_name(), "-m-2");
        assert_eq!(rule.selector, ".-m-2");
        assert_eq!(rule.styles, vec!["margin: -0.5rem;"]);

        let rule = resolve("-mt", "4");
        assert_eq!(rule.styles, vec!["margin-top: -1rem;"]);
    }

    #[test]
    fn test_resolve_tilde_argument() {
        let rule = resolve("border", "~");
        assert_eq!(rule.class_name(), "border");
        assert_eq!(rule.styles, vec!["border-width: 1px;"]);
    }

    #[test]
    fn test_resolve_value_side_modifiers() {
        let rule = resolve("text", "hover:red-500");
        assert_eq!(rule.class_name(), "hover:text-red-500");
        assert_eq!(rule.selector, ".hover\\:text-red-500:hover");
    }

    #[test]
    fn test_invalid_utility() {
        let rule = resolve("", "nonsense-4");
        assert!(!rule.valid);
        assert!(rule.lines().is_empty());
        assert_eq!(rule.text(), "");
    }

    #[test]
    fn test_invalid_modifier() {
        let rule = resolve("", "hovered:p-4");
        assert!(!rule.valid);
    }

    #[test]
    fn test_cascade_order() {
        let plain = resolve("", "p-4").order;
        let md = resolve("", "md:p-4").order;
        let lg = resolve("", "lg:p-4").order;
        let max_md = resolve("", "max-md:p-4").order;
        let hover = resolve("", "hover:p-4").order;
        assert!(plain < hover);
        assert!(hover < md);
        assert!(md < lg);
        assert!(max_md < 0);
        assert!(max_md < plain);
    }

    #[test]
    fn test_wide_breakpoints() {
        let md = resolve("", "md:p-4").order;
        let wide = resolve("", "min-2000000000px:p-4");
        assert!(wide.valid);
        assert!(wide.order > md);

        let stacked = resolve("", "min-2000000000px:min-2000000000px:p-4");
        assert!(stacked.valid);
        assert_eq!(stacked.order, i32::MAX);

        assert!(!resolve("", "min-3000000000px:p-4").valid);
    }

    #[test]
    fn test_keyword_color_opacity_is_invalid() {
        assert!(resolve("", "text-current").valid);
        assert!(!resolve("", "text-current/50").valid);
        assert!(!resolve("text", "inherit@50").valid);
    }

    #[test]
    fn test_container_addons() {
        let rule = resolve("", "container");
        let text = rule.text();
        assert!(text.starts_with(".container {\n  width: 100%;\n}\n\n@media (min-width: 640px) {\n  .container {\n    max-width: 640px;\n  }\n}"));
        assert_eq!(rule.addons.len(), 5);
    }

    #[test]
    fn test_keyframes_follow_rule() {
        let rule = resolve("", "animate-spin");
        let text = rule.text();
        assert!(text.starts_with(".animate-spin {\n  animation: spin 1s linear infinite;\n}\n\n"));
        assert!(text.contains("@keyframes spin {"));
    }

    #[test]
    fn test_sort_is_stable() {
        let mut rules = vec![
            resolve("", "md:p-1"),
            resolve("", "p-1"),
            resolve("", "p-2"),
            resolve("", "max-sm:p-3"),
        ];
        sort_by_order(&mut rules);
        let names: Vec<_> = rules.iter().map(|r| r.class_name()).collect();
        assert_eq!(names, vec!["max-sm:p-3", "p-1", "p-2", "md:p-1"]);
    }
}
