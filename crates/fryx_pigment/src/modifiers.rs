//! Modifier catalogue.
//!
//! A modifier either rewrites the rule selector (pseudo-classes, attribute
//! matchers, parent/sibling state) or pushes a wrapper context (`@media`,
//! `@supports`). Breakpoint wrappers carry a cascade weight so wider
//! breakpoints land later in the stylesheet and max-width ones earlier.
//!
//! Fixed modifiers live in a phf table; parameterized ones (`aria-*`,
//! `group-*@name`, `min-640px`, `supports-*`, ...) are regex patterns tried
//! in a fixed order.

use fryx_carton::quote_selector;
use once_cell::sync::Lazy;
use phf::phf_map;
use regex::Regex;

use crate::rule::CssRule;

#[derive(Debug, Clone, Copy)]
enum Template {
    /// `&` stands for the selector being modified.
    Selector(&'static str),
    /// Wrapper context and its cascade weight.
    Wrapper(&'static str, i32),
}

use Template::{Selector, Wrapper};

static MODIFIERS: phf::Map<&'static str, Template> = phf_map! {
    // pseudo-classes
    "hover" => Selector("&:hover"),
    "focus" => Selector("&:focus"),
    "focus-within" => Selector("&:focus-within"),
    "focus-visible" => Selector("&:focus-visible"),
    "active" => Selector("&:active"),
    "visited" => Selector("&:visited"),
    "target" => Selector("&:target"),
    "first" => Selector("&:first-child"),
    "last" => Selector("&:last-child"),
    "only" => Selector("&:only-child"),
    "odd" => Selector("&:nth-child(odd)"),
    "even" => Selector("&:nth-child(even)"),
    "first-of-type" => Selector("&:first-of-type"),
    "last-of-type" => Selector("&:last-of-type"),
    "only-of-type" => Selector("&:only-of-type"),
    "empty" => Selector("&:empty"),
    "disabled" => Selector("&:disabled"),
    "enabled" => Selector("&:enabled"),
    "checked" => Selector("&:checked"),
    "indeterminate" => Selector("&:indeterminate"),
    "default" => Selector("&:default"),
    "required" => Selector("&:required"),
    "valid" => Selector("&:valid"),
    "invalid" => Selector("&:invalid"),
    "in-range" => Selector("&:in-range"),
    "out-of-range" => Selector("&:out-of-range"),
    "placeholder-shown" => Selector("&:placeholder-shown"),
    "autofill" => Selector("&:autofill"),
    "read-only" => Selector("&:read-only"),
    // pseudo-elements
    "before" => Selector("&::before"),
    "after" => Selector("&::after"),
    "first-letter" => Selector("&::first-letter"),
    "first-line" => Selector("&::first-line"),
    "marker" => Selector("&::marker"),
    "selection" => Selector("&::selection"),
    "file" => Selector("&::file-selector-button"),
    "backdrop" => Selector("&::backdrop"),
    "placeholder" => Selector("&::placeholder"),
    // aria states
    "aria-checked" => Selector("&[aria-checked=\"true\"]"),
    "aria-disabled" => Selector("&[aria-disabled=\"true\"]"),
    "aria-expanded" => Selector("&[aria-expanded=\"true\"]"),
    "aria-hidden" => Selector("&[aria-hidden=\"true\"]"),
    "aria-pressed" => Selector("&[aria-pressed=\"true\"]"),
    "aria-readonly" => Selector("&[aria-readonly=\"true\"]"),
    "aria-required" => Selector("&[aria-required=\"true\"]"),
    "aria-selected" => Selector("&[aria-selected=\"true\"]"),
    // direction, disclosure, color scheme
    "rtl" => Selector("[dir=\"rtl\"] &"),
    "ltr" => Selector("[dir=\"ltr\"] &"),
    "open" => Selector("&[open]"),
    "dark" => Selector(".dark &, [dark=\"\"] &"),
    // responsive
    "sm" => Wrapper("@media (min-width: 640px)", 640),
    "md" => Wrapper("@media (min-width: 768px)", 768),
    "lg" => Wrapper("@media (min-width: 1024px)", 1024),
    "xl" => Wrapper("@media (min-width: 1280px)", 1280),
    "2xl" => Wrapper("@media (min-width: 1536px)", 1536),
    "max-sm" => Wrapper("@media not all and (min-width: 640px)", -640),
    "max-md" => Wrapper("@media not all and (min-width: 768px)", -768),
    "max-lg" => Wrapper("@media not all and (min-width: 1024px)", -1024),
    "max-xl" => Wrapper("@media not all and (min-width: 1280px)", -1280),
    "max-2xl" => Wrapper("@media not all and (min-width: 1536px)", -1536),
    // media features
    "portrait" => Wrapper("@media (orientation: portrait)", 0),
    "landscape" => Wrapper("@media (orientation: landscape)", 0),
    "motion-safe" => Wrapper("@media (prefers-reduced-motion: no-preference)", 0),
    "motion-reduce" => Wrapper("@media (prefers-reduced-motion: reduce)", 0),
    "contrast-more" => Wrapper("@media (prefers-contrast: more)", 0),
    "contrast-less" => Wrapper("@media (prefers-contrast: less)", 0),
    "print" => Wrapper("@media print", 0),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    Aria,
    Data,
    Group,
    NamedGroup,
    Peer,
    NamedPeer,
    MinWidth,
    MaxWidth,
    Supports,
}

static PATTERNS: Lazy<Vec<(Regex, Pattern)>> = Lazy::new(|| {
    [
        (r"^aria-(.+)$", Pattern::Aria),
        (r"^data-(.+)$", Pattern::Data),
        (r"^group-([^@]+)$", Pattern::Group),
        (r"^group-([^@]+)@(.+)$", Pattern::NamedGroup),
        (r"^peer-([^@]+)$", Pattern::Peer),
        (r"^peer-([^@]+)@(.+)$", Pattern::NamedPeer),
        (r"^min-([0-9]+)px$", Pattern::MinWidth),
        (r"^max-([0-9]+)px$", Pattern::MaxWidth),
        (r"^supports-(.+)$", Pattern::Supports),
    ]
    .into_iter()
    .map(|(source, pattern)| {
        (
            Regex::new(source).expect("modifier pattern must compile"),
            pattern,
        )
    })
    .collect()
});

/// Whether `token` names a modifier rather than a utility.
pub fn is_modifier(token: &str) -> bool {
    MODIFIERS.contains_key(token) || PATTERNS.iter().any(|(regex, _)| regex.is_match(token))
}

/// Apply one modifier to `rule`. Returns `false` for an unknown modifier.
pub(crate) fn apply_modifier(rule: &mut CssRule, modifier: &str) -> bool {
    if let Some(template) = MODIFIERS.get(modifier) {
        match *template {
            Selector(template) => rule.selector = template.replace('&', &rule.selector),
            Wrapper(wrapper, weight) => {
                rule.wrappers.push(wrapper.to_string());
                rule.order = rule.order.saturating_add(weight);
            }
        }
        return true;
    }

    for (regex, pattern) in PATTERNS.iter() {
        let Some(caps) = regex.captures(modifier) else {
            continue;
        };
        let g1 = caps
            .get(1)
            .map(|m| quote_selector(m.as_str()))
            .unwrap_or_default();
        let g2 = caps
            .get(2)
            .map(|m| quote_selector(m.as_str()))
            .unwrap_or_default();
        let sel = &rule.selector;
        match pattern {
            Pattern::Aria => rule.selector = format!("{sel}[aria-{g1}]"),
            Pattern::Data => rule.selector = format!("{sel}[data-{g1}]"),
            Pattern::Group => {
                rule.selector = format!(".group:{g1} {sel}, [group=\"\"]:{g1} {sel}")
            }
            Pattern::NamedGroup => {
                rule.selector =
                    format!(".group\\@{g2}:{g1} {sel}, [group\\@{g2}=\"\"]:{g1} {sel}")
            }
            Pattern::Peer => {
                rule.selector = format!(".peer:{g1} ~ {sel}, [peer=\"\"]:{g1} ~ {sel}")
            }
            Pattern::NamedPeer => {
                rule.selector =
                    format!(".peer\\@{g2}:{g1} ~ {sel}, [peer\\@{g2}=\"\"]:{g1} ~ {sel}")
            }
            Pattern::MinWidth => {
                let Ok(width) = g1.parse::<i32>() else {
                    return false;
                };
                rule.wrappers.push(format!("@media (min-width: {g1}px)"));
                rule.order = rule.order.saturating_add(width);
            }
            Pattern::MaxWidth => {
                let Ok(width) = g1.parse::<i32>() else {
                    return false;
                };
                rule.wrappers.push(format!("@media (max-width: {g1}px)"));
                rule.order = rule.order.saturating_sub(width);
            }
            Pattern::Supports => rule.wrappers.push(format!("@supports ({g1})")),
        }
        return true;
    }
    false
}
