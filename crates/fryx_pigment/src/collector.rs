//! Utility attribute collection for full stylesheet generation.
//!
//! Full generation does not recompile anything: it walks the parse trees of
//! every project file and gathers each `(key, token)` pair that might be a
//! utility. HTML tags contribute their literal and valueless attributes and
//! any `:"..."` utility hints; `class` tokens are gathered under the empty
//! key. Component references and non-rendering tags are skipped, though
//! markup nested inside them is still visited.

use fryx_carton::FxHashSet;
use fryx_relief::{
    AttributeNode, AttributeValue, ChildNode, ClientExpr, Document, ElementNode, HostExpr,
    HostPiece,
};

use crate::rule::{resolve, CssRule};

/// Tags whose attributes never carry utilities.
const IGNORED_TAGS: &[&str] = &["head", "title", "meta", "style", "link", "script", "template"];

/// Every `(key, token)` pair in `document`, in source order, duplicates kept.
pub fn collect_utilities(document: &Document) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for piece in &document.pieces {
        if let HostPiece::Element(element) = piece {
            visit_element(element, &mut pairs);
        }
    }
    pairs
}

fn visit_element(element: &ElementNode, pairs: &mut Vec<(String, String)>) {
    let collects = element
        .name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase())
        && !IGNORED_TAGS.contains(&element.name.as_str());

    for attribute in &element.attributes {
        match attribute {
            AttributeNode::Named(named) => {
                if collects {
                    collect_named(&named.name, &named.value, pairs);
                }
                match &named.value {
                    AttributeValue::Embed { expr, client, .. } => {
                        visit_host(expr, pairs);
                        if let Some(client) = client {
                            visit_client(client, pairs);
                        }
                    }
                    AttributeValue::LiteralClient { client, .. } | AttributeValue::Client(client) => {
                        visit_client(client, pairs)
                    }
                    AttributeValue::Element(nested) => visit_element(nested, pairs),
                    AttributeValue::None | AttributeValue::Literal(_) => {}
                }
            }
            AttributeNode::Spread(spread) => {
                if collects {
                    if let Some(css) = &spread.css {
                        collect_assignments(css, pairs);
                    }
                }
                visit_host(&spread.expr, pairs);
            }
        }
    }

    for child in &element.children {
        match child {
            ChildNode::Element(nested) => visit_element(nested, pairs),
            ChildNode::Embed { expr, client, .. } => {
                visit_host(expr, pairs);
                if let Some(client) = client {
                    visit_client(client, pairs);
                }
            }
            ChildNode::LiteralClient { client, .. } => visit_client(client, pairs),
            ChildNode::Text(_) | ChildNode::Script(_) | ChildNode::Comment(_) => {}
        }
    }
}

fn visit_host(expr: &HostExpr, pairs: &mut Vec<(String, String)>) {
    for piece in &expr.pieces {
        if let HostPiece::Element(element) = piece {
            visit_element(element, pairs);
        }
    }
}

fn visit_client(client: &ClientExpr, pairs: &mut Vec<(String, String)>) {
    if let ClientExpr::Forwarded(expr) = client {
        visit_host(expr, pairs);
    }
}

fn collect_named(name: &str, value: &AttributeValue, pairs: &mut Vec<(String, String)>) {
    match value {
        AttributeValue::None => collect_tokens(name, "", pairs),
        AttributeValue::Literal(literal) => collect_tokens(name, literal, pairs),
        AttributeValue::Embed { css: Some(css), .. } => collect_tokens(name, css, pairs),
        AttributeValue::LiteralClient { literal, css, .. } => match css {
            Some(css) => collect_tokens(name, &format!("{} {}", literal, css), pairs),
            None => collect_tokens(name, literal, pairs),
        },
        _ => {}
    }
}

/// Split a value into tokens; a value without tokens still yields `(key, "")`.
fn collect_tokens(name: &str, value: &str, pairs: &mut Vec<(String, String)>) {
    let key = if name == "class" { "" } else { name };
    let before = pairs.len();
    for token in value.split_whitespace() {
        pairs.push((key.to_string(), token.to_string()));
    }
    if pairs.len() == before && !key.is_empty() {
        pairs.push((key.to_string(), String::new()));
    }
}

/// Spread hints are `key=value` assignments, or bare keys.
fn collect_assignments(css: &str, pairs: &mut Vec<(String, String)>) {
    for assignment in css.split_whitespace() {
        match assignment.split_once('=') {
            Some((key, value)) => collect_tokens(key, value, pairs),
            None => collect_tokens(assignment, "", pairs),
        }
    }
}

/// De-duplicating accumulator of utility pairs across project files.
///
/// Class tokens are yielded before attribute pairs; each group keeps the
/// order in which pairs were first seen.
#[derive(Debug, Default)]
pub struct CssCollector {
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    seen: FxHashSet<(String, String)>,
}

impl CssCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, document: &Document) {
        self.extend(collect_utilities(document));
    }

    pub fn extend(&mut self, pairs: impl IntoIterator<Item = (String, String)>) {
        for pair in pairs {
            if self.seen.contains(&pair) {
                continue;
            }
            self.seen.insert(pair.clone());
            let (key, value) = pair;
            if key.is_empty() {
                self.classes.push(value);
            } else {
                self.attributes.push((key, value));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes
            .iter()
            .map(|class| ("", class.as_str()))
            .chain(
                self.attributes
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            )
    }

    /// Resolve every collected pair whose key passes `keep`, dropping the
    /// pairs that are not utilities. Class tokens always pass.
    pub fn rules(&self, keep: impl Fn(&str) -> bool) -> Vec<CssRule> {
        self.pairs()
            .filter(|(key, _)| key.is_empty() || keep(key))
            .map(|(key, value)| resolve(key, value))
            .filter(|rule| {
                if !rule.valid {
                    tracing::trace!(key = %rule.key, value = %rule.value, "not a utility");
                }
                rule.valid
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fryx_relief::builder::element;
    use fryx_relief::SpreadAttribute;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_collect_literal_and_flag_attributes() {
        let root = element("div")
            .literal("class", "card p-4")
            .flag("flex")
            .literal("text", "red-500 hover:lg")
            .literal("bg", "")
            .child(element("span").literal("m", "2").build())
            .build();
        let document = Document::new(vec![HostPiece::Element(root)]);
        assert_eq!(
            collect_utilities(&document),
            pairs(&[
                ("", "card"),
                ("", "p-4"),
                ("flex", ""),
                ("text", "red-500"),
                ("text", "hover:lg"),
                ("bg", ""),
                ("m", "2"),
            ])
        );
    }

    #[test]
    fn test_skip_components_and_ignored_tags() {
        let root = element("div")
            .child(element("Card").literal("p", "4").build())
            .child(element("template").literal("m", "4").build())
            .child(
                element("Card")
                    .child(element("b").literal("font", "bold").build())
                    .build(),
            )
            .build();
        let document = Document::new(vec![HostPiece::Element(root)]);
        assert_eq!(collect_utilities(&document), pairs(&[("font", "bold")]));
    }

    #[test]
    fn test_collect_css_hints() {
        let root = element("div")
            .server_css("class", "cls", "p-4 m-2")
            .attr(AttributeNode::Spread(SpreadAttribute {
                expr: HostExpr::code("flags"),
                sequence: true,
                css: Some("w=full hidden".to_string()),
                span: Default::default(),
            }))
            .build();
        let document = Document::new(vec![HostPiece::Element(root)]);
        assert_eq!(
            collect_utilities(&document),
            pairs(&[("", "p-4"), ("", "m-2"), ("w", "full"), ("hidden", "")])
        );
    }

    #[test]
    fn test_collector_dedups_and_orders_classes_first() {
        let mut collector = CssCollector::new();
        collector.extend(pairs(&[("text", "red-500"), ("", "p-4"), ("", "card")]));
        collector.extend(pairs(&[("", "p-4"), ("text", "red-500"), ("m", "2")]));
        assert_eq!(collector.len(), 4);
        let all: Vec<_> = collector.pairs().collect();
        assert_eq!(
            all,
            vec![("", "p-4"), ("", "card"), ("text", "red-500"), ("m", "2")]
        );

        let rules = collector.rules(|key| key != "m");
        let names: Vec<_> = rules.iter().map(|rule| rule.class_name()).collect();
        assert_eq!(names, vec!["p-4", "text-red-500"]);
    }
}
