//! Attribute classification.
//!
//! Each attribute node of a start tag becomes one [`AttributeRecord`]. Which
//! forms are legal depends on the element kind:
//!
//! - **HTML tags** take constants, server values, client overrides, event
//!   handlers (`@name`) and spreads. Keys that are not HTML attributes are
//!   utilities: each whitespace-separated token is resolved and its class
//!   name folded into the element's `class`.
//! - **Component references** take constants, server values, element values,
//!   client values and spreads. Their attributes become the component's
//!   props, so event handlers and client overrides are rejected.
//! - **Script blocks** take literal, server and forwarded values only; they
//!   become the capture arguments of the client script.

use fryx_carton::quoted;
use fryx_pigment::{resolve, CssRule};
use fryx_relief::{
    AttributeNode, AttributeValue, ClientExpr, ElementNode, NamedAttribute, ScriptNode, Span,
};

use crate::attribute::{AttributeRecord, ClientRef};
use crate::client_script::script_body;
use crate::codegen::UnitCompiler;
use crate::errors::CompileError;
use crate::html_attrs::is_html_attribute;

/// Prefix script attribute names may not use.
const RESERVED_PREFIX: &str = "fry";

/// How an element name is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Lowercase names and fragments.
    Html,
    /// Anything else is an opaque callable reference.
    Component,
}

impl ElementKind {
    pub fn of(name: &str) -> Self {
        match name.chars().next() {
            None => Self::Html,
            Some(c) if c.is_ascii_lowercase() => Self::Html,
            Some(_) => Self::Component,
        }
    }
}

/// Captured script block of a compile unit.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptCapture {
    /// `(name, value code)`; a repeated name keeps its first position.
    pub(crate) args: Vec<(String, String)>,
    pub(crate) body: String,
}

/// Explicit state of one compile unit, reset at every root element.
#[derive(Debug, Default)]
pub(crate) struct UnitState {
    /// Client expressions of `(js)` forms; the index is the embed number.
    pub(crate) embeds: Vec<String>,
    has_client: bool,
    pub(crate) script: Option<ScriptCapture>,
    pub(crate) rules: Vec<CssRule>,
}

impl UnitState {
    /// Number the next same-component client value.
    pub(crate) fn next_embed(&mut self, js: &str) -> u32 {
        self.has_client = true;
        self.embeds.push(js.to_string());
        (self.embeds.len() - 1) as u32
    }

    pub(crate) fn mark_client(&mut self) {
        self.has_client = true;
    }

    pub(crate) fn needs_client_script(&self) -> bool {
        self.has_client || self.script.is_some()
    }
}

impl UnitCompiler<'_> {
    // =========================================================================
    // HTML tags
    // =========================================================================

    pub(crate) fn html_attributes(
        &mut self,
        tag: &str,
        el: &ElementNode,
    ) -> Result<Vec<AttributeRecord>, CompileError> {
        let mut records = Vec::with_capacity(el.attributes.len() + 1);
        let mut classes = Vec::new();
        for attribute in &el.attributes {
            let record = match attribute {
                AttributeNode::Spread(spread) => AttributeRecord::Spread {
                    expr: self.host(&spread.expr)?,
                    sequence: spread.sequence,
                },
                AttributeNode::Named(named) => self.html_attribute(tag, named, &mut classes)?,
            };
            records.push(record);
        }
        if !classes.is_empty() {
            fold_classes(tag, el.span, &mut records, &classes)?;
        }
        Ok(records)
    }

    fn html_attribute(
        &mut self,
        tag: &str,
        attr: &NamedAttribute,
        classes: &mut Vec<String>,
    ) -> Result<AttributeRecord, CompileError> {
        let name = attr.name.clone();
        let event = name.starts_with('@');
        let event_error = || CompileError::InvalidEventHandler {
            tag: tag.to_string(),
            name: attr.name.clone(),
            span: attr.span,
        };

        match &attr.value {
            AttributeValue::None if event => Err(event_error()),
            AttributeValue::None => self.literal_or_utility(tag, attr, None, classes),
            AttributeValue::Literal(_) if event => Err(event_error()),
            AttributeValue::Literal(value) => {
                self.literal_or_utility(tag, attr, Some(value), classes)
            }
            AttributeValue::Embed {
                expr, client: None, ..
            } => Ok(AttributeRecord::ServerValue {
                name,
                expr: self.host(expr)?,
            }),
            AttributeValue::Embed { .. } | AttributeValue::LiteralClient { .. } if event => {
                Err(event_error())
            }
            AttributeValue::Embed {
                expr,
                client: Some(client),
                ..
            } => {
                let expr = self.host(expr)?;
                Ok(match self.client_ref(client)? {
                    ClientRef::Embed(embed) => {
                        AttributeRecord::ServerClientValue { name, expr, embed }
                    }
                    ClientRef::Forwarded(forwarded) => AttributeRecord::ServerParentClientValue {
                        name,
                        expr,
                        forwarded,
                    },
                })
            }
            AttributeValue::LiteralClient {
                literal, client, ..
            } => {
                let value = literal.clone();
                Ok(match self.client_ref(client)? {
                    ClientRef::Embed(embed) => {
                        AttributeRecord::LiteralClientValue { name, value, embed }
                    }
                    ClientRef::Forwarded(forwarded) => AttributeRecord::LiteralParentClientValue {
                        name,
                        value,
                        forwarded,
                    },
                })
            }
            AttributeValue::Client(ClientExpr::Local(js)) => {
                // a non-event client value overrides the attribute on the client
                let name = if event { name } else { format!("${}", name) };
                let embed = self.state.next_embed(js);
                Ok(AttributeRecord::ClientValue { name, embed })
            }
            AttributeValue::Client(ClientExpr::Forwarded(_)) | AttributeValue::Element(_) => {
                Err(CompileError::InvalidHtmlAttribute {
                    tag: tag.to_string(),
                    name,
                    span: attr.span,
                })
            }
        }
    }

    /// A constant attribute, or utility tokens folded into the class list.
    fn literal_or_utility(
        &mut self,
        tag: &str,
        attr: &NamedAttribute,
        value: Option<&String>,
        classes: &mut Vec<String>,
    ) -> Result<AttributeRecord, CompileError> {
        let name = attr.name.as_str();
        if name == "class" || is_html_attribute(tag, name) {
            return Ok(match value {
                Some(value) => AttributeRecord::Literal {
                    name: name.to_string(),
                    value: value.clone(),
                },
                None => AttributeRecord::NoValue {
                    name: name.to_string(),
                },
            });
        }

        let value = value.map(String::as_str).unwrap_or("");
        let mut tokens: Vec<&str> = value.split_whitespace().collect();
        if tokens.is_empty() {
            tokens.push("");
        }
        for token in tokens {
            let rule = resolve(name, token);
            if !rule.valid {
                if self.options.strict_utilities {
                    return Err(CompileError::UnknownAttribute {
                        tag: tag.to_string(),
                        name: name.to_string(),
                        span: attr.span,
                    });
                }
                tracing::warn!(tag, key = name, value = token, span = %attr.span, "not a utility");
            }
            classes.push(rule.class_name());
            if rule.valid {
                self.state.rules.push(rule);
            }
        }
        Ok(AttributeRecord::NoOp)
    }

    // =========================================================================
    // Component references
    // =========================================================================

    pub(crate) fn component_attributes(
        &mut self,
        el: &ElementNode,
    ) -> Result<Vec<AttributeRecord>, CompileError> {
        let mut records = Vec::with_capacity(el.attributes.len() + 1);
        for attribute in &el.attributes {
            let record = match attribute {
                AttributeNode::Spread(spread) => AttributeRecord::Spread {
                    expr: self.host(&spread.expr)?,
                    sequence: spread.sequence,
                },
                AttributeNode::Named(named) => self.component_attribute(&el.name, named)?,
            };
            records.push(record);
        }
        Ok(records)
    }

    fn component_attribute(
        &mut self,
        component: &str,
        attr: &NamedAttribute,
    ) -> Result<AttributeRecord, CompileError> {
        let invalid = |reason| CompileError::InvalidComponentAttribute {
            component: component.to_string(),
            name: attr.name.clone(),
            reason,
            span: attr.span,
        };
        if attr.name.starts_with('@') {
            return Err(invalid("components do not take event handlers"));
        }

        let name = attr.name.clone();
        match &attr.value {
            AttributeValue::None => Err(invalid("component attributes need a value")),
            AttributeValue::Literal(value) => Ok(AttributeRecord::Literal {
                name,
                value: value.clone(),
            }),
            AttributeValue::Embed {
                expr, client: None, ..
            } => Ok(AttributeRecord::ServerValue {
                name,
                expr: self.host(expr)?,
            }),
            AttributeValue::Embed { .. } | AttributeValue::LiteralClient { .. } => {
                Err(invalid("components do not take client overrides"))
            }
            AttributeValue::Client(client) => Ok(match self.client_ref(client)? {
                ClientRef::Embed(embed) => AttributeRecord::ClientValue { name, embed },
                ClientRef::Forwarded(expr) => AttributeRecord::ParentClientValue { name, expr },
            }),
            AttributeValue::Element(el) => Ok(AttributeRecord::ElementValue {
                name,
                code: self.element(el)?,
            }),
        }
    }

    // =========================================================================
    // Script blocks
    // =========================================================================

    pub(crate) fn capture_script(&mut self, script: &ScriptNode) -> Result<(), CompileError> {
        if self.state.script.is_some() {
            return Err(CompileError::MultipleScripts { span: script.span });
        }

        let mut capture = ScriptCapture {
            args: Vec::with_capacity(script.attributes.len()),
            body: script_body(script),
        };
        for attribute in &script.attributes {
            let attr = match attribute {
                AttributeNode::Named(attr) => attr,
                AttributeNode::Spread(spread) => {
                    return Err(CompileError::InvalidScriptAttribute {
                        name: "spread".to_string(),
                        span: spread.span,
                    })
                }
            };
            let invalid = || CompileError::InvalidScriptAttribute {
                name: attr.name.clone(),
                span: attr.span,
            };
            if attr.name.starts_with('@') {
                return Err(invalid());
            }
            if attr.name.starts_with(RESERVED_PREFIX) {
                return Err(CompileError::ReservedScriptAttribute {
                    name: attr.name.clone(),
                    span: attr.span,
                });
            }

            let value = match &attr.value {
                AttributeValue::Literal(value) => quoted(value),
                AttributeValue::Embed {
                    expr, client: None, ..
                } => self.host(expr)?,
                AttributeValue::Client(ClientExpr::Forwarded(expr)) => {
                    self.state.mark_client();
                    self.host(expr)?
                }
                _ => return Err(invalid()),
            };
            match capture.args.iter_mut().find(|(name, _)| *name == attr.name) {
                Some(slot) => slot.1 = value,
                None => capture.args.push((attr.name.clone(), value)),
            }
        }
        self.state.script = Some(capture);
        Ok(())
    }
}

/// Append folded utility classes to the literal `class`, creating it if absent.
fn fold_classes(
    tag: &str,
    span: Span,
    records: &mut Vec<AttributeRecord>,
    classes: &[String],
) -> Result<(), CompileError> {
    let joined = classes.join(" ");
    for record in records.iter_mut() {
        match record {
            AttributeRecord::Literal { name, value } if name == "class" => {
                if value.is_empty() {
                    *value = joined;
                } else {
                    value.push(' ');
                    value.push_str(&joined);
                }
                return Ok(());
            }
            AttributeRecord::ServerValue { name, .. }
            | AttributeRecord::ServerClientValue { name, .. }
            | AttributeRecord::ServerParentClientValue { name, .. }
                if name == "class" =>
            {
                return Err(CompileError::ComputedClass {
                    tag: tag.to_string(),
                    span,
                });
            }
            _ => {}
        }
    }
    records.push(AttributeRecord::Literal {
        name: "class".to_string(),
        value: joined,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::compile_document;
    use crate::options::CompilerOptions;
    use fryx_relief::builder::{element, script};
    use fryx_relief::{Document, HostPiece};

    fn compile(el: ElementNode) -> Result<String, CompileError> {
        compile_with(el, &CompilerOptions::default())
    }

    fn compile_with(el: ElementNode, options: &CompilerOptions) -> Result<String, CompileError> {
        compile_document(&Document::new(vec![HostPiece::Element(el)]), options)
            .map(|unit| unit.code)
    }

    #[test]
    fn test_element_kind() {
        assert_eq!(ElementKind::of("div"), ElementKind::Html);
        assert_eq!(ElementKind::of("my-widget"), ElementKind::Html);
        assert_eq!(ElementKind::of(""), ElementKind::Html);
        assert_eq!(ElementKind::of("Card"), ElementKind::Component);
    }

    #[test]
    fn test_html_attribute_kept_verbatim() {
        let el = element("a").literal("href", "/home").flag("hidden").build();
        assert_eq!(
            compile(el).unwrap(),
            r#"Element("a", {"href": "/home", "hidden": "", "children": []})"#
        );
    }

    #[test]
    fn test_utilities_fold_into_class() {
        let el = element("div")
            .literal("class", "card")
            .literal("p", "4")
            .flag("flex")
            .literal("foo", "bar baz")
            .build();
        assert_eq!(
            compile(el).unwrap(),
            r#"Element("div", {"class": "card p-4 flex foo-bar foo-baz", "children": []})"#
        );
    }

    #[test]
    fn test_class_created_when_absent() {
        let el = element("p").literal("text", "red-500 hover:lg").build();
        assert_eq!(
            compile(el).unwrap(),
            r#"Element("p", {"class": "text-red-500 hover:text-lg", "children": []})"#
        );
    }

    #[test]
    fn test_strict_utilities() {
        let options = CompilerOptions {
            strict_utilities: true,
            ..CompilerOptions::default()
        };
        let el = element("div").literal("foo", "bar").build();
        assert!(matches!(
            compile_with(el, &options),
            Err(CompileError::UnknownAttribute { name, .. }) if name == "foo"
        ));
        let el = element("div").literal("p", "4").build();
        assert!(compile_with(el, &options).is_ok());
    }

    #[test]
    fn test_computed_class_conflict() {
        let el = element("div").server("class", "cls").literal("p", "4").build();
        assert!(matches!(
            compile(el),
            Err(CompileError::ComputedClass { .. })
        ));
    }

    #[test]
    fn test_html_client_forms() {
        let el = element("input")
            .client("@input", "onInput")
            .client("value", "text")
            .server_client("title", "t", "title")
            .literal_forwarded("placeholder", "Name", "props.hint")
            .self_closing()
            .build();
        let code = compile(el).unwrap();
        assert!(code.starts_with("Element(\"input\", {\"call-client-script\": ["));
        assert!(code.ends_with(
            r#""@input": ClientEmbed(0), "$value": ClientEmbed(1), "title": (t), "$title": ClientEmbed(2), "placeholder": "Name", "$placeholder": (props.hint)})"#
        ));
    }

    #[test]
    fn test_event_handler_forms() {
        let el = element("button").literal("@click", "go()").build();
        assert!(matches!(
            compile(el),
            Err(CompileError::InvalidEventHandler { .. })
        ));
        let el = element("button").server("@click", "handler").build();
        assert!(compile(el).is_ok());
        let el = element("button").forwarded("@click", "props.onClick").build();
        assert!(matches!(
            compile(el),
            Err(CompileError::InvalidHtmlAttribute { .. })
        ));
    }

    #[test]
    fn test_bare_forwarded_value_rejected_on_html() {
        let el = element("div").forwarded("title", "props.t").build();
        assert!(matches!(
            compile(el),
            Err(CompileError::InvalidHtmlAttribute { ref name, .. }) if name == "title"
        ));
    }

    #[test]
    fn test_element_value_rejected_on_html() {
        let el = element("div")
            .element_attr("slot", element("b").build())
            .build();
        assert!(matches!(
            compile(el),
            Err(CompileError::InvalidHtmlAttribute { .. })
        ));
    }

    #[test]
    fn test_component_attributes() {
        let el = element("Card")
            .literal("title", "Hi")
            .server("count", "n")
            .forwarded("onClick", "parentHandler")
            .element_attr("footer", element("b").text("x").build())
            .self_closing()
            .build();
        let code = compile(el).unwrap();
        assert!(code.starts_with("Element(Card, {\"call-client-script\": ["));
        assert!(code.ends_with(
            r#""title": "Hi", "count": (n), "onClick": (parentHandler), "footer": Element("b", {"children": ["x"]}), "children": []})"#
        ));
    }

    #[test]
    fn test_component_rejects_html_forms() {
        for el in [
            element("Card").client("@click", "go").build(),
            element("Card").flag("p-4").build(),
            element("Card").server_client("value", "v", "v").build(),
        ] {
            assert!(matches!(
                compile(el),
                Err(CompileError::InvalidComponentAttribute { .. })
            ));
        }
    }

    #[test]
    fn test_script_attributes() {
        let reserved = element("div")
            .script(script().literal("fryid", "1").build())
            .build();
        assert!(matches!(
            compile(reserved),
            Err(CompileError::ReservedScriptAttribute { .. })
        ));

        let event = element("div")
            .script(script().literal("@load", "go").build())
            .build();
        assert!(matches!(
            compile(event),
            Err(CompileError::InvalidScriptAttribute { .. })
        ));

        let ok = element("div")
            .script(
                script()
                    .literal("mode", "dark")
                    .server("user", "user.id")
                    .forwarded("onSave", "props.save")
                    .build(),
            )
            .build();
        let code = compile(ok).unwrap();
        assert!(code.contains(r#"[("mode", "dark"), ("user", (user.id)), ("onSave", (props.save))]"#));
    }
}
