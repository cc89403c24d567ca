//! Tree builders.
//!
//! Parsers, tests and tools that synthesize markup use these instead of
//! spelling out node structs. Built roots get their `source` filled from the
//! printer so they hash the same way parsed roots do.

use crate::ast::*;
use crate::printer::print_element;

/// Start building an element. Paired (`<name>…</name>`) unless
/// [`ElementBuilder::self_closing`] is called.
pub fn element(name: impl Into<String>) -> ElementBuilder {
    let name = name.into();
    ElementBuilder {
        node: ElementNode {
            end_name: Some(name.clone()),
            name,
            ..Default::default()
        },
    }
}

/// Start building a fragment `<>…</>`.
pub fn fragment() -> ElementBuilder {
    ElementBuilder {
        node: ElementNode {
            end_name: Some(String::new()),
            ..Default::default()
        },
    }
}

/// Start building a script block.
pub fn script() -> ScriptBuilder {
    ScriptBuilder {
        node: ScriptNode::default(),
    }
}

/// Host code with one nested element, e.g. `[` + `<li>…</li>` + ` for x in xs]`.
pub fn host_with_markup(
    before: impl Into<String>,
    el: ElementNode,
    after: impl Into<String>,
) -> HostExpr {
    HostExpr {
        pieces: vec![
            HostPiece::Code(before.into()),
            HostPiece::Element(el),
            HostPiece::Code(after.into()),
        ],
        span: Span::default(),
    }
}

#[derive(Debug, Clone)]
pub struct ElementBuilder {
    node: ElementNode,
}

impl ElementBuilder {
    fn named(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.node
            .attributes
            .push(AttributeNode::Named(NamedAttribute {
                name: name.into(),
                value,
                span: Span::default(),
            }));
        self
    }

    pub fn self_closing(mut self) -> Self {
        self.node.end_name = None;
        self
    }

    /// Override the end-tag name.
    pub fn end_tag(mut self, name: impl Into<String>) -> Self {
        self.node.end_name = Some(name.into());
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.node.span = span;
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.node.source = source.into();
        self
    }

    pub fn attr(mut self, attr: AttributeNode) -> Self {
        self.node.attributes.push(attr);
        self
    }

    /// `name`
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.named(name, AttributeValue::None)
    }

    /// `name="value"`
    pub fn literal(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named(name, AttributeValue::Literal(value.into()))
    }

    /// `name={expr}`
    pub fn server(self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.server_expr(name, HostExpr::code(expr))
    }

    pub fn server_expr(self, name: impl Into<String>, expr: HostExpr) -> Self {
        self.named(
            name,
            AttributeValue::Embed {
                expr,
                client: None,
                css: None,
            },
        )
    }

    /// `name={expr}:"utilities"`
    pub fn server_css(
        self,
        name: impl Into<String>,
        expr: impl Into<String>,
        css: impl Into<String>,
    ) -> Self {
        self.named(
            name,
            AttributeValue::Embed {
                expr: HostExpr::code(expr),
                client: None,
                css: Some(css.into()),
            },
        )
    }

    /// `name={expr}(js)`
    pub fn server_client(
        self,
        name: impl Into<String>,
        expr: impl Into<String>,
        js: impl Into<String>,
    ) -> Self {
        self.named(
            name,
            AttributeValue::Embed {
                expr: HostExpr::code(expr),
                client: Some(ClientExpr::Local(js.into())),
                css: None,
            },
        )
    }

    /// `name={expr}({forwarded})`
    pub fn server_forwarded(
        self,
        name: impl Into<String>,
        expr: impl Into<String>,
        forwarded: impl Into<String>,
    ) -> Self {
        self.named(
            name,
            AttributeValue::Embed {
                expr: HostExpr::code(expr),
                client: Some(ClientExpr::Forwarded(HostExpr::code(forwarded))),
                css: None,
            },
        )
    }

    /// `name=(js)`
    pub fn client(self, name: impl Into<String>, js: impl Into<String>) -> Self {
        self.named(name, AttributeValue::Client(ClientExpr::Local(js.into())))
    }

    /// `name=({expr})`
    pub fn forwarded(self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.named(
            name,
            AttributeValue::Client(ClientExpr::Forwarded(HostExpr::code(expr))),
        )
    }

    /// `name=[literal](js)`
    pub fn literal_client(
        self,
        name: impl Into<String>,
        literal: impl Into<String>,
        js: impl Into<String>,
    ) -> Self {
        self.named(
            name,
            AttributeValue::LiteralClient {
                literal: literal.into(),
                client: ClientExpr::Local(js.into()),
                css: None,
            },
        )
    }

    /// `name=[literal]({expr})`
    pub fn literal_forwarded(
        self,
        name: impl Into<String>,
        literal: impl Into<String>,
        expr: impl Into<String>,
    ) -> Self {
        self.named(
            name,
            AttributeValue::LiteralClient {
                literal: literal.into(),
                client: ClientExpr::Forwarded(HostExpr::code(expr)),
                css: None,
            },
        )
    }

    /// `name=<tag>…</tag>`
    pub fn element_attr(self, name: impl Into<String>, el: ElementNode) -> Self {
        self.named(name, AttributeValue::Element(Box::new(el)))
    }

    /// `{**expr}`
    pub fn spread(self, expr: impl Into<String>) -> Self {
        self.spread_node(expr, false)
    }

    /// `{*expr}`
    pub fn spread_flags(self, expr: impl Into<String>) -> Self {
        self.spread_node(expr, true)
    }

    fn spread_node(mut self, expr: impl Into<String>, sequence: bool) -> Self {
        self.node
            .attributes
            .push(AttributeNode::Spread(SpreadAttribute {
                expr: HostExpr::code(expr),
                sequence,
                css: None,
                span: Span::default(),
            }));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.node.children.push(ChildNode::Text(TextNode {
            text: text.into(),
            span: Span::default(),
        }));
        self
    }

    pub fn child(mut self, el: ElementNode) -> Self {
        self.node.children.push(ChildNode::Element(el));
        self
    }

    /// `{expr}`
    pub fn embed(self, expr: impl Into<String>) -> Self {
        self.embed_expr(HostExpr::code(expr))
    }

    pub fn embed_expr(mut self, expr: HostExpr) -> Self {
        self.node.children.push(ChildNode::Embed {
            expr,
            client: None,
            span: Span::default(),
        });
        self
    }

    /// `{expr}(js)`
    pub fn embed_client(mut self, expr: impl Into<String>, js: impl Into<String>) -> Self {
        self.node.children.push(ChildNode::Embed {
            expr: HostExpr::code(expr),
            client: Some(ClientExpr::Local(js.into())),
            span: Span::default(),
        });
        self
    }

    /// `{expr}({forwarded})`
    pub fn embed_forwarded(
        mut self,
        expr: impl Into<String>,
        forwarded: impl Into<String>,
    ) -> Self {
        self.node.children.push(ChildNode::Embed {
            expr: HostExpr::code(expr),
            client: Some(ClientExpr::Forwarded(HostExpr::code(forwarded))),
            span: Span::default(),
        });
        self
    }

    /// `[literal](js)`
    pub fn text_client(mut self, literal: impl Into<String>, js: impl Into<String>) -> Self {
        self.node.children.push(ChildNode::LiteralClient {
            literal: literal.into(),
            client: ClientExpr::Local(js.into()),
            span: Span::default(),
        });
        self
    }

    /// `[literal]({expr})`
    pub fn text_forwarded(
        mut self,
        literal: impl Into<String>,
        expr: impl Into<String>,
    ) -> Self {
        self.node.children.push(ChildNode::LiteralClient {
            literal: literal.into(),
            client: ClientExpr::Forwarded(HostExpr::code(expr)),
            span: Span::default(),
        });
        self
    }

    pub fn script(mut self, script: ScriptNode) -> Self {
        self.node.children.push(ChildNode::Script(script));
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.node.children.push(ChildNode::Comment(comment.into()));
        self
    }

    pub fn build(mut self) -> ElementNode {
        if self.node.source.is_empty() {
            self.node.source = print_element(&self.node);
        }
        self.node
    }
}

#[derive(Debug, Clone)]
pub struct ScriptBuilder {
    node: ScriptNode,
}

impl ScriptBuilder {
    fn named(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.node
            .attributes
            .push(AttributeNode::Named(NamedAttribute {
                name: name.into(),
                value,
                span: Span::default(),
            }));
        self
    }

    pub fn attr(mut self, attr: AttributeNode) -> Self {
        self.node.attributes.push(attr);
        self
    }

    pub fn literal(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named(name, AttributeValue::Literal(value.into()))
    }

    pub fn server(self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.named(
            name,
            AttributeValue::Embed {
                expr: HostExpr::code(expr),
                client: None,
                css: None,
            },
        )
    }

    pub fn forwarded(self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.named(
            name,
            AttributeValue::Client(ClientExpr::Forwarded(HostExpr::code(expr))),
        )
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.node.body.push(ScriptSegment::Code(code.into()));
        self
    }

    pub fn import(mut self, decl: ImportDecl) -> Self {
        self.node.body.push(ScriptSegment::Import(decl));
        self
    }

    pub fn build(self) -> ScriptNode {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_fills_source() {
        let el = element("p").text("hello").build();
        assert_eq!(el.source, "<p>hello</p>");
        assert_eq!(el.end_name.as_deref(), Some("p"));
    }

    #[test]
    fn test_build_keeps_given_source() {
        let el = element("p").source("<p >hello</p >").text("hello").build();
        assert_eq!(el.source, "<p >hello</p >");
    }

    #[test]
    fn test_fragment() {
        let el = fragment().child(element("br").self_closing().build()).build();
        assert!(el.is_fragment());
        assert_eq!(el.source, "<><br /></>");
    }

    #[test]
    fn test_host_with_markup() {
        let li = element("li").embed("x").build();
        let expr = host_with_markup("[", li, " for x in xs]");
        assert!(expr.has_markup());
        assert_eq!(
            crate::printer::print_host(&expr),
            "[<li>{x}</li> for x in xs]"
        );
    }
}
