//! Fryx parse-tree node types.
//!
//! Nodes are immutable once produced. Every node that can be blamed in a
//! diagnostic carries a [`Span`]; root elements also keep their exact source
//! substring because generated client scripts are named after it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte range `[start, end)` into the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A whole source file: host code with root elements embedded in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub pieces: Vec<HostPiece>,
}

impl Document {
    pub fn new(pieces: Vec<HostPiece>) -> Self {
        Self { pieces }
    }

    /// Root elements in source order.
    pub fn roots(&self) -> impl Iterator<Item = &ElementNode> {
        self.pieces.iter().filter_map(|piece| match piece {
            HostPiece::Element(el) => Some(el),
            HostPiece::Code(_) => None,
        })
    }
}

/// One run of host code, or markup embedded in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostPiece {
    Code(String),
    Element(ElementNode),
}

/// Host code that may itself contain nested markup, e.g. `{[<li>{x}</li> for x in xs]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostExpr {
    pub pieces: Vec<HostPiece>,
    pub span: Span,
}

impl HostExpr {
    /// A plain host expression without nested markup.
    pub fn code(text: impl Into<String>) -> Self {
        Self {
            pieces: vec![HostPiece::Code(text.into())],
            span: Span::default(),
        }
    }

    /// Whether the expression contains nested markup.
    pub fn has_markup(&self) -> bool {
        self.pieces
            .iter()
            .any(|piece| matches!(piece, HostPiece::Element(_)))
    }
}

/// An element, component reference, or fragment (`<>…</>`, empty name).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub name: String,
    /// Name in the end tag. `None` for self-closing elements.
    pub end_name: Option<String>,
    pub attributes: Vec<AttributeNode>,
    pub children: Vec<ChildNode>,
    pub span: Span,
    /// Exact matched source substring. Empty for synthesized trees.
    pub source: String,
}

impl ElementNode {
    #[inline]
    pub fn is_fragment(&self) -> bool {
        self.name.is_empty()
    }

    #[inline]
    pub fn is_self_closing(&self) -> bool {
        self.end_name.is_none() && !self.is_fragment()
    }

    /// The script block among the direct children, if any.
    pub fn script(&self) -> Option<&ScriptNode> {
        self.children.iter().find_map(|child| match child {
            ChildNode::Script(script) => Some(script),
            _ => None,
        })
    }
}

/// An attribute in a start tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeNode {
    /// `name`, `name="v"`, `name={expr}`, …
    Named(NamedAttribute),
    /// `{**expr}` or `{*expr}`
    Spread(SpreadAttribute),
}

impl AttributeNode {
    pub fn span(&self) -> Span {
        match self {
            Self::Named(attr) => attr.span,
            Self::Spread(spread) => spread.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedAttribute {
    pub name: String,
    pub value: AttributeValue,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadAttribute {
    pub expr: HostExpr,
    /// `{*expr}`: every item of the sequence becomes a boolean attribute.
    pub sequence: bool,
    /// Utility hint for the collector, `{**expr}:"p-4"`.
    pub css: Option<String>,
    pub span: Span,
}

/// The value side of a named attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// `name`
    None,
    /// `name="v"` (quotes stripped)
    Literal(String),
    /// `name={expr}`, `name={expr}(js)`, `name={expr}({expr})`
    Embed {
        expr: HostExpr,
        client: Option<ClientExpr>,
        css: Option<String>,
    },
    /// `name=[v](js)`, `name=[v]({expr})`
    LiteralClient {
        literal: String,
        client: ClientExpr,
        css: Option<String>,
    },
    /// `name=(js)`, `name=({expr})`
    Client(ClientExpr),
    /// `name=<tag>…</tag>`
    Element(Box<ElementNode>),
}

/// A value supplied on the client at hydration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClientExpr {
    /// `(js)`: client code of this component.
    Local(String),
    /// `({expr})`: host expression evaluating to a value forwarded by the parent.
    Forwarded(HostExpr),
}

/// A node between a start tag and its end tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChildNode {
    Text(TextNode),
    Element(ElementNode),
    /// `{expr}`, optionally with a client override.
    Embed {
        expr: HostExpr,
        client: Option<ClientExpr>,
        span: Span,
    },
    /// `[literal](js)` or `[literal]({expr})`
    LiteralClient {
        literal: String,
        client: ClientExpr,
        span: Span,
    },
    Script(ScriptNode),
    Comment(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub text: String,
    pub span: Span,
}

/// `<script attr=…>body</script>`: the client bootstrap script of a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptNode {
    pub attributes: Vec<AttributeNode>,
    pub body: Vec<ScriptSegment>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScriptSegment {
    Code(String),
    Import(ImportDecl),
}

/// A static `import` statement in a script body.
///
/// `import "m"` has no bindings; `import a, * as ns, { b, c as d } from "m"`
/// fills every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDecl {
    /// Module specifier without quotes.
    pub module: String,
    pub default: Option<String>,
    pub namespace: Option<String>,
    /// `(imported, alias)`
    pub named: Vec<(String, Option<String>)>,
}
