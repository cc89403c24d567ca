//! Server code generation.
//!
//! Host code is copied through verbatim; every root element is replaced by
//! one `Element(name, {attr-map})` construction expression. Nested elements
//! inside host expressions, attribute values and child lists compile to the
//! same shape in place.

use fryx_carton::{collapse_whitespace, content_hash, quoted};
use fryx_pigment::CssRule;
use fryx_relief::{ChildNode, ClientExpr, Document, ElementNode, HostExpr, HostPiece};

use crate::attribute::{element_code, AttributeRecord, ClientRef};
use crate::classify::{ElementKind, UnitState};
use crate::client_script::{compose_js, ClientScript};
use crate::errors::CompileError;
use crate::options::CompilerOptions;

/// Inline element wrapping a text run that carries a client override.
const PASS_THROUGH_TAG: &str = "span";

/// Output buffer for a whole document.
pub struct CodegenContext {
    code: Vec<u8>,
}

impl CodegenContext {
    pub fn new() -> Self {
        Self {
            code: Vec::with_capacity(4096),
        }
    }

    /// Push string to buffer
    #[inline]
    pub fn push(&mut self, code: &str) {
        self.code.extend_from_slice(code.as_bytes());
    }

    pub fn into_code(self) -> String {
        // SAFETY: only valid UTF-8 strings are pushed
        unsafe { String::from_utf8_unchecked(self.code) }
    }
}

impl Default for CodegenContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of compiling one document.
#[derive(Debug, Clone, Default)]
pub struct CompiledUnit {
    /// Host code with every root element replaced by its construction code.
    pub code: String,
    /// One client script per root element that needs one.
    pub scripts: Vec<ClientScript>,
    /// Valid utility rules, in emission order.
    pub rules: Vec<CssRule>,
}

/// Compile a parsed document.
///
/// The first error aborts the whole document; nothing is returned for the
/// roots that compiled before it.
pub fn compile_document(
    document: &Document,
    options: &CompilerOptions,
) -> Result<CompiledUnit, CompileError> {
    let mut ctx = CodegenContext::new();
    let mut unit = CompiledUnit::default();
    let mut compiler = UnitCompiler::new(options);

    for piece in &document.pieces {
        match piece {
            HostPiece::Code(code) => ctx.push(code),
            HostPiece::Element(root) => {
                let (code, script) = compiler.root(root)?;
                ctx.push(&code);
                unit.scripts.extend(script);
                unit.rules.append(&mut compiler.state.rules);
            }
        }
    }

    unit.code = ctx.into_code();
    tracing::debug!(
        scripts = unit.scripts.len(),
        rules = unit.rules.len(),
        "compiled document"
    );
    Ok(unit)
}

/// Compiler for the root elements of one document.
pub(crate) struct UnitCompiler<'o> {
    pub(crate) options: &'o CompilerOptions,
    pub(crate) state: UnitState,
}

impl<'o> UnitCompiler<'o> {
    pub(crate) fn new(options: &'o CompilerOptions) -> Self {
        Self {
            options,
            state: UnitState::default(),
        }
    }

    /// Compile a root element, and its client script when it needs one.
    pub(crate) fn root(
        &mut self,
        el: &ElementNode,
    ) -> Result<(String, Option<ClientScript>), CompileError> {
        self.state = UnitState::default();
        if el.name == "script" {
            return Err(CompileError::ScriptRoot { span: el.span });
        }

        let (name, mut records) = self.element_records(el)?;
        let mut script = None;
        if self.state.needs_client_script() {
            let module_id = content_hash(&el.source);
            let capture = self.state.script.take().unwrap_or_default();
            let names: Vec<String> = capture.args.iter().map(|(name, _)| name.clone()).collect();
            let embeds = std::mem::take(&mut self.state.embeds);
            let code = compose_js(&names, &capture.body, &embeds, &self.options.runtime_module);
            tracing::debug!(module = %module_id, embeds = embeds.len(), "client script");
            records.insert(
                0,
                AttributeRecord::CallClientScript {
                    module_id: module_id.clone(),
                    args: capture.args,
                },
            );
            script = Some(ClientScript {
                module_id,
                args: names,
                embeds,
                code,
            });
        }
        Ok((element_code(&name, &records), script))
    }

    pub(crate) fn element(&mut self, el: &ElementNode) -> Result<String, CompileError> {
        let (name, records) = self.element_records(el)?;
        Ok(element_code(&name, &records))
    }

    fn element_records(
        &mut self,
        el: &ElementNode,
    ) -> Result<(String, Vec<AttributeRecord>), CompileError> {
        if el.name == "script" {
            return Err(CompileError::MisplacedScript { span: el.span });
        }
        if let Some(end) = &el.end_name {
            if *end != el.name {
                return Err(CompileError::TagMismatch {
                    start: el.name.clone(),
                    end: end.clone(),
                    span: el.span,
                });
            }
        }

        let (name, mut records) = match ElementKind::of(&el.name) {
            ElementKind::Html => {
                let tag = if el.is_fragment() { "div" } else { el.name.as_str() };
                (quoted(tag), self.html_attributes(tag, el)?)
            }
            ElementKind::Component => (el.name.clone(), self.component_attributes(el)?),
        };
        let void_tag = el.is_self_closing() && ElementKind::of(&el.name) == ElementKind::Html;
        if !void_tag {
            records.push(AttributeRecord::Children(self.children(el)?));
        }
        Ok((name, records))
    }

    fn children(&mut self, el: &ElementNode) -> Result<Vec<String>, CompileError> {
        let mut children = Vec::with_capacity(el.children.len());
        for child in &el.children {
            match child {
                ChildNode::Text(text) => {
                    let text = collapse_whitespace(&text.text);
                    if !text.is_empty() {
                        children.push(quoted(&text));
                    }
                }
                ChildNode::Element(nested) => children.push(self.element(nested)?),
                ChildNode::Embed {
                    expr, client: None, ..
                } => children.push(self.host(expr)?),
                ChildNode::Embed {
                    expr,
                    client: Some(client),
                    ..
                } => {
                    let value = self.host(expr)?;
                    let client = self.client_ref(client)?;
                    children.push(pass_through(client, value));
                }
                ChildNode::LiteralClient {
                    literal, client, ..
                } => {
                    let client = self.client_ref(client)?;
                    children.push(pass_through(client, quoted(literal)));
                }
                ChildNode::Script(script) => self.capture_script(script)?,
                ChildNode::Comment(_) => {}
            }
        }
        Ok(children)
    }

    /// Host code with its nested markup compiled, parenthesized.
    pub(crate) fn host(&mut self, expr: &HostExpr) -> Result<String, CompileError> {
        let mut code = String::from("(");
        for piece in &expr.pieces {
            match piece {
                HostPiece::Code(text) => code.push_str(text),
                HostPiece::Element(el) => code.push_str(&self.element(el)?),
            }
        }
        code.push(')');
        Ok(code)
    }

    pub(crate) fn client_ref(&mut self, client: &ClientExpr) -> Result<ClientRef, CompileError> {
        match client {
            ClientExpr::Local(js) => Ok(ClientRef::Embed(self.state.next_embed(js))),
            ClientExpr::Forwarded(expr) => {
                self.state.mark_client();
                Ok(ClientRef::Forwarded(self.host(expr)?))
            }
        }
    }
}

/// A text run with a client override, wrapped so the marker has an element.
fn pass_through(client: ClientRef, value: String) -> String {
    element_code(
        &quoted(PASS_THROUGH_TAG),
        &[
            AttributeRecord::TextClientEmbed(client),
            AttributeRecord::Children(vec![value]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fryx_relief::builder::{element, fragment, host_with_markup, script};
    use fryx_relief::Span;

    fn compile_root(el: ElementNode) -> Result<CompiledUnit, CompileError> {
        compile_document(
            &Document::new(vec![HostPiece::Element(el)]),
            &CompilerOptions::default(),
        )
    }

    fn code(el: ElementNode) -> String {
        compile_root(el).unwrap().code
    }

    #[test]
    fn test_host_code_is_verbatim() {
        let document = Document::new(vec![
            HostPiece::Code("def Hello():\n    return ".into()),
            HostPiece::Element(element("p").text("hi").build()),
            HostPiece::Code("\n".into()),
        ]);
        let unit = compile_document(&document, &CompilerOptions::default()).unwrap();
        assert_eq!(
            unit.code,
            "def Hello():\n    return Element(\"p\", {\"children\": [\"hi\"]})\n"
        );
        assert!(unit.scripts.is_empty());
    }

    #[test]
    fn test_text_is_collapsed_and_escaped() {
        let el = element("p")
            .text("  say \n \"hi\"  ")
            .text("   ")
            .comment(" note ")
            .build();
        assert_eq!(code(el), r#"Element("p", {"children": ["say \"hi\""]})"#);
    }

    #[test]
    fn test_void_tag_has_no_children() {
        let el = element("img").literal("src", "/a.png").self_closing().build();
        assert_eq!(code(el), r#"Element("img", {"src": "/a.png"})"#);
    }

    #[test]
    fn test_fragment_is_div() {
        let el = fragment().child(element("b").build()).build();
        assert_eq!(
            code(el),
            r#"Element("div", {"children": [Element("b", {"children": []})]})"#
        );
    }

    #[test]
    fn test_nested_markup_in_host_expression() {
        let item = element("li").embed("x").build();
        let el = element("ul")
            .embed_expr(host_with_markup("[", item, " for x in items]"))
            .build();
        assert_eq!(
            code(el),
            r#"Element("ul", {"children": [([Element("li", {"children": [(x)]}) for x in items])]})"#
        );
    }

    #[test]
    fn test_text_client_embed() {
        let el = element("p")
            .embed_client("count", "count")
            .text_forwarded("Hi", "props.greeting")
            .build();
        let unit = compile_root(el).unwrap();
        assert!(unit.code.contains(
            r#"Element("span", {"*": ClientEmbed(0), "children": [(count)]})"#
        ));
        assert!(unit.code.contains(
            r#"Element("span", {"*": (props.greeting), "children": ["Hi"]})"#
        ));
        assert_eq!(unit.scripts.len(), 1);
        assert_eq!(unit.scripts[0].embeds, vec!["count"]);
    }

    #[test]
    fn test_tag_mismatch() {
        let el = element("div").end_tag("span").span(Span::new(0, 11)).build();
        assert_eq!(
            compile_root(el).unwrap_err(),
            CompileError::TagMismatch {
                start: "div".into(),
                end: "span".into(),
                span: Span::new(0, 11),
            }
        );
    }

    #[test]
    fn test_script_rules() {
        let root = element("script").build();
        assert!(matches!(
            compile_root(root),
            Err(CompileError::ScriptRoot { .. })
        ));

        let nested = element("div").child(element("script").build()).build();
        assert!(matches!(
            compile_root(nested),
            Err(CompileError::MisplacedScript { .. })
        ));

        let twice = element("div")
            .script(script().code("a();").build())
            .script(script().code("b();").build())
            .build();
        assert!(matches!(
            compile_root(twice),
            Err(CompileError::MultipleScripts { .. })
        ));
    }

    #[test]
    fn test_client_script_for_root() {
        let el = element("div")
            .script(script().literal("mode", "dark").code("init(mode);").build())
            .child(element("button").client("@click", "toggle").build())
            .build();
        let module_id = content_hash(&el.source);
        let unit = compile_root(el).unwrap();
        assert_eq!(
            unit.code,
            format!(
                r#"Element("div", {{"call-client-script": ["{module_id}", [("mode", "dark")]], "children": [Element("button", {{"@click": ClientEmbed(0), "children": []}})]}})"#
            )
        );
        let script = &unit.scripts[0];
        assert_eq!(script.module_id, module_id);
        assert_eq!(script.file_name(), format!("{module_id}.js"));
        assert_eq!(script.args, vec!["mode"]);
        assert_eq!(script.embeds, vec!["toggle"]);
        assert!(script.code.contains("init(mode);"));
    }

    #[test]
    fn test_embed_counter_resets_per_root() {
        let first = element("button").client("@click", "a").build();
        let second = element("button").client("@click", "b").build();
        let document = Document::new(vec![
            HostPiece::Element(first),
            HostPiece::Code("\n".into()),
            HostPiece::Element(second),
        ]);
        let unit = compile_document(&document, &CompilerOptions::default()).unwrap();
        assert_eq!(unit.code.matches("ClientEmbed(0)").count(), 2);
        assert_eq!(unit.scripts.len(), 2);
        assert_eq!(unit.scripts[1].embeds, vec!["b"]);
    }

    #[test]
    fn test_codegen_context() {
        let mut ctx = CodegenContext::default();
        ctx.push("a");
        ctx.push("bc");
        assert_eq!(ctx.into_code(), "abc");
    }
}
