//! Markup printer.
//!
//! Renders a tree back into Fryx markup. Synthesized trees have no source
//! text of their own, so the printed form stands in for it wherever the exact
//! source substring is needed.

use crate::ast::*;

/// Print an element (and everything below it) as markup.
pub fn print_element(el: &ElementNode) -> String {
    let mut out = String::new();
    write_element(&mut out, el);
    out
}

/// Print host code with its nested markup.
pub fn print_host(expr: &HostExpr) -> String {
    let mut out = String::new();
    write_host(&mut out, expr);
    out
}

/// Print a static import the way it appears in a script body.
pub fn print_import(decl: &ImportDecl) -> String {
    let mut bindings = Vec::new();
    if let Some(default) = &decl.default {
        bindings.push(default.clone());
    }
    if let Some(ns) = &decl.namespace {
        bindings.push(format!("* as {}", ns));
    }
    if !decl.named.is_empty() {
        let named: Vec<String> = decl
            .named
            .iter()
            .map(|(name, alias)| match alias {
                Some(alias) => format!("{} as {}", name, alias),
                None => name.clone(),
            })
            .collect();
        bindings.push(format!("{{ {} }}", named.join(", ")));
    }
    if bindings.is_empty() {
        format!("import \"{}\"", decl.module)
    } else {
        format!("import {} from \"{}\"", bindings.join(", "), decl.module)
    }
}

fn write_element(out: &mut String, el: &ElementNode) {
    out.push('<');
    out.push_str(&el.name);
    for attr in &el.attributes {
        out.push(' ');
        write_attribute(out, attr);
    }
    if el.is_self_closing() {
        out.push_str(" />");
        return;
    }
    out.push('>');
    for child in &el.children {
        write_child(out, child);
    }
    out.push_str("</");
    out.push_str(el.end_name.as_deref().unwrap_or(""));
    out.push('>');
}

fn write_attribute(out: &mut String, attr: &AttributeNode) {
    match attr {
        AttributeNode::Named(named) => {
            out.push_str(&named.name);
            match &named.value {
                AttributeValue::None => {}
                AttributeValue::Literal(value) => {
                    out.push_str("=\"");
                    out.push_str(value);
                    out.push('"');
                }
                AttributeValue::Embed { expr, client, css } => {
                    out.push_str("={");
                    write_host(out, expr);
                    out.push('}');
                    if let Some(client) = client {
                        write_client(out, client);
                    }
                    write_css(out, css.as_deref());
                }
                AttributeValue::LiteralClient {
                    literal,
                    client,
                    css,
                } => {
                    out.push_str("=[");
                    out.push_str(literal);
                    out.push(']');
                    write_client(out, client);
                    write_css(out, css.as_deref());
                }
                AttributeValue::Client(client) => {
                    out.push('=');
                    write_client(out, client);
                }
                AttributeValue::Element(el) => {
                    out.push('=');
                    write_element(out, el);
                }
            }
        }
        AttributeNode::Spread(spread) => {
            out.push_str(if spread.sequence { "{*" } else { "{**" });
            write_host(out, &spread.expr);
            out.push('}');
            write_css(out, spread.css.as_deref());
        }
    }
}

fn write_client(out: &mut String, client: &ClientExpr) {
    match client {
        ClientExpr::Local(js) => {
            out.push('(');
            out.push_str(js);
            out.push(')');
        }
        ClientExpr::Forwarded(expr) => {
            out.push_str("({");
            write_host(out, expr);
            out.push_str("})");
        }
    }
}

fn write_css(out: &mut String, css: Option<&str>) {
    if let Some(css) = css {
        out.push_str(":\"");
        out.push_str(css);
        out.push('"');
    }
}

fn write_host(out: &mut String, expr: &HostExpr) {
    for piece in &expr.pieces {
        match piece {
            HostPiece::Code(code) => out.push_str(code),
            HostPiece::Element(el) => write_element(out, el),
        }
    }
}

fn write_child(out: &mut String, child: &ChildNode) {
    match child {
        ChildNode::Text(text) => out.push_str(&text.text),
        ChildNode::Element(el) => write_element(out, el),
        ChildNode::Embed { expr, client, .. } => {
            out.push('{');
            write_host(out, expr);
            out.push('}');
            if let Some(client) = client {
                write_client(out, client);
            }
        }
        ChildNode::LiteralClient {
            literal, client, ..
        } => {
            out.push('[');
            out.push_str(literal);
            out.push(']');
            write_client(out, client);
        }
        ChildNode::Script(script) => {
            out.push_str("<script");
            for attr in &script.attributes {
                out.push(' ');
                write_attribute(out, attr);
            }
            out.push('>');
            for segment in &script.body {
                match segment {
                    ScriptSegment::Code(code) => out.push_str(code),
                    ScriptSegment::Import(decl) => out.push_str(&print_import(decl)),
                }
            }
            out.push_str("</script>");
        }
        ChildNode::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{element, script};

    #[test]
    fn test_print_html_element() {
        let el = element("div")
            .literal("class", "p-4")
            .flag("hidden")
            .server("title", "user.name")
            .text("hi")
            .build();
        assert_eq!(
            print_element(&el),
            r#"<div class="p-4" hidden title={user.name}>hi</div>"#
        );
    }

    #[test]
    fn test_print_client_forms() {
        let el = element("input")
            .literal_client("value", "0", "count")
            .client("@input", "onInput")
            .forwarded("title", "props.title")
            .self_closing()
            .build();
        assert_eq!(
            print_element(&el),
            "<input value=[0](count) @input=(onInput) title=({props.title}) />"
        );
    }

    #[test]
    fn test_print_script() {
        let el = element("div")
            .script(
                script()
                    .literal("mode", "dark")
                    .import(ImportDecl {
                        module: "./util.js".into(),
                        default: Some("util".into()),
                        ..Default::default()
                    })
                    .code(";\nutil(mode);")
                    .build(),
            )
            .build();
        assert_eq!(
            print_element(&el),
            "<div><script mode=\"dark\">import util from \"./util.js\";\nutil(mode);</script></div>"
        );
    }

    #[test]
    fn test_print_import_forms() {
        let decl = ImportDecl {
            module: "signals".into(),
            default: None,
            namespace: Some("sig".into()),
            named: vec![("signal".into(), None), ("effect".into(), Some("fx".into()))],
        };
        assert_eq!(
            print_import(&decl),
            "import * as sig, { signal, effect as fx } from \"signals\""
        );
        let bare = ImportDecl {
            module: "polyfill".into(),
            ..Default::default()
        };
        assert_eq!(print_import(&bare), "import \"polyfill\"");
    }
}
