//! Server code and client script snapshot tests.

use fryx_atelier::{compile_document, CompileError, CompiledUnit, CompilerOptions};
use fryx_carton::content_hash;
use fryx_relief::builder::{element, fragment, script};
use fryx_relief::{Document, ElementNode, HostPiece, ImportDecl};

fn compile(root: ElementNode) -> CompiledUnit {
    try_compile(root).expect("compile failed")
}

fn try_compile(root: ElementNode) -> Result<CompiledUnit, CompileError> {
    compile_document(
        &Document::new(vec![HostPiece::Element(root)]),
        &CompilerOptions::default(),
    )
}

// =============================================================================
// HTML tags
// =============================================================================

mod html {
    use super::*;

    #[test]
    fn native_attributes() {
        let root = element("a")
            .literal("href", "/about")
            .literal("target", "_blank")
            .text("About")
            .build();
        insta::assert_snapshot!(compile(root).code, @r#"Element("a", {"href": "/about", "target": "_blank", "children": ["About"]})"#);
    }

    #[test]
    fn utility_folding() {
        let root = element("div")
            .literal("class", "card")
            .literal("p", "4")
            .literal("hover:bg", "sky-500")
            .flag("flex")
            .literal("foo", "bar baz")
            .build();
        let unit = compile(root);
        insta::assert_snapshot!(unit.code, @r#"Element("div", {"class": "card p-4 hover:bg-sky-500 flex foo-bar foo-baz", "children": []})"#);

        let classes: Vec<String> = unit.rules.iter().map(|rule| rule.class_name()).collect();
        assert_eq!(classes, vec!["p-4", "hover:bg-sky-500", "flex"]);
    }

    #[test]
    fn spreads() {
        let root = element("input")
            .spread("attrs")
            .spread_flags("flags")
            .self_closing()
            .build();
        insta::assert_snapshot!(compile(root).code, @r#"Element("input", {**(attrs), **Flags((flags))})"#);
    }

    #[test]
    fn fragment_and_nesting() {
        let root = fragment()
            .child(element("h1").text("Title").build())
            .child(element("p").embed("body").build())
            .build();
        insta::assert_snapshot!(compile(root).code, @r#"Element("div", {"children": [Element("h1", {"children": ["Title"]}), Element("p", {"children": [(body)]})]})"#);
    }
}

// =============================================================================
// Components
// =============================================================================

mod component {
    use super::*;

    #[test]
    fn props() {
        let root = element("Layout")
            .literal("title", "Home")
            .server("user", "request.user")
            .element_attr("header", element("h1").text("Hi").build())
            .self_closing()
            .build();
        insta::assert_snapshot!(compile(root).code, @r#"Element(Layout, {"title": "Home", "user": (request.user), "header": Element("h1", {"children": ["Hi"]}), "children": []})"#);
    }

    #[test]
    fn forwarded_client_value() {
        let root = element("Card")
            .literal("title", "Hi")
            .forwarded("onClick", "parentHandler")
            .self_closing()
            .build();
        let module_id = content_hash(&root.source);
        let unit = compile(root);
        assert_eq!(
            unit.code,
            format!(
                r#"Element(Card, {{"call-client-script": ["{module_id}", []], "title": "Hi", "onClick": (parentHandler), "children": []}})"#
            )
        );
        assert_eq!(unit.scripts.len(), 1);
        assert!(unit.scripts[0].embeds.is_empty());
    }
}

// =============================================================================
// Client scripts
// =============================================================================

mod client_script {
    use super::*;

    #[test]
    fn counter_component() {
        let root = element("div")
            .script(
                script()
                    .literal("initial", "0")
                    .import(ImportDecl {
                        module: "fryx".into(),
                        named: vec![("signal".into(), None)],
                        ..Default::default()
                    })
                    .code(";\nconst count = signal(Number(initial));")
                    .build(),
            )
            .embed_client("0", "count")
            .child(
                element("button")
                    .client("@click", "() => count.value++")
                    .text("+")
                    .build(),
            )
            .build();
        let unit = compile(root);
        let script = &unit.scripts[0];
        assert_eq!(script.embeds, vec!["count", "() => count.value++"]);

        insta::assert_snapshot!(script.code, @r#"
        'fryfunctions$$' in window || (window.fryfunctions$$ = []);
        window.fryfunctions$$.push([document.currentScript, async function (script$$) {
            const initial = ("frydata" in script$$ && "initial" in script$$.frydata) ? script$$.frydata.initial : script$$.dataset.initial;
            const {signal} = await import("fryx");
        const count = signal(Number(initial));
            const {hydrate: hydrate$$} = await import("fryx");
            const rootElement$$ = script$$.parentElement;
            const componentId$$ = script$$.dataset.fryid;
            let embeds$$ = [count, () => count.value++];
            hydrate$$(rootElement$$, componentId$$, embeds$$);
        }]);
        "#);
    }

    #[test]
    fn no_script_without_client_values() {
        let root = element("div").literal("p", "2").text("static").build();
        assert!(compile(root).scripts.is_empty());
    }
}

// =============================================================================
// Errors
// =============================================================================

mod errors {
    use super::*;

    #[test]
    fn error_messages() {
        let err = try_compile(element("Card").client("@click", "go").build()).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"invalid attribute `@click` on component Card at 0..0: components do not take event handlers");

        let err = try_compile(element("button").literal("@click", "go()").build()).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"event handler `@click` on <button> at 0..0 must be a server or client value");
    }
}
