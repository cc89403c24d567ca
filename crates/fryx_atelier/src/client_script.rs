//! Client bootstrap scripts.
//!
//! A component with a script block or any client value gets one generated
//! script file. The file registers an async initializer that reads the
//! captured arguments from its `<script>` tag, runs the author's body, and
//! hands the embedded client values to the hydration entry point in
//! declaration order.

use fryx_relief::{ImportDecl, ScriptNode, ScriptSegment};

/// One generated client script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientScript {
    /// Content hash of the root element source; the file is `<module_id>.js`.
    pub module_id: String,
    /// Capture argument names, in declaration order.
    pub args: Vec<String>,
    /// Client embed expressions, in embed-number order.
    pub embeds: Vec<String>,
    /// The composed file content.
    pub code: String,
}

impl ClientScript {
    pub fn file_name(&self) -> String {
        format!("{}.js", self.module_id)
    }
}

/// Script body with static imports rewritten to dynamic ones.
pub fn script_body(script: &ScriptNode) -> String {
    let mut body = String::new();
    for segment in &script.body {
        match segment {
            ScriptSegment::Code(code) => body.push_str(code),
            ScriptSegment::Import(decl) => body.push_str(&dynamic_import(decl)),
        }
    }
    body
}

/// Rewrite one static import as an `await import(...)` binding.
///
/// ```
/// use fryx_atelier::client_script::dynamic_import;
/// use fryx_relief::ImportDecl;
///
/// let decl = ImportDecl {
///     module: "./chart.js".into(),
///     default: Some("Chart".into()),
///     ..Default::default()
/// };
/// assert_eq!(
///     dynamic_import(&decl),
///     "const {default: Chart} = await import(\"./chart.js\")"
/// );
/// ```
pub fn dynamic_import(decl: &ImportDecl) -> String {
    let module = format!("\"{}\"", decl.module);
    let mut names = Vec::new();
    if let Some(default) = &decl.default {
        names.push(format!("default: {}", default));
    }
    for (name, alias) in &decl.named {
        match alias {
            Some(alias) => names.push(format!("{}: {}", name, alias)),
            None => names.push(name.clone()),
        }
    }

    match (&decl.namespace, names.is_empty()) {
        (None, true) => format!("await import({})", module),
        (None, false) => format!(
            "const {{{}}} = await import({})",
            names.join(", "),
            module
        ),
        (Some(namespace), true) => format!("const {} = await import({})", namespace, module),
        (Some(namespace), false) => format!(
            "const {} = await import({}), {{{}}} = {}",
            namespace,
            module,
            names.join(", "),
            namespace
        ),
    }
}

/// Compose the self-registering initializer.
pub fn compose_js(args: &[String], body: &str, embeds: &[String], runtime: &str) -> String {
    let captures: Vec<String> = args
        .iter()
        .map(|arg| {
            format!(
                "const {arg} = (\"frydata\" in script$$ && \"{arg}\" in script$$.frydata) ? script$$.frydata.{arg} : script$$.dataset.{arg};"
            )
        })
        .collect();

    format!(
        r#"'fryfunctions$$' in window || (window.fryfunctions$$ = []);
window.fryfunctions$$.push([document.currentScript, async function (script$$) {{
    {captures}
    {body}
    const {{hydrate: hydrate$$}} = await import("{runtime}");
    const rootElement$$ = script$$.parentElement;
    const componentId$$ = script$$.dataset.fryid;
    let embeds$$ = [{embeds}];
    hydrate$$(rootElement$$, componentId$$, embeds$$);
}}]);
"#,
        captures = captures.join("\n    "),
        body = body,
        runtime = runtime,
        embeds = embeds.join(", "),
    )
}
