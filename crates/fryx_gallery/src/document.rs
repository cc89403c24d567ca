//! Full page shell.

use fryx_carton::{escape_attr, escape_text};
use indexmap::IndexMap;

use crate::element::Element;
use crate::errors::RenderError;
use crate::options::{PageOptions, RenderOptions};
use crate::page::Page;

const SEP: &str = "\n    ";

/// Render `content` with a fresh [`Page`] and wrap it in a complete HTML
/// document: stylesheet link, import map, the loop running every
/// registered client script, and in debug mode the auto-reload poller.
pub fn html_document(
    content: Element,
    page: &PageOptions,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let content = content.render(&mut Page::new(options))?;

    let metas = meta_tags("name", &page.metas);
    let properties = meta_tags("property", &page.properties);
    let equivs = meta_tags("http-equiv", &page.equivs);
    let root_class = if page.root_class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", escape_attr(&page.root_class))
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="{lang}"{root_class}>
  <head>
    <meta charset="{charset}">
    <title>{title}</title>
    <meta name="viewport" content="{viewport}">
    {metas}
    {properties}
    {equivs}
    <link rel="stylesheet" href="{stylesheet}">
    {import_map}
  </head>
  <body>
    {content}
    <script>
      (async function () {{
        if ('fryfunctions$$' in window) {{
          for (const [script, fn] of window.fryfunctions$$) {{
            await fn(script);
          }}
        }}
      }})();
    </script>
    {autoreload}
  </body>
</html>
"#,
        lang = escape_attr(&page.lang),
        root_class = root_class,
        charset = escape_attr(&page.charset),
        title = escape_text(&page.title),
        viewport = escape_attr(&page.viewport),
        metas = metas,
        properties = properties,
        equivs = equivs,
        stylesheet = options.static_url(&options.css_url),
        import_map = import_map(options),
        content = content,
        autoreload = autoreload(options),
    ))
}

fn meta_tags(attr: &str, entries: &IndexMap<String, String>) -> String {
    entries
        .iter()
        .map(|(key, value)| {
            format!(
                "<meta {}=\"{}\" content=\"{}\">",
                attr,
                escape_attr(key),
                escape_attr(value)
            )
        })
        .collect::<Vec<_>>()
        .join(SEP)
}

/// Maps the runtime, the component script directory and `@/` to static URLs.
fn import_map(options: &RenderOptions) -> String {
    format!(
        r#"<script type="importmap">
      {{
        "imports": {{
          "{runtime}": "{runtime_url}",
          "components/": "{components}",
          "@/": "{root}"
        }}
      }}
    </script>"#,
        runtime = options.runtime_module,
        runtime_url = options.static_url(&options.runtime_url),
        components = options.static_url(&options.js_url),
        root = options.static_url("/"),
    )
}

/// Poll `check_reload_url` and reload when the server id changes.
fn autoreload(options: &RenderOptions) -> String {
    if !options.debug {
        return String::new();
    }
    format!(
        r#"<script type="module">
      let serverId = undefined
      async function checkAutoReload() {{
        let reload = false
        try {{
          let resp = await fetch("{url}")
          let data = await resp.json()
          if (serverId === undefined) {{
            serverId = data.serverId
          }} else if (serverId !== data.serverId) {{
            reload = true
            location.reload()
          }}
        }} catch (err) {{ }}
        if (!reload) {{
          setTimeout(checkAutoReload, 1000)
        }}
      }}
      checkAutoReload()
    </script>"#,
        url = options.check_reload_url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::CHILDREN_KEY;
    use crate::value::{props, Value};

    fn hello() -> Element {
        Element::tag("p", props([(CHILDREN_KEY, Value::List(vec!["hello".into()]))]))
    }

    #[test]
    fn test_shell_contents() {
        let mut page = PageOptions {
            title: "Home".into(),
            root_class: "dark".into(),
            ..PageOptions::default()
        };
        page.metas.insert("description".into(), "A page".into());
        let html = html_document(hello(), &page, &RenderOptions::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\" class=\"dark\">"));
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains(r#"<meta name="description" content="A page">"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="/static/css/styles.css">"#));
        assert!(html.contains(r#""fryx": "/static/js/fryx.js""#));
        assert!(html.contains(r#""components/": "/static/js/components/""#));
        assert!(html.contains(r#""@/": "/static/""#));
        assert!(html.contains("<p>hello</p>"));
        assert!(html.contains("for (const [script, fn] of window.fryfunctions$$)"));
        assert!(html.contains("checkAutoReload()"));
    }

    #[test]
    fn test_no_poller_outside_debug() {
        let options = RenderOptions {
            debug: false,
            ..RenderOptions::default()
        };
        let html = html_document(hello(), &PageOptions::default(), &options).unwrap();
        assert!(!html.contains("checkAutoReload"));
    }

    #[test]
    fn test_render_failure_yields_no_page() {
        let bad = Element::tag("not valid", crate::value::Props::new());
        assert!(matches!(
            html_document(bad, &PageOptions::default(), &RenderOptions::default()),
            Err(RenderError::InvalidElementName(_))
        ));
    }
}
