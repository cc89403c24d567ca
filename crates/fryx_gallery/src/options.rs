//! Render and page options.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Options shared by every render of an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// URL prefix of the static file root.
    pub static_url: String,
    /// Directory of the generated client scripts, relative to the static root.
    pub js_url: String,
    /// Stylesheet path, relative to the static root.
    pub css_url: String,
    /// Prefix of qualified component names (`app:Name`).
    pub app_name: Option<String>,
    /// Inject the auto-reload poller into page shells.
    pub debug: bool,
    /// Endpoint polled by the auto-reload script.
    pub check_reload_url: String,
    /// Import map key of the hydration runtime.
    pub runtime_module: String,
    /// Runtime script path, relative to the static root.
    pub runtime_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            static_url: "/static".to_string(),
            js_url: "js/components/".to_string(),
            css_url: "css/styles.css".to_string(),
            app_name: None,
            debug: true,
            check_reload_url: String::new(),
            runtime_module: "fryx".to_string(),
            runtime_url: "js/fryx.js".to_string(),
        }
    }
}

impl RenderOptions {
    /// Public URL of a file under the static root.
    pub fn static_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.static_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Component name as it appears in `data-fryclass`.
    pub fn qualified_name(&self, name: &str) -> String {
        match self.app_name.as_deref() {
            Some(app) if !app.is_empty() => format!("{}:{}", app, name),
            _ => name.to_string(),
        }
    }
}

/// Head contents of a page shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageOptions {
    pub title: String,
    pub lang: String,
    /// Class of the `<html>` element.
    pub root_class: String,
    pub charset: String,
    pub viewport: String,
    /// `<meta name=... content=...>` tags.
    pub metas: IndexMap<String, String>,
    /// `<meta property=... content=...>` tags.
    pub properties: IndexMap<String, String>,
    /// `<meta http-equiv=... content=...>` tags.
    pub equivs: IndexMap<String, String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            lang: "en".to_string(),
            root_class: String::new(),
            charset: "utf-8".to_string(),
            viewport: "width=device-width, initial-scale=1.0".to_string(),
            metas: IndexMap::new(),
            properties: IndexMap::new(),
            equivs: IndexMap::new(),
        }
    }
}
