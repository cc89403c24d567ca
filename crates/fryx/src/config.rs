//! Configuration file loading for fryx.
//!
//! Reads `fryx.config.json` from the project directory. Every key is
//! optional; a missing file yields the defaults, and an unreadable or
//! malformed file is reported with a warning and also yields the defaults.

use std::path::{Path, PathBuf};

use fryx_atelier::CompilerOptions;
use fryx_gallery::RenderOptions;
use serde::{Deserialize, Serialize};

/// File name looked up in the project directory.
pub const CONFIG_FILE: &str = "fryx.config.json";

/// Top-level fryx configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FryxConfig {
    /// Client script directory, relative to the static root and URL.
    pub js_url: String,
    /// Stylesheet path, relative to the static root and URL.
    pub css_url: String,
    /// URL prefix the static root is served under.
    pub static_url: String,
    /// Directory generated static files are written into.
    pub static_root: PathBuf,
    /// Prefix of qualified component names.
    pub app_name: Option<String>,
    /// Inject the auto-reload poller into page shells.
    pub debug: bool,
    /// Endpoint the auto-reload poller fetches.
    pub check_reload_url: String,
    /// Directory generated server code is written into.
    pub output_dir: PathBuf,
    /// Treat attributes that are neither HTML nor utilities as errors.
    pub strict_utilities: bool,
    /// Module specifier of the hydration runtime.
    pub runtime_module: String,
}

impl Default for FryxConfig {
    fn default() -> Self {
        Self {
            js_url: "js/components/".to_string(),
            css_url: "css/styles.css".to_string(),
            static_url: "/static".to_string(),
            static_root: PathBuf::from("."),
            app_name: None,
            debug: true,
            check_reload_url: String::new(),
            output_dir: PathBuf::from("build"),
            strict_utilities: false,
            runtime_module: "fryx".to_string(),
        }
    }
}

impl FryxConfig {
    /// Directory client scripts are written into.
    pub fn js_dir(&self) -> PathBuf {
        self.static_root.join(&self.js_url)
    }

    /// Stylesheet file path.
    pub fn css_path(&self) -> PathBuf {
        self.static_root.join(&self.css_url)
    }

    pub fn compiler_options(&self) -> CompilerOptions {
        CompilerOptions {
            strict_utilities: self.strict_utilities,
            runtime_module: self.runtime_module.clone(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            static_url: self.static_url.clone(),
            js_url: self.js_url.clone(),
            css_url: self.css_url.clone(),
            app_name: self.app_name.clone(),
            debug: self.debug,
            check_reload_url: self.check_reload_url.clone(),
            runtime_module: self.runtime_module.clone(),
            ..RenderOptions::default()
        }
    }
}

/// Load `fryx.config.json` from the given directory (or CWD if None).
pub fn load_config(dir: Option<&Path>) -> FryxConfig {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join(CONFIG_FILE);

    if !config_path.exists() {
        return FryxConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "failed to parse config");
                FryxConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(path = %config_path.display(), error = %e, "failed to read config");
            FryxConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(Some(dir.path())), FryxConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"appName": "shop", "debug": false, "staticRoot": "public"}"#,
        )
        .unwrap();
        let config = load_config(Some(dir.path()));
        assert_eq!(config.app_name.as_deref(), Some("shop"));
        assert!(!config.debug);
        assert_eq!(config.js_dir(), PathBuf::from("public/js/components/"));
        assert_eq!(config.css_path(), PathBuf::from("public/css/styles.css"));
        assert_eq!(config.css_url, "css/styles.css");
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert_eq!(load_config(Some(dir.path())), FryxConfig::default());
    }

    #[test]
    fn test_derived_options() {
        let config = FryxConfig {
            app_name: Some("shop".into()),
            strict_utilities: true,
            ..FryxConfig::default()
        };
        assert!(config.compiler_options().strict_utilities);
        let render = config.render_options();
        assert_eq!(render.qualified_name("Cart"), "shop:Cart");
        assert_eq!(render.static_url(&render.js_url), "/static/js/components/");
    }
}
