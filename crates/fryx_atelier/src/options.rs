//! Compiler options.

use serde::{Deserialize, Serialize};

/// Options for compiling Fryx documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Fail with `UnknownAttribute` when a non-HTML attribute does not
    /// resolve to a utility, instead of folding it and logging a warning.
    #[serde(default)]
    pub strict_utilities: bool,

    /// Module specifier client scripts import the hydration entry point from.
    #[serde(default = "default_runtime_module")]
    pub runtime_module: String,
}

fn default_runtime_module() -> String {
    "fryx".to_string()
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            strict_utilities: false,
            runtime_module: default_runtime_module(),
        }
    }
}
