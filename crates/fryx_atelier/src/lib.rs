//! # fryx_atelier
//!
//! Atelier - The workshop compiling Fryx markup.
//!
//! ## Name Origin
//!
//! **Atelier** (/ˌætəlˈjeɪ/) is an artist's workshop or studio. This is where
//! the parse tree of a Fryx source is worked into its two finished pieces:
//! server code building the element graph, and the client script that
//! hydrates it in the browser.
//!
//! ## Features
//!
//! - One tagged [`AttributeRecord`] per attribute, validated per element kind
//! - Utility attributes folded into `class`, with their CSS rules collected
//! - `Element(name, {attr-map})` server code with `ClientEmbed(n)` markers
//! - Self-registering client bootstrap scripts named by content hash
//!
//! ## Usage
//!
//! ```
//! use fryx_atelier::{compile_document, CompilerOptions};
//! use fryx_relief::builder::element;
//! use fryx_relief::{Document, HostPiece};
//!
//! let root = element("div").literal("p", "4").text("Hello").build();
//! let document = Document::new(vec![HostPiece::Element(root)]);
//! let unit = compile_document(&document, &CompilerOptions::default()).unwrap();
//!
//! assert_eq!(unit.code, r#"Element("div", {"class": "p-4", "children": ["Hello"]})"#);
//! assert_eq!(unit.rules[0].text(), ".p-4 {\n  padding: 1rem;\n}\n\n");
//! ```

pub mod attribute;
pub mod classify;
pub mod client_script;
pub mod codegen;
pub mod errors;
pub mod html_attrs;
pub mod options;

pub use attribute::{AttributeRecord, ClientRef};
pub use classify::ElementKind;
pub use client_script::ClientScript;
pub use codegen::{compile_document, CodegenContext, CompiledUnit};
pub use errors::CompileError;
pub use html_attrs::is_html_attribute;
pub use options::CompilerOptions;

use fryx_relief::SourceParser;

/// Parse and compile one source file.
pub fn compile_source(
    parser: &dyn SourceParser,
    source: &str,
    options: &CompilerOptions,
) -> Result<CompiledUnit, CompileError> {
    let document = parser.parse(source)?;
    compile_document(&document, options)
}
