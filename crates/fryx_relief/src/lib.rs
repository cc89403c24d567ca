//! Relief - The parse-tree surface for Fryx markup.
//!
//! Fryx sources interleave host code with HTML-like markup and inline client
//! script. A parser (outside this workspace) turns source text into the tree
//! defined here; the compiler and the utility collector only ever consume it.
//!
//! ## Name Origin
//!
//! **Relief** is a sculptural technique where shapes stand out from a flat
//! background. The parse tree is the raised surface of the source: the markup
//! stands out, the host code stays flat around it.

pub mod ast;
pub mod builder;
pub mod errors;
pub mod printer;

pub use ast::*;
pub use errors::*;

/// The seam to the external markup parser.
pub trait SourceParser: Send + Sync {
    /// Parse one source file into a document tree.
    fn parse(&self, source: &str) -> Result<Document, GrammarError>;
}
