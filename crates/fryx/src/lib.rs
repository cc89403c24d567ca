//! # Fryx
//!
//! Markup components with utility CSS and client-side hydration.
//!
//! This crate re-exports all Fryx sub-crates for unified documentation and
//! adds the project-level pieces: configuration loading, tracing setup and
//! the parallel build.
//!
//! ## Crates
//!
//! - [`carton`] - Shared helpers: quoting, escaping, hashing
//! - [`relief`] - Parse-tree surface consumed from the external parser
//! - [`pigment`] - Utility CSS resolution and stylesheet output
//! - [`atelier`] - Server code and client script compiler
//! - [`gallery`] - Server-side rendering and hydration markers

/// Shared helpers: quoting, escaping, hashing.
pub use fryx_carton as carton;

/// Parse-tree surface consumed from the external parser.
pub use fryx_relief as relief;

/// Utility CSS resolution and stylesheet output.
pub use fryx_pigment as pigment;

/// Server code and client script compiler.
pub use fryx_atelier as atelier;

/// Server-side rendering and hydration markers.
pub use fryx_gallery as gallery;

pub mod build;
pub mod config;
pub mod logging;

pub use build::{BuildError, BuildFailure, BuildReport, Builder, SourceFile};
pub use config::{load_config, FryxConfig, CONFIG_FILE};
pub use logging::init_tracing;
