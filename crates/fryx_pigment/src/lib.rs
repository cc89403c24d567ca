//! # fryx_pigment
//!
//! Pigment - The utility-CSS engine for Fryx.
//!
//! ## Name Origin
//!
//! **Pigment** is the raw colored powder that becomes paint once it is
//! ground into a binder. Utility attributes such as `p-4` or
//! `hover:text-red-500` are the raw color of a Fryx page; `fryx_pigment`
//! grinds them into real CSS rules.
//!
//! ## Features
//!
//! - `(key, value)` utility resolution with modifiers, wrappers and a
//!   cascade order
//! - Nested-block CSS text with addon rules and animation keyframes
//! - An append-only stylesheet writer safe to share between parallel compiles
//! - Whole-project utility collection for full stylesheet generation
//!
//! ## Usage
//!
//! ```
//! use fryx_pigment::resolve;
//!
//! let rule = resolve("hover:text", "red-500");
//! assert!(rule.valid);
//! assert_eq!(
//!     rule.text(),
//!     ".hover\\:text-red-500:hover {\n  color: rgb(239 68 68);\n}\n\n"
//! );
//! ```

pub mod collector;
pub mod keyframes;
pub mod modifiers;
pub mod prologue;
pub mod rule;
pub mod stylesheet;
pub mod tables;
pub mod values;

mod utilities;

pub use collector::{collect_utilities, CssCollector};
pub use modifiers::is_modifier;
pub use prologue::PROLOGUE;
pub use rule::{resolve, sort_by_order, CssRule, MODIFIER_ORDER};
pub use stylesheet::{rules_text, Stylesheet, StylesheetError};
