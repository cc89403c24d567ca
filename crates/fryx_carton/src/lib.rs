//! Carton - The artist's toolbox for Fryx.
//!
//! This crate provides the small shared helpers every other Fryx crate leans on,
//! much like a carton (artist's portfolio case) holds the essential tools an artist
//! carries from one workshop to the next.
//!
//! # Modules
//!
//! - **hash**: content hashing used to name generated client scripts
//! - **quote**: selector quoting and string escaping for generated CSS, code and HTML
//! - **number**: compact decimal formatting for generated CSS values
//!
//! # Example
//!
//! ```
//! use fryx_carton::{format_number, quote_selector};
//!
//! assert_eq!(quote_selector("hover:p-4"), "hover\\:p-4");
//! assert_eq!(format_number(4.0 / 4.0), "1");
//! ```

pub mod hash;
pub mod number;
pub mod quote;

pub use hash::*;
pub use number::*;
pub use quote::*;

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export phf for compile-time perfect hash functions
pub use phf::{phf_map, phf_set, Map as PhfMap, Set as PhfSet};
