//! Fast content hashing using xxHash3.
//!
//! Generated client scripts are named after the hash of the root element's
//! source text, so an unchanged component keeps the same file name across
//! recompiles and a changed one gets a fresh name.

use xxhash_rust::xxh3::xxh3_64;

/// Compute a 64-bit hash of the given string using xxHash3.
#[inline]
pub fn hash_str(data: &str) -> u64 {
    xxh3_64(data.as_bytes())
}

/// Convert a hash to a hex string (16 characters).
#[inline]
pub fn hash_to_hex(hash: u64) -> String {
    format!("{:016x}", hash)
}

/// Compute hash of a string and return as hex.
#[inline]
pub fn content_hash(content: &str) -> String {
    hash_to_hex(hash_str(content))
}

/// Whether `name` looks like a module id produced by [`content_hash`].
pub fn is_module_id(name: &str) -> bool {
    name.len() == 16 && name.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable() {
        let source = r#"<div class="p-4">hello</div>"#;
        assert_eq!(content_hash(source), content_hash(source));
    }

    #[test]
    fn test_hash_tracks_content() {
        assert_ne!(content_hash("<div>a</div>"), content_hash("<div>b</div>"));
    }

    #[test]
    fn test_module_id_shape() {
        let id = content_hash("<Card />");
        assert_eq!(id.len(), 16);
        assert!(is_module_id(&id));
        assert!(!is_module_id("card.js"));
    }
}
