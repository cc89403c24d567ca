//! Client embed markers.
//!
//! A [`ClientEmbed`] stands for a value the browser supplies at hydration
//! time. Generated server code creates it with only its local number; the
//! first component instance whose result tree contains it claims it, and
//! the claim is never changed afterwards. Clones share the claim, so a
//! marker passed down as a prop keeps the owner that created it.

use std::fmt;
use std::sync::{Arc, OnceLock};

#[derive(Debug)]
struct EmbedCell {
    local: u32,
    owner: OnceLock<u32>,
}

/// A value crossing the server/client boundary.
#[derive(Debug, Clone)]
pub struct ClientEmbed {
    cell: Arc<EmbedCell>,
    /// Attachment suffix, e.g. `event-click`; set when collected.
    attachment: Option<String>,
}

impl ClientEmbed {
    pub fn new(local: u32) -> Self {
        Self {
            cell: Arc::new(EmbedCell {
                local,
                owner: OnceLock::new(),
            }),
            attachment: None,
        }
    }

    /// Number of the value within its compile unit's embed list.
    pub fn local_id(&self) -> u32 {
        self.cell.local
    }

    /// Instance id of the owning component, once claimed.
    pub fn owner(&self) -> Option<u32> {
        self.cell.owner.get().copied()
    }

    /// Claim for `instance` unless already owned. Returns whether this call won.
    pub fn claim(&self, instance: u32) -> bool {
        self.cell.owner.set(instance).is_ok()
    }

    pub fn attachment(&self) -> Option<&str> {
        self.attachment.as_deref()
    }

    /// A handle on the same marker, tagged with where it is attached.
    pub fn attached(&self, attachment: impl Into<String>) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
            attachment: Some(attachment.into()),
        }
    }
}

impl PartialEq for ClientEmbed {
    fn eq(&self, other: &Self) -> bool {
        self.owner() == other.owner() && self.local_id() == other.local_id()
    }
}

/// `local`, `owner/local`, or `owner/local-attachment`.
impl fmt::Display for ClientEmbed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner() {
            None => write!(f, "{}", self.local_id())?,
            Some(owner) => write!(f, "{}/{}", owner, self.local_id())?,
        }
        if let Some(attachment) = &self.attachment {
            write!(f, "-{}", attachment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_claim_wins() {
        let embed = ClientEmbed::new(3);
        assert_eq!(embed.to_string(), "3");
        assert!(embed.claim(2));
        assert!(!embed.claim(5));
        assert_eq!(embed.owner(), Some(2));
        assert_eq!(embed.to_string(), "2/3");
    }

    #[test]
    fn test_clones_share_the_claim() {
        let embed = ClientEmbed::new(0);
        let passed = embed.clone();
        passed.claim(7);
        assert_eq!(embed.owner(), Some(7));
        assert_eq!(embed, passed);
    }

    #[test]
    fn test_attached() {
        let embed = ClientEmbed::new(1);
        embed.claim(4);
        let attached = embed.attached("event-click");
        assert_eq!(attached.to_string(), "4/1-event-click");
        assert_eq!(embed.attachment(), None);
        assert_eq!(attached, embed);
    }

    #[test]
    fn test_identity_needs_owner_and_local() {
        let a = ClientEmbed::new(0);
        let b = ClientEmbed::new(0);
        assert_eq!(a, b);
        a.claim(1);
        b.claim(2);
        assert_ne!(a, b);
    }
}
