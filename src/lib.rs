//! # Group Link Protocol
//!
//! **Versioned group invite link encoding and decoding for secure
//! messengers.**
//!
//! A group invite link packs a group master key and an invite-link password
//! into a versioned binary envelope, carried base64url-encoded in the
//! fragment of a fixed-host URL:
//!
//! ```text
//! https://signal.group/#<base64url(envelope)>
//! ```
//!
//! The fragment never reaches a server, so the key material stays between
//! the sharing clients. Parsing classifies its input three ways: not a group
//! link at all (a silent non-match), a group link that is corrupt (a hard
//! error carrying its cause), or a group link minted by a newer client
//! version (a distinct error so the caller can suggest an update instead of
//! reporting corruption).
//!
//! ## Quick Start
//!
//! ```rust
//! use group_link_protocol::{GroupInviteLinkUrl, GroupLinkPassword, GroupMasterKey};
//!
//! let master_key = GroupMasterKey::from_bytes([7u8; 32]);
//! let password = GroupLinkPassword::from_bytes(vec![1, 2, 3, 4]);
//!
//! let link = GroupInviteLinkUrl::for_group(master_key, password);
//! assert!(link.url().starts_with("https://signal.group/#"));
//!
//! let parsed = GroupInviteLinkUrl::from_url(link.url()).unwrap().unwrap();
//! assert_eq!(parsed, link);
//! ```
//!
//! ## Architecture
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`credentials`] | Master key and invite-link password value types |
//! | [`envelope`] | Versioned binary envelope codec (protobuf wire format) |
//! | [`link`] | URL recognition, fragment transcoding, link parsing/building |

// ── Public modules ──────────────────────────────────────────────────────────

/// Group master key and invite-link password value types.
pub mod credentials;

/// Versioned invite link envelope codec.
pub mod envelope;

/// Group invite link recognition, parsing, and construction.
pub mod link;

// ── Re-exports for convenience ──────────────────────────────────────────────

pub use credentials::{
    GroupLinkPassword, GroupMasterKey, InvalidMasterKeyLength, GROUP_MASTER_KEY_LEN,
};

pub use envelope::{Envelope, EnvelopeError};

pub use link::{
    GroupInviteLinkUrl, GroupLinkError, InvalidLinkCause, GROUP_URL_HOST, GROUP_URL_PREFIX,
};

// ── Library metadata ────────────────────────────────────────────────────────

/// Group Link Protocol crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string.
pub fn version() -> &'static str {
    VERSION
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
        assert!(version().contains('.'));
    }

    #[test]
    fn test_build_then_parse() {
        let link = GroupInviteLinkUrl::for_group(
            GroupMasterKey::from_bytes([0x42u8; 32]),
            GroupLinkPassword::from_bytes(b"invite password".to_vec()),
        );

        assert!(GroupInviteLinkUrl::is_group_link(link.url()));

        let parsed = GroupInviteLinkUrl::from_url(link.url()).unwrap().unwrap();
        assert_eq!(parsed.master_key().as_bytes(), &[0x42u8; 32]);
        assert_eq!(parsed.password().as_bytes(), b"invite password");
    }
}
