//! Group invite link recognition, parsing, and construction.
//!
//! A group invite link carries the group master key and the invite-link
//! password in the URL fragment (`#...`), which browsers and HTTP clients
//! never transmit to a server:
//!
//! ```text
//! https://signal.group/#<base64url(envelope)>
//! ```
//!
//! Parsing is a three-way classification. A string that is not a group link
//! at all (wrong host, unparsable) is a silent non-match so callers can fall
//! through to other link types. A string on the right host that fails any
//! later stage is a hard [`GroupLinkError::InvalidLink`]. A well-formed
//! envelope with an unrecognized contents version is
//! [`GroupLinkError::UnknownVersion`] — a link from a newer client, which
//! callers surface differently from corruption.

pub mod base64url;

use crate::credentials::{GroupLinkPassword, GroupMasterKey};
use crate::envelope::{Envelope, EnvelopeError};
use std::fmt;
use thiserror::Error;
use url::Url;

/// Host every group invite link lives on.
pub const GROUP_URL_HOST: &str = "signal.group";

/// Prefix of every canonical group invite link.
pub const GROUP_URL_PREFIX: &str = "https://signal.group/#";

#[derive(Error, Debug)]
pub enum GroupLinkError {
    /// The string is shaped like a group link but cannot be parsed.
    #[error("Invalid group link: {0}")]
    InvalidLink(#[source] InvalidLinkCause),
    /// The link's envelope uses a contents version this implementation does
    /// not recognize — minted by a newer client, not corrupt.
    #[error("Url contains no known group link contents")]
    UnknownVersion,
}

/// Why a group-link-shaped URL was rejected.
#[derive(Error, Debug)]
pub enum InvalidLinkCause {
    #[error("No path was expected in url")]
    UnexpectedPath,
    #[error("No reference was in the url")]
    MissingReference,
    #[error("Reference is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error(transparent)]
    Envelope(EnvelopeError),
}

pub type Result<T> = std::result::Result<T, GroupLinkError>;

/// An immutable group invite link: master key, invite-link password, and
/// the canonical URL string that encodes them.
///
/// The URL is a pure function of the key/password pair — it is recomputed on
/// construction, so a value obtained by parsing always carries the canonical
/// form even when the input had padding or host-case differences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupInviteLinkUrl {
    master_key: GroupMasterKey,
    password: GroupLinkPassword,
    url: String,
}

impl GroupInviteLinkUrl {
    /// Build the invite link for a group from its master key and the
    /// invite-link password carried in the decrypted group state.
    pub fn for_group(master_key: GroupMasterKey, password: GroupLinkPassword) -> Self {
        Self::new(master_key, password)
    }

    /// True iff the string parses as a URL on the group link host.
    ///
    /// This is the host gate only — the link may still fail full parsing.
    pub fn is_group_link(url_string: &str) -> bool {
        group_url(url_string).is_some()
    }

    /// Parse an arbitrary string into a group invite link.
    ///
    /// Returns `Ok(None)` iff the string is not a group link at all.
    pub fn from_url(url_string: &str) -> Result<Option<GroupInviteLinkUrl>> {
        let url = match group_url(url_string) {
            Some(url) => url,
            None => return Ok(None),
        };

        if !url.path().is_empty() && url.path() != "/" {
            log::debug!("Group link rejected: unexpected path");
            return Err(GroupLinkError::InvalidLink(InvalidLinkCause::UnexpectedPath));
        }

        let encoding = match url.fragment() {
            Some(fragment) if !fragment.is_empty() => fragment,
            _ => {
                log::debug!("Group link rejected: missing reference");
                return Err(GroupLinkError::InvalidLink(
                    InvalidLinkCause::MissingReference,
                ));
            }
        };

        let bytes = base64url::decode_padding_agnostic(encoding).map_err(|e| {
            log::debug!("Group link rejected: fragment is not base64url");
            GroupLinkError::InvalidLink(InvalidLinkCause::Base64(e))
        })?;

        match Envelope::decode(&bytes) {
            Ok(Envelope::V1 {
                master_key,
                password,
            }) => Ok(Some(Self::new(master_key, password))),
            Err(EnvelopeError::UnknownVersion) => {
                log::debug!("Group link rejected: unknown contents version");
                Err(GroupLinkError::UnknownVersion)
            }
            Err(e) => {
                log::debug!("Group link rejected: malformed envelope");
                Err(GroupLinkError::InvalidLink(InvalidLinkCause::Envelope(e)))
            }
        }
    }

    fn new(master_key: GroupMasterKey, password: GroupLinkPassword) -> Self {
        let url = create_url(&master_key, &password);
        GroupInviteLinkUrl {
            master_key,
            password,
            url,
        }
    }

    /// The canonical URL string.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn master_key(&self) -> &GroupMasterKey {
        &self.master_key
    }

    pub fn password(&self) -> &GroupLinkPassword {
        &self.password
    }
}

impl fmt::Display for GroupInviteLinkUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Parse and keep the URL only when the host matches. Never errors:
/// malformed URLs and wrong hosts are both a non-match.
fn group_url(url_string: &str) -> Option<Url> {
    let url = Url::parse(url_string).ok()?;
    let host_matches = url
        .host_str()
        .map_or(false, |host| host.eq_ignore_ascii_case(GROUP_URL_HOST));
    if host_matches {
        Some(url)
    } else {
        None
    }
}

/// Canonical URL for a key/password pair: envelope, base64url without
/// padding, fixed prefix.
fn create_url(master_key: &GroupMasterKey, password: &GroupLinkPassword) -> String {
    let envelope = Envelope::V1 {
        master_key: master_key.clone(),
        password: password.clone(),
    };
    let encoding = base64url::encode_without_padding(&envelope.encode());
    format!("{}{}", GROUP_URL_PREFIX, encoding)
}
