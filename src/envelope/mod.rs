//! Versioned invite link envelope codec.
//!
//! The envelope is the binary payload carried inside a group link's URL
//! fragment. Decoding distinguishes three outcomes: a recognized `V1`
//! payload, a buffer that is not a well-formed envelope at all, and a
//! well-formed envelope whose contents version this implementation does not
//! know (a link from a newer client).

mod wire;

use crate::credentials::{GroupLinkPassword, GroupMasterKey, InvalidMasterKeyLength};
use prost::Message;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// The buffer is not a valid serialized envelope.
    #[error("Malformed invite link envelope: {0}")]
    Malformed(#[from] prost::DecodeError),
    /// The `V1` master key field did not hold exactly 32 bytes.
    #[error(transparent)]
    MasterKeyLength(#[from] InvalidMasterKeyLength),
    /// Well-formed envelope, but no contents variant this version recognizes.
    #[error("Envelope contains no known group link contents")]
    UnknownVersion,
}

pub type Result<T> = std::result::Result<T, EnvelopeError>;

/// Versioned invite link payload.
///
/// Exactly one variant exists today. The wire discriminant space is open
/// for future versions; decoding an unrecognized one yields
/// [`EnvelopeError::UnknownVersion`], never a variant of this enum.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Envelope {
    V1 {
        master_key: GroupMasterKey,
        password: GroupLinkPassword,
    },
}

impl Envelope {
    /// Parse an envelope from its serialized bytes.
    pub fn decode(bytes: &[u8]) -> Result<Envelope> {
        let link = wire::GroupInviteLink::decode(bytes)?;

        match link.contents {
            Some(wire::Contents::V1Contents(v1)) => {
                let master_key = GroupMasterKey::try_from(v1.group_master_key.as_slice())?;
                let password = GroupLinkPassword::from_bytes(v1.invite_link_password);
                Ok(Envelope::V1 {
                    master_key,
                    password,
                })
            }
            // Empty buffer, or a contents tag newer than this implementation.
            None => Err(EnvelopeError::UnknownVersion),
        }
    }

    /// Serialize the envelope. Deterministic: identical inputs produce
    /// identical byte sequences.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Envelope::V1 {
                master_key,
                password,
            } => {
                let link = wire::GroupInviteLink {
                    contents: Some(wire::Contents::V1Contents(
                        wire::GroupInviteLinkContentsV1 {
                            group_master_key: master_key.serialize().to_vec(),
                            invite_link_password: password.serialize(),
                        },
                    )),
                };
                link.encode_to_vec()
            }
        }
    }
}
