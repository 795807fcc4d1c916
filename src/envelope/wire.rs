//! Protobuf wire messages for the invite link envelope.
//!
//! The envelope is the message
//!
//! ```text
//! message GroupInviteLink {
//!     oneof contents {
//!         GroupInviteLinkContentsV1 v1_contents = 1;
//!     }
//! }
//! message GroupInviteLinkContentsV1 {
//!     bytes group_master_key     = 1;
//!     bytes invite_link_password = 2;
//! }
//! ```
//!
//! The `contents` tag space is open-ended: decoders skip tags they do not
//! know, leaving `contents` unset, so a link minted by a newer client
//! surfaces as "no recognized variant" rather than a framing error.

use prost::{Message, Oneof};

#[derive(Clone, PartialEq, Message)]
pub struct GroupInviteLink {
    #[prost(oneof = "Contents", tags = "1")]
    pub contents: Option<Contents>,
}

#[derive(Clone, PartialEq, Oneof)]
pub enum Contents {
    #[prost(message, tag = "1")]
    V1Contents(GroupInviteLinkContentsV1),
}

#[derive(Clone, PartialEq, Message)]
pub struct GroupInviteLinkContentsV1 {
    #[prost(bytes = "vec", tag = "1")]
    pub group_master_key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub invite_link_password: Vec<u8>,
}
