use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Opaque invite-link password — a capability token authorizing use of a
/// group invite link. Any byte length is accepted.
#[derive(Clone, Serialize, Deserialize)]
pub struct GroupLinkPassword(Vec<u8>);

impl GroupLinkPassword {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        GroupLinkPassword(bytes)
    }

    /// Return the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Serialized form: an owned copy of the password bytes.
    pub fn serialize(&self) -> Vec<u8> {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for GroupLinkPassword {
    fn from(bytes: &[u8]) -> Self {
        GroupLinkPassword(bytes.to_vec())
    }
}

impl PartialEq for GroupLinkPassword {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for GroupLinkPassword {}

impl Drop for GroupLinkPassword {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for GroupLinkPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupLinkPassword(..)")
    }
}
