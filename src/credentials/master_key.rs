use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::Zeroize;

/// Length of a group master key in bytes.
pub const GROUP_MASTER_KEY_LEN: usize = 32;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Group master key must be {GROUP_MASTER_KEY_LEN} bytes, got {0}")]
pub struct InvalidMasterKeyLength(pub usize);

/// 32-byte opaque secret identifying a group.
///
/// The key content is never inspected here — only its length and serialized
/// form matter. Comparison is constant-time; the backing bytes are zeroized
/// on drop and never printed.
#[derive(Clone, Serialize, Deserialize)]
pub struct GroupMasterKey([u8; GROUP_MASTER_KEY_LEN]);

impl GroupMasterKey {
    /// Create from exactly 32 bytes.
    pub fn from_bytes(bytes: [u8; GROUP_MASTER_KEY_LEN]) -> Self {
        GroupMasterKey(bytes)
    }

    /// Return the raw bytes.
    pub fn as_bytes(&self) -> &[u8; GROUP_MASTER_KEY_LEN] {
        &self.0
    }

    /// Serialized form: an owned copy of the 32 key bytes.
    pub fn serialize(&self) -> [u8; GROUP_MASTER_KEY_LEN] {
        self.0
    }
}

impl TryFrom<&[u8]> for GroupMasterKey {
    type Error = InvalidMasterKeyLength;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; GROUP_MASTER_KEY_LEN] = bytes
            .try_into()
            .map_err(|_| InvalidMasterKeyLength(bytes.len()))?;
        Ok(GroupMasterKey(bytes))
    }
}

impl TryFrom<Vec<u8>> for GroupMasterKey {
    type Error = InvalidMasterKeyLength;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        GroupMasterKey::try_from(bytes.as_slice())
    }
}

impl PartialEq for GroupMasterKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for GroupMasterKey {}

impl Drop for GroupMasterKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for GroupMasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupMasterKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_round_trip() {
        let key = GroupMasterKey::from_bytes([7u8; 32]);
        assert_eq!(key.as_bytes(), &[7u8; 32]);
        assert_eq!(key.serialize(), [7u8; 32]);
    }

    #[test]
    fn test_try_from_slice() {
        let bytes = vec![42u8; 32];
        let key = GroupMasterKey::try_from(bytes.as_slice()).unwrap();
        assert_eq!(key.as_bytes(), &[42u8; 32]);
    }

    #[test]
    fn test_try_from_rejects_wrong_length() {
        let err = GroupMasterKey::try_from([0u8; 31].as_slice()).unwrap_err();
        assert_eq!(err, InvalidMasterKeyLength(31));

        let err = GroupMasterKey::try_from(vec![0u8; 33]).unwrap_err();
        assert_eq!(err, InvalidMasterKeyLength(33));

        let err = GroupMasterKey::try_from([0u8; 0].as_slice()).unwrap_err();
        assert_eq!(err, InvalidMasterKeyLength(0));
    }

    #[test]
    fn test_equality() {
        let a = GroupMasterKey::from_bytes([1u8; 32]);
        let b = GroupMasterKey::from_bytes([1u8; 32]);
        let c = GroupMasterKey::from_bytes([2u8; 32]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = GroupMasterKey::from_bytes([0xAAu8; 32]);
        assert_eq!(format!("{:?}", key), "GroupMasterKey(..)");
    }

    #[test]
    fn test_serde_round_trip() {
        let key = GroupMasterKey::from_bytes([33u8; 32]);
        let bytes = bincode::serialize(&key).unwrap();
        let decoded: GroupMasterKey = bincode::deserialize(&bytes).unwrap();
        assert_eq!(key, decoded);
    }
}
