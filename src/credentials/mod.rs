pub mod master_key;
pub mod password;

pub use master_key::{GroupMasterKey, InvalidMasterKeyLength, GROUP_MASTER_KEY_LEN};
pub use password::GroupLinkPassword;
