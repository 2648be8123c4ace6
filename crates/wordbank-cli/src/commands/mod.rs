//! Command implementations.

pub mod import;
pub mod link;
pub mod profile;
pub mod relate;
pub mod word;

pub use self::import::execute_import;
pub use self::link::execute_link;
pub use self::profile::execute_profile;
pub use self::relate::{execute_relate, execute_relationships};
pub use self::word::{execute_add, execute_edit, execute_search, execute_show};

use std::time::{SystemTime, UNIX_EPOCH};

/// Current time in Unix seconds.
pub(crate) fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
