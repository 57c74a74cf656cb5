//! Persistence port for the journal's named JSON blobs.

use crate::error::Result;

/// Key under which the entry list is stored.
pub const ENTRIES_KEY: &str = "trading_entries";

/// Key under which the capital configuration is stored.
pub const CONFIG_KEY: &str = "trading_config";

/// Key/value storage of serialized JSON documents.
///
/// Implementations store values verbatim; parsing and recovery from
/// corrupt content happen in the journal.
pub trait BlobStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
