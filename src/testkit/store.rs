//! In-memory port implementations.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::domain::EntryId;
use crate::error::{Error, Result};
use crate::port::outbound::{BlobStore, IdGenerator};

/// [`BlobStore`] over a `HashMap`. A failing store rejects every write.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryBlobStore {
    /// A store whose `save` and `remove` always fail.
    pub fn failing() -> Self {
        Self {
            blobs: Mutex::default(),
            fail_writes: true,
        }
    }

    /// Seed a value directly, bypassing the failure switch.
    pub fn put(&self, key: &str, value: &str) {
        self.blobs.lock().insert(key.to_string(), value.to_string());
    }

    /// Current value under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.blobs.lock().get(key).cloned()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Database("store is read-only".into()));
        }
        Ok(())
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.put(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.blobs.lock().remove(key);
        Ok(())
    }
}

/// Yields `entry-1`, `entry-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> EntryId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        EntryId::new(format!("entry-{n}"))
    }
}
