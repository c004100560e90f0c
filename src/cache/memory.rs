//! In-memory cache for testing

use parking_lot::Mutex;
use std::collections::HashMap;

use super::{AssetCache, CacheResult};

/// HashMap-backed cache with the same discipline as the filesystem one.
/// Nothing persists past the instance; intended for tests.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl AssetCache for MemoryCache {
    fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn put(&self, key: &str, bytes: &[u8]) -> CacheResult<()> {
        self.entries.lock().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn clear(&self) -> CacheResult<()> {
        self.entries.lock().clear();
        Ok(())
    }
}
