//! Persistent key→bytes caching
//!
//! This module provides the [`AssetCache`] abstraction used to avoid
//! repeat network fetches: read-if-present, write-once-on-miss, no
//! eviction and no TTL. Entries are immutable once written and survive
//! until [`AssetCache::clear`] is called externally.
//!
//! Production uses the filesystem-backed [`fs::FsCache`]; tests use the
//! in-memory [`memory::MemoryCache`].

pub mod fs;
pub mod memory;

use thiserror::Error;

pub use fs::FsCache;
pub use memory::MemoryCache;

/// Error type for cache operations
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// A persistent key→bytes store with read-then-write-if-absent discipline.
///
/// `put` is only ever called after a missed `get` for the same key, so
/// implementations never overwrite an existing entry during a run. Two
/// concurrent processes racing on the first write of one key is a known
/// limitation; the run model assumes a single process per cache directory.
pub trait AssetCache {
    /// Returns the stored bytes for `key`, or `None` if absent.
    fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>>;

    /// Stores `bytes` under `key`.
    fn put(&self, key: &str, bytes: &[u8]) -> CacheResult<()>;

    /// Removes every entry. The only supported invalidation mechanism.
    fn clear(&self) -> CacheResult<()>;
}

/// Turns an asset name into a key safe to use as a storage locator.
///
/// Path separators are replaced so names like `zombie/husk` cannot escape
/// the cache directory. Two distinct names that sanitize to the same key
/// will share a cache entry; the second silently reuses the first's bytes.
pub fn sanitize_key(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_path_separators() {
        assert_eq!(sanitize_key("zombie/husk"), "zombie_husk");
        assert_eq!(sanitize_key("a\\b/c"), "a_b_c");
    }

    #[test]
    fn sanitize_leaves_plain_names_alone() {
        assert_eq!(sanitize_key("creeper"), "creeper");
    }
}
