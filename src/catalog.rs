//! Raw catalog document and its provider
//!
//! The source document is a loosely typed JSON tree: categories carry
//! polymorphic entity entries, and model definitions arrive as JSON
//! embedded in strings. Deserialization here is deliberately lenient;
//! shape enforcement happens downstream at the per-entry boundaries.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::cache::{AssetCache, CacheError};
use crate::config::Config;
use crate::remote::{FetchError, Remote};

/// Fixed cache key for the raw catalog bytes.
pub const CATALOG_CACHE_KEY: &str = "cem_template_models.json";

/// Error type for catalog acquisition. Any variant is fatal: there is no
/// partial catalog to proceed with.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

/// The raw hierarchical source document.
///
/// `categories` items are kept as raw values because entries in the wild
/// are not reliably shaped; the traversal driver inspects each one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub categories: Vec<Value>,
    #[serde(default)]
    pub models: serde_json::Map<String, Value>,
}

/// Obtains the raw catalog, consulting the cache before the network.
pub struct SourceCatalogProvider<'a, C: AssetCache, R: Remote> {
    cache: &'a C,
    remote: &'a R,
    config: &'a Config,
}

impl<'a, C: AssetCache, R: Remote> SourceCatalogProvider<'a, C, R> {
    /// Create a provider over the given cache and remote.
    pub fn new(cache: &'a C, remote: &'a R, config: &'a Config) -> Self {
        Self {
            cache,
            remote,
            config,
        }
    }

    /// Fetch the catalog document.
    ///
    /// A cache hit under [`CATALOG_CACHE_KEY`] short-circuits the network
    /// entirely. On a miss the raw response bytes are stored verbatim
    /// before the parsed document is returned, so later runs replay the
    /// exact same document.
    pub fn fetch(&self) -> Result<RawCatalog, CatalogError> {
        if let Some(bytes) = self.cache.get(CATALOG_CACHE_KEY)? {
            log::debug!("catalog served from cache ({} bytes)", bytes.len());
            return Ok(serde_json::from_slice(&bytes)?);
        }

        log::info!("downloading catalog from {}", self.config.source_url);
        let bytes = self.remote.get(&self.config.source_url)?;
        let catalog: RawCatalog = serde_json::from_slice(&bytes)?;
        self.cache.put(CATALOG_CACHE_KEY, &bytes)?;
        log::debug!("catalog cached ({} bytes)", bytes.len());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::remote::MockRemote;

    fn test_config() -> Config {
        Config {
            source_url: "http://test/catalog.json".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn miss_fetches_and_caches_raw_bytes() {
        let config = test_config();
        let cache = MemoryCache::new();
        let remote = MockRemote::new().with_body(
            "http://test/catalog.json",
            br#"{"categories":[],"models":{}}"#.to_vec(),
        );

        let provider = SourceCatalogProvider::new(&cache, &remote, &config);
        let catalog = provider.fetch().expect("fetch");
        assert!(catalog.categories.is_empty());
        assert_eq!(remote.request_count(), 1);
        assert_eq!(
            cache.get(CATALOG_CACHE_KEY).expect("get"),
            Some(br#"{"categories":[],"models":{}}"#.to_vec())
        );
    }

    #[test]
    fn hit_skips_the_network() {
        let config = test_config();
        let cache = MemoryCache::new();
        cache
            .put(CATALOG_CACHE_KEY, br#"{"categories":[{"name":"C"}]}"#)
            .expect("seed cache");
        let remote = MockRemote::new();

        let provider = SourceCatalogProvider::new(&cache, &remote, &config);
        let catalog = provider.fetch().expect("fetch");
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(remote.request_count(), 0);
    }

    #[test]
    fn network_failure_is_fatal() {
        let config = test_config();
        let cache = MemoryCache::new();
        let remote = MockRemote::new().with_status("http://test/catalog.json", 500);

        let provider = SourceCatalogProvider::new(&cache, &remote, &config);
        assert!(provider.fetch().is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn unparseable_body_is_fatal_and_not_cached() {
        let config = test_config();
        let cache = MemoryCache::new();
        let remote = MockRemote::new().with_body("http://test/catalog.json", b"not json".to_vec());

        let provider = SourceCatalogProvider::new(&cache, &remote, &config);
        assert!(provider.fetch().is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog: RawCatalog = serde_json::from_str("{}").expect("parse");
        assert!(catalog.categories.is_empty());
        assert!(catalog.models.is_empty());
    }
}
