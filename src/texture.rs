//! Texture resolution
//!
//! Textures are named binary images on a remote host. Resolution is
//! cache-first: bytes already on disk are re-encoded without touching the
//! network; otherwise one GET is issued, the raw bytes are written to the
//! cache, and the configured throttle is applied before the next network
//! fetch. A failed fetch only means the texture is absent from the
//! output.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::Value;

use crate::cache::{sanitize_key, AssetCache};
use crate::remote::Remote;
use crate::summary::RunSummary;
use crate::throttle::Throttle;

/// File extension used for cached texture bytes and remote fetch URLs.
const TEXTURE_EXTENSION: &str = "png";

/// Resolves named textures into base64 strings, deduplicated per run.
pub struct TextureFetcher<'a, C: AssetCache, R: Remote, T: Throttle> {
    cache: &'a C,
    remote: &'a R,
    throttle: &'a T,
    base_url: &'a str,
    summary: RunSummary,
}

impl<'a, C: AssetCache, R: Remote, T: Throttle> TextureFetcher<'a, C, R, T> {
    /// Create a fetcher over the given cache, remote and throttle.
    pub fn new(
        cache: &'a C,
        remote: &'a R,
        throttle: &'a T,
        base_url: &'a str,
        summary: RunSummary,
    ) -> Self {
        Self {
            cache,
            remote,
            throttle,
            base_url,
            summary,
        }
    }

    /// Resolve `name` into `out` as a base64 string, if possible.
    ///
    /// No-op when `name` is already resolved. Fetch failures are logged
    /// and counted; the texture is simply absent from the output.
    pub fn resolve(&self, name: &str, out: &mut serde_json::Map<String, Value>) {
        if out.contains_key(name) {
            return;
        }

        let key = format!("{}.{TEXTURE_EXTENSION}", sanitize_key(name));
        match self.cache.get(&key) {
            Ok(Some(bytes)) => {
                log::debug!("texture {name} served from cache");
                out.insert(name.to_string(), Value::String(BASE64.encode(&bytes)));
                self.summary.record_texture_cache_hit();
                return;
            }
            Ok(None) => {}
            Err(err) => {
                // Unreadable cache entry; fall through and refetch.
                log::warn!("cache read failed for texture {name}: {err}");
            }
        }

        let url = format!("{}{name}.{TEXTURE_EXTENSION}", self.base_url);
        log::debug!("downloading texture from {url}");
        match self.remote.get(&url) {
            Ok(bytes) => {
                if let Err(err) = self.cache.put(&key, &bytes) {
                    log::warn!("failed to cache texture {name}: {err}");
                }
                out.insert(name.to_string(), Value::String(BASE64.encode(&bytes)));
                self.summary.record_texture_fetch();
                self.throttle.pause();
            }
            Err(err) => {
                log::warn!("failed to fetch texture {name}: {err}");
                self.summary.record_error();
            }
        }
    }
}
