//! Run counters and end-of-run summary

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Tallies accumulated while the pipeline traverses the catalog.
#[derive(Debug, Default)]
struct RunCounters {
    entities: AtomicU64,
    models: AtomicU64,
    texture_fetches: AtomicU64,
    texture_cache_hits: AtomicU64,
    errors: AtomicU64,
}

/// Cloneable handle to the run tallies, shared by every component that
/// needs to record progress or a recovered failure.
#[derive(Debug, Clone, Default)]
pub struct RunSummary(Arc<RunCounters>);

impl RunSummary {
    /// Create a fresh set of tallies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one entity appended to the output.
    pub fn record_entity(&self) {
        self.0.entities.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one model document parsed into the output.
    pub fn record_model(&self) {
        self.0.models.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one texture obtained over the network.
    pub fn record_texture_fetch(&self) {
        self.0.texture_fetches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one texture served from the cache.
    pub fn record_texture_cache_hit(&self) {
        self.0.texture_cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one recovered (non-fatal) error.
    pub fn record_error(&self) {
        self.0.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of recovered errors so far.
    pub fn errors(&self) -> u64 {
        self.0.errors.load(Ordering::Relaxed)
    }

    /// Snapshot of the current tallies.
    pub fn snapshot(&self) -> RunStats {
        RunStats {
            entities: self.0.entities.load(Ordering::Relaxed),
            models: self.0.models.load(Ordering::Relaxed),
            texture_fetches: self.0.texture_fetches.load(Ordering::Relaxed),
            texture_cache_hits: self.0.texture_cache_hits.load(Ordering::Relaxed),
            errors: self.0.errors.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the run tallies, reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    /// Entities appended to the output.
    pub entities: u64,
    /// Model documents parsed into the output.
    pub models: u64,
    /// Textures obtained over the network.
    pub texture_fetches: u64,
    /// Textures served from the cache.
    pub texture_cache_hits: u64,
    /// Recovered errors (malformed entries, parse failures, fetch failures).
    pub errors: u64,
}
