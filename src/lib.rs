//! bestiary - consolidated entity model and texture materializer
//!
//! Walks a remote, hierarchically organized catalog of named visual
//! assets (categories → entities → variants), normalizes the loosely
//! typed entries into canonical records, resolves model definitions and
//! texture images, and writes one self-contained JSON artifact.
//!
//! # Design
//! - Cache-first: the catalog document and every texture are persisted
//!   on disk and never re-fetched (see [`cache`])
//! - Deduplicated: each model/texture name is resolved at most once per
//!   run regardless of how many entities reference it
//! - Failure-isolated: a malformed entry, bad embedded JSON or failed
//!   texture fetch is logged and tallied, never aborting the run; only
//!   the initial catalog fetch is fatal
//! - Strictly sequential: one blocking network call at a time, paced by
//!   a fixed-interval [`throttle`]
//!
//! # Quick Start
//!
//! ```ignore
//! use bestiary::{Config, FsCache, HttpRemote, IntervalThrottle, Pipeline};
//!
//! let config = Config::default();
//! let catalog_cache = FsCache::new(&config.cache_dir)?;
//! let texture_cache = FsCache::new(&config.texture_cache_dir)?;
//! let remote = HttpRemote::new();
//! let throttle = IntervalThrottle::new(config.throttle_interval);
//!
//! let pipeline = Pipeline::new(&config, &catalog_cache, &texture_cache, &remote, &throttle);
//! let outcome = pipeline.run()?;
//! outcome.catalog.write_to(&config.output_path)?;
//! ```

// Core modules
pub mod cache;
pub mod catalog;
pub mod entity;
pub mod model;
pub mod pipeline;
pub mod remote;
pub mod texture;
pub mod throttle;

// Support modules
pub mod config;
pub mod summary;

// Error types
mod error;
pub use error::{BestiaryError, Result};

// Re-export main types
pub use cache::{sanitize_key, AssetCache, CacheError, FsCache, MemoryCache};
pub use catalog::{CatalogError, RawCatalog, SourceCatalogProvider, CATALOG_CACHE_KEY};
pub use config::Config;
pub use entity::{CanonicalEntity, EntityResolver, VariantRecord};
pub use model::ModelResolver;
pub use pipeline::{OutputAssembler, OutputCatalog, Pipeline, RunOutcome};
pub use remote::{FetchError, HttpRemote, MockRemote, Remote};
pub use summary::{RunStats, RunSummary};
pub use texture::TextureFetcher;
pub use throttle::{IntervalThrottle, NoopThrottle, Throttle};
