//! Run configuration
//!
//! All remote addresses, cache locations and timing values live in one
//! immutable [`Config`] that is constructed once and passed by reference
//! into each component. Tests substitute their own values instead of
//! patching globals.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a materialization run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address of the raw catalog document.
    pub source_url: String,
    /// Base address textures are fetched from; the texture name plus
    /// `.png` is appended.
    pub texture_base_url: String,
    /// Where the final output document is written.
    pub output_path: PathBuf,
    /// Cache directory for the raw catalog document.
    pub cache_dir: PathBuf,
    /// Cache directory for texture bytes, one file per sanitized name.
    pub texture_cache_dir: PathBuf,
    /// Minimum spacing enforced after each successful network texture
    /// fetch. Cache hits are never throttled.
    pub throttle_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: "https://wynem.com/assets/json/cem_template_models.json".to_string(),
            texture_base_url: "https://wynem.com/assets/images/minecraft/entities/".to_string(),
            output_path: PathBuf::from("minecraft_entities.json"),
            cache_dir: PathBuf::from("cache"),
            texture_cache_dir: PathBuf::from("cache/textures"),
            throttle_interval: Duration::from_millis(200),
        }
    }
}
