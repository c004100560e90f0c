//! Traversal driver and output assembly
//!
//! Walks the raw catalog category by category, normalizes each entity,
//! resolves its model and texture references (and those of its variants),
//! and accumulates everything into one output document. Failure is
//! contained at the narrowest enclosing boundary: a malformed category or
//! entity is skipped with a warning and a tally, never aborting the rest
//! of the run. Only the initial catalog fetch is fatal.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::cache::AssetCache;
use crate::catalog::{RawCatalog, SourceCatalogProvider};
use crate::config::Config;
use crate::entity::{CanonicalEntity, EntityResolver};
use crate::model::ModelResolver;
use crate::remote::Remote;
use crate::summary::{RunStats, RunSummary};
use crate::texture::TextureFetcher;
use crate::throttle::Throttle;

/// The final consolidated document.
///
/// `entities` preserves traversal order; the two maps are deduplicated by
/// name, keyed in first-resolution order.
#[derive(Debug, Default, Serialize)]
pub struct OutputCatalog {
    pub entities: Vec<CanonicalEntity>,
    pub entity_models: serde_json::Map<String, Value>,
    pub entity_textures: serde_json::Map<String, Value>,
}

impl OutputCatalog {
    /// Serialize with stable two-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the document to `path`.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let json = self.to_json_pretty()?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Accumulates resolved entities, models and textures during traversal.
#[derive(Debug, Default)]
pub struct OutputAssembler {
    catalog: OutputCatalog,
}

impl OutputAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity, preserving traversal order.
    pub fn push_entity(&mut self, entity: CanonicalEntity) {
        self.catalog.entities.push(entity);
    }

    /// Deduplicated model map, mutated in place by the model resolver.
    pub fn models_mut(&mut self) -> &mut serde_json::Map<String, Value> {
        &mut self.catalog.entity_models
    }

    /// Deduplicated texture map, mutated in place by the texture fetcher.
    pub fn textures_mut(&mut self) -> &mut serde_json::Map<String, Value> {
        &mut self.catalog.entity_textures
    }

    /// Finish assembly and hand over the document.
    pub fn finish(self) -> OutputCatalog {
        self.catalog
    }
}

/// Result of a completed run: the assembled document plus its tallies.
#[derive(Debug)]
pub struct RunOutcome {
    pub catalog: OutputCatalog,
    pub stats: RunStats,
}

/// The whole resolution-and-caching pipeline, generic over its
/// collaborators so tests can substitute in-memory fakes.
pub struct Pipeline<'a, C: AssetCache, R: Remote, T: Throttle> {
    config: &'a Config,
    catalog_cache: &'a C,
    texture_cache: &'a C,
    remote: &'a R,
    throttle: &'a T,
}

impl<'a, C: AssetCache, R: Remote, T: Throttle> Pipeline<'a, C, R, T> {
    /// Wire up a pipeline over the given collaborators.
    pub fn new(
        config: &'a Config,
        catalog_cache: &'a C,
        texture_cache: &'a C,
        remote: &'a R,
        throttle: &'a T,
    ) -> Self {
        Self {
            config,
            catalog_cache,
            texture_cache,
            remote,
            throttle,
        }
    }

    /// Execute one full run: fetch the catalog, traverse it, assemble the
    /// output. Returns an error only when the catalog itself cannot be
    /// obtained; every other failure is recovered and tallied.
    pub fn run(&self) -> crate::Result<RunOutcome> {
        let summary = RunSummary::new();

        let provider = SourceCatalogProvider::new(self.catalog_cache, self.remote, self.config);
        let raw = provider.fetch()?;

        let entities = EntityResolver::new(summary.clone());
        let models = ModelResolver::new(summary.clone());
        let textures = TextureFetcher::new(
            self.texture_cache,
            self.remote,
            self.throttle,
            &self.config.texture_base_url,
            summary.clone(),
        );

        let mut assembler = OutputAssembler::new();
        for category in &raw.categories {
            let Some(fields) = category.as_object() else {
                log::warn!("unexpected category shape, skipping: {category}");
                summary.record_error();
                continue;
            };
            let name = fields
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("Unknown");
            log::info!("processing category: {name}");

            let entries = match fields.get("entities") {
                None => continue,
                Some(Value::Array(list)) => list,
                Some(other) => {
                    log::warn!("category {name} has a non-list entities field: {other}");
                    summary.record_error();
                    continue;
                }
            };

            for raw_entity in entries {
                self.process_entry(raw_entity, &raw, &entities, &models, &textures, &mut assembler);
                summary.record_entity();
            }
        }

        Ok(RunOutcome {
            catalog: assembler.finish(),
            stats: summary.snapshot(),
        })
    }

    /// Per-entity boundary: normalize one entry and resolve everything it
    /// references. Each resolution step fails softly on its own, so a bad
    /// model or texture never costs the entity its place in the output.
    fn process_entry(
        &self,
        raw_entity: &Value,
        raw: &RawCatalog,
        entities: &EntityResolver,
        models: &ModelResolver,
        textures: &TextureFetcher<'_, C, R, T>,
        assembler: &mut OutputAssembler,
    ) {
        let entity = entities.normalize(raw_entity);

        models.resolve(&entity.model, raw, assembler.models_mut());
        // Texture URLs key off the entity name, not the texture field.
        textures.resolve(&entity.name, assembler.textures_mut());

        for variant in &entity.variants {
            if variant.model != entity.model {
                models.resolve(&variant.model, raw, assembler.models_mut());
            }
            textures.resolve(&variant.name, assembler.textures_mut());
        }

        assembler.push_entity(entity);
    }
}
