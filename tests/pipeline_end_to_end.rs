//! Integration tests for the full resolution-and-caching pipeline

use bestiary::{Config, MemoryCache, MockRemote, NoopThrottle, Pipeline};
use serde_json::json;
use std::time::Duration;

const CATALOG_URL: &str = "http://test/catalog.json";
const TEXTURE_BASE: &str = "http://img.test/entities/";

fn test_config() -> Config {
    Config {
        source_url: CATALOG_URL.to_string(),
        texture_base_url: TEXTURE_BASE.to_string(),
        throttle_interval: Duration::ZERO,
        ..Config::default()
    }
}

#[test]
fn cow_catalog_with_texture_failure() {
    // Model resolves, texture fetch fails: the entity and its model stay
    // in the output, the texture is absent, and exactly one error is
    // tallied.
    let catalog = json!({
        "categories": [{ "name": "C", "entities": ["cow"] }],
        "models": { "cow": { "model": "{\"a\":1}" } },
    });
    let config = test_config();
    let catalog_cache = MemoryCache::new();
    let texture_cache = MemoryCache::new();
    let remote = MockRemote::new().with_body(CATALOG_URL, catalog.to_string().into_bytes());

    let pipeline = Pipeline::new(&config, &catalog_cache, &texture_cache, &remote, &NoopThrottle);
    let outcome = pipeline.run().expect("run");

    let output = serde_json::to_value(&outcome.catalog).expect("serialize");
    assert_eq!(
        output,
        json!({
            "entities": [
                { "name": "cow", "model": "cow", "texture": "cow", "variants": [] }
            ],
            "entity_models": { "cow": { "a": 1 } },
            "entity_textures": {},
        })
    );
    assert_eq!(outcome.stats.errors, 1);
    assert_eq!(outcome.stats.entities, 1);
}

#[test]
fn malformed_category_is_skipped_but_later_ones_survive() {
    let catalog = json!({
        "categories": [
            "garbage",
            { "name": "Hostile", "entities": "not-a-list" },
            { "name": "Passive", "entities": ["pig"] },
        ],
        "models": {},
    });
    let config = test_config();
    let catalog_cache = MemoryCache::new();
    let texture_cache = MemoryCache::new();
    let remote = MockRemote::new()
        .with_body(CATALOG_URL, catalog.to_string().into_bytes())
        .with_body("http://img.test/entities/pig.png", b"pig-png".to_vec());

    let pipeline = Pipeline::new(&config, &catalog_cache, &texture_cache, &remote, &NoopThrottle);
    let outcome = pipeline.run().expect("run");

    assert_eq!(outcome.catalog.entities.len(), 1);
    assert_eq!(outcome.catalog.entities[0].name, "pig");
    assert!(outcome.catalog.entity_textures.contains_key("pig"));
    // One error for the garbage category, one for the bad entities field.
    assert_eq!(outcome.stats.errors, 2);
}

#[test]
fn catalog_fetch_failure_is_fatal() {
    let config = test_config();
    let catalog_cache = MemoryCache::new();
    let texture_cache = MemoryCache::new();
    let remote = MockRemote::new().with_status(CATALOG_URL, 500);

    let pipeline = Pipeline::new(&config, &catalog_cache, &texture_cache, &remote, &NoopThrottle);
    assert!(pipeline.run().is_err());
}

#[test]
fn shared_references_resolve_once() {
    // Two entities pointing at the same model and texture: one parse,
    // one network fetch, both entities present.
    let catalog = json!({
        "categories": [{
            "name": "C",
            "entities": [
                { "name": "sheep", "model": "quadruped", "texture_name": "sheep" },
                { "name": "sheep", "model": "quadruped", "texture_name": "sheep" },
            ],
        }],
        "models": { "quadruped": { "model": "{\"legs\":4}" } },
    });
    let config = test_config();
    let catalog_cache = MemoryCache::new();
    let texture_cache = MemoryCache::new();
    let remote = MockRemote::new()
        .with_body(CATALOG_URL, catalog.to_string().into_bytes())
        .with_body("http://img.test/entities/sheep.png", b"wool".to_vec());

    let pipeline = Pipeline::new(&config, &catalog_cache, &texture_cache, &remote, &NoopThrottle);
    let outcome = pipeline.run().expect("run");

    assert_eq!(outcome.catalog.entities.len(), 2);
    assert_eq!(outcome.catalog.entity_models.len(), 1);
    assert_eq!(remote.requests_for("http://img.test/entities/sheep.png"), 1);
}

#[test]
fn variants_inherit_and_resolve_their_own_assets() {
    let catalog = json!({
        "categories": [{
            "name": "C",
            "entities": [{
                "name": "horse",
                "model": "quadruped",
                "variants": [
                    { "name": "donkey", "model": "donkey_model" },
                    { "name": "foal" },
                ],
            }],
        }],
        "models": {
            "quadruped": { "model": "{\"legs\":4}" },
            "donkey_model": { "model": "{\"ears\":\"long\"}" },
        },
    });
    let config = test_config();
    let catalog_cache = MemoryCache::new();
    let texture_cache = MemoryCache::new();
    let remote = MockRemote::new()
        .with_body(CATALOG_URL, catalog.to_string().into_bytes())
        .with_body("http://img.test/entities/horse.png", b"h".to_vec())
        .with_body("http://img.test/entities/donkey.png", b"d".to_vec())
        .with_body("http://img.test/entities/foal.png", b"f".to_vec());

    let pipeline = Pipeline::new(&config, &catalog_cache, &texture_cache, &remote, &NoopThrottle);
    let outcome = pipeline.run().expect("run");

    let entity = &outcome.catalog.entities[0];
    assert_eq!(entity.variants[1].model, "quadruped");
    assert_eq!(entity.variants[1].texture, "horse");

    // Both the parent model and the divergent variant model are parsed;
    // textures are fetched per variant name.
    assert_eq!(outcome.catalog.entity_models.len(), 2);
    assert_eq!(outcome.catalog.entity_textures.len(), 3);
    assert_eq!(outcome.stats.errors, 0);
}

#[test]
fn second_run_is_served_entirely_from_cache() {
    let catalog = json!({
        "categories": [{ "name": "C", "entities": ["cow"] }],
        "models": {},
    });
    let config = test_config();
    let catalog_cache = MemoryCache::new();
    let texture_cache = MemoryCache::new();
    let remote = MockRemote::new()
        .with_body(CATALOG_URL, catalog.to_string().into_bytes())
        .with_body("http://img.test/entities/cow.png", b"moo".to_vec());

    let pipeline = Pipeline::new(&config, &catalog_cache, &texture_cache, &remote, &NoopThrottle);

    let first = pipeline.run().expect("first run");
    let requests_after_first = remote.request_count();
    let second = pipeline.run().expect("second run");

    // No additional network traffic, byte-identical texture output.
    assert_eq!(remote.request_count(), requests_after_first);
    assert_eq!(
        first.catalog.entity_textures.get("cow"),
        second.catalog.entity_textures.get("cow")
    );
    assert_eq!(second.stats.texture_fetches, 0);
    assert_eq!(second.stats.texture_cache_hits, 1);
}
