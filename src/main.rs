//! Command-line entry point: materialize the bestiary with default
//! configuration and report the run summary.

use anyhow::Context;
use env_logger::{Builder, Env};

use bestiary::{Config, FsCache, HttpRemote, IntervalThrottle, Pipeline};

fn main() -> anyhow::Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let catalog_cache = FsCache::new(&config.cache_dir).context("opening catalog cache")?;
    let texture_cache = FsCache::new(&config.texture_cache_dir).context("opening texture cache")?;
    let remote = HttpRemote::new();
    let throttle = IntervalThrottle::new(config.throttle_interval);

    let pipeline = Pipeline::new(&config, &catalog_cache, &texture_cache, &remote, &throttle);
    let outcome = pipeline.run().context("fetching catalog")?;
    outcome
        .catalog
        .write_to(&config.output_path)
        .with_context(|| format!("writing {}", config.output_path.display()))?;

    println!("\nDone - processed data written to {}", config.output_path.display());
    println!("- Found {} entities", outcome.catalog.entities.len());
    println!("- Found {} models", outcome.catalog.entity_models.len());
    println!(
        "- Resolved {} textures ({} downloaded, {} from cache)",
        outcome.catalog.entity_textures.len(),
        outcome.stats.texture_fetches,
        outcome.stats.texture_cache_hits
    );
    if outcome.stats.errors > 0 {
        println!("- Encountered {} errors during processing", outcome.stats.errors);
    }

    Ok(())
}
