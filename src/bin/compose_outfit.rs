// Outfit composer command-line entry point
//
// Usage: compose_outfit <inventory.json|inventory.csv|inventory.parquet>
//
// Context comes from environment variables:
//   TEMPERATURE, CONDITION, OCCASION, SEASON, AVOID_IDS (comma-separated),
//   SEED (reproducible draw), CANDIDATES (best-of-N), ENGINE_CONFIG (JSON path),
//   FORMAT (markdown | json | record; default markdown)

use anyhow::{Context, Result};
use outfit_engine::explanation::ExplanationGenerator;
use outfit_engine::{
    load_inventory, EngineConfig, JsonFormatter, MarkdownFormatter, OutfitComposer, OutfitOptions,
    SeededRandom, ThreadRandom,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn env_parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{} is not valid ({}): {}", name, raw, e)),
        _ => Ok(None),
    }
}

fn env_text(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "outfit_engine=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let inventory_path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: compose_outfit <inventory.json|.csv|.parquet>")?;

    let config = match env_text("ENGINE_CONFIG") {
        Some(path) => EngineConfig::load(Path::new(&path))
            .with_context(|| format!("Failed to load engine config: {}", path))?,
        None => EngineConfig::default(),
    };
    let composer = OutfitComposer::new(config)?;

    let inventory = load_inventory(&inventory_path)
        .with_context(|| format!("Failed to load inventory: {:?}", inventory_path))?;
    tracing::info!("Loaded {} garments from {:?}", inventory.len(), inventory_path);

    let mut options = OutfitOptions::default();
    if let Some(temperature) = env_parsed::<f64>("TEMPERATURE")? {
        let condition = env_text("CONDITION").unwrap_or_default();
        options = options.with_weather(temperature, &condition);
    }
    if let Some(occasion) = env_text("OCCASION") {
        options = options.with_occasion(&occasion);
    }
    if let Some(season) = env_text("SEASON") {
        options = options.with_season(&season);
    }
    if let Some(avoid) = env_text("AVOID_IDS") {
        options = options.avoiding(avoid.split(',').map(str::trim).filter(|s| !s.is_empty()));
    }

    let seed = env_parsed::<u64>("SEED")?;
    let candidates = env_parsed::<usize>("CANDIDATES")?.unwrap_or(1);

    tracing::info!("Configuration:");
    tracing::info!("  Weather: {:?}", options.weather);
    tracing::info!("  Occasion: {:?}", options.occasion);
    tracing::info!("  Season: {:?}", options.season);
    tracing::info!("  Excluded: {}", options.avoid_item_ids.len());

    let outfit = if candidates > 1 {
        let seed = seed.unwrap_or_else(rand::random);
        composer
            .best_of(&inventory, &options, candidates, seed)?
            .map(|(outfit, _)| outfit)
            .unwrap_or_default()
    } else {
        match seed {
            Some(seed) => composer.compose(&inventory, &options, &mut SeededRandom::new(seed))?,
            None => composer.compose(&inventory, &options, &mut ThreadRandom)?,
        }
    };

    if outfit.is_empty() {
        tracing::warn!("Wardrobe could not fill any slot");
    }

    let format = env_text("FORMAT").unwrap_or_else(|| "markdown".to_string());
    let output = match format.trim().to_lowercase().as_str() {
        "record" => JsonFormatter::format_outfit(&outfit, composer.config())?,
        "json" => {
            let explanation = ExplanationGenerator::generate(&outfit, &options, composer.config());
            JsonFormatter::format(&explanation)?
        }
        "markdown" => {
            let explanation = ExplanationGenerator::generate(&outfit, &options, composer.config());
            MarkdownFormatter::format(&explanation)
        }
        other => anyhow::bail!("FORMAT must be markdown, json or record (got {})", other),
    };
    println!("{}", output);

    Ok(())
}
