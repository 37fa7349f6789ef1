//! Outfit Engine
//!
//! Composes a wearable outfit from a user's wardrobe for a given weather,
//! occasion and season, then validates and scores it.
//!
//! Module layout:
//! - `taxonomy`: category → layering metadata lookup table
//! - `utils/`: candidate filters and the injectable random source
//! - `metrics/`: selection score, layering validator, compatibility score
//! - `composer`: slot-filling coordinator (single and parallel batch)
//! - `explanation/`: human-readable explanation with JSON/Markdown output
//! - `data`: garment model and inventory loading (JSON, CSV, Parquet)
//! - `config`: tunable thresholds and weights
//!
//! Every entry point is a pure function of (inventory, options); nothing is
//! persisted between calls.

pub mod composer;
pub mod config;
pub mod data;
pub mod error;
pub mod explanation;
pub mod metrics;
pub mod taxonomy;
pub mod utils;

// Re-export commonly used types
pub use composer::{generate_outfit, Outfit, OutfitComposer, Slot, SlotPick};
pub use config::EngineConfig;
pub use data::{load_inventory, parse_inventory_json, Garment, OutfitOptions, Weather, WardrobeData};
pub use error::{EngineError, Result};
pub use explanation::{explain_outfit, JsonFormatter, MarkdownFormatter, OutfitExplanation};
pub use metrics::{
    calculate_compatibility, score_compatibility, validate_outfit, CompatibilityResult,
    ValidationResult, Violation,
};
pub use taxonomy::{classify, BodyRegion, LayerDescriptor, LayerType};
pub use utils::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
