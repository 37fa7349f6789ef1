//! COMPATIBILITY SCORE
//!
//! Advisory 0-100 coherence score for a finished outfit. Starts at 100 and
//! applies deductions:
//!   - more than 4 distinct colors      -10
//!   - more than 2 distinct occasions   -15
//!   - any layering violation           -30
//!
//! The empty outfit scores 100 even though the validator rejects it;
//! existing consumers rely on that.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::data::Garment;
use crate::metrics::layering_rules::{validate_outfit, ValidationResult};

/// Result of compatibility scoring
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityResult {
    /// Final score (0-100, HIGH = GOOD)
    pub score: u8,
    pub distinct_colors: usize,
    pub distinct_occasions: usize,
    pub color_penalty: u32,
    pub occasion_penalty: u32,
    pub violation_penalty: u32,
    pub validation: ValidationResult,
}

impl CompatibilityResult {
    /// Score as a 0-1 confidence
    pub fn confidence(&self) -> f64 {
        f64::from(self.score) / 100.0
    }
}

fn distinct_tags<'a>(values: impl Iterator<Item = Option<&'a str>>) -> usize {
    values
        .flatten()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect::<FxHashSet<String>>()
        .len()
}

/// Score an outfit with full breakdown
pub fn calculate_compatibility(outfit: &[Garment], config: &EngineConfig) -> CompatibilityResult {
    let rules = &config.compatibility;
    let validation = validate_outfit(outfit);

    let distinct_colors = distinct_tags(outfit.iter().map(|g| g.color.as_deref()));
    let distinct_occasions = distinct_tags(outfit.iter().map(|g| g.occasion.as_deref()));

    if outfit.is_empty() {
        return CompatibilityResult {
            score: 100,
            distinct_colors,
            distinct_occasions,
            color_penalty: 0,
            occasion_penalty: 0,
            violation_penalty: 0,
            validation,
        };
    }

    let color_penalty = if distinct_colors > rules.max_distinct_colors {
        rules.color_penalty
    } else {
        0
    };
    let occasion_penalty = if distinct_occasions > rules.max_distinct_occasions {
        rules.occasion_penalty
    } else {
        0
    };
    let violation_penalty = if validation.valid {
        0
    } else {
        rules.violation_penalty
    };

    let total_penalty = i64::from(color_penalty + occasion_penalty + violation_penalty);
    let score = (100 - total_penalty).clamp(0, 100) as u8;

    CompatibilityResult {
        score,
        distinct_colors,
        distinct_occasions,
        color_penalty,
        occasion_penalty,
        violation_penalty,
        validation,
    }
}

/// Compatibility score (0-100) with the stock rules
pub fn score_compatibility(outfit: &[Garment]) -> u8 {
    calculate_compatibility(outfit, &EngineConfig::default()).score
}
