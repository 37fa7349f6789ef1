//! Engine Configuration
//!
//! Every threshold, probability and weight used by slot filling and scoring
//! lives here so a deployment can tune them from a JSON file. `Default`
//! reproduces the stock engine behaviour exactly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{EngineError, Result};

/// Complete engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    pub thresholds: TemperatureThresholds,
    pub dress: DressPolicy,
    pub weights: SelectionWeights,
    pub compatibility: CompatibilityRules,
    /// Garments worn fewer times than this get the novelty bonus
    pub novelty_wear_limit: u32,
    /// Maximum number of accessories in one outfit
    pub max_accessories: usize,
}

/// Temperature cut-offs in degrees
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TemperatureThresholds {
    /// Base layer attempted strictly below this
    pub base_layer_below: f64,
    /// Outer layer attempted strictly below this (or when raining)
    pub outer_layer_below: f64,
    /// Dress bias kicks in strictly above this
    pub warm_dress_above: f64,
    /// Wool bonus strictly below this
    pub wool_below: f64,
    /// Cotton bonus strictly above this
    pub cotton_above: f64,
}

/// Probabilities of preferring a dress over top + bottom
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DressPolicy {
    /// Occasion is "formal" or "party"
    pub formal_probability: f64,
    /// Temperature above `warm_dress_above`
    pub warm_probability: f64,
    pub default_probability: f64,
}

/// Additive bonuses used when ranking candidates for a slot
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectionWeights {
    pub occasion_match: u32,
    pub weather_material: u32,
    pub novelty: u32,
    pub favorite: u32,
}

/// Limits and deductions for the compatibility score
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CompatibilityRules {
    pub max_distinct_colors: usize,
    pub color_penalty: u32,
    pub max_distinct_occasions: usize,
    pub occasion_penalty: u32,
    pub violation_penalty: u32,
}

impl Default for TemperatureThresholds {
    fn default() -> Self {
        Self {
            base_layer_below: 15.0,
            outer_layer_below: 18.0,
            warm_dress_above: 20.0,
            wool_below: 10.0,
            cotton_above: 25.0,
        }
    }
}

impl Default for DressPolicy {
    fn default() -> Self {
        Self {
            formal_probability: 0.6,
            warm_probability: 0.5,
            default_probability: 0.3,
        }
    }
}

impl Default for SelectionWeights {
    fn default() -> Self {
        Self {
            occasion_match: 10,
            weather_material: 5,
            novelty: 5,
            favorite: 3,
        }
    }
}

impl Default for CompatibilityRules {
    fn default() -> Self {
        Self {
            max_distinct_colors: 4,
            color_penalty: 10,
            max_distinct_occasions: 2,
            occasion_penalty: 15,
            violation_penalty: 30,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: TemperatureThresholds::default(),
            dress: DressPolicy::default(),
            weights: SelectionWeights::default(),
            compatibility: CompatibilityRules::default(),
            novelty_wear_limit: 3,
            max_accessories: 2,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    ///
    /// Keys missing from the file keep their stock values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot interpret
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("dress.formal_probability", self.dress.formal_probability),
            ("dress.warm_probability", self.dress.warm_probability),
            ("dress.default_probability", self.dress.default_probability),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(EngineError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }

        let t = &self.thresholds;
        let temps = [
            t.base_layer_below,
            t.outer_layer_below,
            t.warm_dress_above,
            t.wool_below,
            t.cotton_above,
        ];
        if temps.iter().any(|v| !v.is_finite()) {
            return Err(EngineError::InvalidConfig(
                "temperature thresholds must be finite".to_string(),
            ));
        }

        if self.compatibility.color_penalty > 100
            || self.compatibility.occasion_penalty > 100
            || self.compatibility.violation_penalty > 100
        {
            return Err(EngineError::InvalidConfig(
                "compatibility penalties cannot exceed 100".to_string(),
            ));
        }

        Ok(())
    }
}
