//! SELECTION SCORE: BEST MATCH FOR A SLOT
//!
//! Additive score over four independent signals:
//!   1. Occasion match  (+10) - occasion tag equals the requested occasion
//!   2. Weather material (+5) - wool when cold, cotton when hot
//!   3. Novelty          (+5) - worn fewer than 3 times
//!   4. Favorite         (+3) - flagged favorite
//!
//! No signal is ever negative; a missing attribute contributes 0.
//! Selection is a plain sum-and-max with the first candidate winning ties.

use serde::Serialize;

use crate::config::EngineConfig;
use crate::data::{Garment, Weather};

/// What the slot is being filled for
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionCriteria<'a> {
    pub occasion: Option<&'a str>,
    pub weather: Option<&'a Weather>,
}

/// Score breakdown for one candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ItemScore {
    pub total: u32,
    pub occasion: u32,
    pub material: u32,
    pub novelty: u32,
    pub favorite: u32,
}

/// Score a single garment
pub fn score_item(garment: &Garment, criteria: &SelectionCriteria, config: &EngineConfig) -> ItemScore {
    let weights = &config.weights;
    let thresholds = &config.thresholds;

    let occasion = match (garment.occasion.as_deref(), criteria.occasion) {
        (Some(tag), Some(wanted)) if tag.to_lowercase() == wanted.to_lowercase() => {
            weights.occasion_match
        }
        _ => 0,
    };

    let material = match (garment.material.as_deref(), criteria.weather) {
        (Some(material), Some(weather)) => {
            let material = material.to_lowercase();
            let wool = weather.temperature < thresholds.wool_below && material.contains("wool");
            let cotton =
                weather.temperature > thresholds.cotton_above && material.contains("cotton");
            if wool || cotton {
                weights.weather_material
            } else {
                0
            }
        }
        _ => 0,
    };

    let novelty = if garment.times_worn < config.novelty_wear_limit {
        weights.novelty
    } else {
        0
    };

    let favorite = if garment.favorite { weights.favorite } else { 0 };

    ItemScore {
        total: occasion + material + novelty + favorite,
        occasion,
        material,
        novelty,
        favorite,
    }
}

/// Pick the highest-scoring candidate (first wins ties)
pub fn pick_best<'a>(
    candidates: &[&'a Garment],
    criteria: &SelectionCriteria,
    config: &EngineConfig,
) -> Option<(&'a Garment, ItemScore)> {
    let mut best: Option<(&'a Garment, ItemScore)> = None;
    for &garment in candidates {
        let score = score_item(garment, criteria, config);
        match best {
            Some((_, current)) if score.total <= current.total => {}
            _ => best = Some((garment, score)),
        }
    }
    best
}

/// All candidates ordered by score, ties kept in input order
pub fn rank_candidates<'a>(
    candidates: &[&'a Garment],
    criteria: &SelectionCriteria,
    config: &EngineConfig,
) -> Vec<(&'a Garment, ItemScore)> {
    let mut ranked: Vec<(&'a Garment, ItemScore)> = candidates
        .iter()
        .map(|&g| (g, score_item(g, criteria, config)))
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.1.total.cmp(&a.1.total));
    ranked
}
