//! Outfit Composer - Main coordinator for building outfits
//!
//! Fills a fixed set of slots in order, because later slots depend on
//! earlier decisions:
//!   1. Bottom (provisional, may be dropped for a dress)
//!   2. Dress vs separates (stochastic, biased by weather and occasion)
//!   3. Top (only without a dress)
//!   4. Base layer (cold weather only)
//!   5. Outer layer (cool or rainy weather)
//!   6. Shoes
//!   7. Up to two accessories
//!
//! Each slot takes the best-scoring candidate after category, season and
//! exclusion filtering. Selection is greedy; no search over combinations.
//! Includes a parallel (Rayon) best-of-N batch mode.

use rayon::prelude::*;
use serde::Serialize;
use smallvec::SmallVec;

use crate::config::EngineConfig;
use crate::data::{validate_inventory, Garment, OutfitOptions};
use crate::error::Result;
use crate::metrics::{
    calculate_compatibility, pick_best, rank_candidates, CompatibilityResult, ItemScore,
    SelectionCriteria,
};
use crate::utils::filters::{
    filter_by_category, filter_by_season, ACCESSORY_CATEGORIES, BASE_LAYER_CATEGORIES,
    BOTTOM_CATEGORIES, DRESS_CATEGORIES, OUTER_CATEGORIES, SHOE_CATEGORIES, TOP_CATEGORIES,
};
use crate::utils::random::{RandomSource, SeededRandom};

/// Named outfit position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slot {
    Base,
    Top,
    Bottom,
    Outer,
    Shoes,
    Accessory,
}

impl Slot {
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Base => "base layer",
            Slot::Top => "top",
            Slot::Bottom => "bottom",
            Slot::Outer => "outer layer",
            Slot::Shoes => "shoes",
            Slot::Accessory => "accessory",
        }
    }
}

/// Garment chosen for a slot, with the score that won it
#[derive(Debug, Clone, Serialize)]
pub struct SlotPick {
    pub slot: Slot,
    pub garment: Garment,
    pub score: ItemScore,
}

/// Generated outfit
///
/// When a dress is chosen it occupies the top slot and the bottom slot
/// stays empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Outfit {
    pub base: Option<SlotPick>,
    pub top: Option<SlotPick>,
    pub bottom: Option<SlotPick>,
    pub outer: Option<SlotPick>,
    pub shoes: Option<SlotPick>,
    pub accessories: SmallVec<[SlotPick; 2]>,
    pub dress_chosen: bool,
}

impl Outfit {
    /// Filled slots in outfit order: base, top, bottom, outer, shoes, accessories
    pub fn picks(&self) -> impl Iterator<Item = &SlotPick> {
        [&self.base, &self.top, &self.bottom, &self.outer, &self.shoes]
            .into_iter()
            .flatten()
            .chain(self.accessories.iter())
    }

    /// Garments in outfit order
    pub fn garments(&self) -> Vec<Garment> {
        self.picks().map(|p| p.garment.clone()).collect()
    }

    pub fn into_garments(self) -> Vec<Garment> {
        [self.base, self.top, self.bottom, self.outer, self.shoes]
            .into_iter()
            .flatten()
            .chain(self.accessories)
            .map(|p| p.garment)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.picks().count()
    }

    /// Empty means the wardrobe had nothing for any slot
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// A garment fills at most one slot, even if its category matches several.
// Compared by identity: two inventory entries may share an id.
fn without_taken<'a>(available: &[&'a Garment], taken: &[&Garment]) -> Vec<&'a Garment> {
    available
        .iter()
        .copied()
        .filter(|g| !taken.iter().any(|t| std::ptr::eq(*t, *g)))
        .collect()
}

fn slot_pick(slot: Slot, garment: &Garment, score: ItemScore) -> SlotPick {
    SlotPick {
        slot,
        garment: garment.clone(),
        score,
    }
}

/// Main outfit composer
#[derive(Debug, Clone, Default)]
pub struct OutfitComposer {
    config: EngineConfig,
}

impl OutfitComposer {
    /// Create a composer with a validated config
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Probability of preferring an available dress over separates
    pub fn dress_probability(&self, options: &OutfitOptions) -> f64 {
        let policy = &self.config.dress;
        let dressy = options
            .occasion
            .as_deref()
            .map(|o| {
                let o = o.trim().to_lowercase();
                o == "formal" || o == "party"
            })
            .unwrap_or(false);
        let warm = options
            .weather
            .as_ref()
            .map(|w| w.temperature > self.config.thresholds.warm_dress_above)
            .unwrap_or(false);

        if dressy {
            policy.formal_probability
        } else if warm {
            policy.warm_probability
        } else {
            policy.default_probability
        }
    }

    fn pick<'a>(
        &self,
        slot: Slot,
        available: &[&'a Garment],
        taken: &[&Garment],
        accepted: &[&str],
        options: &OutfitOptions,
        criteria: &SelectionCriteria,
    ) -> Option<(&'a Garment, ItemScore)> {
        let free = without_taken(available, taken);
        let by_category = filter_by_category(&free, accepted);
        let candidates = filter_by_season(&by_category, options.season.as_deref());
        let picked = pick_best(&candidates, criteria, &self.config);

        tracing::debug!(
            "{}: {} candidates, picked {:?}",
            slot.label(),
            candidates.len(),
            picked.map(|(g, s)| (g.id.as_str(), s.total))
        );

        picked
    }

    /// Compose one outfit
    ///
    /// An empty or partial outfit is a normal result when the wardrobe lacks
    /// matching garments. Only a malformed inventory is an error.
    pub fn compose(
        &self,
        inventory: &[Garment],
        options: &OutfitOptions,
        rng: &mut dyn RandomSource,
    ) -> Result<Outfit> {
        validate_inventory(inventory)?;

        let available: Vec<&Garment> = inventory
            .iter()
            .filter(|g| !options.avoid_item_ids.contains(&g.id))
            .collect();

        let criteria = SelectionCriteria {
            occasion: options.occasion.as_deref(),
            weather: options.weather.as_ref(),
        };
        let thresholds = &self.config.thresholds;
        let mut outfit = Outfit::default();

        // Step 1: provisional bottom
        let mut bottom =
            self.pick(Slot::Bottom, &available, &[], BOTTOM_CATEGORIES, options, &criteria);
        let mut taken: Vec<&Garment> = bottom.iter().map(|(g, _)| *g).collect();

        // Step 2: dress vs separates
        if let Some((dress, score)) =
            self.pick(Slot::Top, &available, &taken, DRESS_CATEGORIES, options, &criteria)
        {
            let probability = self.dress_probability(options);
            let draw = rng.next_f64();
            tracing::debug!("dress draw {:.3} against p={:.2}", draw, probability);
            if draw < probability {
                outfit.top = Some(slot_pick(Slot::Top, dress, score));
                outfit.dress_chosen = true;
                bottom = None;
                taken = vec![dress];
            }
        }

        // Step 3: top, only when no dress
        if !outfit.dress_chosen {
            if let Some((top, score)) =
                self.pick(Slot::Top, &available, &taken, TOP_CATEGORIES, options, &criteria)
            {
                outfit.top = Some(slot_pick(Slot::Top, top, score));
                taken.push(top);
            }
        }
        outfit.bottom = bottom.map(|(g, score)| slot_pick(Slot::Bottom, g, score));

        if let Some(weather) = options.weather.as_ref() {
            // Step 4: base layer, the one slot allowed alongside a bottom
            if weather.temperature < thresholds.base_layer_below {
                let base_layer = self.pick(
                    Slot::Base,
                    &available,
                    &taken,
                    BASE_LAYER_CATEGORIES,
                    options,
                    &criteria,
                );
                if let Some((base, score)) = base_layer {
                    outfit.base = Some(slot_pick(Slot::Base, base, score));
                    taken.push(base);
                }
            }

            // Step 5: outer layer
            if weather.temperature < thresholds.outer_layer_below || weather.is_raining() {
                if let Some((outer, score)) =
                    self.pick(Slot::Outer, &available, &taken, OUTER_CATEGORIES, options, &criteria)
                {
                    outfit.outer = Some(slot_pick(Slot::Outer, outer, score));
                    taken.push(outer);
                }
            }
        }

        // Step 6: shoes
        if let Some((shoes, score)) =
            self.pick(Slot::Shoes, &available, &taken, SHOE_CATEGORIES, options, &criteria)
        {
            outfit.shoes = Some(slot_pick(Slot::Shoes, shoes, score));
            taken.push(shoes);
        }

        // Step 7: accessories, top N by score
        let free = without_taken(&available, &taken);
        let by_category = filter_by_category(&free, ACCESSORY_CATEGORIES);
        let candidates = filter_by_season(&by_category, options.season.as_deref());
        outfit.accessories = rank_candidates(&candidates, &criteria, &self.config)
            .into_iter()
            .take(self.config.max_accessories)
            .map(|(garment, score)| slot_pick(Slot::Accessory, garment, score))
            .collect();

        tracing::debug!(
            "composed outfit with {} garments (dress: {})",
            outfit.len(),
            outfit.dress_chosen
        );

        Ok(outfit)
    }

    /// Compose `n` independent outfits IN PARALLEL
    ///
    /// Candidate `i` draws from `SeededRandom(seed + i)`, so the batch is
    /// reproducible for a given seed.
    pub fn generate_batch(
        &self,
        inventory: &[Garment],
        options: &OutfitOptions,
        n: usize,
        seed: u64,
    ) -> Result<Vec<Outfit>> {
        validate_inventory(inventory)?;

        let outfits = (0..n)
            .into_par_iter()
            .map(|i| {
                let mut rng = SeededRandom::new(seed.wrapping_add(i as u64));
                self.compose(inventory, options, &mut rng)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Generated batch of {} outfits (seed {})", outfits.len(), seed);
        Ok(outfits)
    }

    /// Best of `n` candidates by compatibility score (first wins ties)
    ///
    /// Returns `None` only when `n` is zero.
    pub fn best_of(
        &self,
        inventory: &[Garment],
        options: &OutfitOptions,
        n: usize,
        seed: u64,
    ) -> Result<Option<(Outfit, CompatibilityResult)>> {
        let mut best: Option<(Outfit, CompatibilityResult)> = None;
        for outfit in self.generate_batch(inventory, options, n, seed)? {
            let compat = calculate_compatibility(&outfit.garments(), &self.config);
            let better = match &best {
                Some((_, current)) => compat.score > current.score,
                None => true,
            };
            if better {
                best = Some((outfit, compat));
            }
        }
        Ok(best)
    }
}

/// Generate an outfit with the stock configuration
///
/// Returns the garments in outfit order; an empty list means the wardrobe
/// could not fill any slot.
pub fn generate_outfit(
    inventory: &[Garment],
    options: &OutfitOptions,
    rng: &mut dyn RandomSource,
) -> Result<Vec<Garment>> {
    let outfit = OutfitComposer::default().compose(inventory, options, rng)?;
    Ok(outfit.into_garments())
}
