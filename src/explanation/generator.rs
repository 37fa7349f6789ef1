use crate::composer::{Outfit, SlotPick};
use crate::config::EngineConfig;
use crate::data::OutfitOptions;
use crate::explanation::types::*;
use crate::metrics::{calculate_compatibility, CompatibilityResult, Violation};
use crate::taxonomy::{classify, LayerType};

/// Main explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Generate complete explanation for a composed outfit
    ///
    /// Compatibility is recomputed from the outfit so the explanation always
    /// matches the garments it describes.
    pub fn generate(
        outfit: &Outfit,
        options: &OutfitOptions,
        config: &EngineConfig,
    ) -> OutfitExplanation {
        let compat = calculate_compatibility(&outfit.garments(), config);

        OutfitExplanation {
            overall: Self::generate_overall(&compat),
            context: Self::generate_context(options),
            slots: outfit.picks().map(Self::generate_slot_note).collect(),
            warnings: Self::generate_warnings(outfit, &compat),
        }
    }

    fn generate_overall(compat: &CompatibilityResult) -> OverallExplanation {
        let (stars, label) = match compat.score {
            s if s >= 90 => ("★★★★★", "Excellent"),
            s if s >= 70 => ("★★★★☆", "Good"),
            s if s >= 55 => ("★★★☆☆", "Fair"),
            s if s >= 40 => ("★★☆☆☆", "Poor"),
            _ => ("★☆☆☆☆", "Clashing"),
        };

        OverallExplanation {
            score: compat.score,
            stars: stars.to_string(),
            label: label.to_string(),
            message: format!("Outfit compatibility: {}/100", compat.score),
            valid: compat.validation.valid,
        }
    }

    fn generate_context(options: &OutfitOptions) -> ContextExplanation {
        ContextExplanation {
            weather: options
                .weather
                .as_ref()
                .map(|w| format!("{:.0}°, {}", w.temperature, w.condition)),
            occasion: options.occasion.clone(),
            season: options.season.clone(),
            excluded_items: options.avoid_item_ids.len(),
        }
    }

    fn generate_slot_note(pick: &SlotPick) -> SlotNote {
        let layer = classify(&pick.garment.category).map(|d| {
            match d.layer_type {
                LayerType::Base => "base",
                LayerType::Mid => "mid",
                LayerType::Outer => "outer",
                LayerType::Accessory => "accessory",
            }
            .to_string()
        });

        let s = &pick.score;
        let mut reasons = Vec::new();
        if s.occasion > 0 {
            reasons.push(format!("occasion match (+{})", s.occasion));
        }
        if s.material > 0 {
            reasons.push(format!("weather-suited material (+{})", s.material));
        }
        if s.novelty > 0 {
            reasons.push(format!("rarely worn (+{})", s.novelty));
        }
        if s.favorite > 0 {
            reasons.push(format!("favorite (+{})", s.favorite));
        }
        if reasons.is_empty() {
            reasons.push("only or first matching item".to_string());
        }

        SlotNote {
            slot: pick.slot.label().to_string(),
            garment_id: pick.garment.id.clone(),
            category: pick.garment.category.clone(),
            layer,
            score: s.total,
            reasons,
        }
    }

    fn generate_warnings(outfit: &Outfit, compat: &CompatibilityResult) -> Vec<WarningCard> {
        let mut warnings = Vec::new();

        if outfit.is_empty() {
            warnings.push(WarningCard {
                warning_type: "insufficient_wardrobe".to_string(),
                severity: Severity::High,
                message: "No garment matched any slot".to_string(),
                advice: "Add tops, bottoms and shoes for the requested season".to_string(),
            });
            return warnings;
        }

        for violation in &compat.validation.violations {
            let advice = match violation {
                Violation::DuplicateLegWear { .. } => "Keep one pair of bottoms",
                Violation::DressWithSeparates => "Drop the bottom or swap the dress for a top",
                Violation::MissingTop => "Add a top or dress to the wardrobe",
                Violation::MissingShoes => "Add shoes for this season",
            };
            warnings.push(WarningCard {
                warning_type: "layering".to_string(),
                severity: Severity::from_penalty(compat.violation_penalty),
                message: violation.to_string(),
                advice: advice.to_string(),
            });
        }

        if compat.color_penalty > 0 {
            warnings.push(WarningCard {
                warning_type: "colors".to_string(),
                severity: Severity::from_penalty(compat.color_penalty),
                message: format!("{} competing colors", compat.distinct_colors),
                advice: "Swap an accessory for a neutral piece".to_string(),
            });
        }

        if compat.occasion_penalty > 0 {
            warnings.push(WarningCard {
                warning_type: "occasions".to_string(),
                severity: Severity::from_penalty(compat.occasion_penalty),
                message: format!("Mixes {} occasion styles", compat.distinct_occasions),
                advice: "Pick garments tagged for the same occasion".to_string(),
            });
        }

        warnings
    }
}

/// Explain an outfit with the stock configuration
pub fn explain_outfit(outfit: &Outfit, options: &OutfitOptions) -> OutfitExplanation {
    ExplanationGenerator::generate(outfit, options, &EngineConfig::default())
}
