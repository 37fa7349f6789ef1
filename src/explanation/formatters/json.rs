use serde::Serialize;

use crate::composer::Outfit;
use crate::config::EngineConfig;
use crate::data::Garment;
use crate::explanation::types::OutfitExplanation;
use crate::metrics::calculate_compatibility;

/// Saved-outfit record handed to the wardrobe store
///
/// Garments keep outfit order (base, top, bottom, outer, shoes,
/// accessories); `slots[i]` names the slot `garments[i]` fills.
#[derive(Debug, Serialize)]
pub struct OutfitRecord<'a> {
    pub item_ids: Vec<&'a str>,
    pub slots: Vec<&'static str>,
    pub dress_chosen: bool,
    pub compatibility: u8,
    pub issues: Vec<String>,
    pub garments: Vec<&'a Garment>,
}

impl<'a> OutfitRecord<'a> {
    pub fn new(outfit: &'a Outfit, config: &EngineConfig) -> Self {
        let compat = calculate_compatibility(&outfit.garments(), config);
        Self {
            item_ids: outfit.picks().map(|p| p.garment.id.as_str()).collect(),
            slots: outfit.picks().map(|p| p.slot.label()).collect(),
            dress_chosen: outfit.dress_chosen,
            compatibility: compat.score,
            issues: compat.validation.issues,
            garments: outfit.picks().map(|p| &p.garment).collect(),
        }
    }
}

/// JSON formatter for explanations and saved outfits
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format explanation as pretty-printed JSON
    pub fn format(explanation: &OutfitExplanation) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(explanation)
    }

    /// Format explanation as compact JSON (no whitespace)
    pub fn format_compact(explanation: &OutfitExplanation) -> Result<String, serde_json::Error> {
        serde_json::to_string(explanation)
    }

    /// Format the outfit itself as a compact saved-outfit record
    pub fn format_outfit(outfit: &Outfit, config: &EngineConfig) -> Result<String, serde_json::Error> {
        serde_json::to_string(&OutfitRecord::new(outfit, config))
    }
}
