//! Candidate Filters
//!
//! Narrow an inventory down to the garments a slot may use. Both filters
//! return new candidate lists; an empty result just leaves the slot empty.
//!
//! Category matching is case-insensitive substring containment, so
//! "Skinny Jeans" passes the `jeans` token. This also means a category like
//! "Bottoms-inspired Top" passes the bottoms filter; that tolerance is kept
//! on purpose for free-form category names. The composer never places one
//! garment in two slots, and the layering rules classify such a garment by
//! its head noun (see `taxonomy::classify`).

use crate::data::Garment;

/// Categories accepted by each slot
pub const BOTTOM_CATEGORIES: &[&str] = &["bottoms", "jeans", "pants", "skirts", "shorts"];
pub const DRESS_CATEGORIES: &[&str] = &["dresses"];
pub const TOP_CATEGORIES: &[&str] = &["tops"];
pub const BASE_LAYER_CATEGORIES: &[&str] = &["thermal", "tights"];
pub const OUTER_CATEGORIES: &[&str] = &["outerwear", "jackets", "coats", "blazers", "cardigans"];
pub const SHOE_CATEGORIES: &[&str] = &["shoes"];
pub const ACCESSORY_CATEGORIES: &[&str] = &["accessories", "bags", "jewelry", "hats", "scarves"];

/// Season tag that matches every requested season
pub const ALL_SEASON: &str = "all-season";

/// True if the category contains any of the accepted tokens
pub fn category_matches(category: &str, accepted: &[&str]) -> bool {
    let lower = category.to_lowercase();
    accepted.iter().any(|token| lower.contains(&token.to_lowercase()))
}

/// True if the garment may be worn in the requested season
///
/// Untagged and all-season garments always pass; with no requested season
/// everything passes.
pub fn season_matches(garment: &Garment, season: Option<&str>) -> bool {
    let Some(requested) = season else {
        return true;
    };
    match garment.season.as_deref() {
        None => true,
        Some(tag) => {
            tag.eq_ignore_ascii_case(ALL_SEASON) || tag.to_lowercase() == requested.to_lowercase()
        }
    }
}

/// Keep garments whose category matches one of the accepted tokens
pub fn filter_by_category<'a>(candidates: &[&'a Garment], accepted: &[&str]) -> Vec<&'a Garment> {
    candidates
        .iter()
        .copied()
        .filter(|g| category_matches(&g.category, accepted))
        .collect()
}

/// Keep garments wearable in the requested season
pub fn filter_by_season<'a>(candidates: &[&'a Garment], season: Option<&str>) -> Vec<&'a Garment> {
    candidates
        .iter()
        .copied()
        .filter(|g| season_matches(g, season))
        .collect()
}
