//! Layer Taxonomy Lookup Table
//!
//! Maps garment categories to their layering metadata: how close to the
//! body the garment sits, which body region it occupies, and whether that
//! region tolerates more than one garment at a time.
//!
//! Categories the table cannot classify return `None` and are ignored by
//! the layering rules.

use serde::Serialize;

/// Layer tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayerType {
    Base,
    Mid,
    Outer,
    Accessory,
}

/// Body region occupied by a garment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BodyRegion {
    Torso,
    Legs,
    Feet,
    Head,
    Hands,
    FullBody,
}

/// Layering metadata for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerDescriptor {
    pub category: &'static str,
    /// 1 = base (closest to the body) .. 4 = accessory
    pub level: u8,
    pub layer_type: LayerType,
    pub region: BodyRegion,
    /// Only one garment may occupy the region at once
    pub exclusive: bool,
}

impl LayerDescriptor {
    pub fn is_leg_wear(&self) -> bool {
        self.layer_type == LayerType::Mid && self.region == BodyRegion::Legs
    }

    pub fn is_dress(&self) -> bool {
        self.layer_type == LayerType::Mid && self.region == BodyRegion::FullBody
    }
}

const fn layer(
    category: &'static str,
    level: u8,
    layer_type: LayerType,
    region: BodyRegion,
    exclusive: bool,
) -> LayerDescriptor {
    LayerDescriptor {
        category,
        level,
        layer_type,
        region,
        exclusive,
    }
}

// ============================================================================
// EMBEDDED TAXONOMY
// Base entries come first; classify() gives them priority over any
// mid-layer key contained in the same category.
// ============================================================================

static LAYERS: &[LayerDescriptor] = &[
    layer("underwear", 1, LayerType::Base, BodyRegion::Torso, false),
    layer("thermal", 1, LayerType::Base, BodyRegion::Legs, false),
    layer("tights", 1, LayerType::Base, BodyRegion::Legs, false),
    layer("dresses", 2, LayerType::Mid, BodyRegion::FullBody, true),
    layer("tops", 2, LayerType::Mid, BodyRegion::Torso, true),
    layer("bottoms", 2, LayerType::Mid, BodyRegion::Legs, true),
    layer("skirts", 2, LayerType::Mid, BodyRegion::Legs, true),
    layer("pants", 2, LayerType::Mid, BodyRegion::Legs, true),
    layer("jeans", 2, LayerType::Mid, BodyRegion::Legs, true),
    layer("shorts", 2, LayerType::Mid, BodyRegion::Legs, true),
    layer("outerwear", 3, LayerType::Outer, BodyRegion::Torso, false),
    layer("jackets", 3, LayerType::Outer, BodyRegion::Torso, false),
    layer("coats", 3, LayerType::Outer, BodyRegion::Torso, false),
    layer("blazers", 3, LayerType::Outer, BodyRegion::Torso, false),
    layer("cardigans", 3, LayerType::Outer, BodyRegion::Torso, false),
    layer("shoes", 4, LayerType::Accessory, BodyRegion::Feet, true),
    layer("accessories", 4, LayerType::Accessory, BodyRegion::Hands, false),
    layer("bags", 4, LayerType::Accessory, BodyRegion::Hands, false),
    layer("jewelry", 4, LayerType::Accessory, BodyRegion::Hands, false),
    layer("hats", 4, LayerType::Accessory, BodyRegion::Head, false),
    layer("scarves", 4, LayerType::Accessory, BodyRegion::Head, false),
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Get the layer descriptor for a category.
///
/// Exact (case-insensitive) key first. Otherwise a contained base-layer key
/// wins, so "thermal pants" stays a base layer. Failing that, the key that
/// appears last in the category string wins: the head noun of "Jeans
/// Jackets" is the jacket.
///
/// # Examples
/// ```
/// use outfit_engine::taxonomy::{classify, BodyRegion, LayerType};
///
/// let jeans = classify("Skinny Jeans").unwrap();
/// assert_eq!(jeans.region, BodyRegion::Legs);
///
/// let tights = classify("Wool Tights").unwrap();
/// assert_eq!(tights.layer_type, LayerType::Base);
///
/// let jacket = classify("Jeans Jackets").unwrap();
/// assert_eq!(jacket.layer_type, LayerType::Outer);
///
/// assert!(classify("umbrella").is_none());
/// ```
pub fn classify(category: &str) -> Option<&'static LayerDescriptor> {
    let key = category.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }

    if let Some(exact) = LAYERS.iter().find(|d| d.category == key) {
        return Some(exact);
    }
    if let Some(base) = LAYERS
        .iter()
        .find(|d| d.layer_type == LayerType::Base && key.contains(d.category))
    {
        return Some(base);
    }

    // Rightmost match; table order breaks ties
    let mut best: Option<(usize, &'static LayerDescriptor)> = None;
    for d in LAYERS {
        if let Some(pos) = key.rfind(d.category) {
            match best {
                Some((best_pos, _)) if pos <= best_pos => {}
                _ => best = Some((pos, d)),
            }
        }
    }
    best.map(|(_, d)| d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup() {
        let coats = classify("coats").unwrap();
        assert_eq!(coats.level, 3);
        assert_eq!(coats.layer_type, LayerType::Outer);
        assert!(!coats.exclusive);

        let shoes = classify("SHOES").unwrap();
        assert_eq!(shoes.region, BodyRegion::Feet);
        assert!(shoes.exclusive);
    }

    #[test]
    fn test_leg_and_dress_predicates() {
        assert!(classify("jeans").unwrap().is_leg_wear());
        assert!(classify("skirts").unwrap().is_leg_wear());
        assert!(!classify("tights").unwrap().is_leg_wear());
        assert!(classify("dresses").unwrap().is_dress());
        assert!(!classify("tops").unwrap().is_dress());
    }

    #[test]
    fn test_base_entries_win_over_mid_entries() {
        // "thermal" precedes "pants" in the table
        let d = classify("thermal pants").unwrap();
        assert_eq!(d.layer_type, LayerType::Base);
    }

    #[test]
    fn test_levels_follow_layer_type() {
        for d in LAYERS {
            let expected = match d.layer_type {
                LayerType::Base => 1,
                LayerType::Mid => 2,
                LayerType::Outer => 3,
                LayerType::Accessory => 4,
            };
            assert_eq!(d.level, expected, "{}", d.category);
        }
    }

    #[test]
    fn test_head_noun_wins() {
        assert_eq!(classify("Jeans Jackets").unwrap().category, "jackets");
        assert_eq!(classify("Bottoms-inspired Tops").unwrap().category, "tops");
        assert_eq!(classify("Denim Skirts").unwrap().category, "skirts");
        assert_eq!(classify("thermal tops").unwrap().category, "thermal");
    }

    #[test]
    fn test_unknown_category() {
        assert!(classify("umbrella").is_none());
        assert!(classify("").is_none());
    }
}
