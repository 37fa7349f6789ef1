//! Scoring and validation modules
//!
//! Each concern is implemented in its own module:
//! - `item_score`: per-garment selection score used while filling slots
//! - `layering_rules`: hard layering rules over a finished outfit
//! - `compatibility`: advisory 0-100 coherence score

pub mod compatibility;
pub mod item_score;
pub mod layering_rules;

// Re-export metric functions
pub use compatibility::{calculate_compatibility, score_compatibility, CompatibilityResult};
pub use item_score::{pick_best, rank_candidates, score_item, ItemScore, SelectionCriteria};
pub use layering_rules::{validate_outfit, ValidationResult, Violation};
