//! Utility modules for outfit composition
//!
//! Contains shared functionality used by the composer and the metrics:
//! - Filters: category and season candidate filters
//! - Random: injectable random source for the stochastic dress decision

pub mod filters;
pub mod random;

// Re-export commonly used types
pub use filters::{category_matches, filter_by_category, filter_by_season, season_matches};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
