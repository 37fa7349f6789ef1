//! LAYERING VALIDATOR
//!
//! Checks a finished outfit against the hard layering rules, collecting
//! every violation instead of stopping at the first:
//!   1. Duplicate leg-wear: more than one mid-layer leg garment, unless a
//!      base layer (thermal/tights) is also worn
//!   2. Dress/separates conflict: a dress worn with any leg garment
//!   3. Required slots: a top (or dress) and shoes
//!
//! Violations are returned as data; validation never fails.

use serde::Serialize;
use std::fmt;

use crate::data::Garment;
use crate::taxonomy::{classify, BodyRegion, LayerType};
use crate::utils::filters::{category_matches, SHOE_CATEGORIES};

const TOP_OR_DRESS: &[&str] = &["tops", "dresses"];

/// A single layering rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Violation {
    DuplicateLegWear { count: usize },
    DressWithSeparates,
    MissingTop,
    MissingShoes,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateLegWear { count } => {
                write!(f, "duplicate leg-wear: {} bottoms without a base layer", count)
            }
            Violation::DressWithSeparates => {
                write!(f, "dress/separates conflict: dress worn with a separate bottom")
            }
            Violation::MissingTop => write!(f, "missing top garment"),
            Violation::MissingShoes => write!(f, "missing shoes"),
        }
    }
}

/// Result of validating an outfit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Human-readable messages, in check order
    pub issues: Vec<String>,
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            valid: violations.is_empty(),
            issues: violations.iter().map(|v| v.to_string()).collect(),
            violations,
        }
    }

    pub fn has(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }
}

/// Validate an outfit against the layering rules
pub fn validate_outfit(outfit: &[Garment]) -> ValidationResult {
    let mut violations = Vec::new();

    let descriptors: Vec<_> = outfit.iter().filter_map(|g| classify(&g.category)).collect();
    let leg_wear = descriptors.iter().filter(|d| d.is_leg_wear()).count();
    // Only leg base layers (thermal/tights) carry a second pair of bottoms
    let has_leg_base = descriptors
        .iter()
        .any(|d| d.layer_type == LayerType::Base && d.region == BodyRegion::Legs);
    let has_dress = descriptors.iter().any(|d| d.is_dress());

    // Rule 1: one pair of bottoms, unless layered over thermals/tights
    if leg_wear > 1 && !has_leg_base {
        violations.push(Violation::DuplicateLegWear { count: leg_wear });
    }

    // Rule 2: dress replaces separates
    if has_dress && leg_wear > 0 {
        violations.push(Violation::DressWithSeparates);
    }

    // Rule 3: required slots
    if !outfit.iter().any(|g| category_matches(&g.category, TOP_OR_DRESS)) {
        violations.push(Violation::MissingTop);
    }
    if !outfit.iter().any(|g| category_matches(&g.category, SHOE_CATEGORIES)) {
        violations.push(Violation::MissingShoes);
    }

    ValidationResult::from_violations(violations)
}
