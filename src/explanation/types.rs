use serde::{Deserialize, Serialize};

/// Complete explanation for a generated outfit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitExplanation {
    pub overall: OverallExplanation,
    pub context: ContextExplanation,
    pub slots: Vec<SlotNote>,
    pub warnings: Vec<WarningCard>,
}

/// Overall score interpretation with stars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallExplanation {
    pub score: u8,
    pub stars: String, // "★★★★☆"
    pub label: String, // "Excellent" / "Good" / "Fair" / "Poor" / "Clashing"
    pub message: String,
    pub valid: bool,
}

/// What the outfit was generated for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextExplanation {
    pub weather: Option<String>,
    pub occasion: Option<String>,
    pub season: Option<String>,
    pub excluded_items: usize,
}

/// Why a slot holds the garment it does
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotNote {
    pub slot: String,
    pub garment_id: String,
    pub category: String,
    pub layer: Option<String>,
    pub score: u32,
    /// Signals that contributed, e.g. "occasion match (+10)"
    pub reasons: Vec<String>,
}

/// Warning card for rule violations and score deductions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningCard {
    pub warning_type: String, // "layering", "colors", "occasions", "insufficient_wardrobe"
    pub severity: Severity,
    pub message: String,
    pub advice: String,
}

/// Severity level for warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Derive severity from a point deduction
    pub fn from_penalty(penalty: u32) -> Self {
        match penalty {
            0 => Severity::Info,
            1..=10 => Severity::Low,
            11..=20 => Severity::Medium,
            _ => Severity::High,
        }
    }
}
