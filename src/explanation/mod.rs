pub mod types;
pub mod generator;
pub mod formatters;

pub use types::{
    ContextExplanation, OutfitExplanation, OverallExplanation, Severity, SlotNote, WarningCard,
};

pub use generator::{explain_outfit, ExplanationGenerator};
pub use formatters::{JsonFormatter, MarkdownFormatter, OutfitRecord};
