pub mod json;
pub mod markdown;

pub use json::{JsonFormatter, OutfitRecord};
pub use markdown::MarkdownFormatter;
