//! Engine error taxonomy
//!
//! The engine does no I/O during composition, so the only failures it can
//! raise there are input-validation errors. Loading inventories and configs
//! from disk adds the I/O, JSON and Polars variants.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Inventory is malformed (not an array, item without a category, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to load tabular inventory: {0}")]
    Data(#[from] polars::prelude::PolarsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
