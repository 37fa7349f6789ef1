//! Wardrobe Data Model and Inventory Loading
//!
//! Garments arrive from the inventory store either as a JSON array (API
//! payloads) or as a CSV/Parquet export. Both paths end in a `Vec<Garment>`
//! and share the same validation: every garment needs a non-blank category.
//!
//! The engine only reads garments; nothing here writes back to the store.

use polars::prelude::*;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EngineError, Result};

/// A garment owned by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garment {
    pub id: String,
    /// Free-form category ("tops", "Skinny Jeans", "dresses", ...)
    pub category: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    /// One of the seasons, "all-season", or absent
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub times_worn: u32,
}

impl Garment {
    /// Minimal garment with only id and category set
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            color: None,
            material: None,
            season: None,
            occasion: None,
            favorite: false,
            times_worn: 0,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn with_material(mut self, material: &str) -> Self {
        self.material = Some(material.to_string());
        self
    }

    pub fn with_season(mut self, season: &str) -> Self {
        self.season = Some(season.to_string());
        self
    }

    pub fn with_occasion(mut self, occasion: &str) -> Self {
        self.occasion = Some(occasion.to_string());
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn with_times_worn(mut self, times_worn: u32) -> Self {
        self.times_worn = times_worn;
        self
    }
}

/// Current weather as reported by the weather provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// Degrees (same unit as the configured thresholds)
    pub temperature: f64,
    /// Free-form condition ("rain", "clear", "light rain showers", ...)
    #[serde(default)]
    pub condition: String,
}

impl Weather {
    pub fn new(temperature: f64, condition: &str) -> Self {
        Self {
            temperature,
            condition: condition.to_string(),
        }
    }

    pub fn is_raining(&self) -> bool {
        self.condition.to_lowercase().contains("rain")
    }
}

/// Per-call context for outfit generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutfitOptions {
    #[serde(default)]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    /// Garment ids that must never be selected
    #[serde(default)]
    pub avoid_item_ids: FxHashSet<String>,
}

impl OutfitOptions {
    pub fn with_weather(mut self, temperature: f64, condition: &str) -> Self {
        self.weather = Some(Weather::new(temperature, condition));
        self
    }

    pub fn with_occasion(mut self, occasion: &str) -> Self {
        self.occasion = Some(occasion.to_string());
        self
    }

    pub fn with_season(mut self, season: &str) -> Self {
        self.season = Some(season.to_string());
        self
    }

    pub fn avoiding<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avoid_item_ids.extend(ids.into_iter().map(Into::into));
        self
    }
}

/// Check that every garment carries a usable category
pub fn validate_inventory(inventory: &[Garment]) -> Result<()> {
    for (idx, garment) in inventory.iter().enumerate() {
        if garment.category.trim().is_empty() {
            return Err(EngineError::InvalidInput(format!(
                "item {} ('{}') has no category",
                idx, garment.id
            )));
        }
    }
    Ok(())
}

/// Parse an inventory payload
///
/// The payload must be a JSON array of garment objects. Anything else
/// (object, string, null) is rejected rather than coerced.
pub fn parse_inventory_json(payload: &str) -> Result<Vec<Garment>> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    let items = value.as_array().ok_or_else(|| {
        EngineError::InvalidInput("inventory must be a JSON array".to_string())
    })?;

    let mut inventory = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        if !item.is_object() {
            return Err(EngineError::InvalidInput(format!(
                "item {} is not an object",
                idx
            )));
        }
        match item.get("category") {
            Some(serde_json::Value::String(_)) => {}
            _ => {
                return Err(EngineError::InvalidInput(format!(
                    "item {} has no category",
                    idx
                )))
            }
        }
        let garment: Garment = serde_json::from_value(item.clone()).map_err(|e| {
            EngineError::InvalidInput(format!("item {} is malformed: {}", idx, e))
        })?;
        inventory.push(garment);
    }

    validate_inventory(&inventory)?;
    Ok(inventory)
}

/// Tabular inventory loader
///
/// Columns: `id`, `category` (required, non-null); `color`, `material`,
/// `season`, `occasion`, `favorite`, `times_worn` (optional).
pub struct WardrobeData;

impl WardrobeData {
    /// Load inventory from CSV
    pub fn load_csv(path: &Path) -> Result<Vec<Garment>> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.into()))?
            .finish()?;
        Self::from_dataframe(&df)
    }

    /// Load inventory from Parquet
    pub fn load_parquet(path: &Path) -> Result<Vec<Garment>> {
        let path_str = path.to_string_lossy().to_string();
        let df = LazyFrame::scan_parquet(path_str.as_str(), Default::default())?.collect()?;
        Self::from_dataframe(&df)
    }

    /// Convert inventory rows into garments
    pub fn from_dataframe(df: &DataFrame) -> Result<Vec<Garment>> {
        let ids = df.column("id")?.cast(&DataType::String)?;
        let ids = ids.str()?;
        let categories = df.column("category")?.cast(&DataType::String)?;
        let categories = categories.str()?;

        let color = Self::optional_str(df, "color")?;
        let material = Self::optional_str(df, "material")?;
        let season = Self::optional_str(df, "season")?;
        let occasion = Self::optional_str(df, "occasion")?;

        let favorite = match df.column("favorite") {
            Ok(col) => Some(col.cast(&DataType::Boolean)?),
            Err(_) => None,
        };
        let favorite = match &favorite {
            Some(col) => Some(col.bool()?),
            None => None,
        };

        let times_worn = match df.column("times_worn") {
            Ok(col) => Some(col.cast(&DataType::Int64)?),
            Err(_) => None,
        };
        let times_worn = match &times_worn {
            Some(col) => Some(col.i64()?),
            None => None,
        };

        let mut inventory = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let category = categories.get(idx).ok_or_else(|| {
                EngineError::InvalidInput(format!("row {} has no category", idx))
            })?;
            let id = ids
                .get(idx)
                .ok_or_else(|| EngineError::InvalidInput(format!("row {} has no id", idx)))?
                .to_string();

            let text = |col: &Option<Column>| -> Option<String> {
                col.as_ref()
                    .and_then(|c| c.str().ok())
                    .and_then(|ca| ca.get(idx))
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };

            inventory.push(Garment {
                id,
                category: category.to_string(),
                color: text(&color),
                material: text(&material),
                season: text(&season),
                occasion: text(&occasion),
                favorite: favorite.and_then(|ca| ca.get(idx)).unwrap_or(false),
                times_worn: times_worn
                    .and_then(|ca| ca.get(idx))
                    .map(|n| n.clamp(0, u32::MAX as i64) as u32)
                    .unwrap_or(0),
            });
        }

        validate_inventory(&inventory)?;
        Ok(inventory)
    }

    fn optional_str(df: &DataFrame, name: &str) -> Result<Option<Column>> {
        match df.column(name) {
            Ok(col) => Ok(Some(col.cast(&DataType::String)?)),
            Err(_) => Ok(None),
        }
    }
}

/// Load an inventory file, choosing the reader from the extension
pub fn load_inventory(path: &Path) -> Result<Vec<Garment>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "json" => {
            let payload = std::fs::read_to_string(path)?;
            parse_inventory_json(&payload)
        }
        "csv" => WardrobeData::load_csv(path),
        "parquet" => WardrobeData::load_parquet(path),
        other => Err(EngineError::InvalidInput(format!(
            "unsupported inventory format '{}' ({:?})",
            other, path
        ))),
    }
}
