//! Legacy Record Ingestion
//!
//! Farm definitions arrive as JSON in two interchangeable crop shapes:
//!
//! ```json
//! { "crop": { "name": "corn", "yield": 30 }, "numCrops": 10 }
//! { "name": "corn", "yield": 30, "numCrops": 10 }
//! ```
//!
//! Both are normalized into the canonical `CropEntry { plant, num_crops }` here,
//! and the `crop` key is checked once, at ingestion. Condition deltas
//! may also be the string `"none"`, which becomes a disabled condition.

use crate::data::{ConditionDelta, CropCollection, CropEntry, EnvironmentSelection, Plant};
use crate::error::IngestError;
use anyhow::{Context, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Marker for a condition that must not contribute a multiplier
pub const DISABLED_MARKER: &str = "none";

/// Crop record in either accepted legacy shape
#[derive(Debug, Clone)]
pub enum LegacyCropRecord {
    /// `{ crop, numCrops }`, optionally with prices alongside `numCrops`
    Wrapped {
        crop: Plant,
        num_crops: u32,
        revenue: Option<f64>,
        costs: Option<f64>,
    },
    /// Plant record carrying its own `numCrops`
    Bare { plant: Plant, num_crops: u32 },
}

#[derive(Deserialize)]
struct WrappedFields {
    crop: Plant,
    #[serde(rename = "numCrops")]
    num_crops: u32,
    #[serde(default)]
    revenue: Option<f64>,
    #[serde(default)]
    costs: Option<f64>,
}

#[derive(Deserialize)]
struct BareFields {
    #[serde(flatten)]
    plant: Plant,
    #[serde(rename = "numCrops")]
    num_crops: u32,
}

impl<'de> Deserialize<'de> for LegacyCropRecord {
    /// The shape is chosen by the presence of a `crop` key, so errors inside
    /// the chosen shape (e.g. a bad delta) surface as-is.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;

        if fields.contains_key("crop") {
            let WrappedFields { crop, num_crops, revenue, costs } =
                serde_json::from_value(Value::Object(fields)).map_err(de::Error::custom)?;
            Ok(LegacyCropRecord::Wrapped { crop, num_crops, revenue, costs })
        } else {
            let BareFields { plant, num_crops } =
                serde_json::from_value(Value::Object(fields)).map_err(de::Error::custom)?;
            Ok(LegacyCropRecord::Bare { plant, num_crops })
        }
    }
}

impl From<LegacyCropRecord> for CropEntry {
    fn from(record: LegacyCropRecord) -> Self {
        match record {
            LegacyCropRecord::Wrapped { mut crop, num_crops, revenue, costs } => {
                // Prices next to numCrops win over the nested plant's
                if revenue.is_some() {
                    crop.revenue = revenue;
                }
                if costs.is_some() {
                    crop.costs = costs;
                }
                CropEntry::new(crop, num_crops)
            }
            LegacyCropRecord::Bare { plant, num_crops } => CropEntry::new(plant, num_crops),
        }
    }
}

impl CropEntry {
    /// Normalize a legacy record into a canonical entry
    pub fn from_legacy(record: LegacyCropRecord) -> Self {
        record.into()
    }

    /// Parse one crop record (either shape) from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| "Failed to parse crop record JSON")
    }
}

impl CropCollection {
    /// Parse a `{ "crops": [...] }` farm definition from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| "Failed to parse crop collection JSON")
    }

    /// Load a farm definition from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crop collection file: {:?}", path))?;

        let collection = Self::from_json_str(&contents)?;
        tracing::info!("Loaded {} crop entries from {:?}", collection.len(), path);

        Ok(collection)
    }
}

impl EnvironmentSelection {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| "Failed to parse environment selection JSON")
    }

    /// Load an environment selection from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read environment file: {:?}", path))?;

        Self::from_json_str(&contents)
    }
}

/// Interpret a textual delta; only the disabled marker is accepted
pub fn parse_delta_marker(value: &str) -> std::result::Result<ConditionDelta, IngestError> {
    if value == DISABLED_MARKER {
        Ok(ConditionDelta::disabled())
    } else {
        Err(IngestError::InvalidDelta { value: value.to_string() })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDelta {
    Percent(i32),
    Marker(String),
}

impl<'de> Deserialize<'de> for ConditionDelta {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match RawDelta::deserialize(deserializer)? {
            RawDelta::Percent(delta) => Ok(ConditionDelta::percent(delta)),
            RawDelta::Marker(value) => parse_delta_marker(&value).map_err(de::Error::custom),
        }
    }
}

impl Serialize for ConditionDelta {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Some(delta) => serializer.serialize_i32(delta),
            None => serializer.serialize_str(DISABLED_MARKER),
        }
    }
}
