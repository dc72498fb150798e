//! Crop and Environment Data Model
//!
//! Plain records describing a plant's per-unit economics, its sensitivity to
//! environmental conditions, and the quantity planted. Records are built by the
//! caller (directly or through `crate::ingest`) and only ever read by the
//! calculation functions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Environmental factor categories, in the order multipliers are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorKind {
    Sun,
    Wind,
    Soil,
    HappyThoughts,
}

impl FactorKind {
    /// Every category in evaluation order
    pub const ALL: [FactorKind; 4] = [
        FactorKind::Sun,
        FactorKind::Wind,
        FactorKind::Soil,
        FactorKind::HappyThoughts,
    ];

    /// Name used in JSON records
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorKind::Sun => "sun",
            FactorKind::Wind => "wind",
            FactorKind::Soil => "soil",
            FactorKind::HappyThoughts => "happyThoughts",
        }
    }
}

/// Signed percentage change applied to yield under one condition.
///
/// `ConditionDelta(Some(v))` scales yield by `|(v + 100) / 100|`.
/// `ConditionDelta(None)` marks a disabled condition (written `"none"` in JSON)
/// and contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionDelta(pub Option<i32>);

impl ConditionDelta {
    pub fn percent(delta: i32) -> Self {
        ConditionDelta(Some(delta))
    }

    pub fn disabled() -> Self {
        ConditionDelta(None)
    }

    /// Yield multiplier for this condition, `None` when disabled.
    ///
    /// The absolute value keeps a delta below -100 from flipping the sign.
    pub fn multiplier(&self) -> Option<f64> {
        self.0.map(|delta| ((f64::from(delta) + 100.0) / 100.0).abs())
    }
}

/// Condition label (e.g. "low", "clay") → percentage delta
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionMap {
    conditions: FxHashMap<String, ConditionDelta>,
}

impl ConditionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, label: &str, delta: ConditionDelta) -> Self {
        self.conditions.insert(label.to_string(), delta);
        self
    }

    /// Delta for an exact label match
    pub fn get(&self, label: &str) -> Option<ConditionDelta> {
        self.conditions.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, i32)> for ConditionMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, i32)>>(iter: I) -> Self {
        let conditions = iter
            .into_iter()
            .map(|(label, delta)| (label.to_string(), ConditionDelta::percent(delta)))
            .collect();
        ConditionMap { conditions }
    }
}

/// Per-category condition maps for one plant. Absent categories are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sun: Option<ConditionMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<ConditionMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil: Option<ConditionMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub happy_thoughts: Option<ConditionMap>,
}

impl FactorTable {
    pub fn category(&self, kind: FactorKind) -> Option<&ConditionMap> {
        match kind {
            FactorKind::Sun => self.sun.as_ref(),
            FactorKind::Wind => self.wind.as_ref(),
            FactorKind::Soil => self.soil.as_ref(),
            FactorKind::HappyThoughts => self.happy_thoughts.as_ref(),
        }
    }

    /// Builder-style category setter
    pub fn with(mut self, kind: FactorKind, conditions: ConditionMap) -> Self {
        let slot = match kind {
            FactorKind::Sun => &mut self.sun,
            FactorKind::Wind => &mut self.wind,
            FactorKind::Soil => &mut self.soil,
            FactorKind::HappyThoughts => &mut self.happy_thoughts,
        };
        *slot = Some(conditions);
        self
    }
}

/// Condition chosen for each category in one computation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sun: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub happy_thoughts: Option<String>,
}

impl EnvironmentSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style selection
    pub fn with(mut self, kind: FactorKind, label: &str) -> Self {
        let slot = match kind {
            FactorKind::Sun => &mut self.sun,
            FactorKind::Wind => &mut self.wind,
            FactorKind::Soil => &mut self.soil,
            FactorKind::HappyThoughts => &mut self.happy_thoughts,
        };
        *slot = Some(label.to_string());
        self
    }

    pub fn label(&self, kind: FactorKind) -> Option<&str> {
        match kind {
            FactorKind::Sun => self.sun.as_deref(),
            FactorKind::Wind => self.wind.as_deref(),
            FactorKind::Soil => self.soil.as_deref(),
            FactorKind::HappyThoughts => self.happy_thoughts.as_deref(),
        }
    }
}

/// Baseline characteristics of one crop species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,

    /// Yield per plant before environmental adjustment
    #[serde(rename = "yield")]
    pub base_yield: f64,

    /// Cost per plant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costs: Option<f64>,

    /// Sale price per unit of yield
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factors: Option<FactorTable>,
}

impl Plant {
    pub fn new(name: &str, base_yield: f64) -> Self {
        Plant {
            name: name.to_string(),
            base_yield,
            costs: None,
            revenue: None,
            factors: None,
        }
    }

    pub fn with_costs(mut self, costs: f64) -> Self {
        self.costs = Some(costs);
        self
    }

    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn with_factors(mut self, factors: FactorTable) -> Self {
        self.factors = Some(factors);
        self
    }
}

/// A plant together with how many of it are grown.
///
/// Deserialization accepts both legacy record shapes (see `crate::ingest`);
/// serialization always writes the `{ "crop": ..., "numCrops": ... }` wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "crate::ingest::LegacyCropRecord")]
pub struct CropEntry {
    #[serde(rename = "crop")]
    pub plant: Plant,
    #[serde(rename = "numCrops")]
    pub num_crops: u32,
}

impl CropEntry {
    pub fn new(plant: Plant, num_crops: u32) -> Self {
        CropEntry { plant, num_crops }
    }
}

/// Ordered set of crop entries making up a farm
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CropCollection {
    pub crops: Vec<CropEntry>,
}

impl CropCollection {
    pub fn new(crops: Vec<CropEntry>) -> Self {
        CropCollection { crops }
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}
