//! Farm Yield Calculator
//!
//! Yield, revenue, cost and profit figures for crops, optionally adjusted by
//! environmental conditions (sun, wind, soil, happy thoughts).
//!
//! - `data`: crop, factor and environment records
//! - `ingest`: JSON loading and normalization of legacy crop record shapes
//! - `calculations/`: plant yield, crop/farm yield, economics
//! - `report`: per-crop breakdown with farm totals
//!
//! Every calculation is a pure function over borrowed records.

pub mod error;
pub mod utils;
pub mod data;
pub mod ingest;
pub mod calculations;
pub mod report;

// Re-export commonly used types
pub use error::{CalcError, IngestError};
pub use data::{
    ConditionDelta, ConditionMap, CropCollection, CropEntry, EnvironmentSelection, FactorKind,
    FactorTable, Plant,
};
pub use ingest::LegacyCropRecord;
pub use calculations::*;
pub use report::{CropBreakdown, FarmReport};
