//! Calculation modules for farm yield and economics
//!
//! - `plant_yield`: environment-adjusted yield of a single plant
//! - `crop_yield`: per-entry and collection yield totals
//! - `economics`: costs, revenue and profit

pub mod plant_yield;
pub mod crop_yield;
pub mod economics;

pub use plant_yield::{yield_for_plant, collect_multipliers, MultiplierSeq};
pub use crop_yield::{yield_for_crop, total_yield};
pub use economics::{costs_for_crop, revenue_for_crop, profit_for_crop, total_profit};
