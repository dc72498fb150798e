//! Farm Report - per-crop breakdown plus farm-wide totals
//!
//! Collects every figure the calculations produce for one farm under one
//! environment, for callers that want all numbers at once.

use crate::calculations::*;
use crate::data::{CropCollection, CropEntry, EnvironmentSelection};
use serde::Serialize;
use std::fmt;

/// Figures for a single crop entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropBreakdown {
    pub name: String,
    pub num_crops: u32,
    /// Adjusted yield of one plant
    pub yield_per_plant: f64,
    pub total_yield: f64,
    /// `None` when the plant has no revenue
    pub revenue: Option<f64>,
    /// `None` when the plant has no costs
    pub costs: Option<f64>,
    /// `None` unless both revenue and costs are known
    pub profit: Option<f64>,
}

impl CropBreakdown {
    pub fn compute(entry: &CropEntry, selection: Option<&EnvironmentSelection>) -> Self {
        let revenue = revenue_for_crop(entry, selection).ok();
        let costs = costs_for_crop(entry).ok();

        CropBreakdown {
            name: entry.plant.name.clone(),
            num_crops: entry.num_crops,
            yield_per_plant: yield_for_plant(&entry.plant, selection),
            total_yield: yield_for_crop(entry, selection),
            revenue,
            costs,
            profit: revenue.zip(costs).map(|(r, c)| r - c),
        }
    }
}

/// Complete report for one farm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmReport {
    pub crops: Vec<CropBreakdown>,
    pub total_yield: f64,
    /// `None` when any crop lacks revenue or costs
    pub total_profit: Option<f64>,
}

impl FarmReport {
    /// Build a report for every entry in the collection
    pub fn build(collection: &CropCollection, selection: Option<&EnvironmentSelection>) -> Self {
        let crops = collection
            .crops
            .iter()
            .map(|entry| CropBreakdown::compute(entry, selection))
            .collect();

        let total_profit = match total_profit(collection, selection) {
            Ok(profit) => Some(profit),
            Err(err) => {
                tracing::warn!("Total profit unavailable: {}", err);
                None
            }
        };

        FarmReport {
            crops,
            total_yield: total_yield(collection, selection),
            total_profit,
        }
    }
}

fn fmt_money(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

impl fmt::Display for FarmReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<16} {:>8} {:>10} {:>12} {:>12} {:>10} {:>12}",
            "Crop", "Count", "Yield/pl", "Yield", "Revenue", "Costs", "Profit"
        )?;
        writeln!(f, "{}", "-".repeat(86))?;

        for crop in &self.crops {
            writeln!(
                f,
                "{:<16} {:>8} {:>10.2} {:>12.2} {:>12} {:>10} {:>12}",
                crop.name,
                crop.num_crops,
                crop.yield_per_plant,
                crop.total_yield,
                fmt_money(crop.revenue),
                fmt_money(crop.costs),
                fmt_money(crop.profit),
            )?;
        }

        writeln!(f, "{}", "-".repeat(86))?;
        writeln!(f, "Total yield:  {:.2}", self.total_yield)?;
        write!(f, "Total profit: {}", fmt_money(self.total_profit))
    }
}
