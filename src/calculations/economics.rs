//! CROP ECONOMICS
//!
//! Cost, revenue and profit for single crop entries and whole collections.
//!
//! - Costs:   `costs × num_crops` (not affected by the environment)
//! - Revenue: `yield_for_crop × revenue`
//! - Profit:  `revenue - costs`
//!
//! Each entry already carries its quantity next to its plant, so collection
//! totals are computed straight from the caller's entries without copying or
//! touching them.

use super::crop_yield::yield_for_crop;
use crate::data::{CropCollection, CropEntry, EnvironmentSelection};
use crate::error::CalcError;

/// Total cost of growing one crop entry
pub fn costs_for_crop(entry: &CropEntry) -> Result<f64, CalcError> {
    let costs = entry.plant.costs.ok_or_else(|| CalcError::MissingCosts {
        crop: entry.plant.name.clone(),
    })?;

    Ok(costs * f64::from(entry.num_crops))
}

/// Sales revenue of one crop entry under the given environment
pub fn revenue_for_crop(
    entry: &CropEntry,
    selection: Option<&EnvironmentSelection>,
) -> Result<f64, CalcError> {
    let revenue = entry.plant.revenue.ok_or_else(|| CalcError::MissingRevenue {
        crop: entry.plant.name.clone(),
    })?;

    Ok(yield_for_crop(entry, selection) * revenue)
}

/// Revenue minus costs for one crop entry
pub fn profit_for_crop(
    entry: &CropEntry,
    selection: Option<&EnvironmentSelection>,
) -> Result<f64, CalcError> {
    Ok(revenue_for_crop(entry, selection)? - costs_for_crop(entry)?)
}

/// Summed profit of every entry in the collection.
///
/// Fails on the first entry missing costs or revenue. An empty collection
/// yields `0.0`.
pub fn total_profit(
    collection: &CropCollection,
    selection: Option<&EnvironmentSelection>,
) -> Result<f64, CalcError> {
    let mut total = 0.0;
    for entry in &collection.crops {
        total += profit_for_crop(entry, selection)?;
    }

    tracing::debug!("Total profit over {} crops: {}", collection.len(), total);
    Ok(total)
}
