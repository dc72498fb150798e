//! CROP AND FARM YIELD
//!
//! Scales single-plant yield by the number of plants grown, per entry and
//! summed across a collection.

use super::plant_yield::yield_for_plant;
use crate::data::{CropCollection, CropEntry, EnvironmentSelection};

/// Yield of one crop entry: adjusted plant yield × `num_crops`
pub fn yield_for_crop(entry: &CropEntry, selection: Option<&EnvironmentSelection>) -> f64 {
    yield_for_plant(&entry.plant, selection) * f64::from(entry.num_crops)
}

/// Summed yield of every entry in the collection.
///
/// An empty collection yields `0.0`.
pub fn total_yield(collection: &CropCollection, selection: Option<&EnvironmentSelection>) -> f64 {
    let total: f64 = collection
        .crops
        .iter()
        .map(|entry| yield_for_crop(entry, selection))
        .sum();

    tracing::debug!("Total yield over {} crops: {}", collection.len(), total);
    total
}
