//! SINGLE-PLANT YIELD
//!
//! Adjusts a plant's base yield by the conditions selected for each factor
//! category. Every matching condition contributes a multiplier
//! `|(delta + 100) / 100|`; the base yield seeds the product and the result is
//! rounded to two decimals.
//!
//! Categories the plant has no table for, labels the table does not contain,
//! and disabled ("none") conditions are skipped without error.

use crate::data::{EnvironmentSelection, FactorKind, FactorTable, Plant};
use crate::utils::round_to_hundredths;
use smallvec::SmallVec;

/// Seed plus one multiplier per factor category
pub type MultiplierSeq = SmallVec<[f64; 5]>;

/// Yield of one plant under the given environment
pub fn yield_for_plant(plant: &Plant, selection: Option<&EnvironmentSelection>) -> f64 {
    let (Some(factors), Some(selection)) = (plant.factors.as_ref(), selection) else {
        return plant.base_yield;
    };

    let multipliers = collect_multipliers(plant, factors, selection);
    let product: f64 = multipliers.iter().product();

    round_to_hundredths(product)
}

/// Build the multiplier sequence: base yield first, then sun, wind, soil and
/// happy thoughts for each condition that matches.
pub fn collect_multipliers(
    plant: &Plant,
    factors: &FactorTable,
    selection: &EnvironmentSelection,
) -> MultiplierSeq {
    let mut multipliers = MultiplierSeq::new();
    multipliers.push(plant.base_yield);

    for kind in FactorKind::ALL {
        let (Some(conditions), Some(label)) = (factors.category(kind), selection.label(kind)) else {
            continue;
        };

        match conditions.get(label).map(|delta| delta.multiplier()) {
            Some(Some(multiplier)) => {
                tracing::trace!(
                    "{}: {}={} → ×{}",
                    plant.name,
                    kind.as_str(),
                    label,
                    multiplier
                );
                multipliers.push(multiplier);
            }
            Some(None) => {
                tracing::debug!("{}: {} condition '{}' is disabled", plant.name, kind.as_str(), label);
            }
            None => {
                tracing::debug!("{}: no {} condition '{}'", plant.name, kind.as_str(), label);
            }
        }
    }

    multipliers
}
