//! Farm Integration Tests
//!
//! Reference farm fixtures run end to end: legacy JSON records are ingested,
//! normalized and fed through every calculation.

use approx::assert_relative_eq;
use farm_yield_rust::*;
use serde_json::{json, Value};

fn entry(value: Value) -> CropEntry {
    serde_json::from_value(value).expect("valid crop record")
}

fn selection(value: Value) -> EnvironmentSelection {
    serde_json::from_value(value).expect("valid environment")
}

fn corn_factors() -> Value {
    json!({
        "sun": { "low": -50, "medium": 100, "high": 50 },
        "wind": { "low": 100, "medium": -30, "high": -60 },
        "soil": { "clay": 30 }
    })
}

fn low_sun() -> EnvironmentSelection {
    selection(json!({ "sun": "low", "wind": "medium", "soil": "clay" }))
}

#[test]
fn test_yield_for_plant_without_environment_factors() {
    let plant: Plant = serde_json::from_value(json!({ "name": "magic beans", "yield": 30 })).unwrap();
    assert_eq!(yield_for_plant(&plant, None), 30.0);
}

#[test]
fn test_yield_for_plant_with_environment_factors() {
    let corn: Plant = serde_json::from_value(json!({
        "name": "corn",
        "yield": 30,
        "factors": {
            "sun": { "low": -50, "medium": 100, "high": 50 },
            "wind": { "low": 100, "medium": -30, "high": -60 },
            "soil": { "clay": 30, "silty": -10 }
        }
    }))
    .unwrap();

    let env = selection(json!({ "sun": "low", "wind": "medium", "soil": "silty" }));
    assert_relative_eq!(yield_for_plant(&corn, Some(&env)), 9.45, epsilon = 1e-9);
}

#[test]
fn test_yield_for_crop_wrapped_shape() {
    let input = entry(json!({
        "crop": { "name": "corn", "yield": 30, "factors": corn_factors() },
        "numCrops": 10
    }));
    assert_relative_eq!(yield_for_crop(&input, Some(&low_sun())), 136.5, epsilon = 1e-9);
}

#[test]
fn test_yield_for_crop_bare_shape_matches_wrapped() {
    let bare = entry(json!({ "name": "corn", "yield": 30, "numCrops": 10, "factors": corn_factors() }));
    assert_relative_eq!(yield_for_crop(&bare, Some(&low_sun())), 136.5, epsilon = 1e-9);
}

#[test]
fn test_total_yield_multiple_crops() {
    let farm = CropCollection::from_json_str(
        &json!({
            "crops": [
                { "crop": { "name": "corn", "yield": 30, "factors": corn_factors() }, "numCrops": 5 },
                {
                    "crop": {
                        "name": "pumpkin",
                        "yield": 4,
                        "factors": {
                            "sun": { "low": -30, "medium": 100, "high": 50 },
                            "wind": { "low": 100, "medium": -5, "high": -20 },
                            "soil": { "clay": 40 }
                        }
                    },
                    "numCrops": 2
                }
            ]
        })
        .to_string(),
    )
    .unwrap();

    assert_relative_eq!(total_yield(&farm, Some(&low_sun())), 75.69, epsilon = 1e-9);
}

#[test]
fn test_total_yield_with_zero_amount() {
    let farm = CropCollection::from_json_str(
        r#"{ "crops": [ { "crop": { "name": "corn", "yield": 3 }, "numCrops": 0 } ] }"#,
    )
    .unwrap();
    assert_eq!(total_yield(&farm, Some(&low_sun())), 0.0);
}

#[test]
fn test_costs_for_crop() {
    let corn = entry(json!({ "name": "corn", "yield": 0, "costs": 1, "numCrops": 20 }));
    assert_relative_eq!(costs_for_crop(&corn).unwrap(), 20.0, epsilon = 1e-12);
}

#[test]
fn test_revenue_and_profit_for_crop() {
    let corn = entry(json!({
        "name": "corn",
        "yield": 30,
        "costs": 1,
        "revenue": 2,
        "numCrops": 15,
        "factors": corn_factors()
    }));

    assert_relative_eq!(revenue_for_crop(&corn, Some(&low_sun())).unwrap(), 409.5, epsilon = 1e-9);
    assert_relative_eq!(profit_for_crop(&corn, Some(&low_sun())).unwrap(), 394.5, epsilon = 1e-9);
}

#[test]
fn test_revenue_beside_num_crops_in_wrapper() {
    let corn = entry(json!({
        "crop": { "name": "corn", "yield": 30, "factors": corn_factors() },
        "numCrops": 15,
        "revenue": 2
    }));
    assert_relative_eq!(revenue_for_crop(&corn, Some(&low_sun())).unwrap(), 409.5, epsilon = 1e-9);
}

fn profit_farm() -> CropCollection {
    CropCollection::from_json_str(
        &json!({
            "crops": [
                {
                    "crop": {
                        "name": "corn",
                        "yield": 3,
                        "costs": 1,
                        "revenue": 2,
                        "factors": {
                            "sun": { "low": -50, "medium": 100, "high": 50 },
                            "wind": { "low": 100, "medium": -30, "high": -60 },
                            "soil": { "clay": 100 }
                        }
                    },
                    "numCrops": 20
                },
                {
                    "crop": {
                        "name": "pumpkin",
                        "yield": 4,
                        "costs": 2,
                        "revenue": 5,
                        "factors": {
                            "sun": { "low": -30, "medium": 100, "high": 50 },
                            "wind": { "low": 100, "medium": -5, "high": -20 },
                            "soil": { "clay": 100, "silty": -10, "sandy": "none" },
                            "happyThoughts": { "many": 100, "some": 15, "few": 5 }
                        }
                    },
                    "numCrops": 15
                }
            ]
        })
        .to_string(),
    )
    .unwrap()
}

#[test]
fn test_total_profit_multiple_crops() {
    let farm = profit_farm();
    let before = farm.clone();
    let env = selection(json!({ "sun": "medium", "wind": "low", "soil": "clay", "happyThoughts": "many" }));

    assert_relative_eq!(total_profit(&farm, Some(&env)).unwrap(), 5710.0, epsilon = 1e-9);

    // Caller data is left untouched
    assert_eq!(farm, before);
}

#[test]
fn test_disabled_soil_condition_is_skipped() {
    let farm = profit_farm();
    let env = selection(json!({ "soil": "sandy" }));

    let pumpkin = &farm.crops[1];
    let result = yield_for_plant(&pumpkin.plant, Some(&env));
    assert!(!result.is_nan());
    assert_eq!(result, 4.0);
}

#[test]
fn test_unmatched_selection_keeps_base_yield() {
    let farm = profit_farm();
    let env = selection(json!({ "sun": "eclipse", "wind": "none", "happyThoughts": "dreadful" }));

    for entry in &farm.crops {
        assert_eq!(yield_for_plant(&entry.plant, Some(&env)), entry.plant.base_yield);
    }
}

#[test]
fn test_report_matches_totals() {
    let farm = profit_farm();
    let env = selection(json!({ "sun": "medium", "wind": "low", "soil": "clay", "happyThoughts": "many" }));

    let report = FarmReport::build(&farm, Some(&env));
    assert_eq!(report.crops.len(), 2);
    assert_relative_eq!(report.crops[0].profit.unwrap(), 940.0, epsilon = 1e-9);
    assert_relative_eq!(report.crops[1].profit.unwrap(), 4770.0, epsilon = 1e-9);
    assert_relative_eq!(report.total_profit.unwrap(), 5710.0, epsilon = 1e-9);
    assert_relative_eq!(report.total_yield, total_yield(&farm, Some(&env)), epsilon = 1e-12);
}

#[test]
fn test_determinism() {
    let farm = profit_farm();
    let env = low_sun();
    let first = (total_yield(&farm, Some(&env)), total_profit(&farm, Some(&env)).unwrap());
    let second = (total_yield(&farm, Some(&env)), total_profit(&farm, Some(&env)).unwrap());
    assert_eq!(first, second);
}
