//! Scenario file loading and pre-pipeline validation.
//!
//! A scenario is a JSON file with the three pipeline input records. This
//! module enforces the field-level bounds the pipeline assumes, collapses
//! duplicate asset selections (last entry wins), and raises the
//! flow-capacity advisories that are informational only.

use std::fs;
use std::path::Path;

use sponsoriq_common::error::{Error, Result};
use sponsoriq_common::validation::Validate;
use sponsoriq_engine::{asset_by_id, EventFacts, ValuationInputs};

/// A validated scenario, ready for the pipeline.
#[derive(Debug)]
pub struct LoadedScenario {
    pub inputs: ValuationInputs,
    /// Informational capacity warnings; never fatal
    pub advisories: Vec<String>,
}

/// Load, normalize, and validate a scenario file.
pub fn load_scenario(path: &Path) -> Result<LoadedScenario> {
    let raw = fs::read_to_string(path)?;
    let mut inputs: ValuationInputs = serde_json::from_str(&raw)?;

    dedup_selections(&mut inputs);

    inputs
        .validate()
        .map_err(|e| Error::InvalidInput(e.to_string()))?;

    let advisories = capacity_advisories(&inputs);

    Ok(LoadedScenario { inputs, advisories })
}

/// Collapse duplicate asset ids: a later entry replaces the earlier one
/// in place, keeping its original position.
fn dedup_selections(inputs: &mut ValuationInputs) {
    let mut kept: Vec<sponsoriq_engine::AssetSelection> = Vec::with_capacity(inputs.assets.len());
    for selection in inputs.assets.drain(..) {
        if let Some(existing) = kept.iter_mut().find(|s| s.asset_id == selection.asset_id) {
            *existing = selection;
        } else {
            kept.push(selection);
        }
    }
    inputs.assets = kept;
}

/// Flow-capacity advisories for selections whose physical throughput
/// falls well short of the audience the reach math implies.
///
/// The threshold is half the expected interactions; below it the asset
/// will clamp hard and the sponsor should know. Purely informational,
/// the valuation itself applies the exact clamp.
fn capacity_advisories(inputs: &ValuationInputs) -> Vec<String> {
    let event: &EventFacts = &inputs.event;
    let mut advisories = Vec::new();

    for selection in &inputs.assets {
        let Some(asset) = asset_by_id(&selection.asset_id) else {
            continue;
        };
        let Some(hourly) = asset.brand_exposure_per_hour else {
            continue;
        };

        let quantity = f64::from(selection.quantity);
        let expected = f64::from(event.attendance) * asset.audience_pct * quantity;
        let max_capacity = hourly * event.total_hours() * quantity;

        if max_capacity < expected * 0.5 {
            advisories.push(format!(
                "{}: capacity {} max vs {} expected",
                asset.name,
                max_capacity.round() as u64,
                expected.round() as u64
            ));
        }
    }

    advisories
}
