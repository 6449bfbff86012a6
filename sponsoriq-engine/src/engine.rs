//! Valuation pipeline orchestration.
//!
//! One invocation walks the full pipeline: resolve each asset selection
//! against the catalogs, aggregate totals, look up the market multiplier,
//! score the Signal Boost, blend the final figure, and derive the
//! attention metrics. The computation is total: degenerate inputs map to
//! defined zero/neutral outputs, never errors.

use std::collections::HashSet;

use crate::catalog::{asset_by_id, AssetDefinition, Purpose};
use crate::exposure::tier_by_id;
use crate::market::multiplier_for;
use crate::metrics::{calculate_cpha, calculate_iqi, round1, round2};
use crate::signal::{compute_signal_boost, SignalInputs};
use crate::types::{
    AssetBreakdown, AssetSelection, EventFacts, PurposeTotals, ValuationInputs, ValuationResult,
};

/// The valuation engine.
///
/// Stateless: every call to [`ValuationEngine::compute`] re-derives the
/// complete result from the input snapshot and the static catalogs.
/// Callers maintain the selection-set invariant (at most one selection
/// per catalog id); the engine does not re-validate input bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuationEngine;

/// One selection resolved against the catalogs, unrounded.
struct ResolvedSelection {
    asset: &'static AssetDefinition,
    quantity: u32,
    impressions: f64,
    value: f64,
    exposure_seconds: f64,
}

/// Unrounded per-purpose accumulator.
#[derive(Default)]
struct PurposeAccumulator {
    see: f64,
    engage: f64,
    r#try: f64,
    act: f64,
}

impl PurposeAccumulator {
    fn add(&mut self, purpose: Purpose, value: f64) {
        match purpose {
            Purpose::See => self.see += value,
            Purpose::Engage => self.engage += value,
            Purpose::Try => self.r#try += value,
            Purpose::Act => self.act += value,
        }
    }

    fn rounded(&self) -> PurposeTotals {
        PurposeTotals {
            see: self.see.round() as u64,
            engage: self.engage.round() as u64,
            r#try: self.r#try.round() as u64,
            act: self.act.round() as u64,
        }
    }
}

impl ValuationEngine {
    /// Create a new valuation engine.
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline over one input snapshot.
    pub fn compute(&self, inputs: &ValuationInputs) -> ValuationResult {
        let event = &inputs.event;
        let fill_rate = event.fill_rate();

        // Resolve and aggregate unplugged assets
        let mut asset_breakdowns = Vec::with_capacity(inputs.assets.len());
        let mut unplugged_total = 0.0;
        let mut total_exposure_seconds = 0.0;
        let mut total_impressions = 0.0;
        let mut purpose_acc = PurposeAccumulator::default();
        let mut active_purposes: HashSet<Purpose> = HashSet::new();

        for selection in &inputs.assets {
            let Some(resolved) = resolve_selection(event, selection) else {
                continue;
            };

            asset_breakdowns.push(AssetBreakdown {
                asset_id: resolved.asset.id.to_string(),
                name: resolved.asset.name.to_string(),
                purpose: resolved.asset.purpose,
                quantity: resolved.quantity,
                impressions: resolved.impressions.round() as u64,
                value: resolved.value.round() as u64,
                exposure_seconds: resolved.exposure_seconds,
            });

            unplugged_total += resolved.value;
            total_exposure_seconds += resolved.exposure_seconds;
            total_impressions += resolved.impressions;
            purpose_acc.add(resolved.asset.purpose, resolved.value);
            active_purposes.insert(resolved.asset.purpose);
        }

        // Plugged media stream: recognized extension point, zero in the
        // current scope. The blender still adds it so the formula is closed.
        let plugged_total = 0.0;

        let base_event_value = unplugged_total + plugged_total;

        // Market expansion
        let dma_multiplier = multiplier_for(&inputs.market.dma);
        let market_adjusted = base_event_value * dma_multiplier;

        // Signal Boost. The exclusivity flags and earned-media flag come
        // from the rights and plugged steps once those streams activate.
        let purpose_count = active_purposes.len();
        let signal_boost = compute_signal_boost(&SignalInputs {
            fill_rate,
            has_waitlist: event.has_waitlist,
            edition_number: event.edition_number,
            has_category_exclusive: false,
            has_title_presenting: false,
            total_sponsors: event.total_sponsors,
            purpose_count,
            plugged_total,
            unplugged_total,
            has_earned_media: false,
        });

        // Final blend: the headline figure rounds exactly once, here.
        let final_value = (market_adjusted * signal_boost.total).round() as u64;

        // Attention metrics
        let total_attention_hours = total_exposure_seconds / 3600.0;
        let avg_exposure_seconds = if total_impressions > 0.0 {
            total_exposure_seconds / total_impressions
        } else {
            0.0
        };
        let iqi = calculate_iqi(avg_exposure_seconds);
        let cpha = calculate_cpha(final_value as f64, total_attention_hours);

        ValuationResult {
            base_event_value: base_event_value.round() as u64,
            signal_boost,
            final_value,
            unplugged_total: unplugged_total.round() as u64,
            plugged_total: plugged_total.round() as u64,
            tickets_total: 0,
            rights_total: 0,
            dma_multiplier,
            iqi,
            cpha: round2(cpha),
            total_attention_hours: round1(total_attention_hours),
            total_impressions: total_impressions.round() as u64,
            asset_breakdowns,
            purpose_totals: purpose_acc.rounded(),
            purpose_count,
            fill_rate: round1(fill_rate * 100.0),
        }
    }
}

/// Compute a valuation with the default engine.
pub fn compute_valuation(inputs: &ValuationInputs) -> ValuationResult {
    ValuationEngine::new().compute(inputs)
}

/// Resolve one selection against the catalogs.
///
/// Unknown asset or tier ids make the selection a defined no-op. A missing
/// tier choice falls back to the asset's default tier.
fn resolve_selection(event: &EventFacts, selection: &AssetSelection) -> Option<ResolvedSelection> {
    let Some(asset) = asset_by_id(&selection.asset_id) else {
        tracing::debug!(asset_id = %selection.asset_id, "Unknown asset id, selection skipped");
        return None;
    };

    let tier_id = selection
        .exposure_tier
        .as_deref()
        .unwrap_or(asset.default_exposure);
    let Some(tier) = tier_by_id(tier_id) else {
        tracing::debug!(
            asset_id = %selection.asset_id,
            tier_id = %tier_id,
            "Unknown exposure tier, selection skipped"
        );
        return None;
    };

    let quantity = selection.quantity;
    let base_impressions =
        f64::from(event.attendance) * asset.audience_pct * f64::from(quantity);

    // Flow-limited assets cannot expose more people than they can
    // physically process over the event's total hours.
    let impressions = match asset.brand_exposure_per_hour {
        Some(hourly_capacity) => {
            let max_capacity = hourly_capacity * event.total_hours() * f64::from(quantity);
            if base_impressions > max_capacity {
                tracing::debug!(
                    asset_id = %asset.id,
                    base = base_impressions,
                    cap = max_capacity,
                    "Capacity clamp applied"
                );
            }
            base_impressions.min(max_capacity)
        }
        None => base_impressions,
    };

    let value = (impressions / 1000.0) * asset.cpm * tier.multiplier;
    let exposure_seconds = impressions * tier.avg_seconds;

    Some(ResolvedSelection {
        asset,
        quantity,
        impressions,
        value,
        exposure_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MarketFacts;

    const EPS: f64 = 1e-9;

    fn make_event() -> EventFacts {
        EventFacts {
            name: "Harvest Fair".to_string(),
            venue_type: "outdoor_festival".to_string(),
            capacity: 10_000,
            attendance: 7_500,
            duration_hours: 8.0,
            event_days: 1,
            edition_number: 1,
            total_sponsors: 5,
            has_waitlist: false,
        }
    }

    fn make_inputs(assets: Vec<AssetSelection>) -> ValuationInputs {
        ValuationInputs {
            event: make_event(),
            market: MarketFacts {
                dma: "Other".to_string(),
            },
            assets,
        }
    }

    fn select(asset_id: &str, quantity: u32) -> AssetSelection {
        AssetSelection {
            asset_id: asset_id.to_string(),
            quantity,
            exposure_tier: None,
        }
    }

    #[test]
    fn test_single_see_asset_reference_case() {
        // stage_branding: cpm 1500, audience 0.80, default tier notice
        // (x1.5, 10 s). 7500 x 0.8 = 6000 impressions;
        // value = 6 x 1500 x 1.5 = 13 500; signal boost 0.96.
        let result = compute_valuation(&make_inputs(vec![select("stage_branding", 1)]));

        assert_eq!(result.asset_breakdowns.len(), 1);
        let breakdown = &result.asset_breakdowns[0];
        assert_eq!(breakdown.impressions, 6_000);
        assert_eq!(breakdown.value, 13_500);
        assert!((breakdown.exposure_seconds - 60_000.0).abs() < EPS);

        assert_eq!(result.unplugged_total, 13_500);
        assert_eq!(result.base_event_value, 13_500);
        assert!((result.dma_multiplier - 1.0).abs() < EPS);
        assert!((result.signal_boost.total - 0.96).abs() < EPS);
        assert_eq!(result.final_value, 12_960);

        assert_eq!(result.purpose_count, 1);
        assert_eq!(result.purpose_totals.see, 13_500);
        assert_eq!(result.purpose_totals.engage, 0);

        assert!((result.total_attention_hours - 16.7).abs() < EPS);
        assert_eq!(result.iqi, 200);
        assert!((result.cpha - 777.6).abs() < EPS);
        assert!((result.fill_rate - 75.0).abs() < EPS);
    }

    #[test]
    fn test_capacity_clamp_is_exact() {
        // photo_booth: audience 0.20, 60/hour, default tier interact
        // (x5.0, 120 s). Base 1500 impressions vs cap 60 x 8 = 480.
        let result = compute_valuation(&make_inputs(vec![select("photo_booth", 1)]));

        let breakdown = &result.asset_breakdowns[0];
        assert_eq!(breakdown.impressions, 480);
        assert_eq!(breakdown.value, 1_920); // 0.48 x 800 x 5
        assert!((breakdown.exposure_seconds - 57_600.0).abs() < EPS);
    }

    #[test]
    fn test_capacity_clamp_scales_with_days() {
        // Three event days triple the cap: 60 x 8 x 3 = 1440, still below
        // the 1500 base.
        let mut inputs = make_inputs(vec![select("photo_booth", 1)]);
        inputs.event.event_days = 3;
        let result = compute_valuation(&inputs);
        assert_eq!(result.asset_breakdowns[0].impressions, 1_440);
    }

    #[test]
    fn test_uncapped_asset_ignores_hours() {
        let mut inputs = make_inputs(vec![select("banner_exclusive", 1)]);
        inputs.event.duration_hours = 0.5;
        let result = compute_valuation(&inputs);
        // 7500 x 0.60 with no flow limit
        assert_eq!(result.asset_breakdowns[0].impressions, 4_500);
    }

    #[test]
    fn test_doubling_quantity_doubles_unplugged_total() {
        // Two uncapped assets with clean values: banner_exclusive 450,
        // jumbotron_led 2025.
        let single = compute_valuation(&make_inputs(vec![
            select("banner_exclusive", 1),
            select("jumbotron_led", 1),
        ]));
        let double = compute_valuation(&make_inputs(vec![
            select("banner_exclusive", 2),
            select("jumbotron_led", 2),
        ]));

        assert_eq!(single.unplugged_total, 2_475);
        assert_eq!(double.unplugged_total, 4_950);
        assert_eq!(double.total_impressions, single.total_impressions * 2);
    }

    #[test]
    fn test_unknown_asset_is_skipped() {
        let result = compute_valuation(&make_inputs(vec![
            select("blimp_flyover", 3),
            select("stage_branding", 1),
        ]));
        assert_eq!(result.asset_breakdowns.len(), 1);
        assert_eq!(result.unplugged_total, 13_500);
    }

    #[test]
    fn test_unknown_tier_is_skipped() {
        let mut selection = select("stage_branding", 1);
        selection.exposure_tier = Some("stare".to_string());
        let result = compute_valuation(&make_inputs(vec![selection]));
        assert!(result.asset_breakdowns.is_empty());
        assert_eq!(result.final_value, 0);
    }

    #[test]
    fn test_explicit_tier_overrides_default() {
        let mut selection = select("stage_branding", 1);
        selection.exposure_tier = Some("immerse".to_string());
        let result = compute_valuation(&make_inputs(vec![selection]));
        // 6 x 1500 x 15.0 instead of x1.5
        assert_eq!(result.asset_breakdowns[0].value, 135_000);
    }

    #[test]
    fn test_empty_selection_set() {
        let result = compute_valuation(&make_inputs(vec![]));
        assert_eq!(result.final_value, 0);
        assert_eq!(result.unplugged_total, 0);
        assert_eq!(result.total_impressions, 0);
        assert_eq!(result.purpose_count, 0);
        assert_eq!(result.iqi, 0);
        assert_eq!(result.cpha, 0.0);
        assert_eq!(result.total_attention_hours, 0.0);
        // Depth and amplification read an empty package
        assert_eq!(result.signal_boost.depth_label, "Surface");
        assert_eq!(result.signal_boost.amplification_label, "None");
    }

    #[test]
    fn test_market_multiplier_applied() {
        let mut inputs = make_inputs(vec![select("stage_branding", 1)]);
        inputs.market.dma = "New York".to_string();
        let result = compute_valuation(&inputs);
        assert!((result.dma_multiplier - 1.5).abs() < EPS);
        // 13 500 x 1.5 x 0.96
        assert_eq!(result.final_value, 19_440);
    }

    #[test]
    fn test_unknown_market_defaults_to_one() {
        let mut inputs = make_inputs(vec![select("stage_branding", 1)]);
        inputs.market.dma = "Duluth".to_string();
        let result = compute_valuation(&inputs);
        assert!((result.dma_multiplier - 1.0).abs() < EPS);
        assert_eq!(result.final_value, 12_960);
    }

    #[test]
    fn test_purpose_count_spans_funnel() {
        let result = compute_valuation(&make_inputs(vec![
            select("stage_branding", 1),
            select("photo_booth", 1),
            select("product_sampling", 1),
            select("lead_capture", 1),
        ]));
        assert_eq!(result.purpose_count, 4);
        assert_eq!(result.signal_boost.depth_label, "Full Funnel");
        for purpose in Purpose::ALL {
            assert!(result.purpose_totals.get(purpose) > 0);
        }
    }

    #[test]
    fn test_final_blender_round_trip() {
        // Recomputing the blend from reported parts reproduces the
        // headline figure, up to the single defined rounding step.
        let mut inputs = make_inputs(vec![
            select("stage_branding", 1),
            select("photo_booth", 2),
            select("merch_giveaways", 1),
        ]);
        inputs.market.dma = "Chicago".to_string();
        let result = compute_valuation(&inputs);

        let replayed = (result.base_event_value as f64
            * result.dma_multiplier
            * result.signal_boost.total)
            .round() as u64;
        // base_event_value is itself reported rounded; allow the one-unit
        // wobble that re-rounding a rounded base can introduce.
        assert!(replayed.abs_diff(result.final_value) <= 1);
    }

    #[test]
    fn test_determinism() {
        let inputs = make_inputs(vec![select("stage_branding", 1), select("demo_trial", 2)]);
        let a = compute_valuation(&inputs);
        let b = compute_valuation(&inputs);
        assert_eq!(a.final_value, b.final_value);
        assert_eq!(a.total_impressions, b.total_impressions);
        assert!((a.cpha - b.cpha).abs() < EPS);
    }
}
