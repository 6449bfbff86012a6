//! Valuation pipeline input and output records.
//!
//! Inputs are caller-supplied snapshots; the engine re-computes the whole
//! result from scratch on every invocation. Monetary output fields are
//! rounded to whole currency units at the reporting boundary; intermediate
//! accumulation stays unrounded.

use serde::{Deserialize, Serialize};

use crate::catalog::Purpose;
use crate::signal::SignalBoostResult;

// ============================================================================
// Input Records
// ============================================================================

/// Facts about the event being valued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFacts {
    /// Event name (opaque label, not used in computation)
    #[serde(default)]
    pub name: String,
    /// Venue category (descriptive only, not used in computation)
    #[serde(default)]
    pub venue_type: String,
    /// Venue capacity
    pub capacity: u32,
    /// Expected attendance; may exceed capacity
    pub attendance: u32,
    /// Hours the event runs per day
    pub duration_hours: f64,
    /// Number of event days
    #[serde(default = "default_event_days")]
    pub event_days: u32,
    /// Edition number (how many years the event has run)
    pub edition_number: u32,
    /// Total number of sponsors on the event
    pub total_sponsors: u32,
    /// Whether the event has an attendee waitlist
    #[serde(default)]
    pub has_waitlist: bool,
}

fn default_event_days() -> u32 {
    1
}

impl EventFacts {
    /// Fill rate as a raw ratio (0 if capacity is 0).
    ///
    /// Attendance above capacity yields a ratio above 1.0; the Demand
    /// signal's top band absorbs it.
    pub fn fill_rate(&self) -> f64 {
        if self.capacity > 0 {
            f64::from(self.attendance) / f64::from(self.capacity)
        } else {
            0.0
        }
    }

    /// Total on-site hours across all event days.
    pub fn total_hours(&self) -> f64 {
        self.duration_hours * f64::from(self.event_days)
    }
}

/// Market facts: which DMA the event sits in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketFacts {
    /// DMA name, looked up in the market multiplier table.
    /// Unknown names resolve to multiplier 1.0.
    pub dma: String,
}

/// One selected asset from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSelection {
    /// Catalog asset id
    pub asset_id: String,
    /// Number of instances selected
    pub quantity: u32,
    /// Chosen exposure tier id; falls back to the asset's default tier
    /// when absent
    #[serde(default)]
    pub exposure_tier: Option<String>,
}

/// Complete input snapshot for one pipeline invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationInputs {
    pub event: EventFacts,
    pub market: MarketFacts,
    /// Active selections; at most one per catalog id (last entry wins)
    pub assets: Vec<AssetSelection>,
}

// ============================================================================
// Output Records
// ============================================================================

/// Resolved value of a single asset selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetBreakdown {
    /// Catalog asset id
    pub asset_id: String,
    /// Catalog display name
    pub name: String,
    /// Funnel purpose of the asset
    pub purpose: Purpose,
    /// Quantity echoed from the selection
    pub quantity: u32,
    /// Resolved impressions, rounded for display
    pub impressions: u64,
    /// Resolved monetary value in whole currency units
    pub value: u64,
    /// Exposure seconds, unrounded for later aggregation
    pub exposure_seconds: f64,
}

/// Monetary totals per funnel purpose, in whole currency units.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PurposeTotals {
    pub see: u64,
    pub engage: u64,
    pub r#try: u64,
    pub act: u64,
}

impl PurposeTotals {
    /// Total for a given purpose.
    pub fn get(&self, purpose: Purpose) -> u64 {
        match purpose {
            Purpose::See => self.see,
            Purpose::Engage => self.engage,
            Purpose::Try => self.r#try,
            Purpose::Act => self.act,
        }
    }
}

/// Final output record of the valuation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Unplugged + plugged value before market and signal adjustment
    pub base_event_value: u64,
    /// Composite signal boost with per-signal detail
    pub signal_boost: SignalBoostResult,
    /// Headline valuation figure
    pub final_value: u64,
    /// Total value of on-site (unplugged) assets
    pub unplugged_total: u64,
    /// Connected/broadcast media value stream; always 0 in current scope
    pub plugged_total: u64,
    /// Ticket-revenue stream; recognized extension point, always 0
    pub tickets_total: u64,
    /// Rights-cascade stream; recognized extension point, always 0
    pub rights_total: u64,
    /// Market multiplier applied for the event's DMA
    pub dma_multiplier: f64,
    /// Impression Quality Index vs the 50 ms digital baseline
    pub iqi: u64,
    /// Cost per hour of attention, rounded to cents
    pub cpha: f64,
    /// Total attention hours, rounded to one decimal place
    pub total_attention_hours: f64,
    /// Total impressions across all selections
    pub total_impressions: u64,
    /// Per-selection detail
    pub asset_breakdowns: Vec<AssetBreakdown>,
    /// Monetary totals per funnel purpose
    pub purpose_totals: PurposeTotals,
    /// Number of distinct purposes with at least one selection
    pub purpose_count: usize,
    /// Fill rate as a percentage, one decimal place
    pub fill_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event() -> EventFacts {
        EventFacts {
            name: "Summer Music Festival".to_string(),
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

    #[test]
    fn test_fill_rate() {
        let event = make_event();
        assert!((event.fill_rate() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_fill_rate_zero_capacity() {
        let mut event = make_event();
        event.capacity = 0;
        assert_eq!(event.fill_rate(), 0.0);
    }

    #[test]
    fn test_fill_rate_over_capacity() {
        let mut event = make_event();
        event.attendance = 12_000;
        assert!(event.fill_rate() > 1.0);
    }

    #[test]
    fn test_total_hours() {
        let mut event = make_event();
        event.duration_hours = 6.0;
        event.event_days = 3;
        assert!((event.total_hours() - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_selection_defaults_from_json() {
        let sel: AssetSelection =
            serde_json::from_str(r#"{"asset_id": "stage_branding", "quantity": 2}"#).unwrap();
        assert_eq!(sel.asset_id, "stage_branding");
        assert_eq!(sel.quantity, 2);
        assert!(sel.exposure_tier.is_none());
    }

    #[test]
    fn test_event_days_defaults_to_one() {
        let event: EventFacts = serde_json::from_str(
            r#"{
                "capacity": 10000,
                "attendance": 7500,
                "duration_hours": 8,
                "edition_number": 1,
                "total_sponsors": 5
            }"#,
        )
        .unwrap();
        assert_eq!(event.event_days, 1);
        assert!(!event.has_waitlist);
    }

    #[test]
    fn test_purpose_totals_get() {
        let totals = PurposeTotals {
            see: 100,
            engage: 200,
            r#try: 300,
            act: 400,
        };
        assert_eq!(totals.get(Purpose::See), 100);
        assert_eq!(totals.get(Purpose::Try), 300);
    }
}
