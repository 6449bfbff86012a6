//! Static exposure tier table.
//!
//! Each tier is a dwell-time band with a CPM multiplier and an average
//! dwell in seconds. The multiplier prices longer exposure; the dwell
//! seconds feed attention-hour derivation only.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// One exposure tier definition.
#[derive(Debug, Clone, Serialize)]
pub struct ExposureTier {
    /// Stable tier id
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Human-readable dwell range
    pub range: &'static str,
    /// CPM multiplier for this dwell band (≥1.0)
    pub multiplier: f64,
    /// Average dwell time in seconds
    pub avg_seconds: f64,
}

/// The exposure tier table, ordered by dwell time.
#[rustfmt::skip]
pub static EXPOSURE_TIERS: &[ExposureTier] = &[
    ExposureTier { id: "glance", label: "Glance", range: "1\u{2013}5 sec", multiplier: 1.0, avg_seconds: 3.0 },
    ExposureTier { id: "notice", label: "Notice", range: "5\u{2013}15 sec", multiplier: 1.5, avg_seconds: 10.0 },
    ExposureTier { id: "engage", label: "Engage", range: "15\u{2013}60 sec", multiplier: 2.5, avg_seconds: 37.0 },
    ExposureTier { id: "interact", label: "Interact", range: "1\u{2013}3 min", multiplier: 5.0, avg_seconds: 120.0 },
    ExposureTier { id: "experience", label: "Experience", range: "3\u{2013}10 min", multiplier: 10.0, avg_seconds: 390.0 },
    ExposureTier { id: "immerse", label: "Immerse", range: "10+ min", multiplier: 15.0, avg_seconds: 900.0 },
];

static TIER_INDEX: Lazy<HashMap<&'static str, &'static ExposureTier>> =
    Lazy::new(|| EXPOSURE_TIERS.iter().map(|tier| (tier.id, tier)).collect());

/// Look up an exposure tier by id.
pub fn tier_by_id(id: &str) -> Option<&'static ExposureTier> {
    TIER_INDEX.get(id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(EXPOSURE_TIERS.len(), 6);
    }

    #[test]
    fn test_lookup() {
        let tier = tier_by_id("interact").unwrap();
        assert_eq!(tier.label, "Interact");
        assert!((tier.multiplier - 5.0).abs() < f64::EPSILON);
        assert!((tier.avg_seconds - 120.0).abs() < f64::EPSILON);

        assert!(tier_by_id("stare").is_none());
    }

    #[test]
    fn test_multipliers_at_least_one_and_monotonic() {
        let mut prev = 0.0;
        for tier in EXPOSURE_TIERS {
            assert!(tier.multiplier >= 1.0, "{} below 1.0", tier.id);
            assert!(tier.multiplier > prev, "{} breaks monotonic order", tier.id);
            prev = tier.multiplier;
        }
    }

    #[test]
    fn test_dwell_seconds_monotonic() {
        let mut prev = 0.0;
        for tier in EXPOSURE_TIERS {
            assert!(tier.avg_seconds > prev, "{} breaks dwell order", tier.id);
            prev = tier.avg_seconds;
        }
    }
}
