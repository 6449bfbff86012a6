//! Static asset catalog.
//!
//! Industry benchmark definitions for on-site (unplugged) sponsorship
//! assets, organized by SEE / ENGAGE / TRY / ACT funnel purpose. The table
//! is immutable reference data loaded once at process start.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// Purpose
// ============================================================================

/// Funnel stage an asset is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    /// Passive visibility without stopping
    See,
    /// Attendees stop and interact
    Engage,
    /// Attendees sample or test something
    Try,
    /// Attendees take a specific action
    Act,
}

impl Purpose {
    /// All purposes in funnel order.
    pub const ALL: [Purpose; 4] = [Purpose::See, Purpose::Engage, Purpose::Try, Purpose::Act];
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::See => write!(f, "SEE"),
            Self::Engage => write!(f, "ENGAGE"),
            Self::Try => write!(f, "TRY"),
            Self::Act => write!(f, "ACT"),
        }
    }
}

/// Presentation metadata for a purpose.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PurposeMeta {
    pub label: &'static str,
    pub question: &'static str,
}

/// Display label and qualifying question for a purpose.
pub fn purpose_meta(purpose: Purpose) -> PurposeMeta {
    match purpose {
        Purpose::See => PurposeMeta {
            label: "SEE",
            question: "Will people SEE this without stopping?",
        },
        Purpose::Engage => PurposeMeta {
            label: "ENGAGE",
            question: "Will people STOP and interact?",
        },
        Purpose::Try => PurposeMeta {
            label: "TRY",
            question: "Will people SAMPLE or TEST something?",
        },
        Purpose::Act => PurposeMeta {
            label: "ACT",
            question: "Will people TAKE a specific action?",
        },
    }
}

// ============================================================================
// Asset Definitions
// ============================================================================

/// One benchmark asset definition.
#[derive(Debug, Clone, Serialize)]
pub struct AssetDefinition {
    /// Stable catalog id
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Funnel purpose
    pub purpose: Purpose,
    /// CPM rate (currency per 1000 impressions)
    pub cpm: f64,
    /// Share of attendance exposed to the asset (0–1)
    pub audience_pct: f64,
    /// Default exposure tier id
    pub default_exposure: &'static str,
    /// Max people one instance can serve per hour; None = uncapped.
    /// Flow-limited assets (activations, sampling) cannot expose more
    /// people than they can physically process.
    pub brand_exposure_per_hour: Option<f64>,
}

/// The unplugged asset catalog.
#[rustfmt::skip]
pub static UNPLUGGED_ASSETS: &[AssetDefinition] = &[
    // ─── SEE ───
    AssetDefinition { id: "banner_exclusive", name: "Banner (Exclusive)", purpose: Purpose::See, cpm: 100.0, audience_pct: 0.60, default_exposure: "glance", brand_exposure_per_hour: None },
    AssetDefinition { id: "banner_rotation", name: "Banner (Rotation)", purpose: Purpose::See, cpm: 25.0, audience_pct: 0.40, default_exposure: "glance", brand_exposure_per_hour: None },
    AssetDefinition { id: "stage_branding", name: "Stage Branding", purpose: Purpose::See, cpm: 1500.0, audience_pct: 0.80, default_exposure: "notice", brand_exposure_per_hour: None },
    AssetDefinition { id: "entrance_gate", name: "Entrance/Gate", purpose: Purpose::See, cpm: 120.0, audience_pct: 0.95, default_exposure: "notice", brand_exposure_per_hour: None },
    AssetDefinition { id: "perimeter_boards", name: "Perimeter Boards", purpose: Purpose::See, cpm: 50.0, audience_pct: 0.40, default_exposure: "glance", brand_exposure_per_hour: None },
    AssetDefinition { id: "concourse_signage", name: "Concourse Signage", purpose: Purpose::See, cpm: 75.0, audience_pct: 0.60, default_exposure: "glance", brand_exposure_per_hour: None },
    AssetDefinition { id: "jersey_uniform", name: "Jersey/Uniform", purpose: Purpose::See, cpm: 500.0, audience_pct: 0.50, default_exposure: "notice", brand_exposure_per_hour: None },
    AssetDefinition { id: "jumbotron_led", name: "Jumbotron/LED", purpose: Purpose::See, cpm: 200.0, audience_pct: 0.90, default_exposure: "notice", brand_exposure_per_hour: None },
    AssetDefinition { id: "digital_signage", name: "Digital Signage", purpose: Purpose::See, cpm: 150.0, audience_pct: 0.50, default_exposure: "glance", brand_exposure_per_hour: None },
    // ─── ENGAGE ───
    AssetDefinition { id: "activation_10x10", name: "Activation (10\u{d7}10)", purpose: Purpose::Engage, cpm: 600.0, audience_pct: 0.15, default_exposure: "interact", brand_exposure_per_hour: Some(80.0) },
    AssetDefinition { id: "activation_20x20", name: "Activation (20\u{d7}20)", purpose: Purpose::Engage, cpm: 1000.0, audience_pct: 0.25, default_exposure: "experience", brand_exposure_per_hour: Some(150.0) },
    AssetDefinition { id: "activation_30x30", name: "Activation (30\u{d7}30+)", purpose: Purpose::Engage, cpm: 1500.0, audience_pct: 0.35, default_exposure: "experience", brand_exposure_per_hour: Some(250.0) },
    AssetDefinition { id: "photo_booth", name: "Photo Booth", purpose: Purpose::Engage, cpm: 800.0, audience_pct: 0.20, default_exposure: "interact", brand_exposure_per_hour: Some(60.0) },
    AssetDefinition { id: "games_interactive", name: "Games/Interactive", purpose: Purpose::Engage, cpm: 400.0, audience_pct: 0.18, default_exposure: "interact", brand_exposure_per_hour: Some(100.0) },
    AssetDefinition { id: "branded_lounge", name: "Branded Lounge", purpose: Purpose::Engage, cpm: 600.0, audience_pct: 0.10, default_exposure: "immerse", brand_exposure_per_hour: Some(40.0) },
    // ─── TRY ───
    AssetDefinition { id: "product_sampling", name: "Product Sampling", purpose: Purpose::Try, cpm: 300.0, audience_pct: 0.25, default_exposure: "engage", brand_exposure_per_hour: Some(200.0) },
    AssetDefinition { id: "merch_giveaways", name: "Merch/Giveaways", purpose: Purpose::Try, cpm: 200.0, audience_pct: 0.30, default_exposure: "engage", brand_exposure_per_hour: Some(300.0) },
    AssetDefinition { id: "demo_trial", name: "Demo/Trial Station", purpose: Purpose::Try, cpm: 500.0, audience_pct: 0.10, default_exposure: "experience", brand_exposure_per_hour: Some(50.0) },
    AssetDefinition { id: "tasting_station", name: "Tasting Station", purpose: Purpose::Try, cpm: 350.0, audience_pct: 0.20, default_exposure: "engage", brand_exposure_per_hour: Some(150.0) },
    // ─── ACT ───
    AssetDefinition { id: "lead_capture", name: "Lead Capture", purpose: Purpose::Act, cpm: 400.0, audience_pct: 0.08, default_exposure: "engage", brand_exposure_per_hour: Some(120.0) },
    AssetDefinition { id: "dj_mc_mentions", name: "DJ/MC Mentions", purpose: Purpose::Act, cpm: 100.0, audience_pct: 0.85, default_exposure: "notice", brand_exposure_per_hour: None },
    AssetDefinition { id: "pa_announcements", name: "PA Announcements", purpose: Purpose::Act, cpm: 75.0, audience_pct: 0.75, default_exposure: "notice", brand_exposure_per_hour: None },
    AssetDefinition { id: "branded_moment", name: "Branded Moment", purpose: Purpose::Act, cpm: 150.0, audience_pct: 0.60, default_exposure: "notice", brand_exposure_per_hour: None },
    AssetDefinition { id: "qr_code_signage", name: "QR Code Signage", purpose: Purpose::Act, cpm: 50.0, audience_pct: 0.15, default_exposure: "engage", brand_exposure_per_hour: None },
    AssetDefinition { id: "point_of_sale", name: "Point of Sale", purpose: Purpose::Act, cpm: 500.0, audience_pct: 0.05, default_exposure: "experience", brand_exposure_per_hour: Some(80.0) },
];

static ASSET_INDEX: Lazy<HashMap<&'static str, &'static AssetDefinition>> = Lazy::new(|| {
    UNPLUGGED_ASSETS
        .iter()
        .map(|asset| (asset.id, asset))
        .collect()
});

/// Look up an asset definition by catalog id.
pub fn asset_by_id(id: &str) -> Option<&'static AssetDefinition> {
    ASSET_INDEX.get(id).copied()
}

/// All assets for a given purpose, in catalog order.
pub fn assets_for_purpose(purpose: Purpose) -> impl Iterator<Item = &'static AssetDefinition> {
    UNPLUGGED_ASSETS
        .iter()
        .filter(move |asset| asset.purpose == purpose)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_split() {
        assert_eq!(UNPLUGGED_ASSETS.len(), 25);
        assert_eq!(assets_for_purpose(Purpose::See).count(), 9);
        assert_eq!(assets_for_purpose(Purpose::Engage).count(), 6);
        assert_eq!(assets_for_purpose(Purpose::Try).count(), 4);
        assert_eq!(assets_for_purpose(Purpose::Act).count(), 6);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for asset in UNPLUGGED_ASSETS {
            assert!(seen.insert(asset.id), "duplicate id: {}", asset.id);
        }
    }

    #[test]
    fn test_lookup() {
        let asset = asset_by_id("stage_branding").unwrap();
        assert_eq!(asset.name, "Stage Branding");
        assert_eq!(asset.purpose, Purpose::See);
        assert!((asset.cpm - 1500.0).abs() < f64::EPSILON);
        assert!(asset.brand_exposure_per_hour.is_none());

        assert!(asset_by_id("blimp_flyover").is_none());
    }

    #[test]
    fn test_audience_fractions_in_range() {
        for asset in UNPLUGGED_ASSETS {
            assert!(
                asset.audience_pct > 0.0 && asset.audience_pct <= 1.0,
                "{} audience_pct out of range",
                asset.id
            );
        }
    }

    #[test]
    fn test_default_exposure_tiers_exist() {
        for asset in UNPLUGGED_ASSETS {
            assert!(
                crate::exposure::tier_by_id(asset.default_exposure).is_some(),
                "{} references unknown tier {}",
                asset.id,
                asset.default_exposure
            );
        }
    }

    #[test]
    fn test_flow_limited_assets_declare_capacity() {
        // Every ENGAGE and TRY asset is flow-limited.
        for asset in assets_for_purpose(Purpose::Engage).chain(assets_for_purpose(Purpose::Try)) {
            assert!(
                asset.brand_exposure_per_hour.is_some(),
                "{} should be flow-limited",
                asset.id
            );
        }
    }

    #[test]
    fn test_purpose_display_and_meta() {
        assert_eq!(Purpose::See.to_string(), "SEE");
        assert_eq!(Purpose::Act.to_string(), "ACT");
        assert_eq!(purpose_meta(Purpose::Engage).label, "ENGAGE");
        assert!(purpose_meta(Purpose::Try).question.contains("SAMPLE"));
    }

    #[test]
    fn test_purpose_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Purpose::See).unwrap(), r#""see""#);
        let p: Purpose = serde_json::from_str(r#""act""#).unwrap();
        assert_eq!(p, Purpose::Act);
    }
}
