//! SponsorIQ Valuation Engine
//!
//! Deterministic valuation of an in-person event's on-site sponsorship
//! inventory: event facts plus selected physical assets in, a defensible
//! dollar figure plus explanatory sub-metrics out.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                        sponsoriq-engine                            │
//! ├────────────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐   ┌──────────────┐   ┌─────────────────────┐    │
//! │  │  Reference   │──▶│  Resolver +  │──▶│  Signal Boost       │    │
//! │  │  Catalogs    │   │  Aggregator  │   │  Composite Scorer   │    │
//! │  └──────────────┘   └──────┬───────┘   └──────────┬──────────┘    │
//! │                            │                      │               │
//! │                            ▼                      ▼               │
//! │                     ┌──────────────┐   ┌─────────────────────┐    │
//! │                     │  DMA Market  │──▶│  Final Blender +    │    │
//! │                     │  Lookup      │   │  Derived Metrics    │    │
//! │                     └──────────────┘   └─────────────────────┘    │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Concepts
//!
//! ## Purposes (SEE / ENGAGE / TRY / ACT)
//! Every catalog asset sits on one of four funnel stages. Spreading
//! selections across stages deepens the package and feeds the Depth signal.
//!
//! ## Signal Boost
//! A composite premium multiplier (0.85x–1.45x) read from five factual
//! signals: Demand, Maturity, Exclusivity, Depth, Amplification. No
//! subjective scoring; every band is a step function over event facts.
//!
//! ## Attention economics
//! Exposure tiers carry dwell seconds, which roll up into attention-hours,
//! an impression-quality index against the 50 ms digital viewability
//! baseline, and a cost-per-attention-hour figure.
//!
//! The pipeline is a pure function: identical inputs always produce
//! identical outputs, with no state carried between invocations.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod catalog;
pub mod engine;
pub mod exposure;
pub mod market;
pub mod metrics;
pub mod report;
pub mod signal;
pub mod types;
pub mod validate;

pub use catalog::{asset_by_id, purpose_meta, AssetDefinition, Purpose, UNPLUGGED_ASSETS};
pub use engine::{compute_valuation, ValuationEngine};
pub use exposure::{tier_by_id, ExposureTier, EXPOSURE_TIERS};
pub use market::{multiplier_for, DMA_MULTIPLIERS};
pub use metrics::{calculate_cpha, calculate_iqi};
pub use report::{build_consultant_insight, render_markdown, UsageMode};
pub use signal::{compute_signal_boost, SignalBoostResult, SignalInputs};
pub use types::{
    AssetBreakdown, AssetSelection, EventFacts, MarketFacts, PurposeTotals, ValuationInputs,
    ValuationResult,
};
