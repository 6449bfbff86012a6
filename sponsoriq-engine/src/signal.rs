//! Signal Boost composite scorer.
//!
//! A data-inferred premium multiplier in the 0.85x–1.45x band, read from
//! five independent factual signals: Demand, Maturity, Exclusivity, Depth,
//! Amplification. No subjective scoring; every signal is a step function
//! over event facts, checked from the most favorable band down, first
//! match wins.

use serde::{Deserialize, Serialize};

/// Lower clamp on the summed adjustments.
const MIN_BOOST: f64 = -0.15;
/// Upper clamp on the summed adjustments. The clamp is asymmetric: the
/// bands can sum further negative or positive than the allowed range, so
/// extreme combinations compress instead of failing.
const MAX_BOOST: f64 = 0.45;

// ============================================================================
// Inputs
// ============================================================================

/// Facts the five signals read.
#[derive(Debug, Clone)]
pub struct SignalInputs {
    /// Fill rate as a raw ratio (attendance / capacity)
    pub fill_rate: f64,
    /// Whether the event has an attendee waitlist
    pub has_waitlist: bool,
    /// Edition number (years run)
    pub edition_number: u32,
    /// Whether a category-exclusive deal is on the table
    pub has_category_exclusive: bool,
    /// Whether a title/presenting deal is on the table
    pub has_title_presenting: bool,
    /// Total sponsor count
    pub total_sponsors: u32,
    /// Number of distinct purposes with at least one selection (0–4)
    pub purpose_count: usize,
    /// Connected/broadcast media value
    pub plugged_total: f64,
    /// On-site asset value
    pub unplugged_total: f64,
    /// Whether earned media coverage exists
    pub has_earned_media: bool,
}

// ============================================================================
// Result
// ============================================================================

/// Per-signal adjustments, labels, and the combined multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalBoostResult {
    pub demand: f64,
    pub maturity: f64,
    pub exclusivity: f64,
    pub depth: f64,
    pub amplification: f64,
    /// Combined multiplier: 1.0 + clamp(sum of adjustments)
    pub total: f64,
    pub demand_label: String,
    pub maturity_label: String,
    pub exclusivity_label: String,
    pub depth_label: String,
    pub amplification_label: String,
}

impl SignalBoostResult {
    /// The five signals as (name, adjustment) pairs, in canonical order.
    pub fn signals(&self) -> [(&'static str, f64); 5] {
        [
            ("demand", self.demand),
            ("maturity", self.maturity),
            ("exclusivity", self.exclusivity),
            ("depth", self.depth),
            ("amplification", self.amplification),
        ]
    }

    /// Name of the signal contributing the largest adjustment.
    pub fn strongest(&self) -> &'static str {
        let mut best = ("demand", f64::NEG_INFINITY);
        for (name, value) in self.signals() {
            if value > best.1 {
                best = (name, value);
            }
        }
        best.0
    }

    /// Name of the signal contributing the smallest adjustment.
    pub fn weakest(&self) -> &'static str {
        let mut worst = ("demand", f64::INFINITY);
        for (name, value) in self.signals() {
            if value < worst.1 {
                worst = (name, value);
            }
        }
        worst.0
    }
}

// ============================================================================
// Signal 1: Demand - fill rate + waitlist
// ============================================================================

pub fn demand_boost(fill_rate: f64, has_waitlist: bool) -> f64 {
    if has_waitlist {
        0.15
    } else if fill_rate >= 0.95 {
        0.12
    } else if fill_rate >= 0.90 {
        0.08
    } else if fill_rate >= 0.75 {
        0.04
    } else if fill_rate >= 0.50 {
        0.00
    } else {
        -0.05
    }
}

pub fn demand_label(fill_rate: f64, has_waitlist: bool) -> &'static str {
    if has_waitlist {
        "Scarcity"
    } else if fill_rate >= 0.95 {
        "Sold Out"
    } else if fill_rate >= 0.90 {
        "High"
    } else if fill_rate >= 0.75 {
        "Strong"
    } else if fill_rate >= 0.50 {
        "Moderate"
    } else {
        "Weak"
    }
}

// ============================================================================
// Signal 2: Maturity - edition number
// ============================================================================

pub fn maturity_boost(edition_number: u32) -> f64 {
    if edition_number >= 15 {
        0.10
    } else if edition_number >= 8 {
        0.07
    } else if edition_number >= 4 {
        0.04
    } else if edition_number >= 2 {
        0.00
    } else {
        -0.03
    }
}

pub fn maturity_label(edition_number: u32) -> &'static str {
    if edition_number >= 15 {
        "Legacy"
    } else if edition_number >= 8 {
        "Proven"
    } else if edition_number >= 4 {
        "Established"
    } else if edition_number >= 2 {
        "Emerging"
    } else {
        "Inaugural"
    }
}

// ============================================================================
// Signal 3: Exclusivity - exclusivity flags + sponsor count
// ============================================================================

pub fn exclusivity_boost(
    has_category_exclusive: bool,
    has_title_presenting: bool,
    total_sponsors: u32,
) -> f64 {
    if has_title_presenting && has_category_exclusive {
        0.10
    } else if has_category_exclusive {
        0.06
    } else if total_sponsors <= 4 {
        0.04
    } else if total_sponsors <= 7 {
        0.00
    } else if total_sponsors <= 14 {
        -0.02
    } else {
        -0.06
    }
}

pub fn exclusivity_label(
    has_category_exclusive: bool,
    has_title_presenting: bool,
    total_sponsors: u32,
) -> &'static str {
    if has_title_presenting && has_category_exclusive {
        "Fortress"
    } else if has_category_exclusive {
        "Cat Lock"
    } else if total_sponsors <= 4 {
        "Select"
    } else if total_sponsors <= 7 {
        "Shared"
    } else if total_sponsors <= 14 {
        "Crowded"
    } else {
        "Cluttered"
    }
}

// ============================================================================
// Signal 4: Depth - distinct purposes active
// ============================================================================

pub fn depth_boost(purpose_count: usize) -> f64 {
    if purpose_count >= 4 {
        0.10
    } else if purpose_count >= 3 {
        0.06
    } else if purpose_count >= 2 {
        0.02
    } else {
        -0.03
    }
}

pub fn depth_label(purpose_count: usize) -> &'static str {
    if purpose_count >= 4 {
        "Full Funnel"
    } else if purpose_count >= 3 {
        "Strategic"
    } else if purpose_count >= 2 {
        "Moderate"
    } else {
        "Surface"
    }
}

// ============================================================================
// Signal 5: Amplification - plugged/unplugged ratio + earned media
// ============================================================================

// Band order matters here: the both-zero neutral case is checked before the
// plugged-zero discount, and reordering changes output for edge-ratio
// inputs.

pub fn amplification_boost(plugged_total: f64, unplugged_total: f64, has_earned_media: bool) -> f64 {
    let total = plugged_total + unplugged_total;
    if total == 0.0 {
        return 0.0;
    }

    let plugged_ratio = plugged_total / total;
    let earned_bonus = if has_earned_media { 0.02 } else { 0.0 };

    if plugged_total == 0.0 {
        -0.02
    } else if plugged_ratio < 0.15 {
        0.00 + earned_bonus
    } else if plugged_ratio <= 0.30 {
        0.03 + earned_bonus
    } else {
        0.06 + earned_bonus
    }
}

pub fn amplification_label(
    plugged_total: f64,
    unplugged_total: f64,
    has_earned_media: bool,
) -> &'static str {
    let total = plugged_total + unplugged_total;
    if total == 0.0 {
        return "None";
    }

    let plugged_ratio = plugged_total / total;
    if plugged_total == 0.0 {
        "Silent"
    } else if plugged_ratio < 0.15 {
        if has_earned_media { "Organic" } else { "Minimal" }
    } else if plugged_ratio <= 0.30 {
        if has_earned_media { "Amplified" } else { "Moderate" }
    } else if has_earned_media {
        "Full Blast"
    } else {
        "Strong"
    }
}

// ============================================================================
// Composite
// ============================================================================

/// Compute all five signals and the clamped composite multiplier.
pub fn compute_signal_boost(inputs: &SignalInputs) -> SignalBoostResult {
    let demand = demand_boost(inputs.fill_rate, inputs.has_waitlist);
    let maturity = maturity_boost(inputs.edition_number);
    let exclusivity = exclusivity_boost(
        inputs.has_category_exclusive,
        inputs.has_title_presenting,
        inputs.total_sponsors,
    );
    let depth = depth_boost(inputs.purpose_count);
    let amplification = amplification_boost(
        inputs.plugged_total,
        inputs.unplugged_total,
        inputs.has_earned_media,
    );

    let raw_boost = demand + maturity + exclusivity + depth + amplification;
    let clamped_boost = raw_boost.clamp(MIN_BOOST, MAX_BOOST);

    SignalBoostResult {
        demand,
        maturity,
        exclusivity,
        depth,
        amplification,
        total: 1.0 + clamped_boost,
        demand_label: demand_label(inputs.fill_rate, inputs.has_waitlist).to_string(),
        maturity_label: maturity_label(inputs.edition_number).to_string(),
        exclusivity_label: exclusivity_label(
            inputs.has_category_exclusive,
            inputs.has_title_presenting,
            inputs.total_sponsors,
        )
        .to_string(),
        depth_label: depth_label(inputs.purpose_count).to_string(),
        amplification_label: amplification_label(
            inputs.plugged_total,
            inputs.unplugged_total,
            inputs.has_earned_media,
        )
        .to_string(),
    }
}
