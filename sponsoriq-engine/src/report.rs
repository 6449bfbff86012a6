//! Narrative and markdown rendering of a valuation result.
//!
//! The consultant insight is a short explanatory paragraph built from a
//! completed [`ValuationResult`] and a usage mode; the markdown report is
//! the full numeric dump. Both read the result and never mutate it.

use serde::{Deserialize, Serialize};

use crate::types::ValuationResult;

// ============================================================================
// Usage Mode
// ============================================================================

/// Which side of the table the user sits on. Steers narrative only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageMode {
    /// Event owner pricing their own inventory
    Property,
    /// Sponsor evaluating an opportunity
    Brand,
}

impl std::fmt::Display for UsageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Property => write!(f, "property"),
            Self::Brand => write!(f, "brand"),
        }
    }
}

impl std::str::FromStr for UsageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "property" => Ok(Self::Property),
            "brand" => Ok(Self::Brand),
            other => Err(format!("unknown usage mode: {other}")),
        }
    }
}

// ============================================================================
// Formatting helpers
// ============================================================================

/// Group a whole number with thousands separators.
fn fmt_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn fmt_currency(n: u64) -> String {
    format!("${}", fmt_thousands(n))
}

/// Signed percent from a fractional delta: 0.04 renders as "+4%".
fn fmt_percent(delta: f64) -> String {
    let sign = if delta >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", (delta * 100.0).round() as i64)
}

// ============================================================================
// Consultant Insight
// ============================================================================

/// Advice keyed to the weakest of the five signals.
fn weakest_signal_advice(weakest: &str) -> &'static str {
    match weakest {
        "demand" => {
            "To improve: focus on driving higher attendance or creating a waitlist. \
             Scarcity signals command premium pricing."
        }
        "maturity" => {
            "As your event builds history, the maturity signal will naturally strengthen. \
             Each edition adds brand equity."
        }
        "exclusivity" => {
            "Consider reducing the sponsor count or offering category exclusivity. \
             Fewer sponsors means less clutter and higher individual value."
        }
        "depth" => {
            "Your biggest opportunity is adding interactive elements. Move beyond SEE \
             assets into ENGAGE, TRY, and ACT to create a full-funnel experience."
        }
        "amplification" => {
            "Adding a media amplification strategy, even earned press coverage, \
             would significantly boost your valuation."
        }
        _ => "",
    }
}

/// Build the consultant-style explanatory paragraph.
pub fn build_consultant_insight(result: &ValuationResult, mode: UsageMode) -> String {
    let mut segments: Vec<String> = Vec::new();

    // Opening with the headline figure
    segments.push(format!(
        "Based on the information you've provided, I've valued your sponsorship \
         inventory at {}.",
        fmt_currency(result.final_value)
    ));

    // Signal boost context
    let boost = &result.signal_boost;
    if boost.total > 1.15 {
        segments.push(format!(
            "Your event carries a {} Signal Boost premium, driven primarily by {}.",
            fmt_percent(boost.total - 1.0),
            boost.strongest()
        ));
    } else if boost.total < 1.0 {
        segments.push(format!(
            "I should note that your event signals are pulling the valuation down by {}. \
             Let me show you which levers to pull.",
            fmt_percent(1.0 - boost.total)
        ));
    } else {
        segments.push(format!(
            "Your Signal Boost is {}, close to neutral, with room to grow.",
            fmt_percent(boost.total - 1.0)
        ));
    }

    // Gap analysis: SEE-heavy inventory is the most commoditized
    let unplugged = result.unplugged_total.max(1) as f64;
    let see_share = result.purpose_totals.see as f64 / unplugged;
    if see_share > 0.6 && result.purpose_count < 4 {
        segments.push(format!(
            "Here's what stands out: {}% of your inventory is SEE assets. These are \
             valuable, but they're the most commoditized.",
            (see_share * 100.0).round() as u64
        ));
    }

    // Mode-dependent opportunity framing
    match mode {
        UsageMode::Property if result.purpose_count < 3 => {
            segments.push(
                "Adding ENGAGE, TRY, or ACT elements could increase your package value \
                 by 50-100% without adding more signage."
                    .to_string(),
            );
        }
        UsageMode::Brand => {
            segments.push(format!(
                "For context, the base value before Signal Boost was {}. The premium \
                 reflects the quality signals your event sends to sponsors.",
                fmt_currency(result.base_event_value)
            ));
        }
        UsageMode::Property => {}
    }

    // Attention economics
    if result.iqi > 0 {
        segments.push(format!(
            "Your event impressions are {}x higher quality than digital ads, at a \
             projected CPHA of ${:.2}/hour of attention.",
            fmt_thousands(result.iqi),
            result.cpha
        ));
    }

    // Advice keyed to the weakest signal
    segments.push(weakest_signal_advice(boost.weakest()).to_string());

    // Closing
    match mode {
        UsageMode::Property => segments.push(
            "Ready to turn this valuation into a pitch? Package these numbers into a \
             rate card your sponsors can react to."
                .to_string(),
        ),
        UsageMode::Brand => segments.push(
            "Remember: this is a projected valuation based on industry benchmarks. \
             Validate these numbers against on-site measurement before you sign."
                .to_string(),
        ),
    }

    segments.retain(|s| !s.is_empty());
    segments.join(" ")
}

// ============================================================================
// Markdown Report
// ============================================================================

/// Render the full result as a markdown report.
pub fn render_markdown(result: &ValuationResult, title: Option<&str>) -> String {
    let mut md = String::new();

    match title {
        Some(name) if !name.is_empty() => {
            md.push_str(&format!("# Sponsorship Valuation: {name}\n\n"));
        }
        _ => md.push_str("# Sponsorship Valuation\n\n"),
    }

    md.push_str(&format!(
        "**Estimated Value**: {}\n\n",
        fmt_currency(result.final_value)
    ));
    md.push_str(&format!(
        "**Base Event Value**: {}\n\n",
        fmt_currency(result.base_event_value)
    ));
    md.push_str(&format!(
        "**DMA Multiplier**: x{:.2}\n\n",
        result.dma_multiplier
    ));
    md.push_str(&format!(
        "**Signal Boost**: x{:.2}\n\n",
        result.signal_boost.total
    ));

    // Signal detail
    md.push_str("## Signal Boost\n\n");
    md.push_str("| Signal | Adjustment | Read |\n");
    md.push_str("|---|---|---|\n");
    let boost = &result.signal_boost;
    let rows = [
        ("Demand", boost.demand, boost.demand_label.as_str()),
        ("Maturity", boost.maturity, boost.maturity_label.as_str()),
        (
            "Exclusivity",
            boost.exclusivity,
            boost.exclusivity_label.as_str(),
        ),
        ("Depth", boost.depth, boost.depth_label.as_str()),
        (
            "Amplification",
            boost.amplification,
            boost.amplification_label.as_str(),
        ),
    ];
    for (name, adjustment, label) in rows {
        md.push_str(&format!(
            "| {name} | {} | {label} |\n",
            fmt_percent(adjustment)
        ));
    }
    md.push('\n');

    // Per-asset breakdown
    if !result.asset_breakdowns.is_empty() {
        md.push_str("## Asset Breakdown\n\n");
        md.push_str("| Asset | Purpose | Qty | Impressions | Value |\n");
        md.push_str("|---|---|---|---|---|\n");
        for breakdown in &result.asset_breakdowns {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                breakdown.name,
                breakdown.purpose,
                breakdown.quantity,
                fmt_thousands(breakdown.impressions),
                fmt_currency(breakdown.value)
            ));
        }
        md.push('\n');
    }

    // Purpose mix
    md.push_str("## Purpose Mix\n\n");
    md.push_str(&format!(
        "- SEE: {}\n",
        fmt_currency(result.purpose_totals.see)
    ));
    md.push_str(&format!(
        "- ENGAGE: {}\n",
        fmt_currency(result.purpose_totals.engage)
    ));
    md.push_str(&format!(
        "- TRY: {}\n",
        fmt_currency(result.purpose_totals.r#try)
    ));
    md.push_str(&format!(
        "- ACT: {}\n\n",
        fmt_currency(result.purpose_totals.act)
    ));

    // Attention metrics
    md.push_str("## Attention Metrics\n\n");
    md.push_str(&format!(
        "- Total impressions: {}\n",
        fmt_thousands(result.total_impressions)
    ));
    md.push_str(&format!(
        "- Attention hours: {:.1}\n",
        result.total_attention_hours
    ));
    md.push_str(&format!("- Impression Quality Index: {}x\n", result.iqi));
    md.push_str(&format!("- Cost per attention hour: ${:.2}\n", result.cpha));
    md.push_str(&format!("- Fill rate: {:.1}%\n", result.fill_rate));

    md
}
