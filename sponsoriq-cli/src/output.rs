//! Terminal rendering of valuation results and reference tables.

use console::style;

use sponsoriq_common::config::Config;
use sponsoriq_engine::report::{build_consultant_insight, UsageMode};
use sponsoriq_engine::{
    purpose_meta, Purpose, ValuationInputs, ValuationResult, DMA_MULTIPLIERS, EXPOSURE_TIERS,
    UNPLUGGED_ASSETS,
};

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

/// Print the styled terminal summary plus the consultant insight.
pub fn print_text_report(
    inputs: &ValuationInputs,
    result: &ValuationResult,
    mode: UsageMode,
    config: &Config,
    advisories: &[String],
) {
    let currency = &config.report.currency;

    if !inputs.event.name.is_empty() {
        println!("{}", style(&inputs.event.name).bold().underlined());
        println!();
    }

    println!(
        "  {}  {}{}",
        style("Estimated Valuation").bold(),
        currency,
        style(fmt_thousands(result.final_value)).bold().green()
    );
    println!(
        "  Base Event Value     {}{}",
        currency,
        fmt_thousands(result.base_event_value)
    );
    println!("  DMA Multiplier       x{:.2}", result.dma_multiplier);
    println!("  Signal Boost         x{:.2}", result.signal_boost.total);
    println!();

    // Signal detail
    let boost = &result.signal_boost;
    println!("{}", style("Signals").bold());
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
        let sign = if adjustment >= 0.0 { "+" } else { "" };
        println!(
            "  {name:<14} {sign}{:.0}%  {}",
            adjustment * 100.0,
            style(label).dim()
        );
    }
    println!();

    // Asset breakdown
    if !result.asset_breakdowns.is_empty() {
        println!("{}", style("Assets").bold());
        for breakdown in &result.asset_breakdowns {
            println!(
                "  {:<22} {:<7} x{:<3} {:>12} imp  {}{}",
                breakdown.name,
                breakdown.purpose.to_string(),
                breakdown.quantity,
                fmt_thousands(breakdown.impressions),
                currency,
                fmt_thousands(breakdown.value)
            );
        }
        println!();
    }

    // Attention metrics
    println!("{}", style("Attention").bold());
    println!(
        "  Impressions {}   Attention hours {:.1}   IQI {}x   CPHA {}{:.2}   Fill {:.1}%",
        fmt_thousands(result.total_impressions),
        result.total_attention_hours,
        result.iqi,
        currency,
        result.cpha,
        result.fill_rate
    );
    println!();

    for advisory in advisories {
        println!("  {} {}", style("!").yellow().bold(), style(advisory).yellow());
    }
    if !advisories.is_empty() {
        println!();
    }

    // Consultant insight
    println!("{}", style("Insight").bold());
    println!("  {}", build_consultant_insight(result, mode));
}

/// Print the asset catalog grouped by purpose.
pub fn print_assets() {
    for purpose in Purpose::ALL {
        let meta = purpose_meta(purpose);
        println!(
            "{}  {}",
            style(meta.label).bold(),
            style(meta.question).dim()
        );
        for asset in UNPLUGGED_ASSETS.iter().filter(|a| a.purpose == purpose) {
            let capacity = match asset.brand_exposure_per_hour {
                Some(rate) => format!("{rate:.0}/hour"),
                None => "uncapped".to_string(),
            };
            println!(
                "  {:<20} {:<22} CPM ${:<6} reach {:>3.0}%  default {:<10} {}",
                asset.id,
                asset.name,
                asset.cpm,
                asset.audience_pct * 100.0,
                asset.default_exposure,
                style(capacity).dim()
            );
        }
        println!();
    }
}

/// Print the exposure tier table.
pub fn print_tiers() {
    println!("{}", style("Exposure Tiers").bold());
    for tier in EXPOSURE_TIERS {
        println!(
            "  {:<12} {:<12} x{:<5} avg {:>4.0}s  {}",
            tier.id,
            tier.label,
            tier.multiplier,
            tier.avg_seconds,
            style(tier.range).dim()
        );
    }
}

/// Print the DMA multiplier table.
pub fn print_markets() {
    println!("{}", style("DMA Market Multipliers").bold());
    for (name, multiplier) in DMA_MULTIPLIERS {
        println!("  {name:<20} x{multiplier:.2}");
    }
}
