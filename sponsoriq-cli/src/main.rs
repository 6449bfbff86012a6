//! SponsorIQ CLI - sponsorship inventory valuation from the command line.
//!
//! Loads a scenario file describing the event, market, and selected
//! assets, runs the valuation pipeline, and renders the result as styled
//! text, markdown, or JSON.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use sponsoriq_common::config::Config;
use sponsoriq_common::logging::init_logging;
use sponsoriq_engine::report::UsageMode;

mod output;
mod scenario;

/// SponsorIQ - value an event's on-site sponsorship inventory.
#[derive(Parser, Debug)]
#[command(name = "sponsoriq")]
#[command(version = "0.1.0")]
#[command(about = "Value an event's on-site sponsorship inventory.", long_about = None)]
struct Cli {
    /// Path to an alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Styled terminal summary with the consultant insight
    Text,
    /// Full markdown report
    Markdown,
    /// Raw result record as JSON
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a valuation over a scenario file
    Value {
        /// Scenario JSON file: {"event": .., "market": .., "assets": [..]}
        #[arg(short, long)]
        scenario: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Usage mode: property (event owner) or brand (sponsor).
        /// Defaults to the configured mode.
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// List the asset catalog grouped by purpose
    Assets,

    /// List the exposure tier table
    Tiers,

    /// List the DMA market multiplier table
    Markets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    init_logging(&config.logging.level, &config.logging.format);

    match cli.command {
        Commands::Value {
            scenario,
            format,
            mode,
        } => {
            let mode = resolve_mode(mode.as_deref(), &config)?;
            run_valuation(&scenario, format, mode, &config)
        }
        Commands::Assets => {
            output::print_assets();
            Ok(())
        }
        Commands::Tiers => {
            output::print_tiers();
            Ok(())
        }
        Commands::Markets => {
            output::print_markets();
            Ok(())
        }
    }
}

/// Resolve the usage mode from the flag, falling back to config.
fn resolve_mode(flag: Option<&str>, config: &Config) -> Result<UsageMode> {
    let raw = flag.unwrap_or(config.report.mode.as_str());
    match raw.parse::<UsageMode>() {
        Ok(mode) => Ok(mode),
        Err(e) => bail!("{e} (expected 'property' or 'brand')"),
    }
}

fn run_valuation(
    path: &PathBuf,
    format: OutputFormat,
    mode: UsageMode,
    config: &Config,
) -> Result<()> {
    let loaded = scenario::load_scenario(path)
        .with_context(|| format!("loading scenario from {}", path.display()))?;

    for advisory in &loaded.advisories {
        tracing::warn!(advisory = %advisory, "Capacity advisory");
    }

    let result = sponsoriq_engine::compute_valuation(&loaded.inputs);
    tracing::info!(
        final_value = result.final_value,
        asset_count = result.asset_breakdowns.len(),
        "Valuation computed"
    );

    match format {
        OutputFormat::Text => {
            output::print_text_report(&loaded.inputs, &result, mode, config, &loaded.advisories);
        }
        OutputFormat::Markdown => {
            let title = loaded.inputs.event.name.clone();
            let md = sponsoriq_engine::render_markdown(&result, Some(&title));
            println!("{md}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
