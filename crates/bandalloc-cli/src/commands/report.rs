//! Report command implementation.
//!
//! Loads a sales export, allocates the operator's budget across the
//! price bands by turnover share, and renders the band table with the
//! dataset totals.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bandalloc_analytics::{build_report, CostReport};
use bandalloc_ingest::load_records_from_path;

use crate::cli::OutputFormat;
use crate::commands::parse_budget;
use crate::output::{format_kc, format_range, print_output, print_success, print_warning};

/// Arguments for the report command.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the sales export (semicolon-delimited, Windows-1250)
    pub file: PathBuf,

    /// Marketing/logistics budget to distribute, in Kč
    #[arg(short, long, default_value = "13200000")]
    pub budget: f64,
}

/// One rendered row of the band table.
#[derive(Debug, Serialize, Tabled)]
pub struct BandRow {
    #[tabled(rename = "Band")]
    pub band: String,
    #[tabled(rename = "Units sold")]
    pub units_sold: String,
    #[tabled(rename = "Price range")]
    pub price_range: String,
    #[tabled(rename = "Mean price")]
    pub mean_price: String,
    #[tabled(rename = "Turnover")]
    pub turnover: String,
    #[tabled(rename = "Cost / unit")]
    pub cost_per_unit: String,
    #[tabled(rename = "Total cost")]
    pub total_cost: String,
}

/// Execute the report command.
pub fn execute(args: ReportArgs, format: OutputFormat) -> Result<()> {
    let budget = parse_budget(args.budget)?;

    let dataset = load_records_from_path(&args.file)
        .with_context(|| format!("cannot load export '{}'", args.file.display()))?;
    log::info!(
        "loaded {} records ({} dropped) from {}",
        dataset.records().len(),
        dataset.rows_dropped(),
        args.file.display(),
    );

    let report = build_report(&dataset, budget).context("cannot build allocation report")?;

    if format == OutputFormat::Json {
        // Full precision for machine consumers.
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let rows: Vec<BandRow> = report.bands.iter().map(band_row).collect();
    print_output(&rows, format)?;

    if format == OutputFormat::Table {
        print_totals(&report);
    }

    Ok(())
}

fn band_row(band: &bandalloc_core::AllocatedBand) -> BandRow {
    let s = &band.summary;
    BandRow {
        band: s.label.to_string(),
        units_sold: s.unit_count.round_dp(2).to_string(),
        price_range: format_range(s.min_unit_price, s.max_unit_price),
        mean_price: format_kc(s.mean_unit_price),
        turnover: format_kc(s.turnover_total),
        cost_per_unit: format_kc(band.cost_per_unit),
        total_cost: format_kc(band.allocated_cost),
    }
}

fn print_totals(report: &CostReport) {
    print_success(&format!(
        "Units sold: {}",
        report.total_unit_count.round_dp(2)
    ));
    print_success(&format!(
        "Total turnover: {}",
        format_kc(report.total_turnover)
    ));
    print_success(&format!("Budget: {}", format_kc(report.total_budget)));
    print_success(&format!(
        "Gross cost per unit: {}",
        format_kc(report.gross_cost_per_unit)
    ));

    match report.stock_on_hand {
        Some(stock) => print_success(&format!("Stock on hand: {} pcs", stock)),
        None => print_warning("Stock column not present in export; stock total unavailable."),
    }
}
