//! Bands command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bandalloc_core::BANDS;

use crate::cli::OutputFormat;
use crate::output::print_output;

/// Arguments for the bands command.
#[derive(Args, Debug)]
pub struct BandsArgs {}

/// One catalog row.
#[derive(Debug, Serialize, Tabled)]
pub struct CatalogRow {
    #[tabled(rename = "Band")]
    pub band_id: u8,
    #[tabled(rename = "Label")]
    pub label: &'static str,
    #[tabled(rename = "Lower (excl.)")]
    pub lower: String,
    #[tabled(rename = "Upper (incl.)")]
    pub upper: String,
}

/// Execute the bands command.
pub fn execute(_args: BandsArgs, format: OutputFormat) -> Result<()> {
    let rows: Vec<CatalogRow> = BANDS
        .iter()
        .map(|band| CatalogRow {
            band_id: band.id(),
            label: band.label(),
            lower: format!("{} Kč", band.lower()),
            upper: band
                .upper()
                .map_or_else(|| "∞".to_string(), |u| format!("{} Kč", u)),
        })
        .collect();

    print_output(&rows, format)?;
    Ok(())
}
