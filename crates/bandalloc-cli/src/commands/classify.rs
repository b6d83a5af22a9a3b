//! Classify command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bandalloc_core::PriceBand;

use crate::cli::OutputFormat;
use crate::commands::parse_price;
use crate::output::print_output;

/// Arguments for the classify command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Unit price to classify, in Kč
    #[arg(short, long)]
    pub price: f64,
}

/// Classification result row.
#[derive(Debug, Serialize, Tabled)]
pub struct ClassifyRow {
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Band")]
    pub band_id: u8,
    #[tabled(rename = "Label")]
    pub label: &'static str,
}

/// Execute the classify command.
pub fn execute(args: ClassifyArgs, format: OutputFormat) -> Result<()> {
    let price = parse_price(args.price)?;
    let band = PriceBand::classify(price);

    let row = ClassifyRow {
        price: format!("{} Kč", price.round_dp(2)),
        band_id: band.id(),
        label: band.label(),
    };
    print_output(&[row], format)?;

    Ok(())
}
