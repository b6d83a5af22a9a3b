//! Bandalloc CLI - cost-allocation reports over product sales exports.
//!
//! # Usage
//!
//! ```bash
//! # Full report: allocate a 13.2M Kč budget over productStatistics.csv
//! bandalloc report productStatistics.csv --budget 13200000
//!
//! # Which band does a 150 Kč unit price fall into?
//! bandalloc classify --price 150
//!
//! # Print the fixed band catalog
//! bandalloc bands
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Report(args) => commands::report::execute(args, format)?,
        Commands::Classify(args) => commands::classify::execute(args, format)?,
        Commands::Bands(args) => commands::bands::execute(args, format)?,
    }

    Ok(())
}
