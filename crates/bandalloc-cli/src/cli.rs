//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{BandsArgs, ClassifyArgs, ReportArgs};

/// Bandalloc - price-band cost allocation for product sales exports
#[derive(Parser)]
#[command(name = "bandalloc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Allocate a budget over a sales export and print the band report
    Report(ReportArgs),

    /// Classify a single unit price into its band
    Classify(ClassifyArgs),

    /// Print the fixed 16-band catalog
    Bands(BandsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
