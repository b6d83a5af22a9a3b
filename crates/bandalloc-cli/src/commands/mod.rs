//! CLI command implementations.

pub mod bands;
pub mod classify;
pub mod report;

// Re-export submodules for convenience
pub use bands::BandsArgs;
pub use classify::ClassifyArgs;
pub use report::ReportArgs;

use rust_decimal::Decimal;

use crate::error::{CliError, CliResult};

/// Parses an operator-supplied budget into a positive decimal.
pub fn parse_budget(budget: f64) -> CliResult<Decimal> {
    if !budget.is_finite() || budget <= 0.0 {
        return Err(CliError::InvalidBudget(budget));
    }
    Decimal::from_f64_retain(budget).ok_or(CliError::InvalidBudget(budget))
}

/// Parses a unit price argument.
pub fn parse_price(price: f64) -> CliResult<Decimal> {
    if !price.is_finite() {
        return Err(CliError::InvalidPrice(price));
    }
    Decimal::from_f64_retain(price).ok_or(CliError::InvalidPrice(price))
}
