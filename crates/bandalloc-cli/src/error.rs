//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum CliError {
    /// Invalid budget figure.
    #[error("Invalid budget: {0}. Must be a positive amount in Kč.")]
    InvalidBudget(f64),

    /// Invalid price figure.
    #[error("Invalid price: {0}. Must be a finite amount in Kč.")]
    InvalidPrice(f64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
