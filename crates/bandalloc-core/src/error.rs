//! Error types for the bandalloc core crate.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A record's quantity does not permit a unit price.
    #[error("invalid quantity: {value} - {reason}")]
    InvalidQuantity {
        /// The offending quantity value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// A band identifier outside the fixed 1..=16 catalog.
    #[error("unknown band id: {0}")]
    UnknownBand(u8),
}
