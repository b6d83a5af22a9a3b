//! Error types for the analytics engine.

use rust_decimal::Decimal;
use thiserror::Error;

/// Unified error type for analytics operations.
///
/// These are precondition failures, detected before any arithmetic runs.
/// They are deliberately distinct from malformed-row handling, which the
/// loader resolves locally and never surfaces.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// No records survived loading, so there is nothing to aggregate.
    #[error("dataset contains no valid records; nothing to allocate over")]
    EmptyDataset,

    /// Total turnover is zero, so turnover shares are undefined.
    #[error("total turnover is {total}; cannot derive turnover shares")]
    ZeroTurnover {
        /// The offending turnover total.
        total: Decimal,
    },

    /// The operator-supplied budget is unusable.
    #[error("invalid budget {value}: {reason}")]
    InvalidBudget {
        /// The budget value that was supplied.
        value: Decimal,
        /// Why it was rejected.
        reason: String,
    },

    /// Invalid input parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<bandalloc_core::CoreError> for AnalyticsError {
    fn from(err: bandalloc_core::CoreError) -> Self {
        AnalyticsError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::InvalidBudget {
            value: dec!(-5),
            reason: "budget must be positive".to_string(),
        };
        assert!(err.to_string().contains("-5"));

        let err = AnalyticsError::ZeroTurnover { total: dec!(0) };
        assert!(err.to_string().contains("turnover"));
    }
}
