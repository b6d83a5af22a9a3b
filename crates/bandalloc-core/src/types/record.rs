//! Validated sales-export records.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::types::PriceBand;

/// One validated row of the product sales export.
///
/// A `SaleRecord` can only be constructed with a strictly positive
/// quantity, so its derived unit price is always defined. `Decimal` carries
/// no NaN or infinity, which makes the finiteness invariant structural
/// rather than checked.
///
/// # Example
///
/// ```rust
/// use bandalloc_core::SaleRecord;
/// use rust_decimal_macros::dec;
///
/// let record = SaleRecord::new(dec!(100), dec!(4), Some(12))?;
/// assert_eq!(record.unit_price(), dec!(25));
/// # Ok::<(), bandalloc_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleRecord {
    /// Turnover for the row, in Kč.
    turnover: Decimal,
    /// Quantity sold. Read as a general positive decimal, not forced to
    /// an integer; the export does not guarantee integrality.
    count: Decimal,
    /// Stock on hand, if the export carried a stock column. May be
    /// negative; negative values are retained here and filtered out of
    /// stock totals downstream.
    stock_amount: Option<i64>,
    /// Derived unit price, `turnover / count`.
    unit_price: Decimal,
}

impl SaleRecord {
    /// Creates a record and derives its unit price.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidQuantity` if `count` is zero or
    /// negative - a unit price is undefined for such rows and they must
    /// be excluded, never passed through as degenerate values.
    pub fn new(turnover: Decimal, count: Decimal, stock_amount: Option<i64>) -> CoreResult<Self> {
        if count <= Decimal::ZERO {
            return Err(CoreError::InvalidQuantity {
                value: count,
                reason: "quantity must be positive to derive a unit price".into(),
            });
        }

        Ok(Self {
            turnover,
            count,
            stock_amount,
            unit_price: turnover / count,
        })
    }

    /// Returns the row turnover in Kč.
    #[must_use]
    pub fn turnover(&self) -> Decimal {
        self.turnover
    }

    /// Returns the quantity sold.
    #[must_use]
    pub fn count(&self) -> Decimal {
        self.count
    }

    /// Returns the stock on hand, if the export carried it.
    #[must_use]
    pub fn stock_amount(&self) -> Option<i64> {
        self.stock_amount
    }

    /// Returns the derived per-unit price.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Classifies this record's unit price into its band.
    #[must_use]
    pub fn band(&self) -> &'static PriceBand {
        PriceBand::classify(self.unit_price)
    }
}
