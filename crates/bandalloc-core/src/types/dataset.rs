//! A freshly loaded record set.

use serde::Serialize;

use crate::types::SaleRecord;

/// One invocation's worth of validated records.
///
/// Every dataset is rebuilt from scratch per load; nothing is mutated
/// incrementally or persisted across invocations. Zero valid records is a
/// valid (empty) dataset - whether that is acceptable is the caller's
/// concern at allocation time, not the loader's.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    records: Vec<SaleRecord>,
    stock_tracked: bool,
    rows_dropped: usize,
}

impl Dataset {
    /// Assembles a dataset from validated records.
    ///
    /// `stock_tracked` records whether the source carried a stock column
    /// at all - with it false, stock reporting is unavailable rather than
    /// zero. `rows_dropped` is the count of source rows excluded as
    /// malformed.
    #[must_use]
    pub fn new(records: Vec<SaleRecord>, stock_tracked: bool, rows_dropped: usize) -> Self {
        Self {
            records,
            stock_tracked,
            rows_dropped,
        }
    }

    /// Returns the retained records.
    #[must_use]
    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Returns true if the source carried a stock column.
    #[must_use]
    pub fn stock_tracked(&self) -> bool {
        self.stock_tracked
    }

    /// Returns how many source rows were dropped as malformed.
    #[must_use]
    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped
    }

    /// Returns true if no valid records were retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
