//! # Bandalloc Analytics
//!
//! Aggregation and budget-allocation engine for the bandalloc library.
//!
//! The pipeline is a single synchronous pass over an in-memory dataset:
//!
//! 1. [`summarize`] groups records by price band and aggregates per-band
//!    totals at full precision
//! 2. [`allocate`] splits a caller-supplied budget across bands in
//!    proportion to each band's turnover share and derives per-unit cost
//! 3. [`build_report`] runs both and attaches the dataset-level scalars
//!    (total turnover, total units, the gross baseline, stock on hand)
//!
//! Preconditions - at least one record, positive turnover, positive
//! budget - are validated up front; the allocator never divides by zero
//! and never emits NaN-like results.
//!
//! ## Example
//!
//! ```rust
//! use bandalloc_analytics::build_report;
//! use bandalloc_core::{Dataset, SaleRecord};
//! use rust_decimal_macros::dec;
//!
//! let records = vec![
//!     SaleRecord::new(dec!(50), dec!(10), None)?,
//!     SaleRecord::new(dec!(3000), dec!(20), None)?,
//! ];
//! let dataset = Dataset::new(records, false, 0);
//!
//! let report = build_report(&dataset, dec!(10000))?;
//! assert_eq!(report.bands.len(), 2);
//! assert_eq!(report.total_turnover, dec!(3050));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod allocation;
mod error;
mod report;
mod summary;

pub use allocation::allocate;
pub use error::{AnalyticsError, AnalyticsResult};
pub use report::{build_report, CostReport};
pub use summary::summarize;
