//! Domain types for price-band cost allocation.
//!
//! This module provides type-safe representations of the report's concepts:
//!
//! - [`SaleRecord`]: One validated row of the sales export
//! - [`Dataset`]: One invocation's worth of validated records
//! - [`PriceBand`]: One entry of the fixed 16-band unit-price catalog
//! - [`BandSummary`]: Per-band aggregate over a record set
//! - [`AllocatedBand`]: A band summary with its budget share applied

mod band;
mod dataset;
mod record;
mod summary;

pub use band::{PriceBand, BANDS};
pub use dataset::Dataset;
pub use record::SaleRecord;
pub use summary::{AllocatedBand, BandSummary};
