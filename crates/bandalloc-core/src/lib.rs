//! # Bandalloc Core
//!
//! Core types for the bandalloc price-band cost allocation library.
//!
//! This crate provides the foundational building blocks used throughout
//! bandalloc:
//!
//! - **Types**: Domain-specific types like [`SaleRecord`], [`PriceBand`],
//!   [`BandSummary`] and [`AllocatedBand`]
//! - **Band catalog**: The fixed 16-band unit-price partition and its
//!   total classifier
//! - **Errors**: Structured error handling via [`CoreError`]
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: a constructed [`SaleRecord`] always carries a valid,
//!   finite unit price; `Decimal` has no NaN or infinity to guard against
//! - **Total Classification**: every finite unit price maps to exactly one
//!   band; there is no "no band" outcome
//!
//! ## Example
//!
//! ```rust
//! use bandalloc_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let record = SaleRecord::new(dec!(100), dec!(4), None)?;
//! assert_eq!(record.unit_price(), dec!(25));
//!
//! let band = PriceBand::classify(record.unit_price());
//! assert_eq!(band.id(), 4);
//! # Ok::<(), bandalloc_core::CoreError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{AllocatedBand, BandSummary, Dataset, PriceBand, SaleRecord, BANDS};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{AllocatedBand, BandSummary, Dataset, PriceBand, SaleRecord, BANDS};
