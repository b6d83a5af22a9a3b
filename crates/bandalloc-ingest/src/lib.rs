//! # Bandalloc Ingest
//!
//! Sales-export ingestion for the bandalloc library.
//!
//! The export is semicolon-delimited text in the legacy Windows-1250
//! encoding, with decimal commas in the `turnover` column. Loading is
//! best-effort by contract: rows whose `turnover` or `count` fail to
//! parse as finite positive-quantity numbers are dropped silently (a
//! debug log line, never an error). The optional `stockAmount` column is
//! detected from the header; its absence is a recoverable
//! feature-unavailable condition, not a failure.
//!
//! ## Example
//!
//! ```rust
//! use bandalloc_ingest::load_records;
//!
//! let raw = b"turnover;count\n1234,56;10\nbad;row\n";
//! let dataset = load_records(raw)?;
//! assert_eq!(dataset.records().len(), 1);
//! assert!(!dataset.stock_tracked());
//! # Ok::<(), bandalloc_ingest::IngestError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod loader;

pub use bandalloc_core::Dataset;
pub use error::{IngestError, IngestResult};
pub use loader::{load_records, load_records_from_path};
