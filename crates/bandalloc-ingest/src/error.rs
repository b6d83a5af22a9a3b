//! Error types for sales-export ingestion.

use thiserror::Error;

/// A specialized Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors raised while loading a sales export.
///
/// Malformed *rows* never surface here - they are dropped by contract.
/// These errors cover conditions that make the file as a whole
/// unreadable: I/O failures, undecodable CSV structure, or a missing
/// required column.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The file could not be read.
    #[error("failed to read export file: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV structure could not be parsed.
    #[error("failed to parse export: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("required column '{name}' not found in export header")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
    },
}
