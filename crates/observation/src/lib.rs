//! Occupant Observation Records
//!
//! Defines the raw per-row observation record and the sources that produce
//! them (CSV files, in-memory fixtures). Field parsing is deliberately
//! lenient: a malformed or absent value stays absent on that field alone
//! and never fails the row.

mod record;
mod source;

pub use record::Observation;
pub use source::{CsvReader, MemorySource, RecordSource};

use thiserror::Error;

/// Errors while reading observations from a source
#[derive(Debug, Error)]
pub enum SourceError {
    /// Underlying I/O failure
    #[error("I/O error reading records: {0}")]
    Io(#[from] std::io::Error),

    /// The input has no header row
    #[error("Record source has no header row")]
    MissingHeader,
}
