//! Record sink trait and errors
//!
//! This module defines the trait interface for record sinks and the errors
//! they can raise.

use crate::crawler::StationRecord;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for record sinks
///
/// A sink receives every station that passed the email filter, in harvest
/// order. Writes are not transactional: a crash mid-write may lose the record
/// being written, but never earlier ones.
pub trait RecordSink {
    /// Persists one record
    ///
    /// # Arguments
    ///
    /// * `record` - A station with a non-empty email
    fn write_record(&mut self, record: &StationRecord) -> OutputResult<()>;

    /// Flushes anything still pending at the end of a run
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}
