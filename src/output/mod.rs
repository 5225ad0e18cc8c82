//! Output module for harvested stations
//!
//! This module handles:
//! - Formatting station records as delimited lines
//! - Appending them to the records file
//! - Recording harvest statistics

mod delimited;
pub mod stats;
mod traits;

pub use delimited::{format_record, DelimitedFileSink, LIST_SEPARATOR};
pub use stats::{print_statistics, HarvestStats};
pub use traits::{OutputError, OutputResult, RecordSink};
