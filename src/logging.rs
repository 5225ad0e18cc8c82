//! Logging setup
//!
//! One subscriber is installed at startup with two sinks: the console and an
//! append-only log file. Both prefix every line with a bracketed ISO-8601 UTC
//! timestamp.

use chrono::{SecondsFormat, Utc};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// `[2024-01-01T00:00:00.000Z]` style timestamps
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketedTimestamp;

impl FormatTime for BracketedTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "[{}]",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

/// Builds the level filter from the CLI verbosity flags
pub fn verbosity_filter(verbose: u8, quiet: bool) -> EnvFilter {
    if quiet {
        // Only show errors
        return EnvFilter::new("error");
    }

    match verbose {
        0 => EnvFilter::new("radio_harvest=info,warn"),
        1 => EnvFilter::new("radio_harvest=debug,info"),
        2 => EnvFilter::new("radio_harvest=trace,debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Installs the global subscriber
///
/// The log file is opened in append mode and created if absent.
pub fn init(log_path: &Path, verbose: u8, quiet: bool) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let console = fmt::layer()
        .with_timer(BracketedTimestamp)
        .with_target(false);

    let log_file = fmt::layer()
        .with_timer(BracketedTimestamp)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(verbosity_filter(verbose, quiet))
        .with(console)
        .with(log_file)
        .init();

    Ok(())
}
