//! Harvest statistics
//!
//! Counters collected while the traversal runs, reported once at the end.

use chrono::{DateTime, Utc};

/// Harvest statistics summary
#[derive(Debug, Clone)]
pub struct HarvestStats {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished (None while running)
    pub finished_at: Option<DateTime<Utc>>,

    /// Categories listed on the landing page
    pub categories_found: u64,

    /// Categories whose listings were walked
    pub categories_visited: u64,

    /// Categories passed over by the skip cursor
    pub categories_skipped: u64,

    /// Listing pages loaded across all categories
    pub listing_pages: u64,

    /// Station detail pages loaded
    pub stations_visited: u64,

    /// Records appended to the output
    pub records_written: u64,

    /// Stations dropped for lacking an email address
    pub stations_without_email: u64,
}

impl Default for HarvestStats {
    fn default() -> Self {
        Self::new()
    }
}

impl HarvestStats {
    /// Creates empty statistics stamped with the current time
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            categories_found: 0,
            categories_visited: 0,
            categories_skipped: 0,
            listing_pages: 0,
            stations_visited: 0,
            records_written: 0,
            stations_without_email: 0,
        }
    }

    /// Stamps the finish time
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Run duration in seconds, once finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }

    /// Share of visited stations that produced a record, as a percentage
    pub fn hit_rate(&self) -> f64 {
        if self.stations_visited == 0 {
            return 0.0;
        }
        (self.records_written as f64 / self.stations_visited as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &HarvestStats) {
    println!("=== Harvest Statistics ===\n");

    println!("Categories:");
    println!("  Found: {}", stats.categories_found);
    println!("  Visited: {}", stats.categories_visited);
    println!("  Skipped: {}", stats.categories_skipped);
    println!();

    println!("Pages:");
    println!("  Listing pages: {}", stats.listing_pages);
    println!("  Station pages: {}", stats.stations_visited);
    println!();

    println!("Stations:");
    println!("  Written: {}", stats.records_written);
    println!("  Without email: {}", stats.stations_without_email);
    println!();

    if let Some(seconds) = stats.duration_seconds() {
        println!("Duration: {}s", seconds);
    }

    println!(
        "Hit Rate: {:.1}% ({} / {} stations had an email)",
        stats.hit_rate(),
        stats.records_written,
        stats.stations_visited
    );
}
