//! Harvest coordinator - main traversal logic
//!
//! This module drives the whole run, strictly one page at a time:
//! - Loading the landing page and enumerating categories
//! - Applying the skip cursor
//! - Walking each category's listing pages
//! - Extracting every station and writing those with an email
//!
//! Any load failure aborts the run. Records already written stay written.

use crate::config::{Config, CrawlerConfig};
use crate::crawler::categories::enumerate_categories;
use crate::crawler::extractor::fetch_station;
use crate::crawler::pagination::PaginationWalker;
use crate::crawler::SkipCursor;
use crate::output::{DelimitedFileSink, HarvestStats, RecordSink};
use crate::page::{HttpPageSource, PageSource};
use crate::Result;
use std::path::Path;
use url::Url;

/// Outcome of a completed harvest
#[derive(Debug, Clone)]
pub struct HarvestReport {
    /// Counters for the run
    pub stats: HarvestStats,

    /// The skip cursor as the run left it
    pub cursor: SkipCursor,
}

/// Main harvest coordinator structure
pub struct Coordinator<S, K> {
    source: S,
    sink: K,
    crawler: CrawlerConfig,
    stats: HarvestStats,
}

impl<S: PageSource, K: RecordSink> Coordinator<S, K> {
    /// Creates a coordinator over a page source and a record sink
    pub fn new(source: S, sink: K, crawler: CrawlerConfig) -> Self {
        Self {
            source,
            sink,
            crawler,
            stats: HarvestStats::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Runs the full traversal from the landing page
    ///
    /// Categories are taken in landing-page order. While `cursor` is active,
    /// categories are skipped until its target comes up; the cursor is then
    /// cleared and returned that way in the report.
    pub async fn run(&mut self, landing_url: &Url, mut cursor: SkipCursor) -> Result<HarvestReport> {
        tracing::info!("📻 Starting!");
        self.stats = HarvestStats::new();

        let fetched = self.source.fetch_document(landing_url).await?;
        let categories = enumerate_categories(&fetched.into_document());
        self.stats.categories_found = categories.len() as u64;

        tracing::info!(
            "Found {} categories on {}",
            categories.len(),
            landing_url
        );

        for category in &categories {
            if !cursor.admit(category) {
                tracing::debug!("Skipping {}", category);
                self.stats.categories_skipped += 1;
                continue;
            }

            self.harvest_category(category).await?;
        }

        if let SkipCursor::Active(target) = &cursor {
            tracing::warn!(
                "Skip target {} never matched a category; nothing was harvested",
                target
            );
        }

        self.sink.finish()?;
        self.stats.finish();

        tracing::info!(
            "Harvest completed: {} records from {} stations ({} without email) in {} categories",
            self.stats.records_written,
            self.stats.stations_visited,
            self.stats.stations_without_email,
            self.stats.categories_visited
        );

        Ok(HarvestReport {
            stats: self.stats.clone(),
            cursor,
        })
    }

    /// Walks every listing page of one category and harvests its stations
    pub async fn harvest_category(&mut self, category: &Url) -> Result<()> {
        tracing::info!("📻 Fetching first page of {}", category);
        self.stats.categories_visited += 1;

        let mut walker = PaginationWalker::new(
            category.clone(),
            self.crawler.next_page,
            self.crawler.max_pages_per_category,
        );

        while let Some(listing) = walker.next_page(&self.source).await? {
            self.stats.listing_pages += 1;

            for station_url in &listing.station_urls {
                self.harvest_station(station_url).await?;
            }

            if let Some(next) = &listing.next_url {
                tracing::info!("📻 Fetching next page: {}", next);
            }
        }

        Ok(())
    }

    /// Loads one station page and writes it if it has an email
    ///
    /// Returns true when a record was written.
    pub async fn harvest_station(&mut self, url: &Url) -> Result<bool> {
        self.stats.stations_visited += 1;

        match fetch_station(&self.source, url).await? {
            Some(record) => {
                self.sink.write_record(&record)?;
                self.stats.records_written += 1;
                Ok(true)
            }
            None => {
                tracing::info!("{} has no email address listed", url);
                self.stats.stations_without_email += 1;
                Ok(false)
            }
        }
    }

    /// Flushes the sink without running a traversal
    pub fn finish(&mut self) -> Result<()> {
        self.sink.finish()?;
        self.stats.finish();
        Ok(())
    }
}

/// Runs a complete harvest over HTTP
///
/// # Example
///
/// ```no_run
/// use radio_harvest::config::load_config;
/// use radio_harvest::crawler::harvest;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("radio-harvest.toml"))?;
/// let report = harvest(&config).await?;
/// println!("{} records written", report.stats.records_written);
/// # Ok(())
/// # }
/// ```
pub async fn harvest(config: &Config) -> Result<HarvestReport> {
    let landing_url = Url::parse(&config.site.landing_url)?;
    let cursor = SkipCursor::from_config(&config.site)?;

    let mut coordinator = http_coordinator(config)?;
    coordinator.run(&landing_url, cursor).await
}

/// Harvests a single station page, appending it if it has an email
pub async fn harvest_single(config: &Config, url: &Url) -> Result<bool> {
    tracing::info!("📻 Scraping single station {}", url);

    let mut coordinator = http_coordinator(config)?;
    let written = coordinator.harvest_station(url).await?;
    coordinator.finish()?;
    Ok(written)
}

fn http_coordinator(config: &Config) -> Result<Coordinator<HttpPageSource, DelimitedFileSink>> {
    let source = HttpPageSource::new(&config.crawler, &config.user_agent)?;
    let sink = DelimitedFileSink::open(
        Path::new(&config.output.records_path),
        config.output.delimiter(),
    )?;

    Ok(Coordinator::new(source, sink, config.crawler.clone()))
}
