//! Crawler module for the station directory traversal
//!
//! This module contains the core harvesting logic, including:
//! - Category enumeration from the landing page
//! - The single-use skip cursor
//! - Pagination walking within a category
//! - Station field extraction
//! - Overall harvest coordination

mod categories;
mod coordinator;
mod cursor;
mod extractor;
mod pagination;
mod record;

#[cfg(test)]
pub(crate) mod testing;

pub use categories::enumerate_categories;
pub use coordinator::{harvest, harvest_single, Coordinator, HarvestReport};
pub use cursor::SkipCursor;
pub use extractor::{extract_station, fetch_station, strip_line_breaks};
pub use pagination::{next_page_url, station_urls, ListingPage, PaginationWalker, WalkState};
pub use record::StationRecord;
