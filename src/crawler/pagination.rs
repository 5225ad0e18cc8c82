//! Pagination walker for a single category
//!
//! A category's stations are spread over listing pages chained by a
//! pagination control. The walker is a two-state machine:
//!
//! | State | On entry |
//! |-------|----------|
//! | `HasPage(url)` | load `url`, hand back its station URLs, pick the next URL |
//! | `Done` | nothing left; `next_page` returns `None` |
//!
//! With [`NextPageRule::LastControl`] the anchor of the *last* pagination
//! control is taken as "next". This holds only while the site renders the
//! next/last-page link as the rightmost control; a trailing unrelated link
//! would silently derail the walk. A last control without an anchor ends the
//! category.
//!
//! Revisiting a page or exceeding the page cap is fatal rather than looping.

use crate::config::NextPageRule;
use crate::page::{Document, PageSource};
use crate::{HarvestError, Result};
use std::collections::HashSet;
use url::Url;

/// One entry per station on a listing page
pub const STATION_ENTRY: &str = "ul.stations-list li";

/// Station detail link inside a station entry
pub const STATION_LINK: &str = "figure a";

/// Individual controls of the pagination block
pub const PAGINATION_CONTROL: &str = "dl.pagination dd";

/// A loaded listing page, reduced to what the traversal needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// URL that was requested for this page
    pub url: Url,

    /// Station detail URLs, in document order
    pub station_urls: Vec<Url>,

    /// The following listing page, if any
    pub next_url: Option<Url>,
}

impl ListingPage {
    /// Reads station links and the next-page link from a listing document
    pub fn from_document(url: Url, doc: &Document, rule: NextPageRule) -> Self {
        Self {
            url,
            station_urls: station_urls(doc),
            next_url: next_page_url(doc, rule),
        }
    }
}

/// Extracts station detail URLs; entries without a figure link are skipped
pub fn station_urls(doc: &Document) -> Vec<Url> {
    doc.all(STATION_ENTRY)
        .iter()
        .filter_map(|entry| entry.link(STATION_LINK))
        .filter_map(|href| Url::parse(&href).ok())
        .collect()
}

/// Picks the next listing page out of the pagination control
pub fn next_page_url(doc: &Document, rule: NextPageRule) -> Option<Url> {
    let controls = doc.all(PAGINATION_CONTROL);

    let href = match rule {
        NextPageRule::LastControl => controls.last().and_then(|control| control.link("a")),
        NextPageRule::RelNext => controls
            .iter()
            .find_map(|control| control.link(r#"a[rel~="next"]"#)),
    }?;

    Url::parse(&href).ok()
}

/// Walker state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkState {
    /// A listing page is waiting to be loaded
    HasPage(Url),

    /// The category is exhausted
    Done,
}

/// Walks the listing pages of one category, one page per call
pub struct PaginationWalker {
    category: Url,
    state: WalkState,
    rule: NextPageRule,
    max_pages: u32,
    visited: HashSet<Url>,
}

impl PaginationWalker {
    /// Starts a walk at the category's first listing page
    pub fn new(category: Url, rule: NextPageRule, max_pages: u32) -> Self {
        Self {
            state: WalkState::HasPage(category.clone()),
            category,
            rule,
            max_pages,
            visited: HashSet::new(),
        }
    }

    pub fn state(&self) -> &WalkState {
        &self.state
    }

    /// Number of listing pages loaded so far
    pub fn pages_visited(&self) -> usize {
        self.visited.len()
    }

    /// Loads the current page and advances the state
    ///
    /// Returns `Ok(None)` once the walk is `Done`. Load failures propagate
    /// unchanged.
    pub async fn next_page(&mut self, source: &dyn PageSource) -> Result<Option<ListingPage>> {
        let url = match &self.state {
            WalkState::Done => return Ok(None),
            WalkState::HasPage(url) => url.clone(),
        };

        if self.visited.contains(&url) {
            return Err(HarvestError::PaginationCycle {
                category: self.category.to_string(),
                url: url.to_string(),
            });
        }

        if self.visited.len() >= self.max_pages as usize {
            return Err(HarvestError::PageLimit {
                category: self.category.to_string(),
                limit: self.max_pages,
            });
        }

        self.visited.insert(url.clone());

        let fetched = source.fetch_document(&url).await?;
        let listing = ListingPage::from_document(url, &fetched.into_document(), self.rule);

        tracing::debug!(
            "Listing {} has {} stations, next: {:?}",
            listing.url,
            listing.station_urls.len(),
            listing.next_url.as_ref().map(Url::as_str)
        );

        self.state = match &listing.next_url {
            Some(next) => WalkState::HasPage(next.clone()),
            None => WalkState::Done,
        };

        Ok(Some(listing))
    }
}
