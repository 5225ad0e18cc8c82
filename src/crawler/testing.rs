//! In-memory page source for traversal tests

use crate::page::{FetchedDocument, PageSource};
use crate::{HarvestError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// Serves fixed HTML by URL and records every load in order
///
/// Unknown URLs fail the way a 404 from a real site would.
#[derive(Default)]
pub struct FixtureSource {
    pages: HashMap<String, String>,
    visits: Mutex<Vec<String>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        let key = Url::parse(url).unwrap().to_string();
        self.pages.insert(key, html.to_string());
        self
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for FixtureSource {
    async fn fetch_document(&self, url: &Url) -> Result<FetchedDocument> {
        self.visits.lock().unwrap().push(url.to_string());

        match self.pages.get(url.as_str()) {
            Some(html) => Ok(FetchedDocument {
                url: url.clone(),
                html: html.clone(),
            }),
            None => Err(HarvestError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
