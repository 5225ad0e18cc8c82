//! Page sources
//!
//! This module loads HTML documents for the harvester, including:
//! - The [`PageSource`] seam the traversal is written against
//! - An HTTP implementation with a proper user agent string
//! - Fatal classification of transport, status and content-type failures
//!
//! Only the document itself is ever requested. Images, stylesheets, fonts and
//! scripts referenced by a page are never fetched.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::page::Document;
use crate::{HarvestError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Raw HTML loaded from a URL
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// Final URL after redirects
    pub url: Url,

    /// Page body
    pub html: String,
}

impl FetchedDocument {
    /// Parses the body into a queryable [`Document`]
    pub fn into_document(self) -> Document {
        Document::parse(&self.html, self.url)
    }
}

/// Something that can load a page by URL
///
/// Every failure is fatal to the harvest; implementations do not retry.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Loads the document at `url` and waits until it is complete
    async fn fetch_document(&self, url: &Url) -> Result<FetchedDocument>;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use radio_harvest::config::UserAgentConfig;
/// use radio_harvest::page::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> std::result::Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Loads pages over HTTP
pub struct HttpPageSource {
    client: Client,
    settle_time: Duration,
}

impl HttpPageSource {
    /// Creates a page source from the crawler and user agent settings
    pub fn new(crawler: &CrawlerConfig, user_agent: &UserAgentConfig) -> Result<Self> {
        let client =
            build_http_client(user_agent, Duration::from_secs(crawler.request_timeout))?;

        Ok(Self::with_client(
            client,
            Duration::from_millis(crawler.settle_time),
        ))
    }

    /// Wraps an existing client
    pub fn with_client(client: Client, settle_time: Duration) -> Self {
        Self {
            client,
            settle_time,
        }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_document(&self, url: &Url) -> Result<FetchedDocument> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // A missing Content-Type is given the benefit of the doubt
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.is_empty() && !content_type.contains("html") {
            return Err(HarvestError::ContentMismatch {
                url: url.to_string(),
                content_type,
            });
        }

        let final_url = response.url().clone();
        let html = response.text().await.map_err(|source| HarvestError::Http {
            url: url.to_string(),
            source,
        })?;

        if !self.settle_time.is_zero() {
            tokio::time::sleep(self.settle_time).await;
        }

        Ok(FetchedDocument {
            url: final_url,
            html,
        })
    }
}
