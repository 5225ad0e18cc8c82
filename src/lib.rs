//! Radio-Harvest: a station directory harvester
//!
//! This crate walks a radio directory organised by country, visits every
//! station page, and appends the stations that publish an email address to a
//! delimited text file.

pub mod config;
pub mod crawler;
pub mod logging;
pub mod output;
pub mod page;

use thiserror::Error;

/// Main error type for Radio-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Expected HTML from {url}, got '{content_type}'")]
    ContentMismatch { url: String, content_type: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Pagination cycle in {category}: {url} was already visited")]
    PaginationCycle { category: String, url: String },

    #[error("Pagination limit of {limit} pages exceeded in {category}")]
    PageLimit { category: String, limit: u32 },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Radio-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{harvest, HarvestReport, SkipCursor, StationRecord};
pub use page::{Document, HttpPageSource, PageSource};
