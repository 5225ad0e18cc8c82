//! Configuration module for Radio-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; missing values fall back to the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use radio_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("radio-harvest.toml")).unwrap();
//! println!("Harvesting from: {}", config.site.landing_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, NextPageRule, OutputConfig, SiteConfig, UserAgentConfig,
    DEFAULT_LANDING_URL,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
