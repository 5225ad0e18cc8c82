use serde::Deserialize;

/// Default directory landing page (the North America region)
pub const DEFAULT_LANDING_URL: &str = "https://onlineradiobox.com/North-America/";

/// Main configuration structure for Radio-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which directory to harvest and where to start
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Region landing page listing every country category
    #[serde(rename = "landing-url")]
    pub landing_url: String,

    /// Optional category URL to fast-forward to; earlier categories are skipped
    #[serde(rename = "skip-to", default)]
    pub skip_to: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            landing_url: DEFAULT_LANDING_URL.to_string(),
            skip_to: None,
        }
    }
}

/// How the "next page" control is picked out of a pagination block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NextPageRule {
    /// The anchor inside the last pagination control, if that control has one
    #[default]
    LastControl,
    /// The first pagination anchor carrying `rel="next"`
    RelNext,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Pause after each document load (milliseconds)
    #[serde(rename = "settle-time", default)]
    pub settle_time: u64,

    /// Upper bound on listing pages walked within one category
    #[serde(rename = "max-pages-per-category", default = "default_max_pages")]
    pub max_pages_per_category: u32,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Next-page selection rule
    #[serde(rename = "next-page", default)]
    pub next_page: NextPageRule,
}

fn default_max_pages() -> u32 {
    1000
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            settle_time: 0,
            max_pages_per_category: default_max_pages(),
            request_timeout: default_request_timeout(),
            next_page: NextPageRule::default(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "RadioHarvest".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Append-only file receiving one line per station with an email
    #[serde(rename = "records-path")]
    pub records_path: String,

    /// Append-only log file mirroring console output
    #[serde(rename = "log-path")]
    pub log_path: String,

    /// Character separating fields within a record line
    #[serde(rename = "field-delimiter")]
    pub field_delimiter: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            records_path: "output.txt".to_string(),
            log_path: "output.log".to_string(),
            field_delimiter: "~".to_string(),
        }
    }
}

impl OutputConfig {
    /// Returns the field delimiter as a single character
    ///
    /// Validation guarantees the string holds exactly one character; the
    /// default `~` is used if it is somehow empty.
    pub fn delimiter(&self) -> char {
        self.field_delimiter.chars().next().unwrap_or('~')
    }
}
