//! Radio-Harvest main entry point
//!
//! This is the command-line interface for the Radio-Harvest station harvester.

use anyhow::Context;
use clap::Parser;
use radio_harvest::config::{load_config_with_hash, validate, Config};
use radio_harvest::crawler::{harvest, harvest_single};
use radio_harvest::logging;
use radio_harvest::output::print_statistics;
use std::path::{Path, PathBuf};
use url::Url;

/// Radio-Harvest: a station directory harvester
///
/// Walks every country of a radio directory region, visits each station
/// page, and appends the stations that list an email address to a
/// delimited text file.
#[derive(Parser, Debug)]
#[command(name = "radio-harvest")]
#[command(version)]
#[command(about = "A station directory harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Skip every category before this one (overrides the config file)
    #[arg(long, value_name = "URL")]
    skip_to: Option<String>,

    /// Scrape a single station page and exit
    #[arg(long, value_name = "URL", conflicts_with_all = ["skip_to", "dry_run"])]
    single: Option<String>,

    /// Validate config and show what would be harvested without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    if let Some(skip_to) = cli.skip_to {
        config.site.skip_to = Some(skip_to);
        validate(&config).context("Invalid --skip-to")?;
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    logging::init(Path::new(&config.output.log_path), cli.verbose, cli.quiet)
        .with_context(|| format!("Failed to open log file {}", config.output.log_path))?;

    match (&cli.config, &config_hash) {
        (Some(path), Some(hash)) => tracing::info!(
            "Configuration loaded from {} (hash: {})",
            path.display(),
            hash
        ),
        _ => tracing::info!("Using built-in configuration"),
    }

    match cli.single {
        Some(url) => handle_single(&config, &url).await,
        None => handle_harvest(&config).await,
    }
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Radio-Harvest Dry Run ===\n");

    println!("Site:");
    println!("  Landing page: {}", config.site.landing_url);
    match &config.site.skip_to {
        Some(skip_to) => println!("  Skip to: {}", skip_to),
        None => println!("  Skip to: (none)"),
    }

    println!("\nCrawler Configuration:");
    println!("  Settle time: {}ms", config.crawler.settle_time);
    println!(
        "  Max pages per category: {}",
        config.crawler.max_pages_per_category
    );
    println!("  Request timeout: {}s", config.crawler.request_timeout);
    println!("  Next page rule: {:?}", config.crawler.next_page);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  Records: {}", config.output.records_path);
    println!("  Log: {}", config.output.log_path);
    println!("  Field delimiter: {:?}", config.output.delimiter());

    println!("\n✓ Configuration is valid");
}

/// Handles the --single mode: one station page, then exit
async fn handle_single(config: &Config, url: &str) -> anyhow::Result<()> {
    let url = Url::parse(url).with_context(|| format!("Invalid station URL '{}'", url))?;

    match harvest_single(config, &url).await {
        Ok(true) => {
            println!("✓ Record appended to {}", config.output.records_path);
            Ok(())
        }
        Ok(false) => Ok(()),
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Handles the main harvest operation
async fn handle_harvest(config: &Config) -> anyhow::Result<()> {
    tracing::info!(
        "Harvesting {} into {}",
        config.site.landing_url,
        config.output.records_path
    );

    match harvest(config).await {
        Ok(report) => {
            print_statistics(&report.stats);
            if report.cursor.is_active() {
                println!("\n⚠ Skip target was never reached; no category was harvested");
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
