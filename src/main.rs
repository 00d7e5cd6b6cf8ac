//! Kurstap-Scraper main entry point
//!
//! Command-line interface for the kurstap.az course catalogue scraper.

use clap::Parser;
use kurstap_scraper::config::{load_config_with_hash, Config};
use kurstap_scraper::output::{print_statistics, write_outputs, DatasetStatistics};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Kurstap-Scraper: a concurrent course-catalogue scraper
///
/// Discovers all course detail pages on kurstap.az through pagination
/// probing, scrapes them under a bounded concurrency cap, and exports the
/// results as CSV, JSON, and XLSX, one row per contact phone number.
#[derive(Parser, Debug)]
#[command(name = "kurstap-scraper")]
#[command(version = "1.0.0")]
#[command(about = "A concurrent course-catalogue scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("kurstap_scraper=info,warn"),
            1 => EnvFilter::new("kurstap_scraper=debug,info"),
            2 => EnvFilter::new("kurstap_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &Config) {
    println!("=== Kurstap-Scraper Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Listings endpoint: {}", config.site.listings_url());
    println!("  Detail marker: {}", config.site.detail_marker);

    println!("\nCrawler:");
    println!(
        "  Max concurrent requests: {}",
        config.crawler.max_concurrent_requests
    );
    println!("  Page size: {}", config.crawler.page_size);
    println!(
        "  Timeouts: {}s listing / {}s detail",
        config.crawler.listing_timeout_secs, config.crawler.detail_timeout_secs
    );
    println!("  Listing delay: {}ms", config.crawler.listing_delay_ms);
    println!("  Listing retries: {}", config.crawler.listing_retries);
    println!("  Max offset: {}", config.crawler.max_offset);

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);
    println!("  JSON: {}", config.output.json_path);
    println!("  XLSX: {}", config.output.xlsx_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape operation
async fn handle_scrape(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Starting scrape of {}", config.site.base_url);

    let dataset = kurstap_scraper::crawler::scrape(config).await?;

    let stats = DatasetStatistics::from_rows(&dataset);
    print_statistics(&stats);

    write_outputs(&dataset, &config.output)?;

    Ok(())
}
