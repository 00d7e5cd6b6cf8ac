//! Crawler module for page fetching and crawl orchestration
//!
//! This module contains the core crawling logic:
//! - concurrency-bounded HTTP fetching
//! - pagination probing of the listings endpoint
//! - fan-out/fan-in coordination of per-page scrape tasks

mod coordinator;
mod fetcher;
mod frontier;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, FetchCause, FetchFailure, Fetcher};
pub use frontier::discover_course_urls;

use crate::config::Config;
use crate::record::Dataset;
use crate::ScrapeError;

/// Runs a complete scrape of the course catalogue
///
/// This is the main entry point. It discovers all course detail URLs through
/// pagination, scrapes each page under the configured concurrency cap, and
/// returns the flattened dataset. Per-page failures are logged and dropped;
/// the only error path is failing to construct the HTTP client.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(Dataset)` - The scraped rows (possibly empty)
/// * `Err(ScrapeError)` - Could not start the crawl
pub async fn scrape(config: &Config) -> Result<Dataset, ScrapeError> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run().await)
}
