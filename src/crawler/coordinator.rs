//! Crawl coordination
//!
//! The coordinator runs the frontier once to enumerate all detail URLs, then
//! fans out one fetch+extract+expand task per URL. Tasks are independent: a
//! failure at any stage contributes zero rows and never aborts the run. The
//! dataset is assembled by the single fan-in loop below, which is the only
//! writer of the accumulator.

use crate::config::Config;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::frontier::discover_course_urls;
use crate::extract::extract_course;
use crate::record::{expand_rows, CourseRow, Dataset};
use crate::ScrapeError;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Main crawl coordinator
pub struct Coordinator {
    config: Arc<Config>,
    fetcher: Arc<Fetcher>,
}

impl Coordinator {
    /// Creates a new coordinator
    ///
    /// Building the HTTP client is the only operation that can fail before
    /// the crawl starts; everything later degrades per URL instead.
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let fetcher = Fetcher::new(&config.crawler, &config.site.user_agent)?;

        Ok(Self {
            config: Arc::new(config.clone()),
            fetcher: Arc::new(fetcher),
        })
    }

    /// Runs the full crawl and returns the assembled dataset
    ///
    /// Row order reflects task completion order and is not meaningful.
    pub async fn run(&self) -> Dataset {
        let started = std::time::Instant::now();

        let urls =
            discover_course_urls(&self.fetcher, &self.config.site, &self.config.crawler).await;

        if urls.is_empty() {
            tracing::warn!("No course URLs discovered; nothing to scrape");
            return Dataset::new();
        }

        let total = urls.len();
        tracing::info!(
            "Scraping {} course pages (concurrency cap: {})",
            total,
            self.config.crawler.max_concurrent_requests
        );

        let mut tasks = JoinSet::new();
        for (index, url) in urls.into_iter().enumerate() {
            let fetcher = self.fetcher.clone();
            let detail_marker = self.config.site.detail_marker.clone();
            tasks.spawn(scrape_course(fetcher, detail_marker, url, index + 1, total));
        }

        // Fan-in: this loop is the dataset's single point of write
        let mut dataset = Dataset::new();
        let mut failed = 0usize;

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Some(rows)) => dataset.extend(rows),
                Ok(None) => failed += 1,
                Err(e) => {
                    failed += 1;
                    tracing::error!("Scrape task panicked: {}", e);
                }
            }
        }

        tracing::info!(
            "Crawl finished: {} rows from {} pages ({} failed) in {:.1?}",
            dataset.len(),
            total - failed,
            failed,
            started.elapsed()
        );

        dataset
    }
}

/// Scrapes one course page into its output rows
///
/// Any failure is logged and swallowed here; `None` means the page
/// contributed nothing to the dataset.
async fn scrape_course(
    fetcher: Arc<Fetcher>,
    detail_marker: String,
    url: String,
    index: usize,
    total: usize,
) -> Option<Vec<CourseRow>> {
    tracing::debug!("[{}/{}] Scraping {}", index, total, url);

    let body = match fetcher.fetch_detail(&url).await {
        Ok(body) => body,
        Err(failure) => {
            tracing::warn!("[{}/{}] {}", index, total, failure);
            return None;
        }
    };

    let Some(extracted) = extract_course(&body, &url, &detail_marker) else {
        tracing::warn!("[{}/{}] No course section found on {}", index, total, url);
        return None;
    };

    let rows = expand_rows(&extracted.record, &extracted.phones);

    tracing::info!(
        "[{}/{}] Scraped '{}' ({} phone number(s))",
        index,
        total,
        extracted.record.course_title,
        extracted.phones.len()
    );

    Some(rows)
}
