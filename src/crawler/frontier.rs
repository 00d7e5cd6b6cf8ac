//! Pagination frontier
//!
//! Probes the listings endpoint at increasing offsets and collects every
//! course detail link into a set. Pagination ends at the first page that
//! yields no detail links; a listings fetch that keeps failing after its
//! retries also ends it, with a warning, since the site gives no other
//! signal for where the catalogue stops.

use crate::config::{CrawlerConfig, SiteConfig};
use crate::crawler::fetcher::Fetcher;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::time::Duration;

/// Discovers all course detail URLs by walking the listings pagination
///
/// # Arguments
///
/// * `fetcher` - The shared fetcher (listing probes run sequentially, so
///   only one permit is held at a time)
/// * `site` - Target site configuration
/// * `crawler` - Pacing, retry, and ceiling configuration
///
/// # Returns
///
/// The deduplicated set of detail URLs found across all pages. Order is not
/// meaningful; membership is.
pub async fn discover_course_urls(
    fetcher: &Fetcher,
    site: &SiteConfig,
    crawler: &CrawlerConfig,
) -> HashSet<String> {
    let listings_url = site.listings_url();
    let mut discovered: HashSet<String> = HashSet::new();
    let mut offset = 0u32;

    loop {
        if offset > crawler.max_offset {
            tracing::warn!(
                "Pagination ceiling reached at offset {} without an empty page; stopping",
                offset
            );
            break;
        }

        tracing::debug!("Fetching listings page (offset={})", offset);

        let Some(body) =
            fetch_listing_with_retry(fetcher, &listings_url, offset, crawler).await
        else {
            tracing::warn!(
                "Listings page at offset {} unavailable after {} retries; \
                 stopping pagination with {} URLs collected",
                offset,
                crawler.listing_retries,
                discovered.len()
            );
            break;
        };

        let links = extract_course_links(&body, site);

        if links.is_empty() {
            tracing::info!("No course links at offset {}; pagination complete", offset);
            break;
        }

        tracing::info!("Found {} course links at offset {}", links.len(), offset);
        discovered.extend(links);

        offset += crawler.page_size;

        // Listing probes hit a single endpoint sequentially, so they are
        // paced independently of the concurrency cap
        tokio::time::sleep(Duration::from_millis(crawler.listing_delay_ms)).await;
    }

    tracing::info!("Total unique course URLs found: {}", discovered.len());
    discovered
}

/// Fetches one listings page, retrying transport failures a bounded number
/// of times
///
/// Returns `None` once the attempts are exhausted; the caller treats that as
/// the end of pagination.
async fn fetch_listing_with_retry(
    fetcher: &Fetcher,
    listings_url: &str,
    offset: u32,
    crawler: &CrawlerConfig,
) -> Option<String> {
    let params = listing_params(offset, crawler.page_size);

    for attempt in 0..=crawler.listing_retries {
        match fetcher.fetch_listing(listings_url, &params).await {
            Ok(body) => return Some(body),
            Err(failure) => {
                tracing::warn!(
                    "Listings fetch failed at offset {} (attempt {}/{}): {}",
                    offset,
                    attempt + 1,
                    crawler.listing_retries + 1,
                    failure
                );
            }
        }

        if attempt < crawler.listing_retries {
            tokio::time::sleep(Duration::from_millis(crawler.listing_delay_ms)).await;
        }
    }

    None
}

/// Query parameters of the listings endpoint
///
/// The empty-valued filters are part of the endpoint's expected shape; only
/// `offset` and `max` vary.
fn listing_params(offset: u32, page_size: u32) -> Vec<(&'static str, String)> {
    vec![
        ("c", String::new()),
        ("index", "index".to_string()),
        ("vip", String::new()),
        ("city", String::new()),
        ("underground", String::new()),
        ("search", String::new()),
        ("company", String::new()),
        ("category", String::new()),
        ("subCategory", String::new()),
        ("subCatTitle", String::new()),
        ("title", String::new()),
        ("offset", offset.to_string()),
        ("max", page_size.to_string()),
    ]
}

/// Extracts absolute detail URLs from a listings page body
///
/// Duplicates within the page are dropped while preserving first-occurrence
/// order; cross-page deduplication happens in the caller's set.
fn extract_course_links(body: &str, site: &SiteConfig) -> Vec<String> {
    let document = Html::parse_document(body);

    let Ok(selector) = Selector::parse(&format!(r#"a[href*="{}"]"#, site.detail_marker)) else {
        return Vec::new();
    };

    let mut links = Vec::new();

    for anchor in document.select(&selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        if !href.contains(&site.detail_marker) {
            continue;
        }

        let absolute = site.absolutize(href);
        if !links.contains(&absolute) {
            links.push(absolute);
        }
    }

    links
}
