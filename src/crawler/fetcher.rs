//! HTTP fetcher implementation
//!
//! All requests of a run go through one `Fetcher`: a shared connection pool
//! plus a counting limiter that caps the number of simultaneous in-flight
//! requests. A fetch that fails in any way returns a `FetchFailure` value to
//! its caller; nothing at this layer can abort the run.

use crate::config::CrawlerConfig;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Semaphore;

/// A failed fetch, carrying the URL and its cause
///
/// Returned as a value so the owning task can log it and contribute zero
/// rows; it is never propagated across tasks.
#[derive(Debug, Error)]
#[error("fetch failed for {url}: {cause}")]
pub struct FetchFailure {
    /// The URL that failed
    pub url: String,

    /// Why it failed
    pub cause: FetchCause,
}

/// Classification of a fetch failure
#[derive(Debug, Error)]
pub enum FetchCause {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Builds the HTTP client shared by all fetches of a run
///
/// # Arguments
///
/// * `user_agent` - The User-Agent header value to send
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Concurrency-bounded page fetcher
///
/// The limiter permit is acquired before the request is sent and held until
/// the body is fully read, so the configured cap bounds genuinely in-flight
/// work. The permit is released on every exit path, including timeouts and
/// transport errors.
pub struct Fetcher {
    client: Client,
    limiter: Arc<Semaphore>,
    listing_timeout: Duration,
    detail_timeout: Duration,
}

impl Fetcher {
    /// Creates a fetcher from the crawler configuration
    pub fn new(config: &CrawlerConfig, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = build_http_client(user_agent)?;

        Ok(Self {
            client,
            limiter: Arc::new(Semaphore::new(config.max_concurrent_requests as usize)),
            listing_timeout: Duration::from_secs(config.listing_timeout_secs),
            detail_timeout: Duration::from_secs(config.detail_timeout_secs),
        })
    }

    /// Fetches a listings page with query parameters under the listing
    /// timeout
    pub async fn fetch_listing(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<String, FetchFailure> {
        self.fetch(url, Some(params), self.listing_timeout).await
    }

    /// Fetches a course detail page under the detail timeout
    pub async fn fetch_detail(&self, url: &str) -> Result<String, FetchFailure> {
        self.fetch(url, None, self.detail_timeout).await
    }

    async fn fetch(
        &self,
        url: &str,
        params: Option<&[(&str, String)]>,
        timeout: Duration,
    ) -> Result<String, FetchFailure> {
        // Blocks until a concurrency slot frees up; the permit drops on every
        // return path below
        let _permit = match self.limiter.acquire().await {
            Ok(permit) => permit,
            Err(_) => {
                return Err(FetchFailure {
                    url: url.to_string(),
                    cause: FetchCause::Transport("request limiter closed".to_string()),
                })
            }
        };

        let mut request = self.client.get(url).timeout(timeout);
        if let Some(params) = params {
            request = request.query(params);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(failure(url, e)),
        };

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => return Err(failure(url, e)),
        };

        match response.text().await {
            Ok(body) => Ok(body),
            Err(e) => Err(failure(url, e)),
        }
    }
}

/// Classifies a reqwest error into a `FetchFailure`
fn failure(url: &str, error: reqwest::Error) -> FetchFailure {
    let cause = if error.is_timeout() {
        FetchCause::Timeout
    } else if let Some(status) = error.status() {
        FetchCause::Status(status.as_u16())
    } else if error.is_connect() {
        FetchCause::Transport("connection failed".to_string())
    } else {
        FetchCause::Transport(error.to_string())
    };

    FetchFailure {
        url: url.to_string(),
        cause,
    }
}
