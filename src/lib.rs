//! Kurstap-Scraper: a concurrent course-catalogue scraper
//!
//! This crate discovers course detail pages on kurstap.az through pagination
//! probing, fetches them under a bounded concurrency cap, extracts the listed
//! fields, and expands embedded contact phone numbers into one output row per
//! number.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod record;

use thiserror::Error;

/// Main error type for Kurstap-Scraper operations
///
/// Per-URL fetch and parse failures are NOT represented here. They are values
/// (`crawler::FetchFailure`, `Option` returns) owned by the task that hit
/// them; the run itself only fails for errors that prevent it from starting
/// or from writing its outputs.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
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

/// Result type alias for Kurstap-Scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use record::{CourseRecord, CourseRow, Dataset};
