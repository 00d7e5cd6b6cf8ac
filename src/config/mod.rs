//! Configuration module for Kurstap-Scraper
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every field has a built-in default matching the live site, so all
//! sections of the file are optional.
//!
//! # Example
//!
//! ```no_run
//! use kurstap_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Concurrency cap: {}", config.crawler.max_concurrent_requests);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
