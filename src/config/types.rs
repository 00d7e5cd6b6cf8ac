use serde::Deserialize;

/// Main configuration structure for Kurstap-Scraper
///
/// Every section has a built-in default matching the live site, so the
/// scraper can run without a config file at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the site, without a trailing path
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the paginated listings endpoint
    #[serde(rename = "listings-path")]
    pub listings_path: String,

    /// Path fragment that identifies a course detail link
    #[serde(rename = "detail-marker")]
    pub detail_marker: String,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of simultaneous in-flight requests
    #[serde(rename = "max-concurrent-requests")]
    pub max_concurrent_requests: u32,

    /// Number of course links requested per listings page
    #[serde(rename = "page-size")]
    pub page_size: u32,

    /// Timeout for a listings page fetch (seconds)
    #[serde(rename = "listing-timeout-secs")]
    pub listing_timeout_secs: u64,

    /// Timeout for a detail page fetch (seconds)
    #[serde(rename = "detail-timeout-secs")]
    pub detail_timeout_secs: u64,

    /// Pause between sequential listings requests (milliseconds)
    #[serde(rename = "listing-delay-ms")]
    pub listing_delay_ms: u64,

    /// How many times a failed listings fetch is retried before pagination
    /// gives up
    #[serde(rename = "listing-retries")]
    pub listing_retries: u32,

    /// Hard ceiling on the pagination offset, in case the endpoint never
    /// returns an empty page
    #[serde(rename = "max-offset")]
    pub max_offset: u32,
}

/// Output file configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the CSV export
    #[serde(rename = "csv-path")]
    pub csv_path: String,

    /// Path of the JSON export
    #[serde(rename = "json-path")]
    pub json_path: String,

    /// Path of the XLSX export
    #[serde(rename = "xlsx-path")]
    pub xlsx_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.kurstap.az".to_string(),
            listings_path: "/kateqoriyalar".to_string(),
            detail_marker: "/kurslar/".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
        }
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_requests: 20,
            page_size: 8,
            listing_timeout_secs: 10,
            detail_timeout_secs: 30,
            listing_delay_ms: 500,
            listing_retries: 2,
            max_offset: 5000,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "kurstap_courses.csv".to_string(),
            json_path: "kurstap_courses.json".to_string(),
            xlsx_path: "kurstap_courses.xlsx".to_string(),
        }
    }
}

impl SiteConfig {
    /// Full URL of the listings endpoint
    pub fn listings_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.listings_path)
    }

    /// Resolves a site-relative href to an absolute URL
    ///
    /// Hrefs that are already absolute are returned unchanged, matching how
    /// the site mixes absolute and relative course links.
    pub fn absolutize(&self, href: &str) -> String {
        if href.starts_with('/') {
            format!("{}{}", self.base_url.trim_end_matches('/'), href)
        } else {
            href.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_live_site() {
        let config = Config::default();
        assert_eq!(config.site.base_url, "https://www.kurstap.az");
        assert_eq!(config.site.detail_marker, "/kurslar/");
        assert_eq!(config.crawler.max_concurrent_requests, 20);
        assert_eq!(config.crawler.page_size, 8);
        assert_eq!(config.crawler.detail_timeout_secs, 30);
        assert_eq!(config.crawler.listing_timeout_secs, 10);
    }

    #[test]
    fn test_listings_url() {
        let site = SiteConfig::default();
        assert_eq!(site.listings_url(), "https://www.kurstap.az/kateqoriyalar");
    }

    #[test]
    fn test_listings_url_with_trailing_slash() {
        let site = SiteConfig {
            base_url: "https://www.kurstap.az/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(site.listings_url(), "https://www.kurstap.az/kateqoriyalar");
    }

    #[test]
    fn test_absolutize_relative_href() {
        let site = SiteConfig::default();
        assert_eq!(
            site.absolutize("/kurslar/ingilis-dili"),
            "https://www.kurstap.az/kurslar/ingilis-dili"
        );
    }

    #[test]
    fn test_absolutize_keeps_absolute_href() {
        let site = SiteConfig::default();
        assert_eq!(
            site.absolutize("https://www.kurstap.az/kurslar/abc"),
            "https://www.kurstap.az/kurslar/abc"
        );
    }
}
