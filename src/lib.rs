//! Kumo: a polite crawling engine
//!
//! This crate implements a frontier-driven page visitor that fetches pages
//! safely and respectfully: it blocks requests to internal and cloud-metadata
//! address space, honors per-domain robots.txt directives, paces requests,
//! retries transient failures, deduplicates visits, and restricts traversal
//! to the start URL's host.
//!
//! The crawl itself is sequential; the [`RateLimiter`] and [`RobotsChecker`]
//! are safe to share across multiple concurrently running crawls.
//!
//! ```no_run
//! use kumo::{CrawlConfig, Crawler};
//!
//! # async fn example() -> kumo::Result<()> {
//! let config = CrawlConfig {
//!     start_url: "https://example.com".to_string(),
//!     max_pages: 5,
//!     ..CrawlConfig::default()
//! };
//!
//! let mut crawler = Crawler::new(config)?;
//! let pages = crawler.crawl().await;
//! for (url, html) in &pages {
//!     println!("{}: {} bytes", url, html.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod crawler;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Errors surfaced by kumo's fallible constructors.
///
/// Per-page failures during a crawl never appear here: the fetch layer
/// signals them as `None` and the crawl moves on. Only misconfiguration
/// discovered while building a [`Crawler`] or [`crawler::Fetcher`] is
/// reported as an error.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid start URL {url}: {source}")]
    InvalidStartUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("start URL has no host: {0}")]
    MissingHost(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Result type alias for kumo operations
pub type Result<T> = std::result::Result<T, CrawlError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{Crawler, Fetcher, HtmlLinkExtractor, LinkExtractor, RateLimiter, RetryPolicy};
pub use robots::RobotsChecker;
pub use url::{is_safe_url, normalize_url};
