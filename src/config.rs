//! Crawl configuration
//!
//! Plain constructor-level values; no files or wire formats are read here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for one crawl.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CrawlConfig {
    /// URL the crawl starts from; also fixes the host-scope filter.
    pub start_url: String,

    /// Hard cap on the number of successfully visited pages.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Minimum spacing between any two outbound requests, in seconds.
    #[serde(default = "default_delay_secs")]
    pub delay_secs: f64,

    /// Identity sent to servers and used for robots.txt evaluation.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Permit fetching loopback and private addresses. Intended for tests
    /// and local development; leave off when crawling the open web.
    #[serde(default)]
    pub allow_private: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            start_url: String::new(),
            max_pages: default_max_pages(),
            delay_secs: default_delay_secs(),
            user_agent: default_user_agent(),
            allow_private: false,
        }
    }
}

impl CrawlConfig {
    /// The configured inter-request spacing as a `Duration`.
    ///
    /// Negative and non-finite values collapse to zero rather than panic.
    pub fn delay(&self) -> Duration {
        if self.delay_secs.is_finite() && self.delay_secs > 0.0 {
            Duration::from_secs_f64(self.delay_secs)
        } else {
            Duration::ZERO
        }
    }
}

fn default_max_pages() -> usize {
    10
}

fn default_delay_secs() -> f64 {
    1.0
}

fn default_user_agent() -> String {
    String::from("RespectfulBot")
}
