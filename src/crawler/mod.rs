//! Crawler module for polite page fetching and traversal
//!
//! This module contains the core crawling logic:
//! - Request pacing with a minimum inter-request interval
//! - HTTP fetching with safety checks, robots compliance, and bounded retry
//! - The link-extraction capability seam
//! - The frontier-driven traversal loop

mod engine;
mod extract;
mod fetcher;
mod limiter;

pub use engine::Crawler;
pub use extract::{HtmlLinkExtractor, LinkExtractor};
pub use fetcher::{build_http_client, Fetcher, RetryPolicy};
pub use limiter::RateLimiter;
