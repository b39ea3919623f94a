//! HTTP fetcher
//!
//! Composes the safety validator, rate limiter, and robots checker around a
//! single GET with bounded retry. All per-page failures are soft: the only
//! failure signal is `None`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::CrawlConfig;
use crate::crawler::RateLimiter;
use crate::robots::RobotsChecker;
use crate::url::is_safe_url;
use crate::Result;

/// Retry policy for transient fetch failures.
///
/// A plain value so callers can tune or disable retry behavior, and tests
/// can drop the backoff to zero.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first.
    pub max_attempts: u32,

    /// Fixed wait between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Builds the HTTP client used for page and robots requests.
pub fn build_http_client(user_agent: &str) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches single pages with the full set of politeness guarantees.
///
/// Usable standalone, or owned by a [`crate::Crawler`]. The limiter and
/// robots checker can be injected so several fetchers share one pacing
/// budget and one robots cache.
pub struct Fetcher {
    client: Client,
    limiter: Arc<RateLimiter>,
    robots: Arc<RobotsChecker>,
    retry: RetryPolicy,
    user_agent: String,
    allow_private: bool,
}

impl Fetcher {
    /// Creates a fetcher with its own rate limiter and robots checker.
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        let limiter = Arc::new(RateLimiter::new(config.delay()));
        let client = build_http_client(&config.user_agent)?;
        let robots = Arc::new(RobotsChecker::new(client.clone()));
        Ok(Self::assemble(config, client, limiter, robots))
    }

    /// Creates a fetcher around an externally owned limiter and robots
    /// checker, for sharing across multiple crawls.
    pub fn with_shared(
        config: &CrawlConfig,
        limiter: Arc<RateLimiter>,
        robots: Arc<RobotsChecker>,
    ) -> Result<Self> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self::assemble(config, client, limiter, robots))
    }

    fn assemble(
        config: &CrawlConfig,
        client: Client,
        limiter: Arc<RateLimiter>,
        robots: Arc<RobotsChecker>,
    ) -> Self {
        Self {
            client,
            limiter,
            robots,
            retry: RetryPolicy::default(),
            user_agent: config.user_agent.clone(),
            allow_private: config.allow_private,
        }
    }

    /// Replaces the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The user agent this fetcher identifies as.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Fetches a URL, returning its body on a 200 response.
    ///
    /// Order of checks:
    /// 1. Safety — unsafe URLs are rejected before any network access
    /// 2. Robots — disallowed URLs are rejected before the rate limiter is
    ///    charged
    /// 3. Rate limit — may suspend
    /// 4. GET with bounded retry on transient network failures
    ///
    /// Every failure mode yields `None`; nothing here aborts a crawl.
    pub async fn fetch(&self, url: &Url) -> Option<String> {
        if !self.allow_private && !is_safe_url(url.as_str()) {
            tracing::debug!("Rejected unsafe URL: {}", url);
            return None;
        }

        if !self.robots.can_fetch(&self.user_agent, url).await {
            tracing::debug!("Disallowed by robots.txt: {}", url);
            return None;
        }

        self.limiter.acquire().await;

        self.get_with_retry(url).await
    }

    /// Performs the GET, retrying transient failures per the policy.
    ///
    /// A non-200 status is a terminal answer from the server and is not
    /// retried; connect errors, timeouts, and body-read errors are.
    async fn get_with_retry(&self, url: &Url) -> Option<String> {
        let mut attempt = 1;
        loop {
            let error = match self.client.get(url.clone()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status != StatusCode::OK {
                        tracing::debug!("HTTP {} for {}", status, url);
                        return None;
                    }
                    match response.text().await {
                        Ok(body) => return Some(body),
                        Err(e) => e,
                    }
                }
                Err(e) => e,
            };

            if !is_transient(&error) {
                tracing::debug!("Non-retriable error for {}: {}", url, error);
                return None;
            }

            if attempt >= self.retry.max_attempts {
                tracing::warn!("Giving up on {} after {} attempts: {}", url, attempt, error);
                return None;
            }

            tracing::warn!(
                "Attempt {}/{} failed for {}: {}",
                attempt,
                self.retry.max_attempts,
                url,
                error
            );
            attempt += 1;
            tokio::time::sleep(self.retry.backoff).await;
        }
    }
}

/// Transient failures worth another attempt: the connection never happened,
/// timed out, or died while the body was being read.
fn is_transient(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout() || error.is_body() || error.is_decode()
}
