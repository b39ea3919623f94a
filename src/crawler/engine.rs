//! Crawl engine
//!
//! Owns the traversal: a FIFO frontier of discovered URLs, attempted and
//! visited bookkeeping, host-scoped link filtering, and the
//! fetch/extract/enqueue loop.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use url::Url;

use crate::config::CrawlConfig;
use crate::crawler::{Fetcher, HtmlLinkExtractor, LinkExtractor};
use crate::url::normalize_url;
use crate::{CrawlError, Result};

/// Frontier-driven breadth-first page visitor.
///
/// One instance runs one crawl: the frontier, attempted/visited sets, and
/// result map are crawl-scoped and discarded with the crawler. Fetches are
/// strictly sequential; for shared pacing or a shared robots cache across
/// several crawlers, inject a [`Fetcher`] built with
/// [`Fetcher::with_shared`].
pub struct Crawler<E = HtmlLinkExtractor> {
    config: CrawlConfig,
    fetcher: Fetcher,
    extractor: E,
    start_url: Url,
    scope_host: String,
    frontier: VecDeque<String>,
    /// Every URL a fetch was attempted for, success or not. A URL is
    /// attempted at most once per crawl.
    attempted: HashSet<String>,
    /// Successfully fetched URLs; drives the page budget.
    visited: HashSet<String>,
    stop: Arc<AtomicBool>,
}

impl Crawler<HtmlLinkExtractor> {
    /// Creates a crawler with a fresh fetcher and the default HTML link
    /// extractor.
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let fetcher = Fetcher::new(&config)?;
        Self::with_parts(config, fetcher, HtmlLinkExtractor)
    }
}

impl<E: LinkExtractor> Crawler<E> {
    /// Creates a crawler around an existing fetcher and link extractor.
    pub fn with_parts(config: CrawlConfig, fetcher: Fetcher, extractor: E) -> Result<Self> {
        let start_url = Url::parse(&config.start_url).map_err(|source| CrawlError::InvalidStartUrl {
            url: config.start_url.clone(),
            source,
        })?;
        let scope_host = start_url
            .host_str()
            .ok_or_else(|| CrawlError::MissingHost(config.start_url.clone()))?
            .to_string();

        Ok(Self {
            config,
            fetcher,
            extractor,
            start_url,
            scope_host,
            frontier: VecDeque::new(),
            attempted: HashSet::new(),
            visited: HashSet::new(),
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Handle for external cancellation. Setting the flag makes the crawl
    /// return its partial results at the next frontier iteration.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Number of pages fetched successfully so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Runs the crawl to completion.
    ///
    /// Visits pages breadth-first from the start URL, bounded by the page
    /// budget, and returns a map from visited URL to raw HTML. Per-page
    /// failures are skipped, so partial coverage is an ordinary outcome,
    /// not an error.
    pub async fn crawl(&mut self) -> HashMap<String, String> {
        let seed = normalize_url(self.start_url.as_str(), &self.start_url);
        self.frontier.push_back(seed);

        let mut results = HashMap::new();

        tracing::info!(
            "Starting crawl of {} (max {} pages, delay {:?})",
            self.start_url,
            self.config.max_pages,
            self.config.delay()
        );

        while self.visited.len() < self.config.max_pages {
            if self.stop.load(Ordering::Relaxed) {
                tracing::info!("Stop requested, returning {} pages", results.len());
                break;
            }

            let url = match self.frontier.pop_front() {
                Some(url) => url,
                None => break,
            };

            // Duplicates may be enqueued before the first copy is dequeued
            if self.attempted.contains(&url) {
                continue;
            }
            self.attempted.insert(url.clone());

            let page_url = match Url::parse(&url) {
                Ok(page_url) => page_url,
                Err(e) => {
                    tracing::debug!("Dropping malformed frontier entry {}: {}", url, e);
                    continue;
                }
            };

            tracing::debug!("Crawling: {}", url);
            let html = match self.fetcher.fetch(&page_url).await {
                Some(html) => html,
                None => {
                    tracing::debug!("No content for {}", url);
                    continue;
                }
            };

            self.visited.insert(url.clone());

            for href in self.extractor.extract_links(&html) {
                let link = normalize_url(&href, &page_url);
                if self.should_enqueue(&link) {
                    self.frontier.push_back(link);
                }
            }

            results.insert(url, html);
        }

        tracing::info!(
            "Crawl complete: {} pages visited, {} URLs left in frontier",
            self.visited.len(),
            self.frontier.len()
        );

        results
    }

    /// Whether a discovered link belongs in the frontier: not attempted
    /// yet, and its host exactly equals the start URL's host. Scheme is
    /// not compared, so http/https variants of the host are in scope;
    /// sub-domains are not.
    fn should_enqueue(&self, url: &str) -> bool {
        if self.attempted.contains(url) {
            return false;
        }

        match Url::parse(url) {
            Ok(parsed) => parsed.host_str() == Some(self.scope_host.as_str()),
            Err(_) => false,
        }
    }
}
