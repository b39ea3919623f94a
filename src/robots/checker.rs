//! Robots.txt compliance checker
//!
//! Caches one parsed ruleset per authority. The cache fill is guarded by an
//! async lock so concurrent first-time queries for the same authority result
//! in a single robots.txt fetch.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;
use url::Url;

use crate::robots::RobotsRules;

/// Checks robots.txt compliance, fetching each domain's file at most once.
///
/// Safe to share across crawlers via `Arc`: the cache is behind an async
/// mutex, and entries are immutable once inserted (no re-fetch or staleness
/// policy — the cache lives as long as the checker).
pub struct RobotsChecker {
    client: Client,
    cache: Mutex<HashMap<String, Arc<RobotsRules>>>,
}

impl RobotsChecker {
    /// Creates a checker with an empty cache.
    ///
    /// The client is typically the same one the fetcher uses, so robots
    /// requests carry the same user agent and timeouts as page requests.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Checks whether `user_agent` may fetch `url` according to the
    /// domain's robots.txt.
    ///
    /// The ruleset for the URL's authority is fetched and cached on first
    /// query; subsequent queries for the same authority evaluate the cached
    /// copy. A domain with no robots file, or one permitting all access,
    /// yields `true` for any path.
    ///
    /// URLs without an authority have no robots policy to consult and are
    /// allowed here; the safety check is what rejects them.
    pub async fn can_fetch(&self, user_agent: &str, url: &Url) -> bool {
        let authority = match authority_of(url) {
            Some(authority) => authority,
            None => return true,
        };

        let rules = self.rules_for(&authority, url.scheme()).await;
        rules.is_allowed(user_agent, url.as_str())
    }

    /// Returns the cached ruleset for an authority, fetching it on miss.
    ///
    /// The lock is held across the fetch: a concurrent first query for the
    /// same authority waits here and then reads the cached entry, so each
    /// authority is fetched at most once per checker instance.
    async fn rules_for(&self, authority: &str, scheme: &str) -> Arc<RobotsRules> {
        let mut cache = self.cache.lock().await;

        if let Some(rules) = cache.get(authority) {
            return Arc::clone(rules);
        }

        let rules = Arc::new(self.fetch_rules(scheme, authority).await);
        cache.insert(authority.to_string(), Arc::clone(&rules));
        rules
    }

    /// Fetches and parses `<scheme>://<authority>/robots.txt`.
    ///
    /// Failure policy: 401 and 403 deny all access for the authority; any
    /// other non-200 status, and any network or body error, allows all.
    async fn fetch_rules(&self, scheme: &str, authority: &str) -> RobotsRules {
        let robots_url = format!("{}://{}/robots.txt", scheme, authority);
        tracing::debug!("Fetching robots.txt: {}", robots_url);

        let response = match self.client.get(&robots_url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {}", robots_url, e);
                return RobotsRules::allow_all();
            }
        };

        match response.status() {
            StatusCode::OK => match response.text().await {
                Ok(body) => RobotsRules::from_content(&body),
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", robots_url, e);
                    RobotsRules::allow_all()
                }
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::debug!("{} answered {}", robots_url, response.status());
                RobotsRules::deny_all()
            }
            status => {
                tracing::debug!("{} answered {}", robots_url, status);
                RobotsRules::allow_all()
            }
        }
    }
}

/// The cache key for a URL: its host, plus the port when one is present.
fn authority_of(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
