//! Robots.txt ruleset wrapper
//!
//! A thin layer over the robotstxt crate, adding the allow-all and deny-all
//! sentinels used when a robots file is missing or unwelcoming.

use robotstxt::DefaultMatcher;

/// A parsed robots ruleset for one domain.
#[derive(Debug, Clone)]
pub struct RobotsRules {
    /// Raw robots.txt body; empty means the default verdict applies.
    content: String,
    /// Verdict for every URL when no body was obtained.
    default_verdict: bool,
}

impl RobotsRules {
    /// Wraps raw robots.txt content for later evaluation.
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            default_verdict: true,
        }
    }

    /// A ruleset permitting all access.
    ///
    /// Used when a domain publishes no robots file, or when fetching it
    /// failed in a way that does not signal crawlers are unwelcome.
    pub fn allow_all() -> Self {
        Self {
            content: String::new(),
            default_verdict: true,
        }
    }

    /// A ruleset denying all access.
    ///
    /// Used when the robots.txt request itself was answered 401 or 403.
    pub fn deny_all() -> Self {
        Self {
            content: String::new(),
            default_verdict: false,
        }
    }

    /// Evaluates the ruleset for a user agent and URL.
    pub fn is_allowed(&self, user_agent: &str, url: &str) -> bool {
        if self.content.is_empty() {
            return self.default_verdict;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, user_agent, url)
    }
}
