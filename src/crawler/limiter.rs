//! Request pacing
//!
//! Enforces a minimum interval between any two outbound requests made
//! through one limiter instance.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Rate limiter enforcing a minimum spacing between requests.
///
/// Share one instance (behind `Arc`) across fetchers to give several
/// concurrent crawls a single pacing budget.
pub struct RateLimiter {
    delay: Duration,
    last_grant: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Creates a limiter with the given minimum inter-request interval.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_grant: Mutex::new(None),
        }
    }

    /// The configured minimum interval.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits until the minimum interval since the previous grant has
    /// passed, then records the new grant.
    ///
    /// The wait happens while the lock is held, so concurrent callers are
    /// serialized and none computes its wait from a stale timestamp. The
    /// start times of any two consecutive grants are at least `delay`
    /// apart; with a zero delay this never suspends.
    pub async fn acquire(&self) {
        let mut last_grant = self.last_grant.lock().await;

        if let Some(previous) = *last_grant {
            let elapsed = previous.elapsed();
            if elapsed < self.delay {
                tokio::time::sleep(self.delay - elapsed).await;
            }
        }

        *last_grant = Some(Instant::now());
    }
}
