use std::time::Duration;

use dashmap::mapref::entry::Entry;
use tokio::time::Instant;

use crate::cache::models::RateLimitEntry;

use super::store::ApiCache;

/// Fixed-window counters.
///
/// Windows reset discretely, so a caller can fire up to twice the ceiling
/// across a window boundary.
impl ApiCache {
    /// Counts one request against `key` and reports whether it exceeds the
    /// ceiling. An exceeded window is never reset early.
    pub fn is_rate_limited(&self, key: &str) -> bool {
        let now = Instant::now();
        match self.rate_limits.entry(key.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(RateLimitEntry::open(now, self.window));
                false
            }
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                if entry.window_elapsed(now) {
                    *entry = RateLimitEntry::open(now, self.window);
                    return false;
                }

                entry.count = entry.count.saturating_add(1);
                if entry.count > self.max_requests {
                    tracing::warn!("Rate limit exceeded for {}", key);
                    return true;
                }
                false
            }
        }
    }

    /// Time left until the window for `key` resets.
    pub fn rate_limit_reset(&self, key: &str) -> Duration {
        self.rate_limits
            .get(key)
            .map(|entry| entry.remaining(Instant::now()))
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ceiling_then_reset() {
        let cache = ApiCache::new();
        for i in 0..10 {
            assert!(!cache.is_rate_limited("users:list:"), "call {} limited", i + 1);
        }
        assert!(cache.is_rate_limited("users:list:"));
        assert!(cache.is_rate_limited("users:list:"));

        // other keys are counted separately
        assert!(!cache.is_rate_limited("kyc:list:"));

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(!cache.is_rate_limited("users:list:"));
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_calls_do_not_move_the_window() {
        let cache = ApiCache::with_limits(Duration::from_secs(300), 2, Duration::from_secs(60));
        assert!(!cache.is_rate_limited("k"));
        assert!(!cache.is_rate_limited("k"));

        tokio::time::advance(Duration::from_secs(30)).await;
        assert!(cache.is_rate_limited("k"));
        assert_eq!(cache.rate_limit_reset("k"), Duration::from_secs(30));

        tokio::time::advance(Duration::from_secs(30)).await;
        // exactly at the boundary the old window still applies
        assert!(cache.is_rate_limited("k"));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!cache.is_rate_limited("k"));
    }

    #[test]
    fn unknown_key_has_no_wait() {
        let cache = ApiCache::new();
        assert_eq!(cache.rate_limit_reset("nothing"), Duration::ZERO);
    }
}
