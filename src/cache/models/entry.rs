use std::time::Duration;

use serde_json::Value;
use tokio::time::Instant;

/// A cached response body.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Value,
    pub created_at: Instant,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn new(value: Value, ttl: Duration, now: Instant) -> Self {
        Self {
            value,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Expired once the full TTL has elapsed. A read landing exactly on
    /// `expires_at` is a miss, so a 1000 ms entry serves reads up to 999 ms.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
