use std::time::Duration;

use tokio::time::Instant;

/// Fixed-window request counter.
#[derive(Debug, Clone)]
pub struct RateLimitEntry {
    pub count: u32,
    pub reset_at: Instant,
}

impl RateLimitEntry {
    /// First request of a new window.
    pub fn open(now: Instant, window: Duration) -> Self {
        Self {
            count: 1,
            reset_at: now + window,
        }
    }

    pub fn window_elapsed(&self, now: Instant) -> bool {
        now > self.reset_at
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.reset_at.saturating_duration_since(now)
    }
}
