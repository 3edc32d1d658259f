use std::time::Duration;

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::Instant;

use crate::cache::models::{CacheEntry, RateLimitEntry};
use crate::config::Config;

pub(crate) const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
pub(crate) const DEFAULT_MAX_REQUESTS: u32 = 10;
pub(crate) const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// In-memory response cache plus per-key request counters.
///
/// One instance is shared by every call site of an [`ApiClient`](crate::ApiClient);
/// both maps live for the lifetime of the process and are only shrunk by
/// lazy expiry or explicit invalidation.
pub struct ApiCache {
    pub(super) entries: DashMap<String, CacheEntry>,
    pub(super) rate_limits: DashMap<String, RateLimitEntry>,
    pub(super) default_ttl: Duration,
    pub(super) max_requests: u32,
    pub(super) window: Duration,
}

impl Default for ApiCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiCache {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_TTL, DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW)
    }

    pub fn with_limits(default_ttl: Duration, max_requests: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            rate_limits: DashMap::new(),
            default_ttl,
            max_requests,
            window,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_limits(
            config.cache_ttl(),
            config.rate_limit_requests,
            config.rate_limit_window(),
        )
    }

    /// Cached value for `key`, evicting it if it has expired.
    pub fn get(&self, key: &str) -> Option<Value> {
        let now = Instant::now();
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
            Some(_) => {}
            None => return None,
        }
        self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        None
    }

    /// Typed read. A value that no longer fits `T` reads as a miss.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::debug!("[Cache] Unreadable entry for {}: {}", key, e);
                None
            }
        }
    }

    /// Stores `value` for `ttl`, or the default TTL when `ttl` is absent or zero.
    pub fn set(&self, key: &str, value: Value, ttl: Option<Duration>) {
        let ttl = ttl.filter(|d| !d.is_zero()).unwrap_or(self.default_ttl);
        self.entries
            .insert(key.to_string(), CacheEntry::new(value, ttl, Instant::now()));
    }

    pub fn clear(&self, key: &str) {
        self.entries.remove(key);
    }

    pub fn clear_all(&self) {
        self.entries.clear();
    }

    /// Drops every entry whose key starts with `prefix`. Returns how many went.
    pub fn clear_by_prefix(&self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
