use std::future::Future;
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ClientError, Result};

use super::store::ApiCache;

impl ApiCache {
    /// Serves `key` from the cache unless `skip_cache`, otherwise runs
    /// `producer` under the rate limit and caches what it returns.
    ///
    /// Producer failures are passed through untouched and leave the cache alone.
    pub async fn cached_request<T, F, Fut>(
        &self,
        key: &str,
        producer: F,
        ttl: Option<Duration>,
        skip_cache: bool,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if !skip_cache {
            if let Some(hit) = self.get_as::<T>(key) {
                tracing::debug!("[Cache] Hit: {}", key);
                return Ok(hit);
            }
        }

        if self.is_rate_limited(key) {
            let wait = self.rate_limit_reset(key);
            return Err(ClientError::RateLimited {
                retry_after_secs: ceil_secs(wait),
            });
        }

        tracing::debug!("[Cache] Miss: {}", key);
        let data = producer().await?;

        match serde_json::to_value(&data) {
            Ok(value) => self.set(key, value, ttl),
            Err(e) => tracing::warn!("[Cache] Not caching {}: {}", key, e),
        }

        Ok(data)
    }

    /// Drops every family named in `prefixes`, so the next read goes to the backend.
    pub fn invalidate(&self, prefixes: &[&str]) {
        for prefix in prefixes {
            let removed = self.clear_by_prefix(prefix);
            tracing::debug!("[Cache] Invalidated {} entries under {}", removed, prefix);
        }
    }
}

fn ceil_secs(d: Duration) -> u64 {
    let millis = d.as_millis() as u64;
    millis.div_ceil(1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_producer(
        calls: &Arc<AtomicUsize>,
    ) -> impl FnOnce() -> std::future::Ready<Result<Vec<String>>> {
        let calls = calls.clone();
        move || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            std::future::ready(Ok(vec![format!("call-{}", n)]))
        }
    }

    #[tokio::test]
    async fn second_call_is_served_from_cache() {
        let cache = ApiCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let first = cache
            .cached_request("listings:stats", counting_producer(&calls), None, false)
            .await
            .unwrap();
        let second = cache
            .cached_request("listings:stats", counting_producer(&calls), None, false)
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn skip_cache_runs_the_producer_again() {
        let cache = ApiCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .cached_request("listings:stats", counting_producer(&calls), None, false)
            .await
            .unwrap();
        let fresh = cache
            .cached_request("listings:stats", counting_producer(&calls), None, true)
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(fresh, vec!["call-2".to_string()]);
        // the fresh result replaced the cached one
        assert_eq!(cache.get("listings:stats"), Some(json!(["call-2"])));
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limit_surfaces_wait_time() {
        let cache = ApiCache::with_limits(Duration::from_secs(300), 2, Duration::from_secs(60));
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            cache
                .cached_request("kyc:stats", counting_producer(&calls), None, true)
                .await
                .unwrap();
        }
        tokio::time::advance(Duration::from_millis(500)).await;
        let err = cache
            .cached_request("kyc:stats", counting_producer(&calls), None, true)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::RateLimited { retry_after_secs: 60 }));
        assert_eq!(err.to_string(), "Rate limit exceeded. Try again in 60s");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn cache_hits_skip_the_rate_limit() {
        let cache = ApiCache::with_limits(Duration::from_secs(300), 1, Duration::from_secs(60));
        let calls = Arc::new(AtomicUsize::new(0));
        for _ in 0..5 {
            cache
                .cached_request("users:list:", counting_producer(&calls), None, false)
                .await
                .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn producer_error_is_not_cached() {
        let cache = ApiCache::new();
        let err = cache
            .cached_request::<Vec<String>, _, _>(
                "users:list:",
                || async { Err(ClientError::backend("Unauthorized")) },
                None,
                false,
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized");
        assert!(cache.get("users:list:").is_none());
    }

    #[tokio::test]
    async fn mistyped_cache_entry_falls_through_to_producer() {
        let cache = ApiCache::new();
        cache.set("users:list:", json!({"unexpected": true}), None);
        let calls = Arc::new(AtomicUsize::new(0));

        let users = cache
            .cached_request("users:list:", counting_producer(&calls), None, false)
            .await
            .unwrap();
        assert_eq!(users, vec!["call-1".to_string()]);
    }

    #[test]
    fn invalidate_many_families() {
        let cache = ApiCache::new();
        cache.set("setting:all", json!(1), None);
        cache.set("setting:grouped", json!(2), None);
        cache.set("equipment:categories", json!(3), None);
        cache.set("users:list:", json!(4), None);

        cache.invalidate(&["setting:", "equipment:"]);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains_key("users:list:"));
    }

    #[test]
    fn wait_rounds_up() {
        assert_eq!(ceil_secs(Duration::from_millis(59_500)), 60);
        assert_eq!(ceil_secs(Duration::from_secs(3)), 3);
        assert_eq!(ceil_secs(Duration::ZERO), 0);
    }
}
