// Client request cache
// TTL response map plus fixed-window rate limiting, keyed by endpoint family

pub mod keys;
pub mod models;
pub mod operations;

pub use models::{CacheEntry, RateLimitEntry};
pub use operations::ApiCache;
