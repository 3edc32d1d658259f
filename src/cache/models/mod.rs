/// Cache data models

// Cached responses
pub mod entry;

// Fixed-window counters
pub mod rate_limit;

pub use entry::CacheEntry;
pub use rate_limit::RateLimitEntry;
