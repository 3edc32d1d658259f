/// Cache operations

// Response map
pub mod store;

// Fixed-window counters
pub mod rate_limit;

// Read-through orchestration and invalidation
pub mod request;

pub use store::ApiCache;
