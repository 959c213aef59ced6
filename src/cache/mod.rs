//! Cache Module
//!
//! Provides in-memory caching of listing query results with TTL expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::QueryCache;

// == Public Constants ==
/// Default freshness window for cached query results.
pub const DEFAULT_TTL_SECS: u64 = 300; // 5 minutes
