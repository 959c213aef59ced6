//! Fetch Module
//!
//! The outbound side of the helper: the property-source boundary and the
//! limiter that caps how many fetches run at once.

mod limiter;
mod source;

// Re-export public types
pub use limiter::FetchLimiter;
pub use source::{InMemorySource, PropertySource};

// == Public Constants ==
/// Default ceiling on simultaneous source fetches.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 3;
