//! Domain models for the listing cache
//!
//! Defines the listing record returned by property sources and the typed
//! query filter whose serialized form is the cache key.

pub mod listing;
pub mod query;

// Re-export commonly used types
pub use listing::Listing;
pub use query::{ListingQuery, NearFilter};
