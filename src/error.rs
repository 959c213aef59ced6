//! Error types for the listing cache
//!
//! Provides unified error handling using thiserror.
//!
//! Cache misses and expirations are deliberately NOT errors; the cache API
//! returns `Option` for those. Errors here cover invalid queries and
//! failures reported by a property source, which propagate unchanged
//! through the fetch limiter.

use thiserror::Error;

// == Listing Error Enum ==
/// Unified error type for the listing cache.
#[derive(Error, Debug)]
pub enum ListingError {
    /// Query failed validation
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A property source failed to produce results
    #[error("Source error: {0}")]
    Source(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == Result Type Alias ==
/// Convenience Result type for the listing cache.
pub type Result<T> = std::result::Result<T, ListingError>;
