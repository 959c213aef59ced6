//! Listing Service Module
//!
//! The cache-and-coordinate helper: answers repeated queries from the
//! expiring cache and routes cold queries to the property source through
//! the fetch limiter. Built once by the composition root and passed by
//! reference; there is no module-level state.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{CacheStats, QueryCache};
use crate::error::{ListingError, Result};
use crate::fetch::{FetchLimiter, PropertySource};
use crate::models::{Listing, ListingQuery};

// == Listing Service ==
/// Coordinates the query cache, fetch limiter, and property source.
pub struct ListingService<S: PropertySource> {
    cache: Arc<RwLock<QueryCache>>,
    limiter: FetchLimiter,
    source: Arc<S>,
}

impl<S: PropertySource> ListingService<S> {
    // == Constructor ==
    /// Creates a service over the given cache, limiter, and source.
    pub fn new(cache: Arc<RwLock<QueryCache>>, limiter: FetchLimiter, source: Arc<S>) -> Self {
        Self {
            cache,
            limiter,
            source,
        }
    }

    // == Search ==
    /// Returns the listings matching `query`, from cache when fresh.
    ///
    /// On a miss the fetch runs through the limiter and the result is
    /// stored under the query's key with the default TTL. A failed fetch
    /// propagates unchanged and caches nothing.
    pub async fn search(&self, query: &ListingQuery) -> Result<Vec<Listing>> {
        if let Some(message) = query.validate() {
            return Err(ListingError::InvalidQuery(message));
        }

        let key = query.cache_key();

        // get() mutates on expired reads, so a write lock is needed
        if let Some(cached) = self.cache.write().await.get(&key) {
            debug!(%key, results = cached.len(), "cache hit");
            return Ok(cached);
        }

        debug!(%key, "cache miss, fetching from source");
        let results = self.limiter.run(self.source.fetch(query)).await?;

        self.cache
            .write()
            .await
            .set(key.clone(), results.clone(), None);
        info!(%key, results = results.len(), "fetched and cached");

        Ok(results)
    }

    // == Clear Cache ==
    /// Drops every cached result.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    // == Cache Handle ==
    /// Returns the shared cache handle, for wiring the sweep task.
    pub fn cache(&self) -> Arc<RwLock<QueryCache>> {
        Arc::clone(&self.cache)
    }
}
