//! Query Cache Module
//!
//! Main cache engine combining HashMap storage with TTL expiration. Misses
//! and expirations surface as `None`, never as errors; an expired entry is
//! removed eagerly on read or by `clear_expired`.

use std::collections::HashMap;
use std::time::Duration;

use tracing::trace;

use crate::cache::{CacheEntry, CacheStats};
use crate::models::Listing;

// == Query Cache ==
/// In-memory cache of listing query results keyed by serialized query.
#[derive(Debug)]
pub struct QueryCache {
    /// Key to cached-result storage
    entries: HashMap<String, CacheEntry<Vec<Listing>>>,
    /// Performance statistics
    stats: CacheStats,
    /// Default TTL applied when a set does not specify one
    default_ttl: Duration,
}

impl QueryCache {
    // == Constructor ==
    /// Creates a new QueryCache with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a query result with an optional TTL.
    ///
    /// If the key already exists, the entry is overwritten and its TTL
    /// reset. `None` uses the configured default TTL. Never fails.
    pub fn set(&mut self, key: String, data: Vec<Listing>, ttl: Option<Duration>) {
        let ttl_ms = ttl.unwrap_or(self.default_ttl).as_millis() as i64;
        self.entries.insert(key, CacheEntry::new(data, ttl_ms));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a cached result by key.
    ///
    /// Returns `None` for both "never cached" and "expired"; an expired
    /// entry is removed on the way out. Valid reads and misses are counted
    /// in the statistics.
    pub fn get(&mut self, key: &str) -> Option<Vec<Listing>> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_expired();
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                trace!(
                    ttl_remaining_ms = entry.ttl_remaining_ms(),
                    "serving cached result"
                );
                self.stats.record_hit();
                Some(entry.data.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Clear Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Intended to run on a periodic timer external to the cache. Returns
    /// the number of entries removed.
    pub fn clear_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in &expired_keys {
            self.entries.remove(key);
            self.stats.record_expired();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
