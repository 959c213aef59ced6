//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use chrono::Utc;

// == Cache Entry ==
/// A cached query result with its storage timestamp and time-to-live.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored result
    pub data: V,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at_ms: i64,
    /// Time-to-live in milliseconds
    pub ttl_ms: i64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    ///
    /// # Arguments
    /// * `data` - The result to store
    /// * `ttl_ms` - Time-to-live in milliseconds
    pub fn new(data: V, ttl_ms: i64) -> Self {
        Self {
            data,
            stored_at_ms: current_timestamp_ms(),
            ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is valid while
    /// `now - stored_at_ms <= ttl_ms`; it becomes expired only once the
    /// elapsed time strictly exceeds the TTL.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() - self.stored_at_ms > self.ttl_ms
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, clamped to zero once elapsed.
    pub fn ttl_remaining_ms(&self) -> i64 {
        let remaining = self.ttl_ms - (current_timestamp_ms() - self.stored_at_ms);
        remaining.max(0)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(vec!["a".to_string()], 5_000);

        assert_eq!(entry.data, vec!["a".to_string()]);
        assert_eq!(entry.ttl_ms, 5_000);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("value", 50);

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new("value", 10_000);

        let remaining = entry.ttl_remaining_ms();
        assert!(remaining <= 10_000);
        assert!(remaining >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_clamped_after_expiry() {
        let entry = CacheEntry::new("value", 10);

        sleep(Duration::from_millis(50));

        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            data: "value",
            stored_at_ms: now - 100,
            ttl_ms: 1_000,
        };

        // Elapsed time is within the TTL, so the entry is still valid
        assert!(!entry.is_expired());

        let boundary = CacheEntry {
            data: "value",
            stored_at_ms: now - 2_000,
            ttl_ms: 1_000,
        };
        assert!(boundary.is_expired());
    }
}
