//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries. The
//! cache also drops expired entries lazily on read; the sweep keeps
//! untouched keys from lingering past their TTL.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::QueryCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires a write lock on the cache to remove expired
/// entries.
///
/// # Arguments
/// * `cache` - Shared reference to the query cache
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during shutdown.
pub fn spawn_sweep_task(
    cache: Arc<RwLock<QueryCache>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.clear_expired()
            };

            if removed > 0 {
                info!("Expiry sweep: removed {} stale entries", removed);
            } else {
                debug!("Expiry sweep: nothing to remove");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn empty_cache() -> Arc<RwLock<QueryCache>> {
        Arc::new(RwLock::new(QueryCache::new(Duration::from_secs(300))))
    }

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let cache = empty_cache();

        {
            let mut cache_guard = cache.write().await;
            cache_guard.set(
                "expire_soon".to_string(),
                Vec::new(),
                Some(Duration::from_millis(100)),
            );
        }

        let handle = spawn_sweep_task(cache.clone(), 1);

        // Wait for the entry to expire and a sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        {
            let cache_guard = cache.read().await;
            assert_eq!(
                cache_guard.len(),
                0,
                "Expired entry should have been swept"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_valid_entries() {
        let cache = empty_cache();

        {
            let mut cache_guard = cache.write().await;
            cache_guard.set(
                "long_lived".to_string(),
                Vec::new(),
                Some(Duration::from_secs(3600)),
            );
        }

        let handle = spawn_sweep_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut cache_guard = cache.write().await;
            assert!(
                cache_guard.get("long_lived").is_some(),
                "Valid entry should not be swept"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache = empty_cache();

        let handle = spawn_sweep_task(cache, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
