//! Fetch Limiter Module
//!
//! Caps the number of simultaneous source fetches with a counting
//! semaphore. Callers past the ceiling suspend cooperatively until a slot
//! frees; no thread is ever blocked.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;

// == Fetch Limiter ==
/// Bounded concurrency limiter for outbound fetches.
///
/// The permit is held for the full duration of the supplied future and is
/// released on every exit path, including errors and panics, so a failing
/// fetch can never leak a slot. Errors from the future propagate to the
/// caller unchanged; the limiter's only contract is slot release.
#[derive(Debug, Clone)]
pub struct FetchLimiter {
    permits: Arc<Semaphore>,
    ceiling: usize,
}

impl FetchLimiter {
    // == Constructor ==
    /// Creates a limiter allowing at most `ceiling` concurrent calls.
    pub fn new(ceiling: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(ceiling)),
            ceiling,
        }
    }

    // == Run ==
    /// Runs `task` once a concurrency slot is available.
    ///
    /// If the ceiling is reached, the caller suspends until any in-flight
    /// call settles. Once started, the task runs to completion; there is no
    /// cancellation or timeout here.
    pub async fn run<F, T>(&self, task: F) -> T
    where
        F: Future<Output = T>,
    {
        // The semaphore is never closed, so acquire cannot fail
        let _permit = self
            .permits
            .acquire()
            .await
            .expect("fetch limiter semaphore closed");
        task.await
    }

    // == Ceiling ==
    /// Returns the configured concurrency ceiling.
    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    // == Available Permits ==
    /// Returns the number of currently free slots.
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }
}
