//! Configuration Module
//!
//! Handles loading and managing helper configuration from environment
//! variables.

use std::env;

use crate::cache::DEFAULT_TTL_SECS;
use crate::fetch::DEFAULT_MAX_CONCURRENT_FETCHES;

/// Configuration parameters for the listing cache helper.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in seconds for cached query results
    pub default_ttl_secs: u64,
    /// Ceiling on simultaneous source fetches
    pub max_concurrent_fetches: usize,
    /// Background expiry sweep interval in seconds
    pub sweep_interval_secs: u64,
    /// Simulated per-fetch latency in milliseconds (demo only)
    pub fetch_latency_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_SECS` - Cached result freshness window (default: 300)
    /// - `MAX_CONCURRENT_FETCHES` - Fetch concurrency ceiling (default: 3)
    /// - `SWEEP_INTERVAL_SECS` - Expiry sweep cadence (default: 30)
    /// - `FETCH_LATENCY_MS` - Simulated fetch latency (default: 0)
    pub fn from_env() -> Self {
        Self {
            default_ttl_secs: env::var("DEFAULT_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
            max_concurrent_fetches: env::var("MAX_CONCURRENT_FETCHES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONCURRENT_FETCHES),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            fetch_latency_ms: env::var("FETCH_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl_secs: DEFAULT_TTL_SECS,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            sweep_interval_secs: 30,
            fetch_latency_ms: 0,
        }
    }
}
