//! Listing Cache - query-result caching for listing aggregation
//!
//! Provides an expiring in-memory query cache, a bounded fetch limiter,
//! and a haversine geo-filter, composed behind a listing service.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod geo;
pub mod models;
pub mod service;
pub mod tasks;

pub use config::Config;
pub use error::{ListingError, Result};
pub use service::ListingService;
pub use tasks::spawn_sweep_task;
