//! Listing Cache demo binary
//!
//! Composition root for the listing cache helper: wires the query cache,
//! fetch limiter, and a seeded in-memory property source together, runs a
//! burst of queries to show caching and fetch pacing, then shuts down.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use listing_cache::cache::QueryCache;
use listing_cache::config::Config;
use listing_cache::fetch::{FetchLimiter, InMemorySource};
use listing_cache::geo::GeoPoint;
use listing_cache::models::{Listing, ListingQuery, NearFilter};
use listing_cache::service::ListingService;
use listing_cache::tasks::spawn_sweep_task;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listing_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting listing cache demo");

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_ttl={}s, max_concurrent_fetches={}, sweep_interval={}s",
        config.default_ttl_secs, config.max_concurrent_fetches, config.sweep_interval_secs
    );

    // Build the helper explicitly: no global singletons
    let cache = Arc::new(RwLock::new(QueryCache::new(Duration::from_secs(
        config.default_ttl_secs,
    ))));
    let limiter = FetchLimiter::new(config.max_concurrent_fetches);
    info!(
        "Fetch limiter ready: at most {} simultaneous fetches",
        limiter.ceiling()
    );
    let source = Arc::new(
        InMemorySource::new(seed_listings())
            .with_latency(Duration::from_millis(config.fetch_latency_ms)),
    );
    let service = Arc::new(ListingService::new(
        Arc::clone(&cache),
        limiter,
        Arc::clone(&source),
    ));

    let sweep_handle = spawn_sweep_task(service.cache(), config.sweep_interval_secs);
    info!("Background expiry sweep started");

    // Fire a burst of queries; the limiter paces the cold ones
    let queries = demo_queries();
    let mut handles = Vec::new();
    for query in queries.iter().cloned() {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            let results = service.search(&query).await?;
            info!(results = results.len(), "query completed");
            anyhow::Ok(())
        }));
    }
    for handle in handles {
        handle.await??;
    }

    // Repeat the same queries; every one is answered from the cache
    for query in &queries {
        let results = service.search(query).await?;
        info!(results = results.len(), "repeat query served from cache");
    }

    let stats = service.stats().await;
    info!(
        "Cache stats (hit rate {:.0}%): {}",
        stats.hit_rate() * 100.0,
        serde_json::to_string_pretty(&stats)?
    );
    info!(
        source_fetches = source.fetch_count(),
        "Demo complete, shutting down"
    );

    sweep_handle.abort();
    Ok(())
}

/// A handful of Portuguese listings to query against.
fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "lis-001".to_string(),
            title: "T1 in Alfama".to_string(),
            price_eur: 285_000,
            bedrooms: 1,
            area_m2: 52.0,
            location: GeoPoint::new(38.7131, -9.1290),
        },
        Listing {
            id: "lis-002".to_string(),
            title: "T3 in Campo de Ourique".to_string(),
            price_eur: 565_000,
            bedrooms: 3,
            area_m2: 128.0,
            location: GeoPoint::new(38.7169, -9.1683),
        },
        Listing {
            id: "lis-003".to_string(),
            title: "T2 in Parque das Nacoes".to_string(),
            price_eur: 430_000,
            bedrooms: 2,
            area_m2: 95.0,
            location: GeoPoint::new(38.7680, -9.0970),
        },
        Listing {
            id: "por-001".to_string(),
            title: "T2 in Cedofeita".to_string(),
            price_eur: 295_000,
            bedrooms: 2,
            area_m2: 88.0,
            location: GeoPoint::new(41.1549, -8.6200),
        },
        Listing {
            id: "por-002".to_string(),
            title: "T4 in Foz do Douro".to_string(),
            price_eur: 890_000,
            bedrooms: 4,
            area_m2: 210.0,
            location: GeoPoint::new(41.1520, -8.6740),
        },
    ]
}

/// The demo query mix: price bands, bedroom minimums, and a geo search.
fn demo_queries() -> Vec<ListingQuery> {
    vec![
        ListingQuery::default(),
        ListingQuery {
            max_price: Some(400_000),
            ..Default::default()
        },
        ListingQuery {
            min_bedrooms: Some(3),
            ..Default::default()
        },
        ListingQuery {
            near: Some(NearFilter {
                center: GeoPoint::new(38.7223, -9.1393),
                radius_km: 15.0,
            }),
            ..Default::default()
        },
        ListingQuery {
            min_price: Some(250_000),
            max_price: Some(600_000),
            min_bedrooms: Some(2),
            ..Default::default()
        },
    ]
}
