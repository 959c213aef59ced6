//! Property Source Module
//!
//! The async boundary between the helper and whatever actually produces
//! listings. The service only ever talks to the `PropertySource` trait, so
//! tests run against a deterministic in-memory implementation instead of
//! wall-clock network delays.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::geo::filter_within_radius;
use crate::models::{Listing, ListingQuery};

// == Property Source Trait ==
/// An asynchronous provider of property listings.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetches the listings matching `query`.
    ///
    /// An empty result is a successful fetch; errors are reserved for the
    /// source itself failing.
    async fn fetch(&self, query: &ListingQuery) -> Result<Vec<Listing>>;
}

// == In-Memory Source ==
/// A property source backed by a seeded in-memory listing set.
///
/// Applies the query's price, bedroom, and geo-radius filters over the
/// seed data. Latency is zero by default so tests stay deterministic; the
/// demo configures a small delay to make the limiter observable.
#[derive(Debug)]
pub struct InMemorySource {
    listings: Vec<Listing>,
    latency: Duration,
    fetch_count: AtomicU64,
}

impl InMemorySource {
    // == Constructor ==
    /// Creates a source over the given listings with no simulated latency.
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            latency: Duration::ZERO,
            fetch_count: AtomicU64::new(0),
        }
    }

    // == With Latency ==
    /// Sets a fixed per-fetch latency, for demos and pacing experiments.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    // == Fetch Count ==
    /// Returns how many fetches this source has served.
    ///
    /// Lets callers verify that cached queries never reach the source.
    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::SeqCst)
    }

    fn matches(&self, listing: &Listing, query: &ListingQuery) -> bool {
        if let Some(min) = query.min_price {
            if listing.price_eur < min {
                return false;
            }
        }
        if let Some(max) = query.max_price {
            if listing.price_eur > max {
                return false;
            }
        }
        if let Some(min_bedrooms) = query.min_bedrooms {
            if listing.bedrooms < min_bedrooms {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl PropertySource for InMemorySource {
    async fn fetch(&self, query: &ListingQuery) -> Result<Vec<Listing>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut results: Vec<Listing> = self
            .listings
            .iter()
            .filter(|listing| self.matches(listing, query))
            .cloned()
            .collect();

        if let Some(near) = &query.near {
            results = filter_within_radius(&results, near.center, near.radius_km);
        }

        debug!(
            matched = results.len(),
            total = self.listings.len(),
            "in-memory source served fetch"
        );

        Ok(results)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::models::query::NearFilter;

    fn seed() -> Vec<Listing> {
        vec![
            Listing {
                id: "cheap-t1".to_string(),
                title: "T1 near Alameda".to_string(),
                price_eur: 180_000,
                bedrooms: 1,
                area_m2: 55.0,
                location: GeoPoint::new(38.7370, -9.1335),
            },
            Listing {
                id: "mid-t3".to_string(),
                title: "T3 in Campo de Ourique".to_string(),
                price_eur: 520_000,
                bedrooms: 3,
                area_m2: 130.0,
                location: GeoPoint::new(38.7169, -9.1683),
            },
            Listing {
                id: "porto-t2".to_string(),
                title: "T2 in Cedofeita".to_string(),
                price_eur: 290_000,
                bedrooms: 2,
                area_m2: 92.0,
                location: GeoPoint::new(41.1549, -8.6200),
            },
        ]
    }

    #[tokio::test]
    async fn test_fetch_unfiltered_returns_all() {
        let source = InMemorySource::new(seed());

        let results = source.fetch(&ListingQuery::default()).await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_price_range() {
        let source = InMemorySource::new(seed());

        let query = ListingQuery {
            min_price: Some(200_000),
            max_price: Some(400_000),
            ..Default::default()
        };
        let results = source.fetch(&query).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "porto-t2");
    }

    #[tokio::test]
    async fn test_fetch_min_bedrooms() {
        let source = InMemorySource::new(seed());

        let query = ListingQuery {
            min_bedrooms: Some(2),
            ..Default::default()
        };
        let results = source.fetch(&query).await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_geo_radius() {
        let source = InMemorySource::new(seed());

        // 20 km around central Lisbon excludes the Porto listing
        let query = ListingQuery {
            near: Some(NearFilter {
                center: GeoPoint::new(38.7223, -9.1393),
                radius_km: 20.0,
            }),
            ..Default::default()
        };
        let results = source.fetch(&query).await.unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|l| l.id != "porto-t2"));
    }

    #[tokio::test]
    async fn test_fetch_no_matches_is_empty_not_error() {
        let source = InMemorySource::new(seed());

        let query = ListingQuery {
            min_price: Some(10_000_000),
            ..Default::default()
        };
        let results = source.fetch(&query).await.unwrap();
        assert!(results.is_empty());
    }
}
