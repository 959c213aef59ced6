//! Typed listing query filter.
//!
//! The query struct doubles as the cache key: serializing a derived
//! `Serialize` struct emits fields in declaration order, so the same filter
//! always produces the same key regardless of call site. This replaces
//! ad-hoc stringification of untyped filter maps, whose key ordering is not
//! stable.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Geographic constraint: listings within `radius_km` of `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearFilter {
    /// Center of the search circle
    pub center: GeoPoint,
    /// Search radius in kilometers
    pub radius_km: f64,
}

/// Filter criteria for a listing search.
///
/// All fields are optional; an empty query matches every listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Minimum asking price in euros (inclusive)
    #[serde(default)]
    pub min_price: Option<u64>,
    /// Maximum asking price in euros (inclusive)
    #[serde(default)]
    pub max_price: Option<u64>,
    /// Minimum number of bedrooms
    #[serde(default)]
    pub min_bedrooms: Option<u32>,
    /// Geographic radius constraint
    #[serde(default)]
    pub near: Option<NearFilter>,
}

impl ListingQuery {
    /// Validates the query.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Some(format!(
                    "min_price {} exceeds max_price {}",
                    min, max
                ));
            }
        }
        if let Some(near) = &self.near {
            if near.radius_km < 0.0 || !near.radius_km.is_finite() {
                return Some(format!("invalid search radius {}", near.radius_km));
            }
        }
        None
    }

    /// Returns the deterministic cache key for this query.
    ///
    /// Field order in the serialized form follows struct declaration order,
    /// so two equal queries always map to the same key.
    pub fn cache_key(&self) -> String {
        // Serialization of this struct cannot fail: no maps, no non-string keys
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_deterministic() {
        let a = ListingQuery {
            min_price: Some(100_000),
            max_price: Some(500_000),
            min_bedrooms: Some(2),
            near: Some(NearFilter {
                center: GeoPoint::new(38.7223, -9.1393),
                radius_km: 10.0,
            }),
        };
        let b = a.clone();

        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_cache_key_differs_for_different_filters() {
        let a = ListingQuery {
            min_bedrooms: Some(2),
            ..Default::default()
        };
        let b = ListingQuery {
            min_bedrooms: Some(3),
            ..Default::default()
        };

        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_validate_price_range_order() {
        let query = ListingQuery {
            min_price: Some(500_000),
            max_price: Some(100_000),
            ..Default::default()
        };
        assert!(query.validate().is_some());
    }

    #[test]
    fn test_validate_negative_radius() {
        let query = ListingQuery {
            near: Some(NearFilter {
                center: GeoPoint::new(0.0, 0.0),
                radius_km: -1.0,
            }),
            ..Default::default()
        };
        assert!(query.validate().is_some());
    }

    #[test]
    fn test_validate_empty_query_is_valid() {
        assert!(ListingQuery::default().validate().is_none());
    }
}
