//! Listing record returned by property sources.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A single property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Source-assigned identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Asking price in euros
    pub price_eur: u64,
    /// Number of bedrooms
    pub bedrooms: u32,
    /// Usable area in square meters
    pub area_m2: f64,
    /// Geographic position of the property
    pub location: GeoPoint,
}
