//! Geo Module
//!
//! Great-circle distance and radius filtering over listing coordinates.

use serde::{Deserialize, Serialize};

use crate::models::Listing;

// == Constants ==
/// Mean Earth radius in kilometers (spherical-earth approximation).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// == Geo Point ==
/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a new point from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

// == Haversine Distance ==
/// Computes the great-circle distance between two points in kilometers.
///
/// Uses the haversine formula on a spherical earth of radius
/// [`EARTH_RADIUS_KM`]. The result is symmetric in its arguments and zero
/// for identical points.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    // Clamp guards against floating-point drift pushing h past 1.0
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

// == Radius Filter ==
/// Returns the listings within `radius_km` of `center`.
///
/// Pure function over the input slice. A listing at the exact center is
/// included for any radius >= 0; no matches yields an empty vector, not an
/// error.
pub fn filter_within_radius(listings: &[Listing], center: GeoPoint, radius_km: f64) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| haversine_km(listing.location, center) <= radius_km)
        .cloned()
        .collect()
}
