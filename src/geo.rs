//! Geographic helpers for the overhead search.
//!
//! This module turns a search radius into a latitude/longitude bounding box
//! (flat-earth approximation, fine for a box a mile wide) and measures the
//! distance from the center to an aircraft on the WGS-84 ellipsoid.

use crate::error::ConfigError;
use ::geo::{GeodesicDistance, Point};

/// Statute miles spanned by one degree of latitude.
pub const MILES_PER_DEGREE: f64 = 69.0;

/// Half-width of the search box, in miles.
pub const SEARCH_RADIUS_MILES: f64 = 1.0;

/// The fixed point the search is centered on, in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

impl Center {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Converts a radius in miles to `(lat_delta, lon_delta)` degrees at `center_lat`.
///
/// Longitude degrees shrink with the cosine of latitude, so the longitude
/// delta is stretched to keep the box roughly square on the ground.
///
/// # Errors
///
/// Returns [`ConfigError::PoleLatitude`] when `|center_lat| >= 90`, where a
/// degree of longitude has no width.
pub fn miles_to_latlon(miles: f64, center_lat: f64) -> Result<(f64, f64), ConfigError> {
    if center_lat.abs() >= 90.0 {
        return Err(ConfigError::PoleLatitude(center_lat));
    }
    let lat_delta = miles / MILES_PER_DEGREE;
    let lon_delta = miles / (MILES_PER_DEGREE * center_lat.to_radians().cos());
    Ok((lat_delta, lon_delta))
}

/// A lat/lon rectangle used to constrain the live-positions query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Builds the box extending `miles` in every direction from `center`.
    pub fn around(center: Center, miles: f64) -> Result<Self, ConfigError> {
        let (lat_delta, lon_delta) = miles_to_latlon(miles, center.lat)?;
        Ok(Self {
            north: center.lat + lat_delta,
            south: center.lat - lat_delta,
            west: center.lon - lon_delta,
            east: center.lon + lon_delta,
        })
    }

    /// Renders the `bounds` query value: `north,south,west,east`.
    pub fn query_value(&self) -> String {
        format!("{},{},{},{}", self.north, self.south, self.west, self.east)
    }
}

/// Geodesic surface distance in meters between `center` and `(lat, lon)`.
pub fn geodesic_distance_m(center: Center, lat: f64, lon: f64) -> f64 {
    let from = Point::new(center.lon, center.lat);
    let to = Point::new(lon, lat);
    from.geodesic_distance(&to)
}
