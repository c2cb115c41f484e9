//! # Geodistance
//!
//! Great-circle distance between coordinates and the check-in geofence.

use crate::error::{AppError, Result};
use lib_utils::{validate_latitude, validate_longitude};
use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Farthest a member may stand from a gym and still check in. Also the
/// radius of the "nearby gyms" search.
pub const MAX_DISTANCE_KM: f64 = 0.1;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting out-of-range or non-finite values.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        validate_latitude(latitude).map_err(AppError::Validation)?;
        validate_longitude(longitude).map_err(AppError::Validation)?;
        Ok(Self { latitude, longitude })
    }

    /// Distance to `other` in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance_between_coordinates(*self, *other)
    }
}

/// Haversine distance in kilometers.
///
/// The haversine term is clamped to `[0, 1]`; rounding can push it just
/// outside that range for antipodal points, which would make `sqrt`/`asin`
/// return NaN.
pub fn distance_between_coordinates(from: Coordinate, to: Coordinate) -> f64 {
    if from == to {
        return 0.0;
    }

    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lng / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Latitude/longitude box that contains every point within `radius_km` of
/// `center`. Used as a cheap SQL prefilter before the exact distance check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    pub fn around(center: Coordinate, radius_km: f64) -> Self {
        let lat_delta = (radius_km / EARTH_RADIUS_KM).to_degrees();
        let min_latitude = (center.latitude - lat_delta).max(-90.0);
        let max_latitude = (center.latitude + lat_delta).min(90.0);

        // Near the poles or across the antimeridian the longitude span
        // degenerates; fall back to the full range there.
        let cos_lat = center.latitude.to_radians().cos();
        let lng_delta = if cos_lat > 1e-6 {
            (radius_km / (EARTH_RADIUS_KM * cos_lat)).to_degrees()
        } else {
            180.0
        };
        let (min_longitude, max_longitude) =
            if center.longitude - lng_delta < -180.0 || center.longitude + lng_delta > 180.0 {
                (-180.0, 180.0)
            } else {
                (center.longitude - lng_delta, center.longitude + lng_delta)
            };

        Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        }
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&point.latitude)
            && (self.min_longitude..=self.max_longitude).contains(&point.longitude)
    }
}
