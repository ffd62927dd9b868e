//! Coordinates and great-circle distance.

use crate::model::{NearbySchool, School};
use serde::Serialize;

/// Mean Earth radius used for all distances, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A point on the globe in decimal degrees. Always within bounds once constructed through `new`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Returns `None` when either component is out of range or not finite.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if LATITUDE_RANGE.contains(&latitude) && LONGITUDE_RANGE.contains(&longitude) {
            Some(Coordinates { latitude, longitude })
        } else {
            None
        }
    }
}

/// Distance in km between two points via the spherical law of cosines.
///
/// `6371 * acos(cos(φ1)·cos(φ2)·cos(λ2 − λ1) + sin(φ1)·sin(φ2))`. The `acos` argument is
/// clamped to [-1, 1]; rounding can push it past 1.0 for coincident points.
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlon = to.longitude.to_radians() - from.longitude.to_radians();
    let cosine = lat1.cos() * lat2.cos() * dlon.cos() + lat1.sin() * lat2.sin();
    EARTH_RADIUS_KM * cosine.clamp(-1.0, 1.0).acos()
}

/// Attach distances from `origin` and order nearest first. Equal distances keep input order.
pub fn rank_by_proximity(schools: Vec<School>, origin: Coordinates) -> Vec<NearbySchool> {
    let mut ranked: Vec<NearbySchool> = schools
        .into_iter()
        .map(|school| {
            let distance = distance_km(origin, school.coordinates());
            NearbySchool { school, distance }
        })
        .collect();
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}
