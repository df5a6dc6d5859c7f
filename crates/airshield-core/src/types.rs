//! Fundamental geographic and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::EARTH_RADIUS_KM;

/// A point on the globe in degrees. Longitude first, matching the
/// `[lng, lat]` convention of the map layer this core feeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Clock reading at the start of the tick, in milliseconds.
    pub now_ms: u64,
}

impl GeoPoint {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Great-circle distance to another point in kilometers (haversine,
    /// spherical Earth). Symmetric; zero for identical points.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let h = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
    }

    /// Destination point after traveling `distance_km` along the
    /// initial bearing `bearing_deg` (0 = North, clockwise), on a
    /// spherical Earth.
    pub fn destination_point(&self, bearing_deg: f64, distance_km: f64) -> GeoPoint {
        let lat1 = self.lat.to_radians();
        let lng1 = self.lng.to_radians();
        let bearing = bearing_deg.to_radians();
        let d = distance_km / EARTH_RADIUS_KM;

        let lat2 = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * bearing.cos()).asin();
        let lng2 = lng1
            + (bearing.sin() * d.sin() * lat1.cos())
                .atan2(d.cos() - lat1.sin() * lat2.sin());

        GeoPoint::new(lng2.to_degrees(), lat2.to_degrees())
    }
}

impl SimTime {
    /// Advance by one tick at the given clock reading.
    pub fn advance(&mut self, now_ms: u64) {
        self.tick += 1;
        self.now_ms = now_ms;
    }
}
