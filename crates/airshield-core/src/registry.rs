//! Static entity registry: asset and target base definitions.
//!
//! Assets are immutable for the lifetime of the simulation. Targets
//! are base definitions; mutable state lives in the sim crate's
//! `TrackOverrides` components.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TARGET_SPEED_KMH;
use crate::enums::{AssetStatus, Classification};
use crate::types::GeoPoint;

/// A fixed-position sensor/effector platform with a circular coverage
/// area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSpec {
    pub id: String,
    pub name: String,
    pub status: AssetStatus,
    pub altitude_ft: f64,
    pub area: String,
    pub coordinates: GeoPoint,
    pub coverage_radius_km: f64,
}

/// Base definition of a tracked airborne target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSpec {
    pub id: String,
    pub classification: Classification,
    /// Distance to the reference point at startup (km).
    pub distance_km: f64,
    pub altitude_ft: f64,
    pub frequency_mhz: f64,
    pub rssi_dbm: f64,
    /// Drift heading in degrees (0 = North, clockwise).
    pub heading_deg: f64,
    pub coordinates: GeoPoint,
    /// Drift speed in km/h. `None` falls back to the default.
    pub speed_kmh: Option<f64>,
}

impl TargetSpec {
    /// Drift speed with the default applied.
    pub fn effective_speed_kmh(&self) -> f64 {
        self.speed_kmh.unwrap_or(DEFAULT_TARGET_SPEED_KMH)
    }
}

/// The five mock Airshield batteries in the Jammu operating area.
pub fn default_assets() -> Vec<AssetSpec> {
    vec![
        AssetSpec {
            id: "asset-001".into(),
            name: "Airshield-001".into(),
            status: AssetStatus::Active,
            altitude_ft: 500.0,
            area: "Samba".into(),
            coordinates: GeoPoint::new(75.1072, 32.5574),
            coverage_radius_km: 15.0,
        },
        AssetSpec {
            id: "asset-002".into(),
            name: "Airshield-002".into(),
            status: AssetStatus::Active,
            altitude_ft: 500.0,
            area: "Samba".into(),
            coordinates: GeoPoint::new(75.2134, 32.4821),
            coverage_radius_km: 12.0,
        },
        AssetSpec {
            id: "asset-003".into(),
            name: "Airshield-003".into(),
            status: AssetStatus::Inactive,
            altitude_ft: 500.0,
            area: "Jammu".into(),
            coordinates: GeoPoint::new(74.8573, 32.7266),
            coverage_radius_km: 18.0,
        },
        AssetSpec {
            id: "asset-004".into(),
            name: "Airshield-004".into(),
            status: AssetStatus::Active,
            altitude_ft: 500.0,
            area: "Kathua".into(),
            coordinates: GeoPoint::new(75.5194, 32.3868),
            coverage_radius_km: 14.0,
        },
        AssetSpec {
            id: "asset-005".into(),
            name: "Airshield-005".into(),
            status: AssetStatus::Active,
            altitude_ft: 500.0,
            area: "Pathankot".into(),
            coordinates: GeoPoint::new(75.6421, 32.2747),
            coverage_radius_km: 16.0,
        },
    ]
}

/// The six mock drone tracks.
pub fn default_targets() -> Vec<TargetSpec> {
    vec![
        TargetSpec {
            id: "drone-001".into(),
            classification: Classification::Enemy,
            distance_km: 11.2,
            altitude_ft: 500.0,
            frequency_mhz: 2400.0,
            rssi_dbm: -56.6,
            heading_deg: 245.0,
            coordinates: GeoPoint::new(75.0312, 32.6142),
            speed_kmh: Some(38.0),
        },
        TargetSpec {
            id: "drone-002".into(),
            classification: Classification::Enemy,
            distance_km: 3.8,
            altitude_ft: 350.0,
            frequency_mhz: 5800.0,
            rssi_dbm: -48.2,
            heading_deg: 178.0,
            coordinates: GeoPoint::new(75.1847, 32.5023),
            speed_kmh: Some(42.0),
        },
        TargetSpec {
            id: "drone-003".into(),
            classification: Classification::Unknown,
            distance_km: 8.4,
            altitude_ft: 600.0,
            frequency_mhz: 915.0,
            rssi_dbm: -62.1,
            heading_deg: 312.0,
            coordinates: GeoPoint::new(74.9256, 32.7891),
            speed_kmh: Some(28.0),
        },
        TargetSpec {
            id: "drone-004".into(),
            classification: Classification::Friendly,
            distance_km: 2.1,
            altitude_ft: 400.0,
            frequency_mhz: 2400.0,
            rssi_dbm: -41.5,
            heading_deg: 90.0,
            coordinates: GeoPoint::new(75.3421, 32.4156),
            speed_kmh: Some(35.0),
        },
        TargetSpec {
            id: "drone-005".into(),
            classification: Classification::Enemy,
            distance_km: 15.7,
            altitude_ft: 750.0,
            frequency_mhz: 433.0,
            rssi_dbm: -71.3,
            heading_deg: 156.0,
            coordinates: GeoPoint::new(74.7834, 32.8234),
            speed_kmh: Some(45.0),
        },
        TargetSpec {
            id: "drone-006".into(),
            classification: Classification::Unknown,
            distance_km: 6.3,
            altitude_ft: 280.0,
            frequency_mhz: 5800.0,
            rssi_dbm: -53.8,
            heading_deg: 267.0,
            coordinates: GeoPoint::new(75.4512, 32.3089),
            speed_kmh: Some(32.0),
        },
    ]
}
