//! Simulation constants and tuning parameters.

use crate::types::GeoPoint;

/// Mean Earth radius in kilometers (spherical model).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Nominal interval between engine ticks (milliseconds). Drift runs
/// every tick and compensates with the actual clock delta, so the
/// embedding loop may jitter around this cadence.
pub const TICK_INTERVAL_MS: u64 = 500;

/// Interval between coverage-detection passes (milliseconds).
pub const COVERAGE_INTERVAL_MS: u64 = 2000;

/// Minimum drift distance worth applying (kilometers). Movements below
/// this leave the target's overrides untouched.
pub const DRIFT_MIN_DISTANCE_KM: f64 = 0.0001;

/// Drift speed assumed for targets without an explicit speed (km/h).
pub const DEFAULT_TARGET_SPEED_KMH: f64 = 35.0;

// --- Intercept lifecycle ---

/// Delay from intercept creation to the `engaging` transition (ms).
/// Display-only; does not gate neutralization.
pub const VECTORING_DURATION_MS: u64 = 3000;

/// Delay from intercept creation to the `neutralized` transition (ms).
/// Measured from creation, not chained after `engaging`.
pub const NEUTRALIZE_DURATION_MS: u64 = 8000;

/// Maximum number of retained engagement log entries (newest first).
pub const ENGAGEMENT_LOG_CAP: usize = 50;

// --- Display ---

/// Duration of the transient pulse highlight on a target (ms).
pub const PULSE_DURATION_MS: u64 = 2000;

/// Reference point that target distance readouts are measured from
/// (the dashboard's operating-area center, Jammu region).
pub const REFERENCE_POINT: GeoPoint = GeoPoint::new(75.1072, 32.5574);
