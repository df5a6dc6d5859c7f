//! Dashboard snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{Classification, InterceptState};
use crate::events::SimEvent;
use crate::registry::AssetSpec;
use crate::types::{GeoPoint, SimTime};

/// Complete simulation state broadcast to subscribers after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub time: SimTime,
    /// Computed targets: registry base merged with overrides.
    pub targets: Vec<TargetView>,
    /// The static asset list (immutable, included for map rendering).
    pub assets: Vec<AssetSpec>,
    pub intercepts: Vec<InterceptView>,
    /// Completed engagements, newest first, capped.
    pub engagement_log: Vec<EngagementLogEntry>,
    pub stats: InterceptStats,
    /// Targets flagged by the coverage detector (persistent emphasis).
    pub alerted_target_ids: Vec<String>,
    /// Targets with an active transient pulse highlight.
    pub pulse_target_ids: Vec<String>,
    /// Events produced during this tick.
    pub events: Vec<SimEvent>,
}

/// A target as displayed: base definition with overrides applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: String,
    pub classification: Classification,
    pub coordinates: GeoPoint,
    /// Distance to the reference point (km).
    pub distance_km: f64,
    pub altitude_ft: f64,
    pub frequency_mhz: f64,
    pub rssi_dbm: f64,
    pub heading_deg: f64,
    pub speed_kmh: f64,
    pub confirmed: bool,
    pub neutralized: bool,
    pub alerted: bool,
    pub pulsing: bool,
}

/// One engagement attempt against a target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptView {
    pub target_id: String,
    pub asset_id: String,
    pub state: InterceptState,
    pub started_at_ms: u64,
    pub completed_at_ms: Option<u64>,
}

/// Immutable record of a completed engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementLogEntry {
    pub target_id: String,
    pub asset_id: String,
    pub started_at_ms: u64,
    pub completed_at_ms: u64,
}

/// Aggregate engagement statistics, derived on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterceptStats {
    /// Intercepts that reached the `neutralized` state.
    pub neutralized: u32,
    /// Total intercepts ever created.
    pub confirmed: u32,
    /// round(neutralized / confirmed * 100); 0 when no intercepts.
    pub success_rate: u32,
}
