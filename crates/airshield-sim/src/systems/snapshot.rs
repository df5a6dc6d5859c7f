//! Snapshot assembly: flatten world + engine state into the
//! `DashboardSnapshot` handed to subscribers.

use hecs::World;

use airshield_core::components::{TrackOverrides, TrackRef};
use airshield_core::events::SimEvent;
use airshield_core::registry::{AssetSpec, TargetSpec};
use airshield_core::state::{DashboardSnapshot, EngagementLogEntry, InterceptView, TargetView};
use airshield_core::types::SimTime;

use crate::engagement::{self, Intercept};

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    specs: &[TargetSpec],
    assets: &[AssetSpec],
    intercepts: &[Intercept],
    engagement_log: &[EngagementLogEntry],
    alerted: &[String],
    pulsing: &[String],
    time: SimTime,
    events: Vec<SimEvent>,
) -> DashboardSnapshot {
    let neutralized = engagement::neutralized_target_ids(intercepts);

    // Registry order, regardless of archetype iteration order.
    let mut targets: Vec<(usize, TargetView)> = world
        .query::<(&TrackRef, &TrackOverrides)>()
        .iter()
        .map(|(_entity, (track, overrides))| {
            let spec = &specs[track.0];
            let view = TargetView {
                id: spec.id.clone(),
                classification: overrides.classification.unwrap_or(spec.classification),
                coordinates: overrides.coordinates.unwrap_or(spec.coordinates),
                distance_km: overrides.distance_km.unwrap_or(spec.distance_km),
                altitude_ft: spec.altitude_ft,
                frequency_mhz: spec.frequency_mhz,
                rssi_dbm: spec.rssi_dbm,
                heading_deg: spec.heading_deg,
                speed_kmh: spec.effective_speed_kmh(),
                confirmed: overrides.confirmed,
                neutralized: neutralized.contains(&spec.id),
                alerted: alerted.contains(&spec.id),
                pulsing: pulsing.contains(&spec.id),
            };
            (track.0, view)
        })
        .collect();
    targets.sort_by_key(|(index, _)| *index);

    DashboardSnapshot {
        time,
        targets: targets.into_iter().map(|(_, view)| view).collect(),
        assets: assets.to_vec(),
        intercepts: intercepts
            .iter()
            .map(|i| InterceptView {
                target_id: i.target_id.clone(),
                asset_id: i.asset_id.clone(),
                state: i.state,
                started_at_ms: i.started_at_ms,
                completed_at_ms: i.completed_at_ms,
            })
            .collect(),
        engagement_log: engagement_log.to_vec(),
        stats: engagement::intercept_stats(intercepts),
        alerted_target_ids: alerted.to_vec(),
        pulse_target_ids: pulsing.to_vec(),
        events,
    }
}
