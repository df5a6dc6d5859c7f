//! Target drift: straight-line motion along each target's fixed heading.

use std::collections::HashSet;

use hecs::World;

use airshield_core::components::{TrackOverrides, TrackRef};
use airshield_core::constants::{DRIFT_MIN_DISTANCE_KM, REFERENCE_POINT};
use airshield_core::registry::TargetSpec;

/// Advance every live target by `delta_hours` worth of travel at its
/// own speed. Neutralized targets are frozen in place. Returns the
/// number of targets that moved.
pub fn run(
    world: &mut World,
    specs: &[TargetSpec],
    neutralized: &HashSet<String>,
    delta_hours: f64,
) -> usize {
    if delta_hours <= 0.0 {
        return 0;
    }

    let mut moved = 0;
    for (_entity, (track, overrides)) in world.query_mut::<(&TrackRef, &mut TrackOverrides)>() {
        let spec = &specs[track.0];
        if neutralized.contains(&spec.id) {
            continue;
        }

        let distance_km = spec.effective_speed_kmh() * delta_hours;
        if distance_km < DRIFT_MIN_DISTANCE_KM {
            continue;
        }

        let current = overrides.coordinates.unwrap_or(spec.coordinates);
        let next = current.destination_point(spec.heading_deg, distance_km);
        overrides.coordinates = Some(next);
        overrides.distance_km = Some(REFERENCE_POINT.distance_km(&next));
        moved += 1;
    }
    moved
}
