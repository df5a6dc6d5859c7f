//! Coverage detection: unconfirmed enemy targets inside the coverage
//! circle of any active asset are flagged for automatic confirmation.

use hecs::World;

use airshield_core::components::{TrackOverrides, TrackRef};
use airshield_core::enums::{AssetStatus, Classification};
use airshield_core::registry::{AssetSpec, TargetSpec};

/// Read-only scan. Returns the ids of targets newly caught in coverage;
/// the engine performs the confirmations so events and intercepts flow
/// through the same path as manual confirms.
///
/// An asset covers a target when the distance between them is at most
/// the asset's coverage radius (boundary inclusive). The first active
/// asset in registry order decides; asset identity is not recorded here
/// because intercept creation re-selects the nearest active asset.
pub fn run(world: &World, specs: &[TargetSpec], assets: &[AssetSpec]) -> Vec<String> {
    let mut caught = Vec::new();
    for (_entity, (track, overrides)) in world.query::<(&TrackRef, &TrackOverrides)>().iter() {
        if overrides.confirmed {
            continue;
        }
        let spec = &specs[track.0];
        let classification = overrides.classification.unwrap_or(spec.classification);
        if classification != Classification::Enemy {
            continue;
        }

        let coordinates = overrides.coordinates.unwrap_or(spec.coordinates);
        let covered = assets
            .iter()
            .filter(|a| a.status == AssetStatus::Active)
            .any(|a| a.coordinates.distance_km(&coordinates) <= a.coverage_radius_km);
        if covered {
            caught.push(spec.id.clone());
        }
    }
    caught
}
