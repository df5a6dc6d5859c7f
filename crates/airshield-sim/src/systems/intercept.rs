//! Intercept lifecycle: asset selection and timed state transitions.

use tracing::info;

use airshield_core::constants::ENGAGEMENT_LOG_CAP;
use airshield_core::enums::{AssetStatus, InterceptState};
use airshield_core::events::SimEvent;
use airshield_core::registry::AssetSpec;
use airshield_core::state::EngagementLogEntry;
use airshield_core::types::GeoPoint;

use crate::engagement::Intercept;

/// Pick the active asset closest to `from`. Ties keep the earlier asset
/// in registry order.
pub fn nearest_active_asset<'a>(assets: &'a [AssetSpec], from: GeoPoint) -> Option<&'a AssetSpec> {
    let mut best: Option<(&AssetSpec, f64)> = None;
    for asset in assets.iter().filter(|a| a.status == AssetStatus::Active) {
        let d = asset.coordinates.distance_km(&from);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((asset, d)),
        }
    }
    best.map(|(asset, _)| asset)
}

/// Advance every live intercept past any deadline it has reached. The
/// neutralize deadline wins outright when both have passed, so a
/// stalled engine never reports a stale `engaging` phase.
pub fn run(
    intercepts: &mut [Intercept],
    log: &mut Vec<EngagementLogEntry>,
    now_ms: u64,
    events: &mut Vec<SimEvent>,
) {
    for intercept in intercepts.iter_mut() {
        if intercept.state == InterceptState::Neutralized {
            continue;
        }
        if now_ms >= intercept.neutralize_at_ms {
            transition(intercept, InterceptState::Neutralized, now_ms, log, events);
        } else if intercept.state == InterceptState::Vectoring && now_ms >= intercept.engage_at_ms {
            transition(intercept, InterceptState::Engaging, now_ms, log, events);
        }
    }
}

/// Apply a state change to one intercept. Neutralized is terminal; a
/// transition into it stamps the completion time and prepends a log
/// entry (newest first, capped). Returns whether anything changed.
pub fn transition(
    intercept: &mut Intercept,
    state: InterceptState,
    now_ms: u64,
    log: &mut Vec<EngagementLogEntry>,
    events: &mut Vec<SimEvent>,
) -> bool {
    if intercept.state == InterceptState::Neutralized || intercept.state == state {
        return false;
    }
    intercept.state = state;
    match state {
        InterceptState::Engaging => {
            events.push(SimEvent::InterceptEngaging {
                target_id: intercept.target_id.clone(),
            });
        }
        InterceptState::Neutralized => {
            intercept.completed_at_ms = Some(now_ms);
            log.insert(
                0,
                EngagementLogEntry {
                    target_id: intercept.target_id.clone(),
                    asset_id: intercept.asset_id.clone(),
                    started_at_ms: intercept.started_at_ms,
                    completed_at_ms: now_ms,
                },
            );
            log.truncate(ENGAGEMENT_LOG_CAP);
            events.push(SimEvent::TargetNeutralized {
                target_id: intercept.target_id.clone(),
                asset_id: intercept.asset_id.clone(),
            });
            info!(
                target_id = %intercept.target_id,
                asset_id = %intercept.asset_id,
                "target neutralized"
            );
        }
        InterceptState::Vectoring => {}
    }
    true
}
