//! Engagement bookkeeping: live intercepts and derived statistics.
//!
//! Intercepts are plain engine-owned records rather than ECS entities;
//! there are few of them and they are keyed by target id.

use std::collections::HashSet;

use airshield_core::constants::{NEUTRALIZE_DURATION_MS, VECTORING_DURATION_MS};
use airshield_core::enums::InterceptState;
use airshield_core::state::InterceptStats;

/// A live engagement of one asset against one target.
///
/// Both phase deadlines are absolute and measured from creation, so an
/// engine that stalls past the engaging window jumps straight to
/// neutralized.
#[derive(Debug, Clone)]
pub struct Intercept {
    pub target_id: String,
    pub asset_id: String,
    pub state: InterceptState,
    pub started_at_ms: u64,
    pub completed_at_ms: Option<u64>,
    /// When the vectoring phase ends (display-only transition).
    pub engage_at_ms: u64,
    /// When the target is neutralized.
    pub neutralize_at_ms: u64,
}

impl Intercept {
    pub fn new(target_id: &str, asset_id: &str, now_ms: u64) -> Self {
        Self {
            target_id: target_id.to_owned(),
            asset_id: asset_id.to_owned(),
            state: InterceptState::Vectoring,
            started_at_ms: now_ms,
            completed_at_ms: None,
            engage_at_ms: now_ms + VECTORING_DURATION_MS,
            neutralize_at_ms: now_ms + NEUTRALIZE_DURATION_MS,
        }
    }
}

/// Aggregate statistics over every intercept created this session.
pub fn intercept_stats(intercepts: &[Intercept]) -> InterceptStats {
    let confirmed = intercepts.len() as u32;
    let neutralized = intercepts
        .iter()
        .filter(|i| i.state == InterceptState::Neutralized)
        .count() as u32;
    let success_rate = if confirmed == 0 {
        0
    } else {
        (f64::from(neutralized) / f64::from(confirmed) * 100.0).round() as u32
    };
    InterceptStats {
        neutralized,
        confirmed,
        success_rate,
    }
}

/// Ids of targets whose intercept has completed. Neutralized targets
/// stop drifting and render as defeated.
pub fn neutralized_target_ids(intercepts: &[Intercept]) -> HashSet<String> {
    intercepts
        .iter()
        .filter(|i| i.state == InterceptState::Neutralized)
        .map(|i| i.target_id.clone())
        .collect()
}
