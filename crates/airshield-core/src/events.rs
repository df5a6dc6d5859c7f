//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Classification;

/// Discrete state-change notifications, drained into the snapshot of
/// the tick that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A target was confirmed as an active threat.
    ThreatConfirmed { target_id: String, auto: bool },
    /// An intercept was created and an effector is vectoring.
    InterceptVectoring { target_id: String, asset_id: String },
    /// An intercept entered the engaging phase.
    InterceptEngaging { target_id: String },
    /// An intercept completed; the target is neutralized.
    TargetNeutralized { target_id: String, asset_id: String },
    /// The operator reclassified a target.
    TargetReclassified {
        target_id: String,
        classification: Classification,
    },
}
