//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Target classification as shown on the tactical display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    #[default]
    Unknown,
    Friendly,
    Enemy,
}

/// Operational status of a sensor/effector asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    #[default]
    Active,
    Inactive,
}

/// Intercept lifecycle state. Linear progression, no branches:
/// `Vectoring -> Engaging -> Neutralized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterceptState {
    /// Effector is being vectored onto the target.
    Vectoring,
    /// Engagement in progress (display-only phase).
    Engaging,
    /// Engagement complete; the target no longer moves.
    Neutralized,
}
