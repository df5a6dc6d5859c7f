//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Classification;
use crate::types::GeoPoint;

/// Index of the entity's base definition in the target registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrackRef(pub usize);

/// Sparse mutable patch over a target's base definition.
///
/// Only fields explicitly set here shadow the registry values; `None`
/// fields inherit the base. Heading and speed are never overridden;
/// drift is straight-line motion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackOverrides {
    pub classification: Option<Classification>,
    pub coordinates: Option<GeoPoint>,
    pub distance_km: Option<f64>,
    /// Whether the target has been confirmed as an active threat.
    /// Set at most once; there is no un-confirm operation.
    pub confirmed: bool,
}
