//! Operator commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Commands referencing unknown target ids are silent no-ops.

use serde::{Deserialize, Serialize};

use crate::enums::Classification;

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    /// Manually classify a target.
    ReclassifyTarget {
        target_id: String,
        classification: Classification,
    },
    /// Confirm a target as an active threat and engage it
    /// (manual engage; same path as automatic coverage confirmation).
    ConfirmThreat { target_id: String },
    /// Flash a transient highlight on a target (auto-clears).
    PulseTarget { target_id: String },
    /// Restore the simulation to its initial state.
    Reset,
}
