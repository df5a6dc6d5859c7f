//! Simulation systems. Each system is a free function operating on the
//! world and engine-owned state; the engine sequences them each tick.

pub mod coverage;
pub mod drift;
pub mod intercept;
pub mod snapshot;
