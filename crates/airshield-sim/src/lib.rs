//! Simulation engine for the Airshield dashboard.
//!
//! Owns the hecs world, runs the drift / coverage / intercept-lifecycle
//! systems against an injected clock, and produces `DashboardSnapshot`s
//! for the presentation layer. Completely headless.

pub mod clock;
pub mod engagement;
pub mod engine;
pub mod systems;

pub use engine::SimulationEngine;
