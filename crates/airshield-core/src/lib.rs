//! Core types and definitions for the Airshield simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, state snapshots, events, constants, and the
//! static entity registry. It has no dependency on any runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod registry;
pub mod state;
pub mod types;
