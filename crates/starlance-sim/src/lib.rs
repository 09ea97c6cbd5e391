//! Simulation engine for STARLANCE.
//!
//! Owns the hecs ECS world, runs the ordered per-tick systems on a
//! variable frame delta, and produces GameStateSnapshots for the
//! rendering, UI and audio collaborators.

pub mod engine;
pub mod session;
pub mod store;
pub mod systems;

pub use engine::{SimConfig, SimulationEngine};
pub use starlance_core as core;
