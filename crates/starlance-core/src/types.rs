//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::FORWARD;

/// World-space position (units). x = right, y = up, -z = forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Velocity in world space (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Pointer ray supplied by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Simulation time tracking. Advanced by the variable frame delta.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated (Playing) ticks.
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl AimRay {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_ms += dt as f64 * 1000.0;
    }
}

/// Normalize `v`, substituting `fallback` for zero-length or non-finite input.
pub fn safe_normalize(v: Vec3, fallback: Vec3) -> Vec3 {
    v.try_normalize().unwrap_or(fallback)
}

/// Normalize `v`, falling back to the forward axis.
pub fn normalize_or_forward(v: Vec3) -> Vec3 {
    safe_normalize(v, FORWARD)
}
