//! Input consumed by the simulation.
//!
//! Continuous controls arrive every tick as a [`TickInput`]. Session
//! changes are discrete [`SessionCommand`]s queued for processing at the
//! next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::AimRay;

/// Normalized control state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// x = strafe right, y = climb. Each axis in `[-1, 1]`.
    pub move_axis: Vec2,
    pub boost: bool,
    pub brake: bool,
    /// Pointer ray. `None` aims straight ahead.
    pub aim_ray: Option<AimRay>,
    pub fire: bool,
}

impl TickInput {
    /// Input with nothing held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Move axis with each component clamped to `[-1, 1]`.
    /// Non-finite components are treated as zero.
    pub fn clamped_axis(&self) -> Vec2 {
        let clean = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        Vec2::new(clean(self.move_axis.x), clean(self.move_axis.y))
    }
}

/// Session-level actions from the menu and game-over screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Menu -> Playing.
    StartGame,
    /// GameOver -> Menu, clearing the world.
    ResetGame,
    /// Playing -> Menu, abandoning the current run.
    ReturnToMenu,
    /// GameOver -> Playing in one step.
    PlayAgain,
}
