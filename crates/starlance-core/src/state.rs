//! Game state snapshot: the complete visible state handed to the rendering,
//! UI and audio collaborators after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state exposed after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub session: SessionView,
    pub player: PlayerView,
    /// Sorted by id.
    pub enemies: Vec<EnemyView>,
    /// Sorted by id.
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<GameEvent>,
}

/// Shot and hit counters for the game-over screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CollisionStats {
    pub shots_fired: u32,
    pub hits: u32,
    /// Every overlap seen, absorbed or not.
    pub total_collisions: u32,
}

impl CollisionStats {
    /// Hit percentage, 0 when nothing has been fired.
    pub fn accuracy(&self) -> f32 {
        if self.shots_fired == 0 {
            0.0
        } else {
            self.hits as f32 / self.shots_fired as f32 * 100.0
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionView {
    pub state: SessionState,
    pub score: u32,
    pub victory_threshold: u32,
    pub is_won: bool,
    /// Cause tag, e.g. "heavy enemy". Set only after death.
    pub death_cause: Option<String>,
    pub stats: CollisionStats,
    /// Accuracy percentage derived from `stats`.
    pub accuracy: f32,
    /// Last wave started this run (0 = none yet).
    pub wave: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub velocity: Vec3,
    pub aim_target: Vec3,
    pub health: u32,
    pub max_health: u32,
    pub invincible: bool,
    /// Red flash shortly after a hit.
    pub is_taking_damage: bool,
    pub condition: PlayerCondition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub enemy_type: EnemyType,
    pub position: Vec3,
    /// Unit facing vector.
    pub heading: Vec3,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Vec3,
    pub direction: Vec3,
    pub radius: f32,
}
