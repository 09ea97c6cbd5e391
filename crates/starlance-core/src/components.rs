//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods beyond constructors.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;

/// Circular (spherical) collision bound used by enemies and projectiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    /// Always positive.
    pub radius: f32,
}

/// The player's hitbox: a box of `half_width` x `half_height` in the
/// screen plane, `circular_radius` deep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerHitbox {
    pub circular_radius: f32,
    pub half_width: f32,
    pub half_height: f32,
}

impl Default for PlayerHitbox {
    fn default() -> Self {
        Self {
            circular_radius: PLAYER_HITBOX_RADIUS,
            half_width: PLAYER_HITBOX_HALF_WIDTH,
            half_height: PLAYER_HITBOX_HALF_HEIGHT,
        }
    }
}

impl PlayerHitbox {
    /// Half extents of the axis-aligned box centred on the player.
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.half_width, self.half_height, self.circular_radius)
    }
}

/// Gameplay state carried by the player entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pilot {
    /// Hit points in `[0, max_health]`.
    pub health: u32,
    pub max_health: u32,
    pub condition: PlayerCondition,
    /// Remaining invincibility (ms). Zero unless `condition` is `Invincible`.
    pub invincibility_remaining_ms: f64,
    /// Remaining red-flash time after a hit (ms).
    pub damage_flash_remaining_ms: f64,
    /// Point the guns are aimed at, refreshed every tick from the aim ray.
    pub aim_target: Vec3,
    /// Simulation time of the last shot, if any.
    pub last_shot_ms: Option<f64>,
}

impl Pilot {
    pub fn new(max_health: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            condition: PlayerCondition::Vulnerable,
            invincibility_remaining_ms: 0.0,
            damage_flash_remaining_ms: 0.0,
            aim_target: PLAYER_SPAWN + FORWARD * AIM_PLANE_DEPTH,
            last_shot_ms: None,
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.condition == PlayerCondition::Invincible
    }

    pub fn is_dead(&self) -> bool {
        self.condition == PlayerCondition::Dead
    }

    pub fn is_taking_damage(&self) -> bool {
        self.damage_flash_remaining_ms > 0.0
    }
}

impl Default for Pilot {
    fn default() -> Self {
        Self::new(PLAYER_MAX_HEALTH)
    }
}

/// Enemy gameplay state. Stats are copied from the type profile at spawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyState {
    pub id: u32,
    pub enemy_type: EnemyType,
    /// Units/s.
    pub speed: f32,
    pub damage: u32,
    pub points: u32,
    /// Unit vector the enemy is facing (toward the player).
    pub heading: Vec3,
    /// Seconds since spawn; drives the zig-zag phase.
    pub age_secs: f32,
}

/// Projectile flight state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileState {
    pub id: u32,
    /// Unit vector.
    pub direction: Vec3,
    pub speed: f32,
    pub distance_traveled: f32,
    pub max_distance: f32,
}

impl ProjectileState {
    pub fn is_spent(&self) -> bool {
        self.distance_traveled > self.max_distance
    }
}
