//! Enemy pursuit steering.
//!
//! Every enemy flies at the player's current position. Fast enemies weave a
//! sine-based lateral offset into their heading. No ECS dependency: operates
//! on plain data.

use glam::Vec3;

use starlance_core::constants::*;
use starlance_core::enums::EnemyType;
use starlance_core::types::{normalize_or_forward, safe_normalize};

/// Input to the steering function for a single enemy.
pub struct PursuitContext {
    pub enemy_type: EnemyType,
    pub position: Vec3,
    pub target: Vec3,
    /// Units/s.
    pub speed: f32,
    /// Seconds since the enemy spawned.
    pub age_secs: f32,
}

/// Output from the steering function.
pub struct PursuitUpdate {
    pub velocity: Vec3,
    /// Unit vector pointing at the target.
    pub heading: Vec3,
}

/// Why an enemy should leave the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Got behind the player without being destroyed.
    Escaped,
    /// Strayed past the despawn distance.
    OutOfBounds,
}

/// Steer one enemy toward its target.
pub fn steer(ctx: &PursuitContext) -> PursuitUpdate {
    let heading = normalize_or_forward(ctx.target - ctx.position);

    let direction = match ctx.enemy_type {
        EnemyType::Fast => {
            let offset = lateral_axis(heading) * zigzag_offset(ctx.age_secs);
            safe_normalize(heading + offset, heading)
        }
        EnemyType::Basic | EnemyType::Heavy => heading,
    };

    PursuitUpdate {
        velocity: direction * ctx.speed,
        heading,
    }
}

/// Signed weave magnitude at a given age.
pub fn zigzag_offset(age_secs: f32) -> f32 {
    (age_secs * ZIGZAG_FREQUENCY).sin() * ZIGZAG_AMPLITUDE
}

/// Horizontal axis perpendicular to `heading`. Falls back to world X when
/// the heading is vertical.
fn lateral_axis(heading: Vec3) -> Vec3 {
    safe_normalize(heading.cross(Vec3::Y), Vec3::X)
}

/// Whether an enemy at `position` must be removed.
/// Escape is checked first since it carries a penalty.
pub fn exit_reason(position: Vec3, player: Vec3) -> Option<ExitReason> {
    if position.z > player.z + ESCAPE_DEPTH_MARGIN {
        return Some(ExitReason::Escaped);
    }
    if position.abs().max_element() > ENEMY_DESPAWN_DISTANCE {
        return Some(ExitReason::OutOfBounds);
    }
    None
}
