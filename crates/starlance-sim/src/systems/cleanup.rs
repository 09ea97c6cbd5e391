//! Cleanup system: removes spent or stray projectiles, and enemies whose
//! state went non-finite.

use hecs::{Entity, World};

use starlance_core::components::{EnemyState, ProjectileState};
use starlance_core::constants::PROJECTILE_WORLD_BOUNDS;
use starlance_core::types::Position;

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    // Projectiles past their range or outside the world box.
    for (entity, (pos, projectile)) in world.query_mut::<(&Position, &ProjectileState)>() {
        let outside = pos.0.abs().cmpgt(PROJECTILE_WORLD_BOUNDS).any();
        if projectile.is_spent() || outside || !pos.0.is_finite() {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, _enemy)) in world.query_mut::<(&Position, &EnemyState)>() {
        if !pos.0.is_finite() {
            log::warn!("despawning enemy with non-finite position {:?}", pos.0);
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
