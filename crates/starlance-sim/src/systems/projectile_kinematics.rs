//! Projectile kinematics: straight-line flight with distance bookkeeping.

use hecs::World;

use starlance_core::components::ProjectileState;
use starlance_core::types::Position;

pub fn run(world: &mut World, dt: f32) {
    for (_entity, (pos, projectile)) in world.query_mut::<(&mut Position, &mut ProjectileState)>()
    {
        let step = projectile.direction * projectile.speed * dt;
        pos.0 += step;
        projectile.distance_traveled += step.length();
    }
}
