//! Player movement integrator.
//!
//! Blends velocity toward the input target for inertia, applies boost,
//! brake or idle damping, caps speed, integrates position and clamps it to
//! the flight box with inelastic walls. Also refreshes the aim target.

use glam::{Vec2, Vec3};

use starlance_core::commands::TickInput;
use starlance_core::constants::*;
use starlance_core::types::{safe_normalize, AimRay};

use crate::store::EntityStore;

/// Advance the player by one tick of `dt` seconds.
pub fn run(store: &mut EntityStore, input: &TickInput, dt: f32) {
    let Some((position, velocity, pilot)) = store.player_kinematics_mut() else {
        return;
    };

    let (new_pos, new_vel) = integrate(position.0, velocity.0, input, dt);
    position.0 = new_pos;
    velocity.0 = new_vel;
    pilot.aim_target = aim_target(new_pos, input.aim_ray);
}

/// One integration step. Pure so it can be tested in isolation.
pub fn integrate(position: Vec3, velocity: Vec3, input: &TickInput, dt: f32) -> (Vec3, Vec3) {
    let axis: Vec2 = input.clamped_axis().normalize_or_zero();
    let input_dir = Vec3::new(axis.x, axis.y, 0.0);
    let target = input_dir * PLAYER_MOVE_SPEED;

    let mut vel = velocity.lerp(target, PLAYER_VELOCITY_BLEND);
    let frames = dt * REFERENCE_FRAME_RATE;

    if input.boost {
        // Push along the current heading, or the stick when stationary.
        let push = if vel.length_squared() > 1e-6 {
            vel.normalize()
        } else {
            safe_normalize(input_dir, FORWARD)
        };
        vel += push * PLAYER_BOOST_ACCELERATION * dt;
    } else if input.brake {
        vel *= PLAYER_BRAKE_DECAY.powf(frames);
    } else {
        vel *= PLAYER_IDLE_DAMPING.powf(frames);
    }

    vel = vel.clamp_length_max(PLAYER_MAX_SPEED);

    let mut pos = position + vel * dt;
    for i in 0..3 {
        let bound = PLAYER_BOUNDS[i];
        if pos[i] > bound {
            pos[i] = bound;
            if vel[i] > 0.0 {
                vel[i] = 0.0;
            }
        } else if pos[i] < -bound {
            pos[i] = -bound;
            if vel[i] < 0.0 {
                vel[i] = 0.0;
            }
        }
    }

    (pos, vel)
}

/// Intersect the aim ray with the plane `AIM_PLANE_DEPTH` ahead of the
/// player. Misses fall back to a point straight ahead. The result is kept
/// within `AIM_MAX_DISTANCE` of the player.
pub fn aim_target(player: Vec3, ray: Option<AimRay>) -> Vec3 {
    let fallback = player + FORWARD * AIM_PLANE_DEPTH;
    let plane_z = player.z + FORWARD.z * AIM_PLANE_DEPTH;

    let hit = ray.and_then(|ray| {
        if ray.direction.z.abs() < 1e-6 {
            return None;
        }
        let t = (plane_z - ray.origin.z) / ray.direction.z;
        if !t.is_finite() || t < 0.0 {
            return None;
        }
        let point = ray.origin + ray.direction * t;
        point.is_finite().then_some(point)
    });

    let target = hit.unwrap_or(fallback);
    let offset = target - player;
    if offset.length() > AIM_MAX_DISTANCE {
        player + safe_normalize(offset, FORWARD) * AIM_MAX_DISTANCE
    } else {
        target
    }
}
