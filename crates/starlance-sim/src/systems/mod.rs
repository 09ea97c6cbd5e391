//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over the entity store (or the bare `World`).
//! Persistent state they need (session, spawn timers) is passed in by the
//! engine; entity state lives in components.

pub mod cleanup;
pub mod collision;
pub mod enemy_motion;
pub mod fire_control;
pub mod movement;
pub mod projectile_kinematics;
pub mod snapshot;
pub mod spawn_director;
