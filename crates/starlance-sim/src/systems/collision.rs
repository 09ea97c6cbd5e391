//! Collision resolver.
//!
//! Broad phase: build one candidate list of everything collidable and walk
//! each unordered pair, discarding pairs that are not (projectile, enemy) or
//! (player, enemy). Narrow phase: circle/circle for projectiles, sphere vs
//! axis-aligned box for the player.
//!
//! Effects per tick:
//! - a projectile kills at most one enemy, and an enemy dies at most once;
//! - the first enemy to touch the player is consumed and ends player checks,
//!   whether or not the damage was absorbed by invincibility.

use glam::Vec3;
use hecs::Entity;

use starlance_behavior::vitals::DamageOutcome;
use starlance_core::components::{Collider, EnemyState, PlayerHitbox, ProjectileState};
use starlance_core::config::GameConfig;
use starlance_core::enums::EntityKind;
use starlance_core::events::GameEvent;
use starlance_core::types::Position;

use crate::session::{GameSession, ScoreOutcome};
use crate::store::EntityStore;

/// Collision geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    Box { half_extents: Vec3 },
}

/// One entry in the broad-phase candidate list.
#[derive(Debug, Clone, Copy)]
pub struct Collidable {
    pub entity: Entity,
    pub kind: EntityKind,
    /// Enemy or projectile id. Zero for the player.
    pub id: u32,
    pub position: Vec3,
    pub shape: Shape,
    /// Enemy payload: damage dealt and points awarded.
    pub damage: u32,
    pub points: u32,
}

/// Which effect a pair produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKind {
    ProjectileEnemy,
    PlayerEnemy,
}

/// Classify an unordered pair. Irrelevant pairs return `None`.
pub fn classify(a: EntityKind, b: EntityKind) -> Option<PairKind> {
    use EntityKind::*;
    match (a, b) {
        (Projectile, Enemy(_)) | (Enemy(_), Projectile) => Some(PairKind::ProjectileEnemy),
        (Player, Enemy(_)) | (Enemy(_), Player) => Some(PairKind::PlayerEnemy),
        _ => None,
    }
}

/// Squared-distance circle test; no square root.
pub fn circles_overlap(a: Vec3, ra: f32, b: Vec3, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// Sphere against an axis-aligned box centred at `box_center`.
pub fn sphere_box_overlap(center: Vec3, radius: f32, box_center: Vec3, half_extents: Vec3) -> bool {
    let closest = center.clamp(box_center - half_extents, box_center + half_extents);
    closest.distance_squared(center) < radius * radius
}

/// Overlap test for two shapes. Symmetric in its arguments.
pub fn shapes_overlap(pa: Vec3, sa: Shape, pb: Vec3, sb: Shape) -> bool {
    match (sa, sb) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circles_overlap(pa, ra, pb, rb)
        }
        (Shape::Circle { radius }, Shape::Box { half_extents }) => {
            sphere_box_overlap(pa, radius, pb, half_extents)
        }
        (Shape::Box { half_extents }, Shape::Circle { radius }) => {
            sphere_box_overlap(pb, radius, pa, half_extents)
        }
        (Shape::Box { half_extents: ha }, Shape::Box { half_extents: hb }) => {
            ((pa - pb).abs()).cmplt(ha + hb).all()
        }
    }
}

pub fn overlaps(a: &Collidable, b: &Collidable) -> bool {
    shapes_overlap(a.position, a.shape, b.position, b.shape)
}

/// Candidates in resolution order: projectiles, then the player, then
/// enemies, each group sorted by id.
pub fn gather_candidates(store: &EntityStore) -> Vec<Collidable> {
    let world = store.world();

    let mut projectiles: Vec<Collidable> = world
        .query::<(&Position, &Collider, &ProjectileState)>()
        .iter()
        .map(|(entity, (pos, collider, projectile))| Collidable {
            entity,
            kind: EntityKind::Projectile,
            id: projectile.id,
            position: pos.0,
            shape: Shape::Circle {
                radius: collider.radius,
            },
            damage: 0,
            points: 0,
        })
        .collect();
    projectiles.sort_by_key(|c| c.id);

    let mut enemies: Vec<Collidable> = world
        .query::<(&Position, &Collider, &EnemyState)>()
        .iter()
        .map(|(entity, (pos, collider, enemy))| Collidable {
            entity,
            kind: EntityKind::Enemy(enemy.enemy_type),
            id: enemy.id,
            position: pos.0,
            shape: Shape::Circle {
                radius: collider.radius,
            },
            damage: enemy.damage,
            points: enemy.points,
        })
        .collect();
    enemies.sort_by_key(|c| c.id);

    let mut candidates = projectiles;
    if let Ok(mut query) = world.query_one::<(&Position, &PlayerHitbox)>(store.player_entity()) {
        if let Some((pos, hitbox)) = query.get() {
            candidates.push(Collidable {
                entity: store.player_entity(),
                kind: EntityKind::Player,
                id: 0,
                position: pos.0,
                shape: Shape::Box {
                    half_extents: hitbox.half_extents(),
                },
                damage: 0,
                points: 0,
            });
        }
    }
    candidates.extend(enemies);
    candidates
}

/// Scan all pairs and apply their effects.
pub fn run(
    store: &mut EntityStore,
    session: &mut GameSession,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    let candidates = gather_candidates(store);
    let mut consumed = vec![false; candidates.len()];
    let mut player_done = false;

    'scan: for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            if consumed[i] {
                break;
            }
            if consumed[j] {
                continue;
            }

            let (a, b) = (&candidates[i], &candidates[j]);
            let Some(pair) = classify(a.kind, b.kind) else {
                continue;
            };
            if pair == PairKind::PlayerEnemy && player_done {
                continue;
            }
            if !overlaps(a, b) {
                continue;
            }

            session.stats.total_collisions += 1;
            let (enemy_idx, other_idx) = if a.kind.is_enemy() { (i, j) } else { (j, i) };
            let enemy = &candidates[enemy_idx];
            let EntityKind::Enemy(enemy_type) = enemy.kind else {
                continue;
            };
            consumed[enemy_idx] = true;

            match pair {
                PairKind::ProjectileEnemy => {
                    consumed[other_idx] = true;
                    session.stats.hits += 1;
                    log::trace!(
                        "projectile {} hit {enemy_type:?} enemy {}",
                        candidates[other_idx].id,
                        enemy.id
                    );
                    events.push(GameEvent::EnemyHit {
                        enemy_id: enemy.id,
                        enemy_type,
                        points: enemy.points,
                    });
                    if session.add_score(enemy.points) == ScoreOutcome::Won {
                        events.push(GameEvent::GameWon {
                            score: session.score,
                        });
                        break 'scan;
                    }
                }
                PairKind::PlayerEnemy => {
                    player_done = true;
                    log::trace!("{enemy_type:?} enemy {} rammed the player", enemy.id);
                    let outcome = match store.pilot_mut() {
                        Some(pilot) => session.damage_player(
                            pilot,
                            enemy.damage,
                            enemy_type.damage_cause(),
                            config,
                            events,
                        ),
                        None => DamageOutcome::Ignored,
                    };
                    if outcome == DamageOutcome::Killed {
                        break 'scan;
                    }
                }
            }
        }
    }

    for (candidate, gone) in candidates.iter().zip(&consumed) {
        if *gone && candidate.kind != EntityKind::Player {
            let _ = store.world_mut().despawn(candidate.entity);
        }
    }
}
