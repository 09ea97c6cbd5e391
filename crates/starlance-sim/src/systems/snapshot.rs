//! Snapshot builder: the committed post-tick view handed to collaborators.
//!
//! Read-only. Enemies and projectiles are ordered by id.

use hecs::World;

use starlance_core::components::*;
use starlance_core::events::GameEvent;
use starlance_core::state::*;
use starlance_core::types::{Position, SimTime};

use crate::session::GameSession;
use crate::store::EntityStore;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    store: &EntityStore,
    session: &GameSession,
    time: &SimTime,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        session: build_session(session),
        player: build_player(store),
        enemies: build_enemies(store.world()),
        projectiles: build_projectiles(store.world()),
        events,
    }
}

fn build_session(session: &GameSession) -> SessionView {
    SessionView {
        state: session.state,
        score: session.score,
        victory_threshold: session.victory_threshold,
        is_won: session.is_won,
        death_cause: session.death_cause.map(|cause| cause.tag().to_string()),
        stats: session.stats,
        accuracy: session.stats.accuracy(),
        wave: session.wave,
    }
}

fn build_player(store: &EntityStore) -> PlayerView {
    let mut view = PlayerView {
        position: store.player_position(),
        velocity: store.player_velocity(),
        ..Default::default()
    };
    if let Some(pilot) = store.pilot() {
        view.aim_target = pilot.aim_target;
        view.health = pilot.health;
        view.max_health = pilot.max_health;
        view.invincible = pilot.is_invincible();
        view.is_taking_damage = pilot.is_taking_damage();
        view.condition = pilot.condition;
    }
    view
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Position, &Collider, &EnemyState)>()
        .iter()
        .map(|(_, (pos, collider, enemy))| EnemyView {
            id: enemy.id,
            enemy_type: enemy.enemy_type,
            position: pos.0,
            heading: enemy.heading,
            radius: collider.radius,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Position, &Collider, &ProjectileState)>()
        .iter()
        .map(|(_, (pos, collider, projectile))| ProjectileView {
            id: projectile.id,
            position: pos.0,
            direction: projectile.direction,
            radius: collider.radius,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}
