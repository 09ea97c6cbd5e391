//! Enemy motion: pursuit steering, integration, and removal of enemies that
//! escaped behind the player or strayed out of bounds.

use hecs::Entity;

use starlance_behavior::pursuit::{self, ExitReason, PursuitContext};
use starlance_behavior::vitals::DamageOutcome;
use starlance_core::components::EnemyState;
use starlance_core::config::GameConfig;
use starlance_core::enums::{DamageCause, EnemyType};
use starlance_core::events::GameEvent;
use starlance_core::types::{Position, Velocity};

use crate::session::GameSession;
use crate::store::EntityStore;

/// Advance every enemy by `dt` seconds toward the player.
pub fn run(
    store: &mut EntityStore,
    session: &mut GameSession,
    config: &GameConfig,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let target = store.player_position();
    let mut exits: Vec<(Entity, u32, EnemyType, ExitReason)> = Vec::new();

    for (entity, (pos, vel, enemy)) in store
        .world_mut()
        .query_mut::<(&mut Position, &mut Velocity, &mut EnemyState)>()
    {
        enemy.age_secs += dt;
        let update = pursuit::steer(&PursuitContext {
            enemy_type: enemy.enemy_type,
            position: pos.0,
            target,
            speed: enemy.speed,
            age_secs: enemy.age_secs,
        });
        enemy.heading = update.heading;
        vel.0 = update.velocity;
        pos.0 += vel.0 * dt;

        if let Some(reason) = pursuit::exit_reason(pos.0, target) {
            exits.push((entity, enemy.id, enemy.enemy_type, reason));
        }
    }

    // Sorted so penalties land in a stable order.
    exits.sort_by_key(|(_, id, _, _)| *id);

    for (entity, enemy_id, enemy_type, reason) in exits {
        let _ = store.world_mut().despawn(entity);
        if reason != ExitReason::Escaped {
            continue;
        }

        events.push(GameEvent::EnemyEscaped {
            enemy_id,
            enemy_type,
        });
        let outcome = match store.pilot_mut() {
            Some(pilot) => session.damage_player(
                pilot,
                config.escape_penalty,
                DamageCause::EnemyEscape,
                config,
                events,
            ),
            None => DamageOutcome::Ignored,
        };
        // The run is over; leave the rest frozen for the final snapshot.
        if outcome == DamageOutcome::Killed {
            break;
        }
    }
}
