//! Fire control: turns the fire request into a projectile, subject to the
//! shot cooldown.

use starlance_core::commands::TickInput;
use starlance_core::config::GameConfig;
use starlance_core::constants::*;
use starlance_core::events::GameEvent;
use starlance_core::types::safe_normalize;

use crate::session::GameSession;
use crate::store::EntityStore;

/// Fire if requested and off cooldown. Returns the new projectile id.
pub fn run(
    store: &mut EntityStore,
    session: &mut GameSession,
    input: &TickInput,
    config: &GameConfig,
    now_ms: f64,
    events: &mut Vec<GameEvent>,
) -> Option<u32> {
    if !input.fire {
        return None;
    }

    let player = store.player_position();
    let aim = {
        let pilot = store.pilot_mut()?;
        if let Some(last) = pilot.last_shot_ms {
            if now_ms - last < config.shot_cooldown_ms {
                return None;
            }
        }
        pilot.last_shot_ms = Some(now_ms);
        pilot.aim_target
    };

    let direction = safe_normalize(aim - player, FORWARD);
    let origin = player + direction * PROJECTILE_SPAWN_OFFSET;
    let id = store.spawn_projectile(origin, direction);

    session.stats.shots_fired += 1;
    events.push(GameEvent::ShotFired { projectile_id: id });
    Some(id)
}
