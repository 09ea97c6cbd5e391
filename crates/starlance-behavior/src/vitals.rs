//! Player damage state machine.
//!
//! Vulnerable --damage--> Invincible (or Dead at zero health).
//! Invincible --countdown expires--> Vulnerable.
//! Damage while Invincible or Dead is ignored entirely.
//!
//! Timers are countdowns advanced by the frame delta, never wall-clock.

use starlance_core::components::Pilot;
use starlance_core::config::GameConfig;
use starlance_core::enums::PlayerCondition;

/// Result of a damage attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Player was invincible or already dead. Nothing changed.
    Ignored,
    /// Health reduced; player is now invincible.
    Wounded { health: u32 },
    /// Health reached zero.
    Killed,
}

impl DamageOutcome {
    pub fn applied(&self) -> bool {
        !matches!(self, DamageOutcome::Ignored)
    }
}

/// Apply `amount` damage to the pilot.
pub fn apply_damage(pilot: &mut Pilot, amount: u32, config: &GameConfig) -> DamageOutcome {
    if pilot.condition != PlayerCondition::Vulnerable {
        return DamageOutcome::Ignored;
    }

    pilot.health = pilot.health.saturating_sub(amount);
    pilot.damage_flash_remaining_ms = config.damage_flash_ms;

    if pilot.health == 0 {
        pilot.condition = PlayerCondition::Dead;
        pilot.invincibility_remaining_ms = 0.0;
        return DamageOutcome::Killed;
    }

    pilot.condition = PlayerCondition::Invincible;
    pilot.invincibility_remaining_ms = config.invincibility_ms;
    DamageOutcome::Wounded {
        health: pilot.health,
    }
}

/// Count down the invincibility and damage-flash timers by `dt_ms`.
/// Returns true when the pilot became vulnerable again this call.
pub fn advance_timers(pilot: &mut Pilot, dt_ms: f64) -> bool {
    pilot.damage_flash_remaining_ms = (pilot.damage_flash_remaining_ms - dt_ms).max(0.0);

    if pilot.condition != PlayerCondition::Invincible {
        return false;
    }

    pilot.invincibility_remaining_ms -= dt_ms;
    if pilot.invincibility_remaining_ms <= 0.0 {
        pilot.invincibility_remaining_ms = 0.0;
        pilot.condition = PlayerCondition::Vulnerable;
        return true;
    }
    false
}
