//! Events emitted by the simulation for audio and UI feedback.
//!
//! Each event fires at most once per causing tick and is drained into the
//! snapshot that follows.

use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile left the guns.
    ShotFired { projectile_id: u32 },
    /// A projectile destroyed an enemy.
    EnemyHit {
        enemy_id: u32,
        enemy_type: EnemyType,
        points: u32,
    },
    /// Health went down.
    PlayerDamaged {
        amount: u32,
        health: u32,
        cause: DamageCause,
    },
    /// Score moved this tick. Coalesced to one per tick.
    ScoreChanged { score: u32 },
    /// A score-triggered wave began.
    WaveStarted { wave: u32 },
    /// An enemy got past the player.
    EnemyEscaped { enemy_id: u32, enemy_type: EnemyType },
    /// Health reached zero.
    PlayerDied { cause: DamageCause },
    /// Victory threshold reached.
    GameWon { score: u32 },
    /// A new run began.
    GameStarted,
}
