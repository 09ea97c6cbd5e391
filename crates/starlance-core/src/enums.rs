//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyType {
    /// Medium speed, flies straight at the player.
    #[default]
    Basic,
    /// Quick and small, zig-zags on approach.
    Fast,
    /// Slow, large and hits hard.
    Heavy,
}

impl EnemyType {
    /// All archetypes in spawn-timer order.
    pub const ALL: [EnemyType; 3] = [EnemyType::Basic, EnemyType::Fast, EnemyType::Heavy];

    /// Stable index into per-type arrays.
    pub fn index(self) -> usize {
        match self {
            EnemyType::Basic => 0,
            EnemyType::Fast => 1,
            EnemyType::Heavy => 2,
        }
    }

    /// Damage cause recorded when an enemy of this type hits the player.
    pub fn damage_cause(self) -> DamageCause {
        match self {
            EnemyType::Basic => DamageCause::BasicEnemy,
            EnemyType::Fast => DamageCause::FastEnemy,
            EnemyType::Heavy => DamageCause::HeavyEnemy,
        }
    }
}

/// Tagged union identifying what an entity is.
/// Every live entity in the world carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy(EnemyType),
    Projectile,
}

impl EntityKind {
    pub fn is_enemy(&self) -> bool {
        matches!(self, EntityKind::Enemy(_))
    }
}

/// What hurt the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageCause {
    BasicEnemy,
    FastEnemy,
    HeavyEnemy,
    /// An enemy slipped past behind the player.
    EnemyEscape,
}

impl DamageCause {
    /// Human-readable cause tag shown on the game-over screen.
    pub fn tag(&self) -> &'static str {
        match self {
            DamageCause::BasicEnemy => "basic enemy",
            DamageCause::FastEnemy => "fast enemy",
            DamageCause::HeavyEnemy => "heavy enemy",
            DamageCause::EnemyEscape => "enemy escape",
        }
    }
}

/// Player damage sub-state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCondition {
    /// Takes damage normally.
    #[default]
    Vulnerable,
    /// Recently hit; all damage is ignored until the countdown runs out.
    Invincible,
    /// Health reached zero. Terminal until the session is reset.
    Dead,
}

/// Top-level session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Formation used by a score-triggered wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePattern {
    /// Simultaneous entry from left, right, top and bottom.
    CardinalBurst,
    /// Fast-heavy-fast V advancing on the player.
    VFormation,
    /// Staggered column of basic enemies.
    Rain,
}

impl WavePattern {
    /// Pattern used for a given wave number.
    pub fn for_wave(wave: u32) -> Self {
        match wave % 3 {
            1 => WavePattern::CardinalBurst,
            2 => WavePattern::VFormation,
            _ => WavePattern::Rain,
        }
    }
}
