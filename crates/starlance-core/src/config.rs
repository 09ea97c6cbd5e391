//! Tunable gameplay balance.
//!
//! Every field has a default reproducing the stock game, and every struct is
//! `#[serde(default)]`, so a JSON override only needs the keys it changes.
//! Per-type entries ([`EnemyProfile`], [`SpawnRate`]) are replaced whole.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::EnemyType;

/// Errors produced while loading or validating a [`GameConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The input was not valid JSON for this schema.
    Parse(serde_json::Error),
    /// A value is out of range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Per-type enemy stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub speed: f32,
    pub radius: f32,
    pub damage: u32,
    pub points: u32,
}

impl EnemyProfile {
    /// Stock stats for an enemy type.
    pub fn default_for(enemy_type: EnemyType) -> Self {
        match enemy_type {
            EnemyType::Basic => Self {
                speed: BASIC_ENEMY_SPEED,
                radius: BASIC_ENEMY_RADIUS,
                damage: BASIC_ENEMY_DAMAGE,
                points: BASIC_ENEMY_POINTS,
            },
            EnemyType::Fast => Self {
                speed: FAST_ENEMY_SPEED,
                radius: FAST_ENEMY_RADIUS,
                damage: FAST_ENEMY_DAMAGE,
                points: FAST_ENEMY_POINTS,
            },
            EnemyType::Heavy => Self {
                speed: HEAVY_ENEMY_SPEED,
                radius: HEAVY_ENEMY_RADIUS,
                damage: HEAVY_ENEMY_DAMAGE,
                points: HEAVY_ENEMY_POINTS,
            },
        }
    }
}

/// Timed spawning for one enemy type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRate {
    /// Interval before difficulty scaling (seconds).
    pub interval_secs: f32,
    /// Interval never drops below this (seconds).
    pub floor_secs: f32,
    /// Score required before this type spawns on its timer.
    pub score_gate: u32,
    /// Corners of the box spawn positions are sampled from.
    pub area_min: Vec3,
    pub area_max: Vec3,
}

impl SpawnRate {
    pub fn default_for(enemy_type: EnemyType) -> Self {
        match enemy_type {
            EnemyType::Basic => Self {
                interval_secs: BASIC_SPAWN_INTERVAL_SECS,
                floor_secs: BASIC_SPAWN_FLOOR_SECS,
                score_gate: 0,
                area_min: Vec3::new(-12.0, -8.0, -25.0),
                area_max: Vec3::new(12.0, 8.0, -20.0),
            },
            EnemyType::Fast => Self {
                interval_secs: FAST_SPAWN_INTERVAL_SECS,
                floor_secs: FAST_SPAWN_FLOOR_SECS,
                score_gate: FAST_SCORE_GATE,
                area_min: Vec3::new(-15.0, -6.0, -30.0),
                area_max: Vec3::new(15.0, 6.0, -18.0),
            },
            EnemyType::Heavy => Self {
                interval_secs: HEAVY_SPAWN_INTERVAL_SECS,
                floor_secs: HEAVY_SPAWN_FLOOR_SECS,
                score_gate: HEAVY_SCORE_GATE,
                area_min: Vec3::new(-8.0, -4.0, -35.0),
                area_max: Vec3::new(8.0, 4.0, -25.0),
            },
        }
    }
}

/// Enemy stats keyed by type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyRoster {
    pub basic: EnemyProfile,
    pub fast: EnemyProfile,
    pub heavy: EnemyProfile,
}

impl Default for EnemyRoster {
    fn default() -> Self {
        Self {
            basic: EnemyProfile::default_for(EnemyType::Basic),
            fast: EnemyProfile::default_for(EnemyType::Fast),
            heavy: EnemyProfile::default_for(EnemyType::Heavy),
        }
    }
}

impl EnemyRoster {
    pub fn get(&self, enemy_type: EnemyType) -> &EnemyProfile {
        match enemy_type {
            EnemyType::Basic => &self.basic,
            EnemyType::Fast => &self.fast,
            EnemyType::Heavy => &self.heavy,
        }
    }
}

/// Spawn pacing: per-type timers, difficulty curve, population cap, waves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub basic: SpawnRate,
    pub fast: SpawnRate,
    pub heavy: SpawnRate,
    pub base_difficulty: f32,
    pub difficulty_per_step: f32,
    pub difficulty_score_step: u32,
    pub difficulty_interval_factor: f32,
    pub min_difficulty_multiplier: f32,
    pub max_enemies_base: u32,
    pub max_enemies_score_step: u32,
    pub max_enemies_hard_cap: u32,
    /// A wave fires each time the score crosses a multiple of this.
    pub wave_score_step: u32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            basic: SpawnRate::default_for(EnemyType::Basic),
            fast: SpawnRate::default_for(EnemyType::Fast),
            heavy: SpawnRate::default_for(EnemyType::Heavy),
            base_difficulty: BASE_DIFFICULTY,
            difficulty_per_step: DIFFICULTY_PER_STEP,
            difficulty_score_step: DIFFICULTY_SCORE_STEP,
            difficulty_interval_factor: DIFFICULTY_INTERVAL_FACTOR,
            min_difficulty_multiplier: MIN_DIFFICULTY_MULTIPLIER,
            max_enemies_base: MAX_ENEMIES_BASE,
            max_enemies_score_step: MAX_ENEMIES_SCORE_STEP,
            max_enemies_hard_cap: MAX_ENEMIES_HARD_CAP,
            wave_score_step: WAVE_SCORE_STEP,
        }
    }
}

impl SpawnTuning {
    pub fn rate(&self, enemy_type: EnemyType) -> &SpawnRate {
        match enemy_type {
            EnemyType::Basic => &self.basic,
            EnemyType::Fast => &self.fast,
            EnemyType::Heavy => &self.heavy,
        }
    }

    /// Difficulty level grows by a step every `difficulty_score_step` points.
    pub fn difficulty(&self, score: u32) -> f32 {
        let steps = score / self.difficulty_score_step.max(1);
        self.base_difficulty + steps as f32 * self.difficulty_per_step
    }

    /// Multiplier applied to base spawn intervals. Shrinks as score grows.
    pub fn difficulty_multiplier(&self, score: u32) -> f32 {
        (1.0 - self.difficulty(score) * self.difficulty_interval_factor)
            .max(self.min_difficulty_multiplier)
    }

    /// Current spawn interval for a type (seconds).
    pub fn spawn_interval(&self, enemy_type: EnemyType, score: u32) -> f32 {
        let rate = self.rate(enemy_type);
        (rate.interval_secs * self.difficulty_multiplier(score)).max(rate.floor_secs)
    }

    /// Population cap for the given score.
    pub fn max_enemies(&self, score: u32) -> u32 {
        let bonus = score / self.max_enemies_score_step.max(1);
        self.max_enemies_base
            .saturating_add(bonus)
            .min(self.max_enemies_hard_cap)
    }

    /// Wave number reached at `score` (0 before the first step).
    pub fn wave_for_score(&self, score: u32) -> u32 {
        score / self.wave_score_step.max(1)
    }
}

/// All gameplay-balance values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub enemies: EnemyRoster,
    pub spawn: SpawnTuning,
    pub player_max_health: u32,
    pub victory_threshold: u32,
    pub invincibility_ms: f64,
    pub damage_flash_ms: f64,
    /// Health lost when an enemy gets behind the player.
    pub escape_penalty: u32,
    pub shot_cooldown_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enemies: EnemyRoster::default(),
            spawn: SpawnTuning::default(),
            player_max_health: PLAYER_MAX_HEALTH,
            victory_threshold: VICTORY_THRESHOLD,
            invincibility_ms: INVINCIBILITY_MS,
            damage_flash_ms: DAMAGE_FLASH_MS,
            escape_penalty: ESCAPE_PENALTY,
            shot_cooldown_ms: SHOT_COOLDOWN_MS,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn profile(&self, enemy_type: EnemyType) -> &EnemyProfile {
        self.enemies.get(enemy_type)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for enemy_type in EnemyType::ALL {
            let profile = self.profile(enemy_type);
            if !positive(profile.radius) {
                return Err(invalid(format!("{enemy_type:?} radius must be positive")));
            }
            if !positive(profile.speed) {
                return Err(invalid(format!("{enemy_type:?} speed must be positive")));
            }

            let rate = self.spawn.rate(enemy_type);
            if !positive(rate.interval_secs) || !positive(rate.floor_secs) {
                return Err(invalid(format!(
                    "{enemy_type:?} spawn interval and floor must be positive"
                )));
            }
            if !rate.area_min.is_finite() || !rate.area_max.is_finite() {
                return Err(invalid(format!("{enemy_type:?} spawn area must be finite")));
            }
            if rate.area_min.cmpgt(rate.area_max).any() {
                return Err(invalid(format!(
                    "{enemy_type:?} spawn area min exceeds max"
                )));
            }
        }

        if self.player_max_health == 0 {
            return Err(invalid("player max health must be non-zero".into()));
        }
        if self.victory_threshold == 0 {
            return Err(invalid("victory threshold must be non-zero".into()));
        }
        if self.spawn.max_enemies_hard_cap < self.spawn.max_enemies_base {
            return Err(invalid(format!(
                "enemy hard cap {} is below base cap {}",
                self.spawn.max_enemies_hard_cap, self.spawn.max_enemies_base
            )));
        }
        if self.spawn.wave_score_step == 0
            || self.spawn.difficulty_score_step == 0
            || self.spawn.max_enemies_score_step == 0
        {
            return Err(invalid("score steps must be non-zero".into()));
        }
        let curve = [
            self.spawn.base_difficulty,
            self.spawn.difficulty_per_step,
            self.spawn.difficulty_interval_factor,
            self.spawn.min_difficulty_multiplier,
        ];
        if !curve.iter().all(|v| v.is_finite()) {
            return Err(invalid("difficulty curve must be finite".into()));
        }
        let durations = [
            self.invincibility_ms,
            self.damage_flash_ms,
            self.shot_cooldown_ms,
        ];
        if !durations.iter().all(|&ms| non_negative(ms)) {
            return Err(invalid("durations must be finite and not negative".into()));
        }
        Ok(())
    }
}

/// False for zero, negatives, NaN and infinities.
fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(ms: f64) -> bool {
    ms.is_finite() && ms >= 0.0
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::Invalid(msg)
}
