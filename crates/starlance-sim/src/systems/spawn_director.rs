//! Spawn director: per-type timed spawning plus score-triggered waves.
//!
//! Each enemy type has its own accumulating timer. When it passes the
//! current (difficulty-scaled) interval the timer resets and one spawn is
//! attempted. Attempts at the population cap are dropped, never queued.
//!
//! Crossing a multiple of the wave step triggers a fixed formation whose
//! members arrive one by one after a short stagger.

use std::collections::VecDeque;

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starlance_core::config::{GameConfig, SpawnRate};
use starlance_core::constants::*;
use starlance_core::enums::{EnemyType, WavePattern};
use starlance_core::events::GameEvent;

use crate::session::GameSession;
use crate::store::EntityStore;

/// A wave member waiting for its stagger delay.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSpawn {
    pub enemy_type: EnemyType,
    /// Fixed entry point, or `None` to sample the type's spawn area.
    pub position: Option<Vec3>,
    /// Seconds until this member appears.
    pub delay_secs: f32,
}

/// Timer and wave state owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct SpawnDirector {
    /// Indexed by `EnemyType::index()`.
    pub timers: [f32; 3],
    /// Highest wave triggered this run.
    pub wave: u32,
    pub pending: VecDeque<PendingSpawn>,
}

impl SpawnDirector {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Run the director for one tick.
pub fn run(
    director: &mut SpawnDirector,
    store: &mut EntityStore,
    session: &mut GameSession,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    if !session.is_playing() {
        return;
    }

    let score = session.score;

    // Step 1: Trigger a wave if the score crossed into a new step
    let reached = config.spawn.wave_for_score(score);
    if reached > director.wave {
        director.wave = reached;
        session.wave = reached;
        let pattern = WavePattern::for_wave(reached);
        director.pending.extend(wave_members(pattern));
        events.push(GameEvent::WaveStarted { wave: reached });
        log::info!("wave {reached} started ({pattern:?}) at {score} points");
    }

    // Step 2: Release staggered wave members that are due
    let mut due = Vec::new();
    director.pending.retain_mut(|pending| {
        pending.delay_secs -= dt;
        if pending.delay_secs <= 0.0 {
            due.push((pending.enemy_type, pending.position));
            false
        } else {
            true
        }
    });
    for (enemy_type, position) in due {
        let position =
            position.unwrap_or_else(|| sample_position(config.spawn.rate(enemy_type), rng));
        try_spawn(store, config, score, enemy_type, position);
    }

    // Step 3: Per-type timers
    for enemy_type in EnemyType::ALL {
        let rate = config.spawn.rate(enemy_type);
        if score < rate.score_gate {
            continue;
        }

        let timer = &mut director.timers[enemy_type.index()];
        *timer += dt;
        if *timer > config.spawn.spawn_interval(enemy_type, score) {
            *timer = 0.0;
            let position = sample_position(rate, rng);
            try_spawn(store, config, score, enemy_type, position);
        }
    }
}

/// Spawn one enemy unless the population cap is reached.
/// Rejected attempts are dropped.
pub fn try_spawn(
    store: &mut EntityStore,
    config: &GameConfig,
    score: u32,
    enemy_type: EnemyType,
    position: Vec3,
) -> Option<u32> {
    let cap = config.spawn.max_enemies(score) as usize;
    let count = store.enemy_count();
    if count >= cap {
        log::debug!("{enemy_type:?} spawn dropped: {count} enemies at cap {cap}");
        return None;
    }
    store.spawn_enemy(enemy_type, position, config.profile(enemy_type))
}

/// Uniform sample inside a type's spawn box.
pub fn sample_position(rate: &SpawnRate, rng: &mut ChaCha8Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(rate.area_min.x..=rate.area_max.x),
        rng.gen_range(rate.area_min.y..=rate.area_max.y),
        rng.gen_range(rate.area_min.z..=rate.area_max.z),
    )
}

/// Members of a wave formation in arrival order.
pub fn wave_members(pattern: WavePattern) -> Vec<PendingSpawn> {
    match pattern {
        WavePattern::CardinalBurst => {
            let (x, y) = (PLAYER_BOUNDS.x, PLAYER_BOUNDS.y);
            [
                Vec3::new(-x, 0.0, WAVE_BURST_DEPTH),
                Vec3::new(x, 0.0, WAVE_BURST_DEPTH),
                Vec3::new(0.0, y, WAVE_BURST_DEPTH),
                Vec3::new(0.0, -y, WAVE_BURST_DEPTH),
            ]
            .into_iter()
            .enumerate()
            .map(|(i, position)| PendingSpawn {
                enemy_type: EnemyType::Basic,
                position: Some(position),
                delay_secs: i as f32 * WAVE_BURST_STAGGER_SECS,
            })
            .collect()
        }
        WavePattern::VFormation => (0..3)
            .map(|i| {
                let offset = (i as f32 - 1.0) * WAVE_FORMATION_SPACING;
                PendingSpawn {
                    enemy_type: if i == 1 {
                        EnemyType::Heavy
                    } else {
                        EnemyType::Fast
                    },
                    position: Some(WAVE_FORMATION_CENTER + Vec3::new(offset, offset * 0.5, 0.0)),
                    delay_secs: i as f32 * WAVE_FORMATION_STAGGER_SECS,
                }
            })
            .collect(),
        WavePattern::Rain => (0..WAVE_RAIN_COUNT)
            .map(|i| PendingSpawn {
                enemy_type: EnemyType::Basic,
                position: None,
                delay_secs: i as f32 * WAVE_RAIN_STAGGER_SECS,
            })
            .collect(),
    }
}
