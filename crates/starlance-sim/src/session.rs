//! Session state: menu/playing/game-over, score ledger and run statistics.
//!
//! Stored on `SimulationEngine`, NOT as an ECS entity.

use starlance_behavior::vitals::{self, DamageOutcome};
use starlance_core::components::Pilot;
use starlance_core::config::GameConfig;
use starlance_core::enums::{DamageCause, SessionState};
use starlance_core::events::GameEvent;
use starlance_core::state::CollisionStats;

/// Result of a score increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// Points added, run continues.
    Counted,
    /// This increment crossed the victory threshold.
    Won,
    /// Session is not Playing; score untouched.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: SessionState,
    pub score: u32,
    pub victory_threshold: u32,
    pub is_won: bool,
    pub death_cause: Option<DamageCause>,
    pub stats: CollisionStats,
    /// Last wave triggered this run.
    pub wave: u32,
}

impl GameSession {
    pub fn new(victory_threshold: u32) -> Self {
        Self {
            state: SessionState::Menu,
            score: 0,
            victory_threshold,
            is_won: false,
            death_cause: None,
            stats: CollisionStats::default(),
            wave: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Clear everything from the last run. State is left untouched.
    pub fn clear_run(&mut self) {
        self.score = 0;
        self.is_won = false;
        self.death_cause = None;
        self.stats = CollisionStats::default();
        self.wave = 0;
    }

    /// Add points and check the victory threshold in one step, so the
    /// session can never be won while still Playing.
    pub fn add_score(&mut self, points: u32) -> ScoreOutcome {
        if !self.is_playing() {
            return ScoreOutcome::Ignored;
        }

        self.score = self.score.saturating_add(points);
        if self.score >= self.victory_threshold {
            self.is_won = true;
            self.state = SessionState::GameOver;
            log::info!("victory at {} points", self.score);
            return ScoreOutcome::Won;
        }
        ScoreOutcome::Counted
    }

    /// Route damage through the pilot's state machine and apply the session
    /// consequences: events, and game over on death.
    pub fn damage_player(
        &mut self,
        pilot: &mut Pilot,
        amount: u32,
        cause: DamageCause,
        config: &GameConfig,
        events: &mut Vec<GameEvent>,
    ) -> DamageOutcome {
        if !self.is_playing() {
            return DamageOutcome::Ignored;
        }

        let outcome = vitals::apply_damage(pilot, amount, config);
        match outcome {
            DamageOutcome::Ignored => {}
            DamageOutcome::Wounded { health } => {
                events.push(GameEvent::PlayerDamaged {
                    amount,
                    health,
                    cause,
                });
            }
            DamageOutcome::Killed => {
                events.push(GameEvent::PlayerDamaged {
                    amount,
                    health: 0,
                    cause,
                });
                events.push(GameEvent::PlayerDied { cause });
                self.death_cause = Some(cause);
                self.state = SessionState::GameOver;
                log::info!("player killed by {} at {} points", cause.tag(), self.score);
            }
        }
        outcome
    }
}
