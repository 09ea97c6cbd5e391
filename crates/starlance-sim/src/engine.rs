//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the entity store, the session, the spawn director
//! and the seeded RNG. Each call to [`SimulationEngine::tick`] drains queued
//! session commands, runs every system once in a fixed order, and returns a
//! `GameStateSnapshot`. Completely headless, so runs are reproducible in
//! tests from a seed and an input script.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starlance_behavior::vitals;
use starlance_core::commands::{SessionCommand, TickInput};
use starlance_core::config::GameConfig;
use starlance_core::constants::MAX_DT;
use starlance_core::enums::SessionState;
use starlance_core::events::GameEvent;
use starlance_core::state::GameStateSnapshot;
use starlance_core::types::SimTime;

use crate::session::GameSession;
use crate::store::EntityStore;
use crate::systems;
use crate::systems::spawn_director::SpawnDirector;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same run.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    store: EntityStore,
    session: GameSession,
    director: SpawnDirector,
    config: GameConfig,
    time: SimTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SessionCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine sitting in the menu. Invalid tuning is replaced by
    /// the defaults.
    pub fn new(config: SimConfig) -> Self {
        let game = match config.game.validate() {
            Ok(()) => config.game,
            Err(e) => {
                log::warn!("{e}; falling back to default tuning");
                GameConfig::default()
            }
        };

        Self {
            store: EntityStore::new(game.player_max_health),
            session: GameSession::new(game.victory_threshold),
            director: SpawnDirector::default(),
            config: game,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a session command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        if self.session.is_playing() {
            let dt = if dt.is_finite() { dt.clamp(0.0, MAX_DT) } else { 0.0 };
            let score_before = self.session.score;

            self.time.advance(dt);
            self.run_systems(input, dt);

            if self.session.score != score_before {
                self.events.push(GameEvent::ScoreChanged {
                    score: self.session.score,
                });
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.store, &self.session, &self.time, events)
    }

    /// Build a snapshot without advancing anything. Does not drain events;
    /// the returned snapshot carries none.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.store, &self.session, &self.time, Vec::new())
    }

    pub fn state(&self) -> SessionState {
        self.session.state
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Direct world access for scripted setups (tests, demos).
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    pub fn director(&self) -> &SpawnDirector {
        &self.director
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single session command. Commands that make no sense in the
    /// current state are dropped.
    fn handle_command(&mut self, command: SessionCommand) {
        let state = self.session.state;
        match (command, state) {
            (SessionCommand::StartGame, SessionState::Menu) => self.start_run(),
            (SessionCommand::ResetGame, SessionState::GameOver)
            | (SessionCommand::ReturnToMenu, SessionState::Playing) => {
                self.reset_world();
                self.session.state = SessionState::Menu;
                log::info!("returned to menu");
            }
            (SessionCommand::PlayAgain, SessionState::GameOver) => self.start_run(),
            _ => {
                log::debug!("ignoring {command:?} in {state:?}");
            }
        }
    }

    /// Clear the world and session, then enter Playing.
    fn start_run(&mut self) {
        self.reset_world();
        self.session.state = SessionState::Playing;
        self.events.push(GameEvent::GameStarted);
        log::info!("run started");
    }

    /// Discard every live entity and timer and restore the player.
    fn reset_world(&mut self) {
        self.store.reset(self.config.player_max_health);
        self.session.clear_run();
        self.director.reset();
        self.time = SimTime::default();
    }

    /// Run all systems in order. Stops early once the run ends.
    fn run_systems(&mut self, input: &TickInput, dt: f32) {
        let dt_ms = dt as f64 * 1000.0;

        // 1. Invincibility and damage-flash countdowns
        if let Some(pilot) = self.store.pilot_mut() {
            if vitals::advance_timers(pilot, dt_ms) {
                log::debug!("invincibility expired");
            }
        }
        // 2. Player movement and aim
        systems::movement::run(&mut self.store, input, dt);
        // 3. Fire control
        systems::fire_control::run(
            &mut self.store,
            &mut self.session,
            input,
            &self.config,
            self.time.elapsed_ms,
            &mut self.events,
        );
        // 4. Spawn director
        systems::spawn_director::run(
            &mut self.director,
            &mut self.store,
            &mut self.session,
            &self.config,
            &mut self.rng,
            dt,
            &mut self.events,
        );
        // 5. Enemy motion (may apply the escape penalty)
        systems::enemy_motion::run(
            &mut self.store,
            &mut self.session,
            &self.config,
            dt,
            &mut self.events,
        );
        if !self.session.is_playing() {
            return;
        }
        // 6. Projectile flight
        systems::projectile_kinematics::run(self.store.world_mut(), dt);
        // 7. Pair scan
        systems::collision::run(
            &mut self.store,
            &mut self.session,
            &self.config,
            &mut self.events,
        );
        if !self.session.is_playing() {
            return;
        }
        // 8. Cleanup
        systems::cleanup::run(self.store.world_mut(), &mut self.despawn_buffer);
    }
}
