//! Simulation constants and kinematic tuning.
//!
//! Balancing values that designers tweak per build (enemy stats, spawn
//! pacing, victory threshold) live in [`crate::config::GameConfig`]; their
//! defaults are defined here.

use glam::Vec3;

// --- Timing ---

/// Frame rate that per-frame decay factors are expressed against (Hz).
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

/// Largest delta-time accepted for a single tick (seconds).
/// Longer frames (tab switch, debugger pause) are clamped to this.
pub const MAX_DT: f32 = 0.1;

// --- Player kinematics ---

/// Target speed when a move axis is held (units/s).
pub const PLAYER_MOVE_SPEED: f32 = 10.0;

/// Fraction of the gap between current and target velocity closed each tick.
pub const PLAYER_VELOCITY_BLEND: f32 = 0.15;

/// Boost thrust divided by ship mass (units/s²).
pub const PLAYER_BOOST_ACCELERATION: f32 = 18.0 / 1.2;

/// Per-reference-frame velocity multiplier while braking.
pub const PLAYER_BRAKE_DECAY: f32 = 0.90;

/// Per-reference-frame velocity multiplier with neither boost nor brake.
pub const PLAYER_IDLE_DAMPING: f32 = 0.985;

/// Hard cap on player speed (units/s).
pub const PLAYER_MAX_SPEED: f32 = 20.0;

/// Half extents of the box the player may fly in, centred on the origin.
pub const PLAYER_BOUNDS: Vec3 = Vec3::new(12.0, 8.0, 4.0);

/// Player starting position.
pub const PLAYER_SPAWN: Vec3 = Vec3::ZERO;

/// Player hit points at session start.
pub const PLAYER_MAX_HEALTH: u32 = 100;

/// Circular hitbox radius (used for the player's depth extent).
pub const PLAYER_HITBOX_RADIUS: f32 = 0.8;

/// Rectangular hitbox half width (x).
pub const PLAYER_HITBOX_HALF_WIDTH: f32 = 0.6;

/// Rectangular hitbox half height (y).
pub const PLAYER_HITBOX_HALF_HEIGHT: f32 = 0.9;

// --- Aiming ---

/// Depth of the aim plane in front of the player.
pub const AIM_PLANE_DEPTH: f32 = 20.0;

/// Aim target is clamped to this distance from the player.
pub const AIM_MAX_DISTANCE: f32 = 30.0;

/// Forward direction (negative Z), also the fallback for degenerate vectors.
pub const FORWARD: Vec3 = Vec3::NEG_Z;

// --- Projectiles ---

/// Distance ahead of the player at which projectiles appear.
pub const PROJECTILE_SPAWN_OFFSET: f32 = 1.2;

/// Projectile speed (units/s). Thirty units/s is half a unit per 60 Hz frame.
pub const PROJECTILE_SPEED: f32 = 30.0;

/// Projectile collision radius.
pub const PROJECTILE_RADIUS: f32 = 0.4;

/// Projectiles are removed after travelling this far.
pub const PROJECTILE_MAX_DISTANCE: f32 = 100.0;

/// Half extents of the box outside which projectiles are discarded.
pub const PROJECTILE_WORLD_BOUNDS: Vec3 = Vec3::splat(60.0);

/// Minimum time between shots (ms of simulation time).
pub const SHOT_COOLDOWN_MS: f64 = 200.0;

// --- Enemies ---

pub const BASIC_ENEMY_SPEED: f32 = 5.0;
pub const BASIC_ENEMY_RADIUS: f32 = 0.7;
pub const BASIC_ENEMY_DAMAGE: u32 = 25;
pub const BASIC_ENEMY_POINTS: u32 = 10;

pub const FAST_ENEMY_SPEED: f32 = 8.0;
pub const FAST_ENEMY_RADIUS: f32 = 0.5;
pub const FAST_ENEMY_DAMAGE: u32 = 20;
pub const FAST_ENEMY_POINTS: u32 = 15;

pub const HEAVY_ENEMY_SPEED: f32 = 3.0;
pub const HEAVY_ENEMY_RADIUS: f32 = 1.0;
pub const HEAVY_ENEMY_DAMAGE: u32 = 35;
pub const HEAVY_ENEMY_POINTS: u32 = 30;

/// Lateral zig-zag amplitude of fast enemies (fraction of the unit heading).
pub const ZIGZAG_AMPLITUDE: f32 = 0.6;

/// Zig-zag angular frequency (rad/s).
pub const ZIGZAG_FREQUENCY: f32 = 6.0;

/// Enemies beyond this distance from the origin on any axis are removed.
pub const ENEMY_DESPAWN_DISTANCE: f32 = 40.0;

/// An enemy whose z exceeds the player's z by this much has escaped.
pub const ESCAPE_DEPTH_MARGIN: f32 = 5.0;

/// Health lost when an enemy escapes behind the player.
pub const ESCAPE_PENALTY: u32 = 5;

// --- Damage state ---

/// Invincibility window after taking damage (ms).
pub const INVINCIBILITY_MS: f64 = 1500.0;

/// Duration of the red "taking damage" flash (ms).
pub const DAMAGE_FLASH_MS: f64 = 300.0;

// --- Session ---

/// Score at which the run is won.
pub const VICTORY_THRESHOLD: u32 = 200;

// --- Spawn director ---

pub const BASIC_SPAWN_INTERVAL_SECS: f32 = 2.0;
pub const FAST_SPAWN_INTERVAL_SECS: f32 = 4.0;
pub const HEAVY_SPAWN_INTERVAL_SECS: f32 = 8.0;

pub const BASIC_SPAWN_FLOOR_SECS: f32 = 0.8;
pub const FAST_SPAWN_FLOOR_SECS: f32 = 1.5;
pub const HEAVY_SPAWN_FLOOR_SECS: f32 = 3.0;

/// Score needed before fast enemies appear.
pub const FAST_SCORE_GATE: u32 = 25;

/// Score needed before heavy enemies appear.
pub const HEAVY_SCORE_GATE: u32 = 75;

/// Starting difficulty level.
pub const BASE_DIFFICULTY: f32 = 1.0;

/// Difficulty added per `DIFFICULTY_SCORE_STEP` points.
pub const DIFFICULTY_PER_STEP: f32 = 0.5;

/// Points per difficulty step.
pub const DIFFICULTY_SCORE_STEP: u32 = 100;

/// Interval reduction per difficulty level.
pub const DIFFICULTY_INTERVAL_FACTOR: f32 = 0.1;

/// Lowest the difficulty multiplier may go.
pub const MIN_DIFFICULTY_MULTIPLIER: f32 = 0.3;

/// Enemy cap at score zero.
pub const MAX_ENEMIES_BASE: u32 = 8;

/// One extra enemy slot per this many points.
pub const MAX_ENEMIES_SCORE_STEP: u32 = 50;

/// Absolute enemy cap.
pub const MAX_ENEMIES_HARD_CAP: u32 = 20;

// --- Waves ---

/// A wave triggers each time the score crosses a multiple of this.
pub const WAVE_SCORE_STEP: u32 = 50;

/// Delay between cardinal-burst sub-spawns (seconds).
pub const WAVE_BURST_STAGGER_SECS: f32 = 0.15;

/// Delay between V-formation sub-spawns (seconds).
pub const WAVE_FORMATION_STAGGER_SECS: f32 = 0.3;

/// Delay between rain sub-spawns (seconds).
pub const WAVE_RAIN_STAGGER_SECS: f32 = 0.2;

/// Number of basic enemies in a rain wave.
pub const WAVE_RAIN_COUNT: u32 = 6;

/// Centre of the V formation.
pub const WAVE_FORMATION_CENTER: Vec3 = Vec3::new(0.0, 0.0, -27.0);

/// Horizontal spacing between V formation members.
pub const WAVE_FORMATION_SPACING: f32 = 4.0;

/// Depth at which cardinal-burst enemies enter.
pub const WAVE_BURST_DEPTH: f32 = -22.0;
