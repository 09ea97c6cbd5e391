//! Property tests for the simulation's core invariants.

use glam::{Vec2, Vec3};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starlance_behavior::vitals;
use starlance_core::commands::{SessionCommand, TickInput};
use starlance_core::components::Pilot;
use starlance_core::config::GameConfig;
use starlance_core::constants::*;
use starlance_core::enums::*;
use starlance_core::types::AimRay;
use starlance_sim::session::GameSession;
use starlance_sim::store::EntityStore;
use starlance_sim::systems::collision::{self, Shape};
use starlance_sim::systems::spawn_director::{self, SpawnDirector};
use starlance_sim::{SimConfig, SimulationEngine};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn playing_session() -> GameSession {
    let mut session = GameSession::new(VICTORY_THRESHOLD);
    session.state = SessionState::Playing;
    session
}

fn enemy_type() -> impl Strategy<Value = EnemyType> {
    prop_oneof![
        Just(EnemyType::Basic),
        Just(EnemyType::Fast),
        Just(EnemyType::Heavy),
    ]
}

fn small_vec3(range: f32) -> impl Strategy<Value = Vec3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (0.05f32..3.0).prop_map(|radius| Shape::Circle { radius }),
        (0.05f32..2.0, 0.05f32..2.0, 0.05f32..2.0).prop_map(|(x, y, z)| Shape::Box {
            half_extents: Vec3::new(x, y, z)
        }),
    ]
}

fn tick_input() -> impl Strategy<Value = TickInput> {
    (
        -1.5f32..1.5,
        -1.5f32..1.5,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop::option::of(small_vec3(1.0)),
    )
        .prop_map(|(x, y, boost, brake, fire, aim)| TickInput {
            move_axis: Vec2::new(x, y),
            boost,
            brake,
            aim_ray: aim.map(|dir| AimRay::new(Vec3::new(0.0, 0.0, 10.0), dir)),
            fire,
        })
}

proptest! {
    #[test]
    fn invincible_player_takes_no_damage(amounts in prop::collection::vec(0u32..200, 1..20)) {
        let config = GameConfig::default();
        let mut pilot = Pilot::default();
        vitals::apply_damage(&mut pilot, 10, &config);
        prop_assert_eq!(pilot.condition, PlayerCondition::Invincible);

        for amount in amounts {
            let outcome = vitals::apply_damage(&mut pilot, amount, &config);
            prop_assert!(!outcome.applied());
            prop_assert_eq!(pilot.health, 90);
            prop_assert_eq!(pilot.condition, PlayerCondition::Invincible);
        }
    }

    #[test]
    fn health_stays_in_range(
        steps in prop::collection::vec((0u32..60, 0.0f64..2000.0), 1..60)
    ) {
        let config = GameConfig::default();
        let mut pilot = Pilot::default();
        let mut died = false;

        for (amount, wait_ms) in steps {
            vitals::apply_damage(&mut pilot, amount, &config);
            vitals::advance_timers(&mut pilot, wait_ms);

            prop_assert!(pilot.health <= pilot.max_health);
            if pilot.health == 0 {
                died = true;
                prop_assert_eq!(pilot.condition, PlayerCondition::Dead);
            }
            if died {
                prop_assert_eq!(pilot.health, 0);
            }
        }
    }

    #[test]
    fn score_monotonic_and_win_is_atomic(points in prop::collection::vec(0u32..60, 1..40)) {
        let mut session = playing_session();
        let mut last = 0;

        for p in points {
            session.add_score(p);
            prop_assert!(session.score >= last);
            last = session.score;

            if session.score >= session.victory_threshold {
                prop_assert!(session.is_won);
                prop_assert_eq!(session.state, SessionState::GameOver);
            } else {
                prop_assert!(!session.is_won);
            }
            if session.is_won {
                prop_assert!(session.score >= session.victory_threshold);
            }
        }
    }

    #[test]
    fn projectile_kills_at_most_once(
        enemies in prop::collection::vec((enemy_type(), small_vec3(1.5)), 1..8),
        projectiles in prop::collection::vec(small_vec3(1.5), 1..5),
    ) {
        let config = GameConfig::default();
        let mut store = EntityStore::new(PLAYER_MAX_HEALTH);
        let mut session = playing_session();
        let mut events = Vec::new();
        // Away from the player so only projectile pairs matter.
        let center = Vec3::new(0.0, 0.0, -15.0);

        for (t, offset) in &enemies {
            store.spawn_enemy(*t, center + *offset, config.profile(*t));
        }
        for offset in &projectiles {
            store.spawn_projectile(center + *offset, FORWARD);
        }

        collision::run(&mut store, &mut session, &config, &mut events);

        let hits = session.stats.hits as usize;
        prop_assert!(hits <= projectiles.len());
        prop_assert_eq!(store.enemy_count(), enemies.len() - hits);
        prop_assert_eq!(store.projectile_count(), projectiles.len() - hits);
        prop_assert_eq!(session.stats.total_collisions as usize, hits);
    }

    #[test]
    fn spawn_never_exceeds_cap(
        score in 0u32..199,
        prefill in 0u32..8,
        seed in any::<u64>(),
    ) {
        let config = GameConfig::default();
        let mut store = EntityStore::new(PLAYER_MAX_HEALTH);
        let mut session = playing_session();
        session.score = score;
        let cap = config.spawn.max_enemies(score) as usize;

        for i in 0..prefill {
            store.spawn_enemy(
                EnemyType::Basic,
                Vec3::new(i as f32, 0.0, -30.0),
                config.profile(EnemyType::Basic),
            );
        }

        let mut director = SpawnDirector::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut events = Vec::new();
        for _ in 0..300 {
            spawn_director::run(
                &mut director,
                &mut store,
                &mut session,
                &config,
                &mut rng,
                0.1,
                &mut events,
            );
            prop_assert!(store.enemy_count() <= cap);
        }
    }

    #[test]
    fn overlap_is_symmetric(
        pa in small_vec3(4.0),
        pb in small_vec3(4.0),
        sa in shape(),
        sb in shape(),
    ) {
        prop_assert_eq!(
            collision::shapes_overlap(pa, sa, pb, sb),
            collision::shapes_overlap(pb, sb, pa, sa)
        );
    }

    #[test]
    fn engine_invariants_hold(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..200),
        dt in 0.0f32..0.2,
    ) {
        init_logger();
        let mut engine = SimulationEngine::new(SimConfig::with_seed(seed));
        engine.queue_command(SessionCommand::StartGame);
        let mut last_score = 0;

        for input in &inputs {
            let snap = engine.tick(input, dt);

            prop_assert!(snap.player.health <= snap.player.max_health);
            prop_assert!(snap.session.score >= last_score);
            last_score = snap.session.score;

            if snap.session.is_won {
                prop_assert_eq!(snap.session.state, SessionState::GameOver);
                prop_assert!(snap.session.score >= snap.session.victory_threshold);
            }
            if snap.player.health == 0 {
                prop_assert_eq!(snap.player.condition, PlayerCondition::Dead);
                prop_assert_eq!(snap.session.state, SessionState::GameOver);
            }
            prop_assert!(snap.enemies.len() <= MAX_ENEMIES_HARD_CAP as usize);
            prop_assert!(snap.enemies.iter().all(|e| e.radius > 0.0));
            prop_assert!(snap.enemies.windows(2).all(|w| w[0].id < w[1].id));
            prop_assert!(snap.player.position.is_finite());
            prop_assert!(snap.player.velocity.length() <= PLAYER_MAX_SPEED + 1e-3);
        }
    }
}
