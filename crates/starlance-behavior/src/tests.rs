#[cfg(test)]
mod tests {
    use glam::Vec3;

    use starlance_core::components::Pilot;
    use starlance_core::config::GameConfig;
    use starlance_core::constants::*;
    use starlance_core::enums::{EnemyType, PlayerCondition};

    use crate::pursuit::{exit_reason, steer, zigzag_offset, ExitReason, PursuitContext};
    use crate::vitals::{advance_timers, apply_damage, DamageOutcome};

    fn make_context(enemy_type: EnemyType, position: Vec3, age_secs: f32) -> PursuitContext {
        PursuitContext {
            enemy_type,
            position,
            target: Vec3::ZERO,
            speed: 5.0,
            age_secs,
        }
    }

    // --- Pursuit ---

    #[test]
    fn test_basic_flies_straight_at_target() {
        let update = steer(&make_context(EnemyType::Basic, Vec3::new(0.0, 0.0, -20.0), 0.3));
        assert!((update.velocity - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
        assert!((update.heading - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_heavy_speed_matches_context() {
        let mut ctx = make_context(EnemyType::Heavy, Vec3::new(3.0, 4.0, -12.0), 0.0);
        ctx.speed = HEAVY_ENEMY_SPEED;
        let update = steer(&ctx);
        assert!((update.velocity.length() - HEAVY_ENEMY_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_fast_weaves_but_faces_target() {
        // Pick an age where the sine term is near its peak.
        let age = std::f32::consts::FRAC_PI_2 / ZIGZAG_FREQUENCY;
        assert!(zigzag_offset(age) > 0.5);

        let update = steer(&make_context(EnemyType::Fast, Vec3::new(0.0, 0.0, -20.0), age));
        assert!(update.velocity.x.abs() > 1.0, "fast enemy should drift sideways");
        assert!((update.velocity.length() - 5.0).abs() < 1e-4);
        assert!((update.heading - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_fast_no_weave_at_spawn() {
        let update = steer(&make_context(EnemyType::Fast, Vec3::new(0.0, 0.0, -20.0), 0.0));
        assert!(update.velocity.x.abs() < 1e-5);
    }

    #[test]
    fn test_steer_on_target_uses_forward() {
        let update = steer(&make_context(EnemyType::Basic, Vec3::ZERO, 1.0));
        assert!(update.velocity.is_finite());
        assert_eq!(update.heading, FORWARD);
    }

    #[test]
    fn test_fast_vertical_approach_is_finite() {
        let update = steer(&make_context(EnemyType::Fast, Vec3::new(0.0, 10.0, 0.0), 0.26));
        assert!(update.velocity.is_finite());
    }

    #[test]
    fn test_exit_reason_escape_behind_player() {
        let player = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(exit_reason(Vec3::new(0.0, 0.0, 5.5), player), None);
        assert_eq!(
            exit_reason(Vec3::new(0.0, 0.0, 6.5), player),
            Some(ExitReason::Escaped)
        );
    }

    #[test]
    fn test_exit_reason_out_of_bounds() {
        assert_eq!(
            exit_reason(Vec3::new(41.0, 0.0, -20.0), Vec3::ZERO),
            Some(ExitReason::OutOfBounds)
        );
        assert_eq!(exit_reason(Vec3::new(0.0, 0.0, -35.0), Vec3::ZERO), None);
    }

    // --- Vitals ---

    #[test]
    fn test_damage_enters_invincible() {
        let config = GameConfig::default();
        let mut pilot = Pilot::default();
        let outcome = apply_damage(&mut pilot, 25, &config);
        assert_eq!(outcome, DamageOutcome::Wounded { health: 75 });
        assert_eq!(pilot.condition, PlayerCondition::Invincible);
        assert_eq!(pilot.invincibility_remaining_ms, 1500.0);
        assert!(pilot.is_taking_damage());
    }

    #[test]
    fn test_invincible_ignores_damage() {
        let config = GameConfig::default();
        let mut pilot = Pilot::default();
        apply_damage(&mut pilot, 25, &config);
        advance_timers(&mut pilot, 500.0);

        let outcome = apply_damage(&mut pilot, 35, &config);
        assert_eq!(outcome, DamageOutcome::Ignored);
        assert!(!outcome.applied());
        assert_eq!(pilot.health, 75);
        // Countdown is not reset by ignored damage.
        assert_eq!(pilot.invincibility_remaining_ms, 1000.0);
    }

    #[test]
    fn test_invincibility_expires() {
        let config = GameConfig::default();
        let mut pilot = Pilot::default();
        apply_damage(&mut pilot, 25, &config);

        let mut recovered = false;
        for _ in 0..15 {
            recovered |= advance_timers(&mut pilot, 100.0);
        }
        assert!(recovered);
        assert_eq!(pilot.condition, PlayerCondition::Vulnerable);
        assert_eq!(pilot.invincibility_remaining_ms, 0.0);
        assert!(!pilot.is_taking_damage());
    }

    #[test]
    fn test_damage_flash_shorter_than_invincibility() {
        let config = GameConfig::default();
        let mut pilot = Pilot::default();
        apply_damage(&mut pilot, 10, &config);
        advance_timers(&mut pilot, DAMAGE_FLASH_MS);
        assert!(!pilot.is_taking_damage());
        assert!(pilot.is_invincible());
    }

    #[test]
    fn test_lethal_damage_saturates() {
        let config = GameConfig::default();
        let mut pilot = Pilot::default();
        pilot.health = 20;
        let outcome = apply_damage(&mut pilot, 35, &config);
        assert_eq!(outcome, DamageOutcome::Killed);
        assert_eq!(pilot.health, 0);
        assert!(pilot.is_dead());
    }

    #[test]
    fn test_dead_is_terminal() {
        let config = GameConfig::default();
        let mut pilot = Pilot::default();
        pilot.health = 5;
        apply_damage(&mut pilot, 5, &config);

        assert!(!advance_timers(&mut pilot, 10_000.0));
        assert_eq!(apply_damage(&mut pilot, 5, &config), DamageOutcome::Ignored);
        assert_eq!(pilot.condition, PlayerCondition::Dead);
        assert_eq!(pilot.health, 0);
    }
}
