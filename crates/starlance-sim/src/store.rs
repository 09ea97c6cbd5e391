//! Entity store: the authoritative in-memory world.
//!
//! Wraps the hecs `World` with spawn factories for the player, enemies and
//! projectiles. Holds no gameplay logic beyond structural mutation.

use glam::Vec3;
use hecs::{Entity, World};

use starlance_core::components::*;
use starlance_core::config::EnemyProfile;
use starlance_core::constants::*;
use starlance_core::enums::*;
use starlance_core::types::{normalize_or_forward, Position, Velocity};

pub struct EntityStore {
    world: World,
    player: Entity,
    /// Ids are never reused for the life of the store, even across resets.
    next_enemy_id: u32,
    next_projectile_id: u32,
}

impl EntityStore {
    /// Create a store holding only the player.
    pub fn new(max_health: u32) -> Self {
        let mut world = World::new();
        let player = spawn_player(&mut world, max_health);
        Self {
            world,
            player,
            next_enemy_id: 0,
            next_projectile_id: 0,
        }
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player_entity(&self) -> Entity {
        self.player
    }

    // --- Player ---

    /// Put the player back at the spawn point with full health and no timers.
    pub fn reset_player(&mut self, max_health: u32) {
        if self.world.contains(self.player) {
            let _ = self.world.insert(
                self.player,
                (
                    Position(PLAYER_SPAWN),
                    Velocity::default(),
                    PlayerHitbox::default(),
                    Pilot::new(max_health),
                ),
            );
        } else {
            self.player = spawn_player(&mut self.world, max_health);
        }
    }

    pub fn player_position(&self) -> Vec3 {
        self.world
            .get::<&Position>(self.player)
            .map(|p| p.0)
            .unwrap_or(PLAYER_SPAWN)
    }

    pub fn player_velocity(&self) -> Vec3 {
        self.world
            .get::<&Velocity>(self.player)
            .map(|v| v.0)
            .unwrap_or(Vec3::ZERO)
    }

    pub fn pilot(&self) -> Option<hecs::Ref<'_, Pilot>> {
        self.world.get::<&Pilot>(self.player).ok()
    }

    pub fn pilot_mut(&mut self) -> Option<&mut Pilot> {
        self.world.query_one_mut::<&mut Pilot>(self.player).ok()
    }

    /// Mutable access to everything the movement integrator touches.
    pub fn player_kinematics_mut(
        &mut self,
    ) -> Option<(&mut Position, &mut Velocity, &mut Pilot)> {
        self.world
            .query_one_mut::<(&mut Position, &mut Velocity, &mut Pilot)>(self.player)
            .ok()
    }

    // --- Enemies ---

    /// Spawn an enemy facing the player. Returns `None` for a profile with a
    /// non-positive radius.
    pub fn spawn_enemy(
        &mut self,
        enemy_type: EnemyType,
        position: Vec3,
        profile: &EnemyProfile,
    ) -> Option<u32> {
        if profile.radius.is_nan() || profile.radius <= 0.0 {
            log::debug!("refusing {enemy_type:?} spawn with radius {}", profile.radius);
            return None;
        }

        let id = self.next_enemy_id;
        self.next_enemy_id += 1;

        let heading = normalize_or_forward(self.player_position() - position);
        self.world.spawn((
            EntityKind::Enemy(enemy_type),
            Position(position),
            Velocity(heading * profile.speed),
            Collider {
                radius: profile.radius,
            },
            EnemyState {
                id,
                enemy_type,
                speed: profile.speed,
                damage: profile.damage,
                points: profile.points,
                heading,
                age_secs: 0.0,
            },
        ));
        Some(id)
    }

    pub fn find_enemy(&self, id: u32) -> Option<Entity> {
        self.world
            .query::<&EnemyState>()
            .iter()
            .find(|(_, state)| state.id == id)
            .map(|(entity, _)| entity)
    }

    /// Remove an enemy by id. Returns false if it was already gone.
    pub fn despawn_enemy(&mut self, id: u32) -> bool {
        match self.find_enemy(id) {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&EnemyState>().iter().count()
    }

    // --- Projectiles ---

    /// Spawn a projectile at `origin` flying along `direction`.
    pub fn spawn_projectile(&mut self, origin: Vec3, direction: Vec3) -> u32 {
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;

        let direction = normalize_or_forward(direction);
        self.world.spawn((
            EntityKind::Projectile,
            Position(origin),
            Collider {
                radius: PROJECTILE_RADIUS,
            },
            ProjectileState {
                id,
                direction,
                speed: PROJECTILE_SPEED,
                distance_traveled: 0.0,
                max_distance: PROJECTILE_MAX_DISTANCE,
            },
        ));
        id
    }

    pub fn find_projectile(&self, id: u32) -> Option<Entity> {
        self.world
            .query::<&ProjectileState>()
            .iter()
            .find(|(_, state)| state.id == id)
            .map(|(entity, _)| entity)
    }

    /// Remove a projectile by id. Returns false if it was already gone.
    pub fn despawn_projectile(&mut self, id: u32) -> bool {
        match self.find_projectile(id) {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&ProjectileState>().iter().count()
    }

    /// Despawn every enemy and projectile. The player is kept.
    pub fn clear_combatants(&mut self) {
        let doomed: Vec<Entity> = self
            .world
            .query::<&EntityKind>()
            .iter()
            .filter(|(_, kind)| **kind != EntityKind::Player)
            .map(|(entity, _)| entity)
            .collect();
        for entity in doomed {
            let _ = self.world.despawn(entity);
        }
    }

    /// Discard all combatants and restore the player.
    pub fn reset(&mut self, max_health: u32) {
        self.clear_combatants();
        self.reset_player(max_health);
    }
}

fn spawn_player(world: &mut World, max_health: u32) -> Entity {
    world.spawn((
        EntityKind::Player,
        Position(PLAYER_SPAWN),
        Velocity::default(),
        PlayerHitbox::default(),
        Pilot::new(max_health),
    ))
}
