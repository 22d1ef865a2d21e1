//! Entity registry: the set of live enemies, projectiles, pickups and
//! orbital weapons, stored in a hecs world.
//!
//! Every spawn goes through here so that each entity kind always carries
//! the same component bundle. Destruction is idempotent: removing an entity
//! that is already gone is a no-op.

use glam::DVec2;
use hecs::{Entity, World};

use survivor_balance::loot::{gem_size, Drop};
use survivor_balance::tiers::get_profile;
use survivor_core::components::{Enemy, Gem, Health, Hitbox, OrbitalWeapon, Projectile};
use survivor_core::constants::{BULLET_RADIUS, BULLET_SPEED, SWORD_RADIUS};
use survivor_core::enums::EnemyTier;
use survivor_core::types::{Position, Velocity};

#[derive(Default)]
pub struct EntityRegistry {
    world: World,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an enemy of `tier` with fixed `hp` and pursuit `speed`.
    pub fn spawn_enemy(
        &mut self,
        tier: EnemyTier,
        position: Position,
        hp: f64,
        speed: f64,
    ) -> Entity {
        let profile = get_profile(tier);
        self.world.spawn((
            Enemy { tier, speed },
            position,
            Health::new(hp),
            Hitbox {
                radius: profile.hit_radius(),
            },
        ))
    }

    /// Spawn a bullet at the anchor flying along `direction`.
    pub fn spawn_projectile(&mut self, direction: DVec2, damage: f64) -> Entity {
        let direction = direction.try_normalize().unwrap_or(DVec2::X);
        self.world.spawn((
            Projectile { damage },
            Position::default(),
            Velocity(direction * BULLET_SPEED),
            Hitbox {
                radius: BULLET_RADIUS,
            },
        ))
    }

    /// Spawn the experience gem described by `drop`.
    pub fn spawn_gem(&mut self, position: Position, drop: Drop) -> Entity {
        self.world.spawn((
            Gem {
                tier: drop.tier,
                value: drop.value,
            },
            position,
            Hitbox {
                radius: gem_size(drop.tier) / 2.0,
            },
        ))
    }

    /// Spawn orbital weapon number `index`. Its position is placed by the
    /// weapons system on the next orbit update.
    pub fn spawn_sword(&mut self, index: u32, damage: f64) -> Entity {
        self.world.spawn((
            OrbitalWeapon {
                index,
                damage,
                rotation: 0.0,
            },
            Position::default(),
            Hitbox {
                radius: SWORD_RADIUS,
            },
        ))
    }

    /// Remove `entity`. Returns false if it was already gone.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Remove every entity.
    pub fn clear(&mut self) {
        self.world.clear();
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    pub fn pickup_count(&self) -> usize {
        self.world.query::<&Gem>().iter().count()
    }

    pub fn sword_count(&self) -> usize {
        self.world.query::<&OrbitalWeapon>().iter().count()
    }

    /// Number of live enemies of `tier`.
    pub fn count_tier(&self, tier: EnemyTier) -> usize {
        self.world
            .query::<&Enemy>()
            .iter()
            .filter(|(_, enemy)| enemy.tier == tier)
            .count()
    }

    /// Live enemies as (entity, position, hit radius), in registry order.
    pub fn enemies(&self) -> Vec<(Entity, Position, f64)> {
        self.world
            .query::<(&Enemy, &Position, &Hitbox)>()
            .iter()
            .map(|(entity, (_, pos, hitbox))| (entity, *pos, hitbox.radius))
            .collect()
    }
}
