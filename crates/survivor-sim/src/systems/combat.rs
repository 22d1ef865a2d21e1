//! Combat resolver: overlap tests between weapons, enemies, the player
//! sensor and pickups, plus the enemy death handler.
//!
//! Overlaps are circle-circle tests in anchor-relative coordinates. The
//! player is always at the origin.

use hecs::Entity;
use rand_chacha::ChaCha8Rng;

use survivor_balance::loot::roll_drop;
use survivor_balance::tiers::get_profile;
use survivor_core::components::{Enemy, Gem, Health, Hitbox, OrbitalWeapon, Projectile};
use survivor_core::constants::PLAYER_SENSOR_RADIUS;
use survivor_core::enums::EnemyTier;
use survivor_core::events::SimEvent;
use survivor_core::player::PlayerState;
use survivor_core::types::Position;

use crate::registry::EntityRegistry;
use crate::stats::RunStats;

/// Shared mutable state needed whenever an enemy might die.
pub struct CombatContext<'a> {
    pub rng: &'a mut ChaCha8Rng,
    pub stats: &'a mut RunStats,
    pub events: &'a mut Vec<SimEvent>,
    /// Elapsed whole minutes, for the drop table.
    pub whole_minutes: u64,
}

/// Result of applying damage to an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The entity was already gone.
    Absent,
    Wounded,
    Killed,
}

/// Result of a full combat pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatOutcome {
    pub player_died: bool,
}

fn overlaps(a: &Position, a_radius: f64, b: &Position, b_radius: f64) -> bool {
    a.range_to(b) < a_radius + b_radius
}

/// Run all overlap checks for one tick: bullets, swords, enemy contact,
/// then pickups. Contact damage is skipped entirely in god mode.
pub fn run(
    registry: &mut EntityRegistry,
    player: &mut PlayerState,
    god_mode: bool,
    pending_experience: &mut u32,
    ctx: &mut CombatContext,
) -> CombatOutcome {
    resolve_projectile_hits(registry, ctx);
    resolve_sword_hits(registry, ctx);

    let player_died = !god_mode && resolve_contact_damage(registry, player);
    if player_died {
        return CombatOutcome { player_died };
    }

    resolve_pickups(registry, pending_experience, ctx);
    CombatOutcome::default()
}

/// Subtract `amount` from an enemy's hp, running the death handler if it
/// drops to zero. Damage to an entity that no longer exists is ignored.
pub fn damage_enemy(
    registry: &mut EntityRegistry,
    entity: Entity,
    amount: f64,
    ctx: &mut CombatContext,
) -> DamageOutcome {
    let (tier, position, dead) = {
        let world = registry.world();
        let Ok(enemy) = world.get::<&Enemy>(entity).map(|e| *e) else {
            return DamageOutcome::Absent;
        };
        let Ok(position) = world.get::<&Position>(entity).map(|p| *p) else {
            return DamageOutcome::Absent;
        };
        let Ok(mut health) = world.get::<&mut Health>(entity) else {
            return DamageOutcome::Absent;
        };
        health.hp -= amount;
        (enemy.tier, position, health.is_dead())
    };

    if dead {
        kill_enemy(registry, entity, tier, position, ctx);
        DamageOutcome::Killed
    } else {
        DamageOutcome::Wounded
    }
}

/// Death handler. Counts the kill, drops exactly one gem at the enemy's
/// position and removes the enemy, all in one step.
fn kill_enemy(
    registry: &mut EntityRegistry,
    entity: Entity,
    tier: EnemyTier,
    position: Position,
    ctx: &mut CombatContext,
) {
    if !registry.destroy(entity) {
        return;
    }
    ctx.stats.kills += 1;
    let drop = roll_drop(ctx.rng, tier, ctx.whole_minutes);
    registry.spawn_gem(position, drop);
    ctx.events.push(SimEvent::EnemyKilled { tier, position });

    if tier.is_special() {
        tracing::info!(?tier, kills = ctx.stats.kills, "special enemy killed");
    } else {
        tracing::debug!(?tier, gem = ?drop.tier, "enemy killed");
    }
}

/// Each bullet that touches an enemy deals its damage and is consumed.
pub fn resolve_projectile_hits(registry: &mut EntityRegistry, ctx: &mut CombatContext) {
    let bullets: Vec<(Entity, Position, f64, f64)> = registry
        .world()
        .query::<(&Projectile, &Position, &Hitbox)>()
        .iter()
        .map(|(entity, (bullet, pos, hitbox))| (entity, *pos, hitbox.radius, bullet.damage))
        .collect();
    if bullets.is_empty() {
        return;
    }
    let enemies = registry.enemies();

    for (bullet, bullet_pos, bullet_radius, damage) in bullets {
        let target = enemies.iter().find(|(enemy, enemy_pos, enemy_radius)| {
            registry.contains(*enemy)
                && overlaps(&bullet_pos, bullet_radius, enemy_pos, *enemy_radius)
        });
        if let Some(&(enemy, _, _)) = target {
            registry.destroy(bullet);
            damage_enemy(registry, enemy, damage, ctx);
        }
    }
}

/// Swords damage every enemy they touch, every tick, and are never consumed.
pub fn resolve_sword_hits(registry: &mut EntityRegistry, ctx: &mut CombatContext) {
    let swords: Vec<(Position, f64, f64)> = registry
        .world()
        .query::<(&OrbitalWeapon, &Position, &Hitbox)>()
        .iter()
        .map(|(_, (sword, pos, hitbox))| (*pos, hitbox.radius, sword.damage))
        .collect();
    if swords.is_empty() {
        return;
    }
    let enemies = registry.enemies();

    for (sword_pos, sword_radius, damage) in swords {
        for &(enemy, enemy_pos, enemy_radius) in &enemies {
            if registry.contains(enemy)
                && overlaps(&sword_pos, sword_radius, &enemy_pos, enemy_radius)
            {
                damage_enemy(registry, enemy, damage, ctx);
            }
        }
    }
}

/// Apply contact damage from every enemy touching the player sensor.
/// Returns true if the player's health reached zero.
pub fn resolve_contact_damage(registry: &EntityRegistry, player: &mut PlayerState) -> bool {
    let origin = Position::default();
    let mut query = registry.world().query::<(&Enemy, &Position, &Hitbox)>();
    for (_, (enemy, pos, hitbox)) in query.iter() {
        if !overlaps(&origin, PLAYER_SENSOR_RADIUS, pos, hitbox.radius) {
            continue;
        }
        player.take_damage(get_profile(enemy.tier).contact_damage);
        if player.is_dead() {
            return true;
        }
    }
    false
}

/// Collect every gem touching the player sensor into the pending experience
/// queue.
pub fn resolve_pickups(
    registry: &mut EntityRegistry,
    pending_experience: &mut u32,
    ctx: &mut CombatContext,
) {
    let origin = Position::default();
    let collected: Vec<(Entity, u32)> = registry
        .world()
        .query::<(&Gem, &Position, &Hitbox)>()
        .iter()
        .filter(|(_, (_, pos, hitbox))| {
            overlaps(&origin, PLAYER_SENSOR_RADIUS, pos, hitbox.radius)
        })
        .map(|(entity, (gem, _, _))| (entity, gem.value))
        .collect();

    for (gem, value) in collected {
        if registry.destroy(gem) {
            *pending_experience = pending_experience.saturating_add(value);
            ctx.stats.experience_collected += u64::from(value);
            ctx.events.push(SimEvent::PickupCollected { value });
        }
    }
}
