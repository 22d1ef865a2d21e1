//! Cleanup system: culls entities that drifted too far from the player.
//! Bosses are never culled.

use hecs::{Entity, World};

use survivor_balance::tiers::get_profile;
use survivor_core::components::{Enemy, Gem, Projectile};
use survivor_core::constants::{ENEMY_CULL_RADIUS, PICKUP_CULL_RADIUS, PROJECTILE_CULL_RADIUS};
use survivor_core::types::Position;

/// Remove out-of-range entities. Uses a pre-allocated buffer to avoid
/// per-tick allocation. Returns the number of entities removed.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, (enemy, pos)) in world.query_mut::<(&Enemy, &Position)>() {
        if get_profile(enemy.tier).cullable && pos.range() > ENEMY_CULL_RADIUS {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_bullet, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if pos.range() > PROJECTILE_CULL_RADIUS {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_gem, pos)) in world.query_mut::<(&Gem, &Position)>() {
        if pos.range() > PICKUP_CULL_RADIUS {
            despawn_buffer.push(entity);
        }
    }

    let culled = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    culled
}
