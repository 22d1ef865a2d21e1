//! Player weapons: orbiting swords, auto-fire and lightning.
//!
//! Cooldowns are measured on the run clock, so an upgraded cooldown takes
//! effect on the very next check.

use std::f64::consts::{FRAC_PI_2, TAU};

use hecs::World;
use rand::seq::SliceRandom;

use survivor_core::components::OrbitalWeapon;
use survivor_core::constants::{
    FIRE_ENGAGEMENT_RADIUS, LIGHTNING_COOLDOWN_SECS, SWORD_ORBIT_RADIUS, SWORD_ROTATION_RATE,
};
use survivor_core::events::SimEvent;
use survivor_core::player::PlayerState;
use survivor_core::types::{Position, SimTime};

use super::combat::{damage_enemy, CombatContext};
use super::spawn_director::SpawnDirectorState;
use crate::registry::EntityRegistry;
use crate::stats::RunStats;

fn cooldown_ready(last: Option<f64>, now: f64, cooldown_secs: f64) -> bool {
    match last {
        Some(last) => now - last >= cooldown_secs,
        None => true,
    }
}

/// Place every sword on the orbit, evenly spaced and rotated by the global
/// orbit phase.
pub fn update_swords(world: &mut World, time: &SimTime) {
    let count = world.query::<&OrbitalWeapon>().iter().count();
    if count == 0 {
        return;
    }
    let phase = time.elapsed_secs * SWORD_ROTATION_RATE;
    let spacing = TAU / count as f64;

    for (_entity, (sword, pos)) in world.query_mut::<(&mut OrbitalWeapon, &mut Position)>() {
        let angle = phase + f64::from(sword.index) * spacing;
        *pos = Position::on_ring(angle, SWORD_ORBIT_RADIUS);
        sword.rotation = angle + FRAC_PI_2;
    }
}

/// Fire one bullet at the nearest enemy if it is within engagement range
/// and the gun is off cooldown. Returns true if a bullet was fired.
pub fn auto_fire(
    registry: &mut EntityRegistry,
    player: &PlayerState,
    state: &mut SpawnDirectorState,
    time: &SimTime,
    stats: &mut RunStats,
    events: &mut Vec<SimEvent>,
) -> bool {
    let cooldown_secs = player.weapons.fire_cooldown_ms / 1000.0;
    if !cooldown_ready(state.last_fire_secs, time.elapsed_secs, cooldown_secs) {
        return false;
    }

    let nearest = registry
        .enemies()
        .into_iter()
        .map(|(_, pos, _)| pos)
        .min_by(|a, b| a.range().total_cmp(&b.range()));
    let Some(target) = nearest else {
        return false;
    };
    if target.range() >= FIRE_ENGAGEMENT_RADIUS {
        return false;
    }

    registry.spawn_projectile(target.0, player.weapons.bullet_damage);
    state.last_fire_secs = Some(time.elapsed_secs);
    stats.bullets_fired += 1;
    events.push(SimEvent::BulletFired);
    true
}

/// Strike `lightning_count` random enemies (with replacement) once the
/// cooldown has elapsed. Returns the number of bolts that hit a live enemy;
/// a bolt whose target an earlier bolt already killed fizzles.
pub fn strike_lightning(
    registry: &mut EntityRegistry,
    player: &PlayerState,
    state: &mut SpawnDirectorState,
    time: &SimTime,
    ctx: &mut CombatContext,
) -> u32 {
    let bolts = player.weapons.lightning_count;
    if bolts == 0
        || !cooldown_ready(
            state.last_lightning_secs,
            time.elapsed_secs,
            LIGHTNING_COOLDOWN_SECS,
        )
    {
        return 0;
    }

    let targets = registry.enemies();
    if targets.is_empty() {
        return 0;
    }
    state.last_lightning_secs = Some(time.elapsed_secs);

    let mut struck = 0;
    for _ in 0..bolts {
        let Some(&(enemy, position, _)) = targets.choose(ctx.rng) else {
            break;
        };
        if !registry.contains(enemy) {
            continue;
        }
        ctx.events.push(SimEvent::LightningStrike { position });
        ctx.stats.lightning_strikes += 1;
        damage_enemy(registry, enemy, player.weapons.lightning_damage, ctx);
        struck += 1;
    }
    struck
}
