//! Snapshot builder: queries the registry and assembles the
//! `GameStateSnapshot` handed to the presentation layer.

use glam::DVec2;
use hecs::World;

use survivor_balance::tiers::get_profile;
use survivor_balance::upgrades::get_upgrade;
use survivor_core::components::{Enemy, Gem, Health, OrbitalWeapon, Projectile};
use survivor_core::enums::{GamePhase, UpgradeId};
use survivor_core::events::SimEvent;
use survivor_core::player::PlayerState;
use survivor_core::state::*;
use survivor_core::types::{Position, SimTime, Velocity};

use crate::stats::RunStats;

/// Build a complete snapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    god_mode: bool,
    player: &PlayerState,
    stats: &RunStats,
    offers: &[UpgradeId],
    scroll_offset: DVec2,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        paused: phase.is_halted(),
        god_mode,
        player: PlayerView {
            health: player.health,
            max_health: player.max_health,
            health_ratio: player.health_ratio(),
            level: player.level,
            experience: player.experience,
            experience_to_next_level: player.experience_to_next_level,
        },
        kills: stats.kills,
        score: stats.score(time),
        upgrade_offers: build_offers(offers),
        scroll_offset,
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        pickups: build_pickups(world),
        swords: build_swords(world),
        events,
    }
}

fn build_offers(offers: &[UpgradeId]) -> Vec<UpgradeOfferView> {
    offers
        .iter()
        .map(|&id| {
            let def = get_upgrade(id);
            UpgradeOfferView {
                id,
                name: def.name.to_string(),
                description: def.description.to_string(),
            }
        })
        .collect()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .map(|(_, (enemy, pos, health))| {
            let profile = get_profile(enemy.tier);
            EnemyView {
                position: *pos,
                tier: enemy.tier,
                hp_ratio: health.ratio(),
                size: profile.size,
                hp_bar_width: profile.hp_bar_width,
            }
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (_, pos, vel))| ProjectileView {
            position: *pos,
            rotation: vel.0.y.atan2(vel.0.x),
        })
        .collect()
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    world
        .query::<(&Gem, &Position)>()
        .iter()
        .map(|(_, (gem, pos))| PickupView {
            position: *pos,
            tier: gem.tier,
        })
        .collect()
}

fn build_swords(world: &World) -> Vec<SwordView> {
    let mut swords: Vec<SwordView> = world
        .query::<(&OrbitalWeapon, &Position)>()
        .iter()
        .map(|(_, (sword, pos))| SwordView {
            index: sword.index,
            position: *pos,
            rotation: sword.rotation,
        })
        .collect();
    swords.sort_by_key(|s| s.index);
    swords
}
