//! Upgrade catalog and offer policy.
//!
//! The catalog is a fixed table of effects on `PlayerState`. Offering is a
//! separate policy: sample k distinct entries from the ones currently
//! available.

use rand::seq::SliceRandom;
use rand::Rng;

use survivor_core::constants::MAX_SWORD_COUNT;
use survivor_core::enums::UpgradeId;
use survivor_core::player::PlayerState;

/// Fire cooldown multiplier per RapidFire pick (20% faster).
pub const RAPID_FIRE_COOLDOWN_MULT: f64 = 0.8;
/// Flat bullet damage per FirePower pick.
pub const FIRE_POWER_DAMAGE_ADD: f64 = 15.0;
/// Magnet radius per MagnetField pick.
pub const MAGNET_RADIUS_ADD: f64 = 70.0;
/// Share of max health restored by EmergencyRepair.
pub const EMERGENCY_REPAIR_FRACTION: f64 = 0.6;

/// One catalog entry.
pub struct UpgradeDef {
    pub id: UpgradeId,
    pub name: &'static str,
    pub description: &'static str,
    pub apply: fn(&mut PlayerState),
}

pub static CATALOG: [UpgradeDef; 6] = [
    UpgradeDef {
        id: UpgradeId::RapidFire,
        name: "Rapid Fire",
        description: "Fire rate +20%",
        apply: apply_rapid_fire,
    },
    UpgradeDef {
        id: UpgradeId::FirePower,
        name: "Fire Power",
        description: "Bullet damage +15",
        apply: apply_fire_power,
    },
    UpgradeDef {
        id: UpgradeId::OrbitalBlade,
        name: "Orbital Blade",
        description: "Add an orbiting sword (max 6)",
        apply: apply_orbital_blade,
    },
    UpgradeDef {
        id: UpgradeId::LightningStorm,
        name: "Lightning Storm",
        description: "Lightning strikes +1",
        apply: apply_lightning_storm,
    },
    UpgradeDef {
        id: UpgradeId::MagnetField,
        name: "Magnet Field",
        description: "Gem magnet radius +70",
        apply: apply_magnet_field,
    },
    UpgradeDef {
        id: UpgradeId::EmergencyRepair,
        name: "Emergency Repair",
        description: "Restore 60% of max health",
        apply: apply_emergency_repair,
    },
];

fn apply_rapid_fire(player: &mut PlayerState) {
    player.weapons.fire_cooldown_ms *= RAPID_FIRE_COOLDOWN_MULT;
}

fn apply_fire_power(player: &mut PlayerState) {
    player.weapons.bullet_damage += FIRE_POWER_DAMAGE_ADD;
}

fn apply_orbital_blade(player: &mut PlayerState) {
    player.weapons.sword_count = (player.weapons.sword_count + 1).min(MAX_SWORD_COUNT);
}

fn apply_lightning_storm(player: &mut PlayerState) {
    player.weapons.lightning_count += 1;
}

fn apply_magnet_field(player: &mut PlayerState) {
    player.weapons.magnet_radius += MAGNET_RADIUS_ADD;
}

fn apply_emergency_repair(player: &mut PlayerState) {
    player.heal(player.max_health * EMERGENCY_REPAIR_FRACTION);
}

/// Look up a catalog entry.
pub fn get_upgrade(id: UpgradeId) -> &'static UpgradeDef {
    let index = match id {
        UpgradeId::RapidFire => 0,
        UpgradeId::FirePower => 1,
        UpgradeId::OrbitalBlade => 2,
        UpgradeId::LightningStorm => 3,
        UpgradeId::MagnetField => 4,
        UpgradeId::EmergencyRepair => 5,
    };
    &CATALOG[index]
}

/// Whether `id` may be offered to `player` right now.
pub fn is_available(id: UpgradeId, player: &PlayerState) -> bool {
    match id {
        UpgradeId::OrbitalBlade => player.weapons.sword_count < MAX_SWORD_COUNT,
        _ => true,
    }
}

/// Sample up to `count` distinct available upgrades.
pub fn draw_offers<R: Rng + ?Sized>(
    rng: &mut R,
    player: &PlayerState,
    count: usize,
) -> Vec<UpgradeId> {
    let available: Vec<UpgradeId> = CATALOG
        .iter()
        .map(|def| def.id)
        .filter(|id| is_available(*id, player))
        .collect();
    available.choose_multiple(rng, count).copied().collect()
}

/// Apply an upgrade's effect to `player`.
pub fn apply_upgrade(id: UpgradeId, player: &mut PlayerState) {
    (get_upgrade(id).apply)(player);
}
