//! Player state: the single mutable record the combat resolver and the
//! progression system operate on.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Weapon stat bundle carried by the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponStats {
    pub fire_cooldown_ms: f64,
    pub bullet_damage: f64,
    pub sword_count: u32,
    pub sword_damage: f64,
    pub lightning_count: u32,
    pub lightning_damage: f64,
    pub magnet_radius: f64,
}

/// Player avatar state. Position is always the anchor (origin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerState {
    pub health: f64,
    pub max_health: f64,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
    pub move_speed: f64,
    pub weapons: WeaponStats,
}

impl Default for WeaponStats {
    fn default() -> Self {
        Self {
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            bullet_damage: BULLET_DAMAGE,
            sword_count: 0,
            sword_damage: SWORD_DAMAGE,
            lightning_count: 0,
            lightning_damage: LIGHTNING_DAMAGE,
            magnet_radius: MAGNET_RADIUS,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            level: PLAYER_START_LEVEL,
            experience: 0,
            experience_to_next_level: PLAYER_START_NEXT_LEVEL_EXP,
            move_speed: PLAYER_MOVE_SPEED,
            weapons: WeaponStats::default(),
        }
    }
}

impl PlayerState {
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Subtract `amount` from health, flooring at zero.
    pub fn take_damage(&mut self, amount: f64) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Add `amount` to health, capped at max health.
    pub fn heal(&mut self, amount: f64) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn health_ratio(&self) -> f64 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}
