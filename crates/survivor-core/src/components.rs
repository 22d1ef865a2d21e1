//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyTier, GemTier};

/// Hostile unit. Speed is fixed at spawn from the difficulty curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub tier: EnemyTier,
    /// Pursuit speed toward the player anchor (units/s).
    pub speed: f64,
}

/// Hit points of a damageable entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: f64,
    pub max_hp: f64,
}

/// Circular collision extent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub radius: f64,
}

/// Auto-fired bullet. Damage is copied from the player stat at fire time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: f64,
}

/// Experience gem dropped by a dead enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Gem {
    pub tier: GemTier,
    pub value: u32,
}

/// Sword orbiting the player. Position is recomputed every tick from the
/// global orbit phase and `index`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrbitalWeapon {
    pub index: u32,
    pub damage: f64,
    /// Sprite rotation (radians), tangent to the orbit.
    pub rotation: f64,
}

impl Health {
    pub fn new(hp: f64) -> Self {
        Self { hp, max_hp: hp }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    /// Remaining share of max hp, clamped to [0, 1].
    pub fn ratio(&self) -> f64 {
        if self.max_hp <= 0.0 {
            return 0.0;
        }
        (self.hp / self.max_hp).clamp(0.0, 1.0)
    }
}
