//! Tier-specific enemy profiles.
//!
//! Consolidates every tier-dependent constant into one table.

use survivor_core::constants::*;
use survivor_core::enums::EnemyTier;

/// Static profile for an enemy tier.
pub struct TierProfile {
    /// Sprite size (world units); the hitbox radius is half of it.
    pub size: f64,
    /// Multiplier applied to the scaled base speed.
    pub speed_multiplier: f64,
    /// Health the player loses per tick of contact.
    pub contact_damage: f64,
    /// Whether the entity is removed once it strays past the cull radius.
    pub cullable: bool,
    /// Width of the health bar drawn above the sprite.
    pub hp_bar_width: f64,
}

impl TierProfile {
    pub fn hit_radius(&self) -> f64 {
        self.size / 2.0
    }
}

/// Get the profile for a given tier.
pub fn get_profile(tier: EnemyTier) -> TierProfile {
    match tier {
        EnemyTier::Normal => TierProfile {
            size: 32.0,
            speed_multiplier: 1.0,
            contact_damage: CONTACT_DAMAGE,
            cullable: true,
            hp_bar_width: 30.0,
        },
        EnemyTier::Elite => TierProfile {
            size: 48.0,
            speed_multiplier: 0.55,
            contact_damage: CONTACT_DAMAGE,
            cullable: true,
            hp_bar_width: 30.0,
        },
        EnemyTier::MiniBoss => TierProfile {
            size: 64.0,
            speed_multiplier: 0.4,
            contact_damage: CONTACT_DAMAGE,
            cullable: true,
            hp_bar_width: 40.0,
        },
        EnemyTier::Boss => TierProfile {
            size: 80.0,
            speed_multiplier: 0.4,
            contact_damage: BOSS_CONTACT_DAMAGE,
            cullable: false,
            hp_bar_width: 60.0,
        },
    }
}
