//! Experience gem drop table.
//!
//! The table is a pure function of the killed enemy's tier, the elapsed
//! whole minutes, and a roll in [0, 100). Feeding the same roll always
//! yields the same gem, so a seeded RNG reproduces every drop.

use rand::Rng;

use survivor_core::enums::{EnemyTier, GemTier};

/// A rolled drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drop {
    pub tier: GemTier,
    pub value: u32,
}

impl Drop {
    const fn new(tier: GemTier, value: u32) -> Self {
        Self { tier, value }
    }
}

/// Resolve the drop for a given roll. Bosses and mini-bosses bypass the
/// time-based roll.
pub fn drop_for(enemy: EnemyTier, whole_minutes: u64, roll: f64) -> Drop {
    match enemy {
        EnemyTier::Boss => return Drop::new(GemTier::Gold, 200),
        EnemyTier::MiniBoss => return Drop::new(GemTier::Purple, 50),
        EnemyTier::Normal | EnemyTier::Elite => {}
    }

    if whole_minutes >= 10 {
        return if roll < 10.0 {
            Drop::new(GemTier::Gold, 100)
        } else if roll < 40.0 {
            Drop::new(GemTier::Purple, 25)
        } else {
            Drop::new(GemTier::Green, 5)
        };
    }

    if whole_minutes >= 5 && roll < 15.0 {
        Drop::new(GemTier::Purple, 20)
    } else if whole_minutes >= 2 && roll < 30.0 {
        Drop::new(GemTier::Green, 5)
    } else {
        Drop::new(GemTier::Cyan, 1)
    }
}

/// Draw a roll from `rng` and resolve it.
pub fn roll_drop<R: Rng + ?Sized>(rng: &mut R, enemy: EnemyTier, whole_minutes: u64) -> Drop {
    let roll: f64 = rng.gen_range(0.0..100.0);
    drop_for(enemy, whole_minutes, roll)
}

/// Sprite size of a gem; the pickup radius is half of it.
pub fn gem_size(tier: GemTier) -> f64 {
    match tier {
        GemTier::Cyan | GemTier::Green => 12.0,
        GemTier::Purple => 16.0,
        GemTier::Gold => 20.0,
    }
}
