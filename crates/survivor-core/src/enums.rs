//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy strength class. Every tier-dependent formula keys on this tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyTier {
    #[default]
    Normal,
    Elite,
    MiniBoss,
    Boss,
}

/// Experience gem class, from lowest to highest value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GemTier {
    #[default]
    Cyan,
    Green,
    Purple,
    Gold,
}

/// Top-level run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    /// Paused by the player.
    Paused,
    /// A level-up is waiting for the player to pick an upgrade.
    ChoosingUpgrade,
    /// Health reached zero. Only `ResetRun` leaves this state.
    GameOver,
}

/// Entries of the upgrade catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    /// Fire cooldown x0.8.
    RapidFire,
    /// Bullet damage +15.
    FirePower,
    /// One more orbiting sword, capped.
    OrbitalBlade,
    /// One more lightning strike per volley.
    LightningStorm,
    /// Magnet radius +70.
    MagnetField,
    /// Heal a share of max health.
    EmergencyRepair,
}

impl EnemyTier {
    pub fn is_special(&self) -> bool {
        matches!(self, EnemyTier::MiniBoss | EnemyTier::Boss)
    }
}

impl GamePhase {
    /// True whenever ticks do not advance the run.
    pub fn is_halted(&self) -> bool {
        !matches!(self, GamePhase::Running)
    }
}
