//! Events emitted by the simulation for visual and audio feedback.
//!
//! Events are transient: each snapshot carries only the events of the tick
//! that produced it.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyTier, UpgradeId};
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Regular enemy entered the arena.
    EnemySpawned { tier: EnemyTier },
    /// Stage boss entered the arena.
    BossSpawned,
    /// Mini-boss entered the arena.
    MiniBossSpawned,
    EnemyKilled { tier: EnemyTier, position: Position },
    /// Lightning bolt struck at a target's position.
    LightningStrike { position: Position },
    BulletFired,
    PickupCollected { value: u32 },
    LevelUp { level: u32 },
    UpgradeApplied { id: UpgradeId },
    GameOver { score: u64 },
}
