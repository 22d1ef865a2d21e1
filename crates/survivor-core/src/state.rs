//! Game state snapshot: the complete visible state handed to the
//! presentation layer after each tick. Read-only by construction.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// True whenever ticks do not advance the run (paused, choosing an
    /// upgrade, or game over).
    pub paused: bool,
    pub god_mode: bool,
    pub player: PlayerView,
    pub kills: u32,
    /// Running score; final once `phase` is `GameOver`.
    pub score: u64,
    /// Non-empty only while choosing an upgrade.
    pub upgrade_offers: Vec<UpgradeOfferView>,
    /// Accumulated camera scroll for background tiling.
    pub scroll_offset: DVec2,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
    pub swords: Vec<SwordView>,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub health: f64,
    pub max_health: f64,
    /// health / max health, for the health bar.
    pub health_ratio: f64,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeOfferView {
    pub id: UpgradeId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub tier: EnemyTier,
    /// hp / max hp, for health bars.
    pub hp_ratio: f64,
    /// Sprite size (world units).
    pub size: f64,
    pub hp_bar_width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    /// Flight direction (radians).
    pub rotation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Position,
    pub tier: GemTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwordView {
    pub index: u32,
    pub position: Position,
    pub rotation: f64,
}
