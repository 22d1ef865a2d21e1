//! Progression: experience, level-ups and upgrade choices.
//!
//! Collected experience is queued during combat and applied here. Each
//! threshold crossed grants one level and one pending upgrade choice;
//! choices are offered one at a time.

use rand_chacha::ChaCha8Rng;

use survivor_balance::upgrades::{apply_upgrade, draw_offers};
use survivor_core::enums::UpgradeId;
use survivor_core::events::SimEvent;
use survivor_core::player::PlayerState;

use crate::error::CommandRejected;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progression {
    /// Experience collected this tick, not yet applied.
    pub pending_experience: u32,
    /// Level-ups whose upgrade has not been chosen yet.
    pub pending_choices: u32,
    /// The offer currently on screen. Empty when not choosing.
    pub offers: Vec<UpgradeId>,
}

/// Threshold for the next level: the previous one times `growth`, floored.
pub fn next_threshold(current: u32, growth: f64) -> u32 {
    ((f64::from(current) * growth).floor() as u32).max(1)
}

/// Add `amount` experience and level up for every threshold crossed.
/// Returns the number of levels gained.
pub fn gain_experience(
    player: &mut PlayerState,
    amount: u32,
    growth: f64,
    events: &mut Vec<SimEvent>,
) -> u32 {
    player.experience = player.experience.saturating_add(amount);

    let mut levels = 0;
    while player.experience >= player.experience_to_next_level {
        player.experience -= player.experience_to_next_level;
        player.level += 1;
        player.experience_to_next_level = next_threshold(player.experience_to_next_level, growth);
        levels += 1;
        events.push(SimEvent::LevelUp {
            level: player.level,
        });
        tracing::info!(
            level = player.level,
            next = player.experience_to_next_level,
            "level up"
        );
    }
    levels
}

impl Progression {
    pub fn is_choosing(&self) -> bool {
        !self.offers.is_empty()
    }

    /// Apply queued experience. Returns true when an upgrade choice is open.
    pub fn run(
        &mut self,
        player: &mut PlayerState,
        rng: &mut ChaCha8Rng,
        growth: f64,
        offer_count: usize,
        events: &mut Vec<SimEvent>,
    ) -> bool {
        let amount = std::mem::take(&mut self.pending_experience);
        if amount > 0 {
            self.pending_choices += gain_experience(player, amount, growth, events);
        }
        self.open_choice(player, rng, offer_count)
    }

    /// Draw a fresh offer if a choice is pending and none is on screen.
    /// Returns true when an offer is on screen.
    pub fn open_choice(
        &mut self,
        player: &PlayerState,
        rng: &mut ChaCha8Rng,
        offer_count: usize,
    ) -> bool {
        if self.pending_choices == 0 {
            return false;
        }
        if self.offers.is_empty() {
            self.offers = draw_offers(rng, player, offer_count);
            tracing::debug!(offers = ?self.offers, pending = self.pending_choices, "upgrade offer");
        }
        !self.offers.is_empty()
    }

    /// Apply the offer at `index` and consume one pending choice.
    pub fn select(
        &mut self,
        index: usize,
        player: &mut PlayerState,
        events: &mut Vec<SimEvent>,
    ) -> Result<UpgradeId, CommandRejected> {
        let Some(&id) = self.offers.get(index) else {
            return Err(CommandRejected::UpgradeIndexOutOfRange {
                index,
                offered: self.offers.len(),
            });
        };
        apply_upgrade(id, player);
        self.offers.clear();
        self.pending_choices = self.pending_choices.saturating_sub(1);
        events.push(SimEvent::UpgradeApplied { id });
        tracing::info!(?id, remaining = self.pending_choices, "upgrade applied");
        Ok(id)
    }
}
