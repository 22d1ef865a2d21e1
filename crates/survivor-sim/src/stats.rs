//! Per-run counters and the score formula.

use serde::Serialize;

use survivor_core::constants::{SCORE_PER_KILL, SCORE_PER_SECOND};
use survivor_core::types::SimTime;

/// Running statistics tracked by the engine for the current run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub kills: u32,
    pub bullets_fired: u32,
    pub lightning_strikes: u32,
    pub bosses_spawned: u32,
    pub mini_bosses_spawned: u32,
    pub experience_collected: u64,
}

impl RunStats {
    pub fn score(&self, time: &SimTime) -> u64 {
        score(time, self.kills)
    }
}

/// Score = whole seconds survived × 15 + kills × 60.
pub fn score(time: &SimTime, kills: u32) -> u64 {
    time.whole_seconds() * SCORE_PER_SECOND + u64::from(kills) * SCORE_PER_KILL
}
