//! Difficulty curve: elapsed time + player level → spawn pacing and enemy
//! stats.
//!
//! Every output is monotonically non-decreasing in difficulty as either
//! input grows, and every output is clamped so that arbitrarily long runs
//! stay within the configured bounds.

use serde::{Deserialize, Serialize};

use survivor_core::constants::*;
use survivor_core::enums::EnemyTier;

use crate::tiers::get_profile;

/// Tunable coefficients of the difficulty curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyCurve {
    pub base_spawn_interval_ms: f64,
    pub min_spawn_interval_ms: f64,
    pub spawn_interval_per_minute_ms: f64,
    pub spawn_interval_per_level_ms: f64,
    /// Minutes after which time-based interval and hp scaling stop growing.
    pub max_scaling_minutes: f64,

    pub elite_chance_per_minute_pct: f64,
    pub max_elite_chance_pct: f64,

    pub base_enemy_hp: f64,
    pub elite_hp_multiplier: f64,
    pub enemy_hp_per_minute: f64,
    pub enemy_hp_per_level: f64,

    pub base_enemy_speed: f64,
    pub enemy_speed_per_minute: f64,
    pub enemy_speed_per_level: f64,
    pub max_enemy_speed: f64,

    pub boss_base_hp: f64,
    pub boss_hp_per_minute: f64,
    pub mini_boss_base_hp: f64,
    pub mini_boss_hp_per_minute: f64,

    /// Boss slot period; mini-boss slots sit half a period out of phase.
    pub boss_period_secs: u64,
}

/// The curve evaluated at one instant, for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultySample {
    pub spawn_interval_ms: f64,
    pub elite_chance_pct: f64,
    pub normal_hp: f64,
    pub elite_hp: f64,
    pub normal_speed: f64,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self {
            base_spawn_interval_ms: BASE_SPAWN_INTERVAL_MS,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,
            spawn_interval_per_minute_ms: SPAWN_INTERVAL_PER_MINUTE_MS,
            spawn_interval_per_level_ms: SPAWN_INTERVAL_PER_LEVEL_MS,
            max_scaling_minutes: MAX_SCALING_MINUTES,
            elite_chance_per_minute_pct: ELITE_CHANCE_PER_MINUTE_PCT,
            max_elite_chance_pct: MAX_ELITE_CHANCE_PCT,
            base_enemy_hp: BASE_ENEMY_HP,
            elite_hp_multiplier: ELITE_HP_MULTIPLIER,
            enemy_hp_per_minute: ENEMY_HP_PER_MINUTE,
            enemy_hp_per_level: ENEMY_HP_PER_LEVEL,
            base_enemy_speed: BASE_ENEMY_SPEED,
            enemy_speed_per_minute: ENEMY_SPEED_PER_MINUTE,
            enemy_speed_per_level: ENEMY_SPEED_PER_LEVEL,
            max_enemy_speed: ABSOLUTE_MAX_ENEMY_SPEED,
            boss_base_hp: BOSS_BASE_HP,
            boss_hp_per_minute: BOSS_HP_PER_MINUTE,
            mini_boss_base_hp: MINI_BOSS_BASE_HP,
            mini_boss_hp_per_minute: MINI_BOSS_HP_PER_MINUTE,
            boss_period_secs: BOSS_PERIOD_SECS,
        }
    }
}

impl DifficultyCurve {
    /// Regular spawn interval in milliseconds, never below the floor.
    pub fn spawn_interval_ms(&self, minutes: f64, level: u32) -> f64 {
        let minutes = minutes.clamp(0.0, self.max_scaling_minutes);
        let interval = self.base_spawn_interval_ms
            - minutes * self.spawn_interval_per_minute_ms
            - level as f64 * self.spawn_interval_per_level_ms;
        interval.max(self.min_spawn_interval_ms)
    }

    /// Chance (percent) that a regular spawn is an Elite.
    pub fn elite_chance_pct(&self, whole_minutes: u64) -> f64 {
        (whole_minutes as f64 * self.elite_chance_per_minute_pct).min(self.max_elite_chance_pct)
    }

    /// Spawn hp for an enemy of `tier`.
    ///
    /// Regular tiers scale with clamped whole minutes and level; special
    /// tiers scale with unclamped whole minutes only.
    pub fn enemy_hp(&self, tier: EnemyTier, whole_minutes: u64, level: u32) -> f64 {
        let minutes = whole_minutes as f64;
        match tier {
            EnemyTier::Normal | EnemyTier::Elite => {
                let base = if tier == EnemyTier::Elite {
                    self.base_enemy_hp * self.elite_hp_multiplier
                } else {
                    self.base_enemy_hp
                };
                base + minutes.min(self.max_scaling_minutes) * self.enemy_hp_per_minute
                    + level as f64 * self.enemy_hp_per_level
            }
            EnemyTier::MiniBoss => self.mini_boss_base_hp + minutes * self.mini_boss_hp_per_minute,
            EnemyTier::Boss => self.boss_base_hp + minutes * self.boss_hp_per_minute,
        }
    }

    /// Scaled base speed before the tier multiplier, clamped to the max.
    pub fn base_speed(&self, minutes: f64, level: u32) -> f64 {
        let speed = self.base_enemy_speed
            + minutes.max(0.0) * self.enemy_speed_per_minute
            + level as f64 * self.enemy_speed_per_level;
        speed.min(self.max_enemy_speed)
    }

    /// Pursuit speed for an enemy of `tier`. Larger tiers move slower.
    pub fn enemy_speed(&self, tier: EnemyTier, minutes: f64, level: u32) -> f64 {
        self.base_speed(minutes, level) * get_profile(tier).speed_multiplier
    }

    /// Evaluate the curve at `elapsed_secs` for `level`.
    pub fn sample(&self, elapsed_secs: f64, level: u32) -> DifficultySample {
        let whole_secs = elapsed_secs.max(0.0).floor();
        let minutes = whole_secs / 60.0;
        let whole_minutes = (whole_secs / 60.0).floor() as u64;
        DifficultySample {
            spawn_interval_ms: self.spawn_interval_ms(minutes, level),
            elite_chance_pct: self.elite_chance_pct(whole_minutes),
            normal_hp: self.enemy_hp(EnemyTier::Normal, whole_minutes, level),
            elite_hp: self.enemy_hp(EnemyTier::Elite, whole_minutes, level),
            normal_speed: self.enemy_speed(EnemyTier::Normal, minutes, level),
        }
    }

    /// Second mark of the `n`-th boss slot (n starts at 0 → first boss).
    pub fn boss_slot_secs(&self, n: u64) -> u64 {
        (n + 1) * self.boss_period_secs
    }

    /// Second mark of the `n`-th mini-boss slot.
    pub fn mini_boss_slot_secs(&self, n: u64) -> u64 {
        self.boss_period_secs / 2 + n * self.boss_period_secs
    }
}
