//! Simulation configuration.
//!
//! Every field has a default taken from the constants module, so a TOML
//! file only needs to name the values it overrides:
//!
//! ```toml
//! seed = 7
//!
//! [curve]
//! min_spawn_interval_ms = 200.0
//!
//! [player.weapons]
//! sword_count = 2
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use survivor_balance::DifficultyCurve;
use survivor_core::constants::{LEVEL_EXP_GROWTH, UPGRADE_OFFER_COUNT};
use survivor_core::player::PlayerState;

use crate::error::ConfigError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
    pub curve: DifficultyCurve,
    /// Player state at the start of every run.
    pub player: PlayerState,
    /// Multiplier applied to the experience threshold on each level-up.
    pub level_exp_growth: f64,
    /// Number of distinct upgrades offered per level-up.
    pub upgrade_offer_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            curve: DifficultyCurve::default(),
            player: PlayerState::default(),
            level_exp_growth: LEVEL_EXP_GROWTH,
            upgrade_offer_count: UPGRADE_OFFER_COUNT,
        }
    }
}

impl SimConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), seed = config.seed, "loaded sim config");
        Ok(config)
    }

    /// Reject values that would break the simulation's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let curve = &self.curve;
        if curve.min_spawn_interval_ms <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_spawn_interval_ms must be positive, got {}",
                curve.min_spawn_interval_ms
            )));
        }
        if curve.min_spawn_interval_ms > curve.base_spawn_interval_ms {
            return Err(ConfigError::Invalid(format!(
                "min_spawn_interval_ms ({}) exceeds base_spawn_interval_ms ({})",
                curve.min_spawn_interval_ms, curve.base_spawn_interval_ms
            )));
        }
        if curve.boss_period_secs < 2 {
            return Err(ConfigError::Invalid(format!(
                "boss_period_secs must be at least 2, got {}",
                curve.boss_period_secs
            )));
        }
        if self.level_exp_growth < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "level_exp_growth must be >= 1.0, got {}",
                self.level_exp_growth
            )));
        }
        if self.upgrade_offer_count == 0 {
            return Err(ConfigError::Invalid(
                "upgrade_offer_count must be at least 1".to_string(),
            ));
        }
        if self.player.max_health <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "player.max_health must be positive, got {}",
                self.player.max_health
            )));
        }
        if self.player.experience_to_next_level == 0 {
            return Err(ConfigError::Invalid(
                "player.experience_to_next_level must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
