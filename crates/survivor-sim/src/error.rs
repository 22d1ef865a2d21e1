//! Error types for configuration loading and command handling.

use std::path::PathBuf;

use thiserror::Error;

use survivor_core::enums::GamePhase;

/// Errors raised while loading a `SimConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Why a command left the simulation unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandRejected {
    #[error("{command} is not accepted while {phase:?}")]
    WrongPhase {
        command: &'static str,
        phase: GamePhase,
    },

    #[error("upgrade index {index} out of range ({offered} offered)")]
    UpgradeIndexOutOfRange { index: usize, offered: usize },
}
