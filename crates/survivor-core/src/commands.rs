//! Commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. A command
//! that does not match the current phase is ignored.

use serde::{Deserialize, Serialize};

/// All possible player and console actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input ---
    /// Replace the held movement input. Axes are clamped to [-1, 1].
    SetMoveInput { x: f64, y: f64 },

    // --- Run control ---
    /// Pause a running game.
    Pause,
    /// Resume a paused game.
    Resume,
    /// Pick one of the offered upgrades (index into the offer list).
    SelectUpgrade { index: usize },
    /// Throw away the current run and start a fresh one.
    ResetRun,

    // --- Admin console ---
    /// Toggle contact-damage immunity.
    ToggleGodMode,
    /// Skip the run clock forward.
    AdvanceTime { ms: u64 },
    /// Grant exactly one level's worth of experience.
    ForceLevelUp,
}

impl PlayerCommand {
    /// Short name used in logs and rejection reasons.
    pub fn name(&self) -> &'static str {
        match self {
            PlayerCommand::SetMoveInput { .. } => "set_move_input",
            PlayerCommand::Pause => "pause",
            PlayerCommand::Resume => "resume",
            PlayerCommand::SelectUpgrade { .. } => "select_upgrade",
            PlayerCommand::ResetRun => "reset_run",
            PlayerCommand::ToggleGodMode => "toggle_god_mode",
            PlayerCommand::AdvanceTime { .. } => "advance_time",
            PlayerCommand::ForceLevelUp => "force_level_up",
        }
    }
}
