//! Simulation engine for the survivor arena.
//!
//! Owns the hecs entity registry, runs systems once per tick in a fixed
//! order, and produces `GameStateSnapshot`s for the presentation layer.

pub mod config;
pub mod engine;
pub mod error;
pub mod registry;
pub mod stats;
pub mod systems;

pub use survivor_balance as balance;
pub use survivor_core as core;

pub use config::SimConfig;
pub use engine::SimulationEngine;
pub use error::{CommandRejected, ConfigError};
pub use registry::EntityRegistry;
