//! Core types and definitions for the survivor simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, player state, snapshots, events, and constants.
//! It has no dependency on the ECS runtime or any presentation layer.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod player;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
