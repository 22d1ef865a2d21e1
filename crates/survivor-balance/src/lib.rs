//! Balance rules for the survivor simulation.
//!
//! Pure functions and data tables: the difficulty curve, per-tier enemy
//! profiles, the experience gem drop table, and the upgrade catalog.
//! No ECS dependency; operates on plain data.

pub mod curve;
pub mod loot;
pub mod tiers;
pub mod upgrades;

pub use survivor_core as core;

pub use curve::DifficultyCurve;
