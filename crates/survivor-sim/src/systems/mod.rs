//! Systems that operate on the entity registry each tick.
//!
//! Systems are free functions. Long-lived state that is not a component
//! (spawn timers, progression queue, camera scroll) lives in small structs
//! owned by the engine and passed in by reference.

pub mod camera;
pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod progression;
pub mod snapshot;
pub mod spawn_director;
pub mod weapons;
