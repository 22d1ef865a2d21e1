//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position relative to the player anchor (world units).
/// x = right, y = down, matching viewport orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// 2D velocity (world units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Held movement input. Each axis is -1, 0 or 1 for keyboard input;
/// analog values in between are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveInput {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks that advanced the run.
    pub tick: u64,
    /// Elapsed run time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Distance to the player anchor.
    pub fn range(&self) -> f64 {
        self.0.length()
    }

    pub fn range_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }

    /// Angle from this position toward `other` (radians, atan2 convention).
    pub fn angle_to(&self, other: &Position) -> f64 {
        let d = other.0 - self.0;
        d.y.atan2(d.x)
    }

    /// Point on a ring of `radius` around the anchor at `angle`.
    pub fn on_ring(angle: f64, radius: f64) -> Self {
        Self(DVec2::from_angle(angle) * radius)
    }
}

impl MoveInput {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    /// Raw input as a vector. Not normalized: diagonal input is longer than
    /// axis input, so diagonal movement is faster.
    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl SimTime {
    /// Advance by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }

    /// Elapsed time truncated to whole seconds.
    pub fn whole_seconds(&self) -> u64 {
        self.elapsed_secs.max(0.0).floor() as u64
    }

    /// Elapsed whole seconds expressed in minutes (fractional).
    pub fn minutes(&self) -> f64 {
        self.whole_seconds() as f64 / 60.0
    }

    /// Elapsed time truncated to whole minutes.
    pub fn whole_minutes(&self) -> u64 {
        self.whole_seconds() / 60
    }
}
