//! Camera model: the player is pinned to the viewport anchor and the world
//! scrolls past it.

use glam::DVec2;

use survivor_core::constants::VIEWPORT_ANCHOR;
use survivor_core::types::{MoveInput, Position};

/// Accumulated scroll, used by the presentation layer to tile the ground.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub scroll_offset: DVec2,
}

impl Camera {
    pub fn scroll(&mut self, delta: DVec2) {
        self.scroll_offset += delta;
    }
}

/// World displacement for one tick. Every world entity moves by the
/// negation of this vector. Input is not normalized, so diagonal movement
/// is √2 faster than axis movement.
pub fn compute_movement(input: MoveInput, move_speed: f64, dt: f64) -> DVec2 {
    input.as_vec() * move_speed * dt
}

/// Anchor-relative position → viewport coordinates.
pub fn to_screen(position: &Position) -> DVec2 {
    position.0 + DVec2::from(VIEWPORT_ANCHOR)
}
