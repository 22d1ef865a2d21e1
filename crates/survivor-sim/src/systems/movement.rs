//! Movement: world scroll, enemy pursuit, bullet flight and gem magnet.
//!
//! Every world entity is first displaced by the negated camera movement,
//! then applies its own motion. Swords are anchored to the player and are
//! placed by the weapons system instead.

use glam::DVec2;
use hecs::World;

use survivor_core::components::{Enemy, Gem, Projectile};
use survivor_core::constants::MAGNET_ATTRACTION_SPEED;
use survivor_core::types::{Position, Velocity};

/// Move `pos` toward the anchor by at most `step`, without overshooting.
fn step_toward_anchor(pos: &mut Position, step: f64) {
    let distance = pos.range();
    if distance <= f64::EPSILON {
        return;
    }
    let inward = -pos.0 / distance;
    pos.0 += inward * step.min(distance);
}

pub fn run(world: &mut World, scroll: DVec2, dt: f64, magnet_radius: f64) {
    for (_entity, (enemy, pos)) in world.query_mut::<(&Enemy, &mut Position)>() {
        pos.0 -= scroll;
        step_toward_anchor(pos, enemy.speed * dt);
    }

    for (_entity, (_bullet, vel, pos)) in
        world.query_mut::<(&Projectile, &Velocity, &mut Position)>()
    {
        pos.0 += vel.0 * dt - scroll;
    }

    for (_entity, (_gem, pos)) in world.query_mut::<(&Gem, &mut Position)>() {
        pos.0 -= scroll;
        if pos.range() < magnet_radius {
            step_toward_anchor(pos, MAGNET_ATTRACTION_SPEED * dt);
        }
    }
}
