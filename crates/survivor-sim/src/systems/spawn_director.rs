//! Spawn director: regular enemies on a curve-driven timer, plus bosses and
//! mini-bosses on fixed time slots.
//!
//! The regular interval is recomputed every tick from the current time and
//! player level. Special slots are consumed through counters, so each slot
//! fires exactly once even when the clock jumps past several of them.

use std::f64::consts::TAU;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use survivor_balance::DifficultyCurve;
use survivor_core::constants::{REGULAR_SPAWN_RING_RADIUS, SPECIAL_SPAWN_RING_RADIUS};
use survivor_core::enums::EnemyTier;
use survivor_core::events::SimEvent;
use survivor_core::types::{Position, SimTime};

use crate::registry::EntityRegistry;
use crate::stats::RunStats;

/// Upper bound on regular spawns in one tick, for very long frames.
pub const MAX_SPAWNS_PER_TICK: u32 = 16;

/// Timers owned by the spawn director.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnDirectorState {
    /// Regular spawn interval as of the last tick (ms).
    pub spawn_interval_ms: f64,
    /// Time accumulated toward the next regular spawn (ms).
    pub spawn_accumulator_ms: f64,
    /// Run time of the last auto-fire shot.
    pub last_fire_secs: Option<f64>,
    /// Run time of the last lightning volley.
    pub last_lightning_secs: Option<f64>,
    /// Index of the next boss slot to fire.
    pub next_boss_slot: u64,
    /// Index of the next mini-boss slot to fire.
    pub next_mini_boss_slot: u64,
}

impl SpawnDirectorState {
    pub fn new(curve: &DifficultyCurve) -> Self {
        Self {
            spawn_interval_ms: curve.spawn_interval_ms(0.0, 1),
            spawn_accumulator_ms: 0.0,
            last_fire_secs: None,
            last_lightning_secs: None,
            next_boss_slot: 0,
            next_mini_boss_slot: 0,
        }
    }
}

impl Default for SpawnDirectorState {
    fn default() -> Self {
        Self::new(&DifficultyCurve::default())
    }
}

/// Advance the regular spawn timer by `dt` and fire any due special slots.
#[allow(clippy::too_many_arguments)]
pub fn run(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    state: &mut SpawnDirectorState,
    curve: &DifficultyCurve,
    time: &SimTime,
    level: u32,
    dt: f64,
    stats: &mut RunStats,
    events: &mut Vec<SimEvent>,
) {
    state.spawn_interval_ms = curve.spawn_interval_ms(time.minutes(), level);
    state.spawn_accumulator_ms += dt * 1000.0;

    let mut spawned = 0;
    while state.spawn_accumulator_ms >= state.spawn_interval_ms {
        if spawned == MAX_SPAWNS_PER_TICK {
            state.spawn_accumulator_ms %= state.spawn_interval_ms;
            break;
        }
        state.spawn_accumulator_ms -= state.spawn_interval_ms;
        spawn_regular(registry, rng, curve, time, level, events);
        spawned += 1;
    }

    run_special_slots(registry, rng, state, curve, time, level, stats, events);
}

/// Spawn one regular enemy on the outer ring, rolling for elite.
pub fn spawn_regular(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    curve: &DifficultyCurve,
    time: &SimTime,
    level: u32,
    events: &mut Vec<SimEvent>,
) {
    let whole_minutes = time.whole_minutes();
    let roll: f64 = rng.gen_range(0.0..100.0);
    let tier = if roll < curve.elite_chance_pct(whole_minutes) {
        EnemyTier::Elite
    } else {
        EnemyTier::Normal
    };
    let angle = rng.gen_range(0.0..TAU);

    registry.spawn_enemy(
        tier,
        Position::on_ring(angle, REGULAR_SPAWN_RING_RADIUS),
        curve.enemy_hp(tier, whole_minutes, level),
        curve.enemy_speed(tier, time.minutes(), level),
    );
    events.push(SimEvent::EnemySpawned { tier });
}

/// Fire every special slot at or before the current whole second, oldest
/// first.
#[allow(clippy::too_many_arguments)]
fn run_special_slots(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    state: &mut SpawnDirectorState,
    curve: &DifficultyCurve,
    time: &SimTime,
    level: u32,
    stats: &mut RunStats,
    events: &mut Vec<SimEvent>,
) {
    let now = time.whole_seconds();
    loop {
        let boss_at = curve.boss_slot_secs(state.next_boss_slot);
        let mini_at = curve.mini_boss_slot_secs(state.next_mini_boss_slot);
        let (tier, due_at) = if mini_at <= boss_at {
            (EnemyTier::MiniBoss, mini_at)
        } else {
            (EnemyTier::Boss, boss_at)
        };
        if due_at > now {
            break;
        }

        if tier == EnemyTier::Boss {
            state.next_boss_slot += 1;
            stats.bosses_spawned += 1;
            events.push(SimEvent::BossSpawned);
        } else {
            state.next_mini_boss_slot += 1;
            stats.mini_bosses_spawned += 1;
            events.push(SimEvent::MiniBossSpawned);
        }
        spawn_special(registry, rng, curve, time, level, tier);
        tracing::info!(?tier, slot_secs = due_at, now, "special enemy spawned");
    }
}

/// Spawn a boss or mini-boss on the inner ring.
pub fn spawn_special(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    curve: &DifficultyCurve,
    time: &SimTime,
    level: u32,
    tier: EnemyTier,
) {
    let angle = rng.gen_range(0.0..TAU);
    registry.spawn_enemy(
        tier,
        Position::on_ring(angle, SPECIAL_SPAWN_RING_RADIUS),
        curve.enemy_hp(tier, time.whole_minutes(), level),
        curve.enemy_speed(tier, time.minutes(), level),
    );
}
