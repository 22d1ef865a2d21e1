//! Simulation constants and tuning parameters.
//!
//! Distances are in world units (one unit = one viewport pixel at scale 1),
//! times in seconds unless the name says otherwise.

/// Nominal tick rate used by fixed-step drivers (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Camera ---

/// Viewport point the player is pinned to.
pub const VIEWPORT_ANCHOR: (f64, f64) = (400.0, 300.0);

// --- Player ---

pub const PLAYER_MAX_HEALTH: f64 = 100.0;
pub const PLAYER_MOVE_SPEED: f64 = 280.0;
pub const PLAYER_START_LEVEL: u32 = 1;
pub const PLAYER_START_NEXT_LEVEL_EXP: u32 = 10;

/// Radius of the player's hit/pickup sensor.
pub const PLAYER_SENSOR_RADIUS: f64 = 15.0;

// --- Ranged weapon (auto-fire) ---

pub const FIRE_COOLDOWN_MS: f64 = 850.0;
pub const BULLET_DAMAGE: f64 = 10.0;
pub const BULLET_SPEED: f64 = 650.0;
pub const BULLET_RADIUS: f64 = 6.0;

/// Nearest enemy must be closer than this for the gun to fire.
pub const FIRE_ENGAGEMENT_RADIUS: f64 = 450.0;

// --- Orbital weapon ---

pub const SWORD_DAMAGE: f64 = 7.0;
pub const SWORD_ORBIT_RADIUS: f64 = 100.0;
pub const SWORD_RADIUS: f64 = 16.0;

/// Orbit rotation rate (radians per second).
pub const SWORD_ROTATION_RATE: f64 = 3.5;

pub const MAX_SWORD_COUNT: u32 = 6;

// --- Area weapon (lightning) ---

pub const LIGHTNING_DAMAGE: f64 = 45.0;
pub const LIGHTNING_COOLDOWN_SECS: f64 = 2.4;

// --- Pickups ---

pub const MAGNET_RADIUS: f64 = 60.0;
pub const MAGNET_ATTRACTION_SPEED: f64 = 550.0;

// --- Spawning ---

/// Regular spawn interval before any scaling (ms).
pub const BASE_SPAWN_INTERVAL_MS: f64 = 1300.0;

/// Floor the regular spawn interval never drops below (ms).
pub const MIN_SPAWN_INTERVAL_MS: f64 = 150.0;

/// Interval reduction per elapsed minute (ms).
pub const SPAWN_INTERVAL_PER_MINUTE_MS: f64 = 150.0;

/// Interval reduction per player level (ms).
pub const SPAWN_INTERVAL_PER_LEVEL_MS: f64 = 8.0;

/// Minutes after which time-based scaling stops growing.
pub const MAX_SCALING_MINUTES: f64 = 15.0;

pub const REGULAR_SPAWN_RING_RADIUS: f64 = 650.0;
pub const SPECIAL_SPAWN_RING_RADIUS: f64 = 500.0;

pub const ELITE_CHANCE_PER_MINUTE_PCT: f64 = 8.0;
pub const MAX_ELITE_CHANCE_PCT: f64 = 30.0;

/// Boss period; mini-bosses spawn half a period out of phase.
pub const BOSS_PERIOD_SECS: u64 = 600;

// --- Enemy stats ---

pub const BASE_ENEMY_HP: f64 = 12.0;
pub const ELITE_HP_MULTIPLIER: f64 = 6.0;
pub const ENEMY_HP_PER_MINUTE: f64 = 6.0;
pub const ENEMY_HP_PER_LEVEL: f64 = 2.0;

pub const BASE_ENEMY_SPEED: f64 = 140.0;
pub const ENEMY_SPEED_PER_MINUTE: f64 = 6.0;
pub const ENEMY_SPEED_PER_LEVEL: f64 = 1.2;
pub const ABSOLUTE_MAX_ENEMY_SPEED: f64 = 245.0;

pub const BOSS_BASE_HP: f64 = 1000.0;
pub const BOSS_HP_PER_MINUTE: f64 = 400.0;
pub const MINI_BOSS_BASE_HP: f64 = 450.0;
pub const MINI_BOSS_HP_PER_MINUTE: f64 = 220.0;

// --- Contact damage (per tick) ---

pub const CONTACT_DAMAGE: f64 = 0.4;
pub const BOSS_CONTACT_DAMAGE: f64 = 1.2;

// --- Culling ---

pub const ENEMY_CULL_RADIUS: f64 = 1300.0;
pub const PROJECTILE_CULL_RADIUS: f64 = 1200.0;
pub const PICKUP_CULL_RADIUS: f64 = 1200.0;

// --- Progression ---

pub const LEVEL_EXP_GROWTH: f64 = 1.15;

/// Number of upgrades offered per level-up.
pub const UPGRADE_OFFER_COUNT: usize = 3;

// --- Scoring ---

pub const SCORE_PER_SECOND: u64 = 15;
pub const SCORE_PER_KILL: u64 = 60;
