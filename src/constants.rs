//! Tuning constants shared across agents, spawning and the gravity field.
//!
//! The defaults match the speeds and radii the demo scenes were tuned with,
//! in pixels and pixels per second.

/// Default speed of an agent oscillating along its patrol range.
pub const DEFAULT_PATROL_SPEED: f64 = 80.0;
/// Default speed of an agent pursuing its target.
pub const DEFAULT_CHASE_SPEED: f64 = 160.0;
/// Default distance below which an agent starts chasing.
pub const DEFAULT_DETECTION_RADIUS: f64 = 150.0;
/// Default half width of a patrol range centred on the spawn point.
pub const DEFAULT_PATROL_HALF_WIDTH: f64 = 100.0;

/// Smallest distance used as a divisor in inverse-distance calculations.
///
/// Keeps attraction finite when a body sits on top of a well.
pub const MIN_DISTANCE: f64 = 1.0;

/// Multiplier of the seeded linear congruential generator.
pub const LCG_MULTIPLIER: u64 = 9301;
/// Increment of the seeded linear congruential generator.
pub const LCG_INCREMENT: u64 = 49297;
/// Modulus of the seeded linear congruential generator.
pub const LCG_MODULUS: u64 = 233_280;

/// Candidate positions tried per spawn before the point is dropped.
pub const SPAWN_MAX_ATTEMPTS: u32 = 50;
/// Radius around the target's start that stays free of spawns.
pub const SPAWN_SAFE_RADIUS: f64 = 100.0;
/// Distance at which the target touches, and defeats, an agent.
pub const CONTACT_RADIUS: f64 = 32.0;
/// Enemies in the first level of a wave plan.
pub const WAVE_BASE_COUNT: u32 = 15;
/// Extra enemies added per level.
pub const WAVE_INCREMENT: u32 = 2;
/// Final level of a wave plan.
pub const WAVE_MAX_LEVEL: u32 = 5;
/// Seed stride between consecutive levels.
pub const WAVE_SEED_STRIDE: u64 = 1000;

/// Fixed frame duration used by the headless driver, in seconds.
pub const FRAME_DELTA: f64 = 1.0 / 60.0;
