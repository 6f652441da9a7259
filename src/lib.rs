//! Ledge Runner - A side-scrolling runner over procedurally generated terrain
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain generation, actor physics, entities)
//! - `persistence`: Best-score storage
//! - `settings`: Runtime configuration for the headless runner
//! - `logging`: Logger setup
//!
//! Rendering, audio and input mapping are left to whoever drives the core:
//! everything here is plain data polled once per tick.

pub mod logging;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use persistence::{BestScoreStore, FileStore, MemoryStore, PersistError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate the per-tick constants are tuned for
    pub const TICKS_PER_SECOND: u32 = 60;

    /// World dimensions (screen space, Y grows downward)
    pub const WORLD_WIDTH: f32 = 1280.0;
    pub const WORLD_HEIGHT: f32 = 720.0;
    /// Entities whose right edge passes this X are pruned
    pub const TRAILING_EDGE: f32 = 0.0;

    /// Default ground rest height and the band ground segments stay within
    pub const GROUND_Y: f32 = 620.0;
    pub const GROUND_MIN_Y: f32 = 520.0;
    pub const GROUND_MAX_Y: f32 = 660.0;
    /// Band for floating platforms (smaller Y = higher)
    pub const PLATFORM_MIN_Y: f32 = 300.0;
    pub const PLATFORM_MAX_Y: f32 = 600.0;
    pub const PLATFORM_THICKNESS: f32 = 10.0;

    /// Actor defaults
    pub const ACTOR_X: f32 = 100.0;
    pub const ACTOR_WIDTH: f32 = 50.0;
    pub const ACTOR_HEIGHT: f32 = 50.0;
    /// Crouch and dive hitbox height
    pub const CROUCH_HEIGHT: f32 = ACTOR_HEIGHT * 0.5;

    /// Vertical motion (pixels per tick, pixels per tick²)
    pub const GRAVITY: f32 = 0.8;
    pub const JUMP_VELOCITY: f32 = -18.0;
    pub const MAX_FALL_SPEED: f32 = 28.0;
    /// Dive dynamics. Both zero: a dive cancels any remaining rise but adds no speed.
    pub const FAST_FALL_MIN_VELOCITY: f32 = 0.0;
    pub const FAST_FALL_ACCEL: f32 = 0.0;
    /// Ground segments snap the actor up over steps this small
    pub const STEP_UP_TOLERANCE: f32 = 12.0;

    /// Thrust
    pub const THRUST_ACCEL: f32 = 1.2;
    pub const THRUST_MAX_RISE_SPEED: f32 = 9.0;
    pub const THRUST_BURN_PER_TICK: f32 = 0.6;
    pub const THRUST_MAX: f32 = 100.0;
    pub const THRUST_START: f32 = 50.0;

    /// Scroll speed progression
    pub const BASE_SPEED: f32 = 6.0;
    pub const MAX_SPEED: f32 = 15.0;
    pub const SPEED_STEP: f32 = 0.5;
    pub const SPEED_STEP_SCORE: u64 = 500;

    /// Ammo and shooting
    pub const AMMO_START: u32 = 3;
    pub const AMMO_MAX: u32 = 5;
    pub const SHOOT_COOLDOWN_TICKS: u64 = 30;
    pub const PROJECTILE_SPEED: f32 = 12.0;
    pub const PROJECTILE_WIDTH: f32 = 20.0;
    pub const PROJECTILE_HEIGHT: f32 = 4.0;

    /// Pickups
    pub const COLLECTIBLE_RADIUS: f32 = 15.0;
    pub const BOOSTER_SIZE: f32 = 30.0;
    pub const BOOSTER_REFILL: f32 = 35.0;

    /// Score bonuses
    pub const AMMO_PICKUP_BONUS: u64 = 50;
    pub const THRUST_PICKUP_BONUS: u64 = 30;
    pub const SHOT_BONUS: u64 = 25;
    pub const MUST_SHOOT_BONUS: u64 = 100;

    /// Minimum clear gap between hazards is base + speed * factor
    pub const HAZARD_BASE_SPACING: f32 = 180.0;
    pub const HAZARD_SPACING_PER_SPEED: f32 = 24.0;

    /// Terrain is generated this far past the visible right edge
    pub const GENERATION_LOOKAHEAD: f32 = 600.0;
    /// Flat hazard-free runway at the start of every run
    pub const OPENING_RUNWAY: f32 = 1400.0;
}
