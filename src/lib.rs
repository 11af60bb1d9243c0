//! Hill Hopper - an endless side-scrolling hill jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, player physics, scoring)
//! - `config`: Data-driven game tuning
//! - `web`: Browser bindings (wasm32 only)

pub mod config;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{Config, ConfigError};
pub use sim::{GameState, Snapshot, TickInput};

/// Game configuration constants
pub mod consts {
    /// Frames per second the per-tick constants are tuned for
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Elevation of the flat ground between hills
    pub const GROUND_LEVEL: f64 = 16.0;
    /// Hill size ranges
    pub const MIN_HILL_WIDTH: f64 = 200.0;
    pub const MAX_HILL_WIDTH: f64 = 500.0;
    pub const MIN_HILL_HEIGHT: f64 = 100.0;
    pub const MAX_HILL_HEIGHT: f64 = 300.0;

    /// Player physics (per tick)
    pub const GRAVITY: f64 = 0.05;
    pub const FRICTION: f64 = 0.03;
    /// Grounded speed floor so the player never stalls
    pub const MIN_SPEED: f64 = 2.0;
    /// Gravity multiplier while accelerate is held
    pub const ACCELERATE_FACTOR: f64 = 3.0;
    /// Speed multiplier when landing a jump longer than a hill
    pub const LANDING_BONUS: f64 = 1.1;

    /// Default viewport
    pub const SCREEN_WIDTH: f64 = 640.0;
    pub const SCREEN_HEIGHT: f64 = 480.0;
    pub const PLAYER_OFFSET: f64 = 64.0;

    /// Height record milestone spacing
    pub const MILESTONE_STEP: f64 = 100.0;

    /// Audio cue timing (100 ms each)
    pub const JUMP_CUE_DELAY_TICKS: u32 = TICKS_PER_SECOND / 10;
    pub const RECORD_TONE_TICKS: u32 = TICKS_PER_SECOND / 10;
}

/// Seed derived once from the wall clock
#[cfg(not(target_arch = "wasm32"))]
pub fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Seed derived once from the wall clock
#[cfg(target_arch = "wasm32")]
pub fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}
