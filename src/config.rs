//! Game tuning configuration
//!
//! Every constant the simulation uses lives here so hosts can override them
//! from a JSON file. Missing fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

/// Motion constants, all per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration
    pub gravity: f64,
    /// Rolling deceleration while grounded
    pub friction: f64,
    /// Grounded speed never drops below this
    pub min_speed: f64,
    /// Gravity multiplier while accelerate is held
    pub accelerate_factor: f64,
    /// Landing speed multiplier for long jumps
    pub landing_bonus: f64,
    /// Jump length that earns the landing bonus
    pub bonus_min_jump_length: f64,
    /// Steepest downhill slope a jump may start from (`None` = any slope)
    pub takeoff_min_slope: Option<f64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            min_speed: MIN_SPEED,
            accelerate_factor: ACCELERATE_FACTOR,
            landing_bonus: LANDING_BONUS,
            bonus_min_jump_length: MIN_HILL_WIDTH,
            takeoff_min_slope: None,
        }
    }
}

/// Hill generation ranges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Elevation of flat ground between hills
    pub ground_level: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            ground_level: GROUND_LEVEL,
            min_width: MIN_HILL_WIDTH,
            max_width: MAX_HILL_WIDTH,
            min_height: MIN_HILL_HEIGHT,
            max_height: MAX_HILL_HEIGHT,
        }
    }
}

impl TerrainConfig {
    /// Copy with every range made usable for generation: finite, positive
    /// widths and non-inverted ranges. Validated configs come back unchanged.
    pub fn clamped(&self) -> Self {
        let finite_or = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };
        let min_width = finite_or(self.min_width, MIN_HILL_WIDTH).max(1.0);
        let max_width = finite_or(self.max_width, MAX_HILL_WIDTH).max(min_width);
        let min_height = finite_or(self.min_height, MIN_HILL_HEIGHT).max(0.0);
        let max_height = finite_or(self.max_height, MAX_HILL_HEIGHT).max(min_height);
        Self {
            ground_level: finite_or(self.ground_level, GROUND_LEVEL),
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }
}

/// Viewport the camera frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub screen_width: f64,
    pub screen_height: f64,
    /// Screen distance between the left edge and the player
    pub player_offset: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            player_offset: PLAYER_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Height record quantization for milestone cues
    pub milestone_step: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            milestone_step: MILESTONE_STEP,
        }
    }
}

/// Timing attached to emitted audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Grace period before a jump sound becomes audible (short taps stay silent)
    pub jump_cue_delay_ticks: u32,
    /// Length of each record tone
    pub record_tone_ticks: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            jump_cue_delay_ticks: JUMP_CUE_DELAY_TICKS,
            record_tone_ticks: RECORD_TONE_TICKS,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub physics: PhysicsConfig,
    pub terrain: TerrainConfig,
    pub view: ViewConfig,
    pub score: ScoreConfig,
    pub audio: AudioConfig,
}

impl Config {
    /// Parse a JSON config and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value keeps the simulation well defined
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        if !(p.gravity.is_finite() && p.gravity > 0.0) {
            return Err(invalid("physics.gravity", "must be positive"));
        }
        if !(p.friction.is_finite() && p.friction >= 0.0) {
            return Err(invalid("physics.friction", "must be non-negative"));
        }
        if !(p.min_speed.is_finite() && p.min_speed > 0.0) {
            return Err(invalid("physics.min_speed", "must be positive"));
        }
        if !(p.accelerate_factor.is_finite() && p.accelerate_factor >= 1.0) {
            return Err(invalid("physics.accelerate_factor", "must be at least 1"));
        }
        if !(p.landing_bonus.is_finite() && p.landing_bonus >= 1.0) {
            return Err(invalid("physics.landing_bonus", "must be at least 1"));
        }
        if !p.bonus_min_jump_length.is_finite() {
            return Err(invalid("physics.bonus_min_jump_length", "must be finite"));
        }
        if p.takeoff_min_slope.is_some_and(|s| !s.is_finite()) {
            return Err(invalid("physics.takeoff_min_slope", "must be finite"));
        }

        let t = &self.terrain;
        if !t.ground_level.is_finite() {
            return Err(invalid("terrain.ground_level", "must be finite"));
        }
        if !(t.min_width.is_finite() && t.min_width > 0.0) {
            return Err(invalid("terrain.min_width", "must be positive"));
        }
        if !(t.max_width.is_finite() && t.max_width >= t.min_width) {
            return Err(invalid("terrain.max_width", "must be at least min_width"));
        }
        if !(t.min_height.is_finite() && t.min_height >= 0.0) {
            return Err(invalid("terrain.min_height", "must be non-negative"));
        }
        if !(t.max_height.is_finite() && t.max_height >= t.min_height) {
            return Err(invalid("terrain.max_height", "must be at least min_height"));
        }

        let v = &self.view;
        if !(v.screen_width.is_finite() && v.screen_width > 0.0) {
            return Err(invalid("view.screen_width", "must be positive"));
        }
        if !(v.screen_height.is_finite() && v.screen_height > 0.0) {
            return Err(invalid("view.screen_height", "must be positive"));
        }
        if !(v.player_offset.is_finite() && v.player_offset >= 0.0) {
            return Err(invalid("view.player_offset", "must be non-negative"));
        }

        let step = self.score.milestone_step;
        if !(step.is_finite() && step > 0.0) {
            return Err(invalid("score.milestone_step", "must be positive"));
        }
        Ok(())
    }
}
