//! Game state and core simulation types
//!
//! The state owns the terrain window, the player body and the score tracker
//! side by side. Nothing inside holds a reference back to the state; [`tick`]
//! passes copied scalars between them.
//!
//! [`tick`]: super::tick::tick

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::Body;
use super::camera::Camera;
use super::events::GameEvent;
use super::score::ScoreTracker;
use super::snapshot::Snapshot;
use super::terrain::Terrain;
use super::tick::{TickInput, tick};
use crate::config::{Config, ConfigError};

/// RNG seed record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    /// Seed the terrain stream was drawn from
    pub rng_state: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub terrain: Terrain,
    pub body: Body,
    pub score: ScoreTracker,
    pub camera: Camera,
    /// Events emitted by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// New session with the default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(Config::default(), seed)
    }

    /// New session with custom tuning
    pub fn with_config(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: Config, seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        let mut terrain = Terrain::new(config.terrain, rng_state.to_rng());
        let mut body = Body::new(0.0, config.terrain.ground_level);

        // Start on the crest of a full-size hill so the first sample lands on it
        terrain.seed_at(body.pos.x);
        body.pos.y = terrain.sample(body.pos.x).0;
        let mut camera = Camera::default();
        camera.follow(&config.view, &body);
        terrain.advance(camera.offset_x, camera.visible_span(&config.view));

        log::info!("New session with seed {}", seed);
        Self {
            config,
            rng_state,
            time_ticks: 0,
            terrain,
            body,
            score: ScoreTracker::new(config.score.milestone_step),
            camera,
            events: Vec::new(),
        }
    }

    /// Run one tick and capture the result
    pub fn step(&mut self, input: &TickInput) -> Snapshot {
        tick(self, input);
        self.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
