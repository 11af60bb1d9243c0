//! Read-only view of a tick for renderers and audio

use serde::Serialize;

use super::camera::Camera;
use super::events::GameEvent;
use super::state::GameState;
use super::terrain::Hill;

/// Player pose
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub is_jumping: bool,
    /// Travel direction (radians) for sprite rotation
    pub heading: f64,
}

/// Current jump values and records
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBoard {
    pub height: f64,
    pub height_record: f64,
    pub length: f64,
    pub length_record: f64,
}

/// Everything an external collaborator needs after a tick
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub seed: u64,
    pub hills: Vec<Hill>,
    pub ground_level: f64,
    pub player: Pose,
    pub camera: Camera,
    pub score: ScoreBoard,
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let body = &state.body;
        let score = &state.score;
        Self {
            tick: state.time_ticks,
            seed: state.rng_state.seed,
            hills: state.terrain.hills().copied().collect(),
            ground_level: state.terrain.config().ground_level,
            player: Pose {
                x: body.pos.x,
                y: body.pos.y,
                vx: body.vel.x,
                vy: body.vel.y,
                is_jumping: body.is_jumping(),
                heading: body.heading(),
            },
            camera: state.camera,
            score: ScoreBoard {
                height: score.height,
                height_record: score.height_record,
                length: score.length,
                length_record: score.length_record,
            },
            events: state.events.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
