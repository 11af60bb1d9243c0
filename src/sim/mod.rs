//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod body;
pub mod camera;
pub mod events;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod terrain;
pub mod tick;

pub use autopilot::Autopilot;
pub use body::{Body, Landing, MotionState, Transition};
pub use camera::Camera;
pub use events::{GameEvent, note_frequency};
pub use score::{Milestone, ScoreTracker};
pub use snapshot::{Pose, ScoreBoard, Snapshot};
pub use state::{GameState, RngState};
pub use terrain::{Hill, Terrain};
pub use tick::{InputEdges, TickInput, tick};
