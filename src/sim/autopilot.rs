//! Idle/demo mode - a simple pilot that plays the game
//!
//! Produces the raw held/not-held level a player would; feed it through
//! [`InputEdges`](super::tick::InputEdges) to get tick input.

use super::body::Body;

/// Slope that counts as a real climb before letting go near the crest
const CLIMB_SLOPE: f64 = 0.3;

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot {
    climbing: bool,
}

impl Autopilot {
    /// Whether to hold accelerate this tick, given the slope under the body
    pub fn held(&mut self, body: &Body, slope: f64) -> bool {
        if body.is_jumping() {
            self.climbing = false;
            // Fast-fall on the way down
            return body.vel.y < 0.0;
        }
        if slope < 0.0 {
            // Boost downhill
            self.climbing = false;
            true
        } else if slope > CLIMB_SLOPE {
            self.climbing = true;
            true
        } else if self.climbing {
            // Flattening out near the crest: let go to jump
            self.climbing = false;
            false
        } else {
            // Valley floor
            true
        }
    }
}
