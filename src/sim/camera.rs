//! Camera framing
//!
//! The camera keeps the player a fixed screen distance from the left edge and
//! zooms out as the player climbs, never zooming in past 1:1.

use serde::Serialize;

use super::body::Body;
use crate::config::ViewConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    /// World x at the left screen edge
    pub offset_x: f64,
    /// Screen pixels per world unit (<= 1)
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            scale: 1.0,
        }
    }
}

impl Camera {
    /// Reframe around the body
    pub fn follow(&mut self, view: &ViewConfig, body: &Body) {
        self.offset_x = body.pos.x - view.player_offset;

        let framed_height = body.pos.y + view.player_offset * 4.0;
        self.scale = if framed_height.is_finite() && framed_height > 0.0 {
            (view.screen_height / framed_height).min(1.0)
        } else {
            1.0
        };
    }

    /// World width covered by the screen
    pub fn visible_span(&self, view: &ViewConfig) -> f64 {
        view.screen_width / self.scale
    }
}
