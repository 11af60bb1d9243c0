//! Per-frame simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::body::{Landing, Transition};
use super::events::GameEvent;
use super::state::GameState;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Accelerate is held (boost downhill / fast-fall)
    pub accelerate: bool,
    /// Accelerate was held last tick and let go this tick (jump trigger)
    pub release: bool,
}

/// Derives release edges from a raw held/not-held level
#[derive(Debug, Clone, Copy, Default)]
pub struct InputEdges {
    was_held: bool,
}

impl InputEdges {
    pub fn sample(&mut self, held: bool) -> TickInput {
        let release = self.was_held && !held;
        self.was_held = held;
        TickInput {
            accelerate: held,
            release,
        }
    }
}

fn landed(landing: Landing) -> GameEvent {
    GameEvent::JumpLanded {
        length: landing.length,
        height: landing.height,
        bonus: landing.bonus,
        hard_stop: landing.hard_stop,
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    let (elevation, slope) = state.terrain.sample(state.body.pos.x);
    let transition = state
        .body
        .update(&state.config.physics, elevation, slope, input);
    let jump_started = GameEvent::JumpStarted {
        audible_after_ticks: state.config.audio.jump_cue_delay_ticks,
    };
    match transition {
        Some(Transition::TookOff) => state.events.push(jump_started),
        Some(Transition::Landed(landing)) => state.events.push(landed(landing)),
        Some(Transition::Hopped(landing)) => {
            state.events.push(jump_started);
            state.events.push(landed(landing));
        }
        None => {}
    }

    let view = &state.config.view;
    state.camera.follow(view, &state.body);
    state
        .terrain
        .advance(state.camera.offset_x, state.camera.visible_span(view));

    if let Some(milestone) = state
        .score
        .update(state.body.jump_height, state.body.jump_length)
    {
        state.events.push(GameEvent::NewRecordTier {
            tier: milestone.tier,
            note: milestone.note,
            duration_ticks: state.config.audio.record_tone_ticks,
        });
    }

    state.time_ticks += 1;
}
