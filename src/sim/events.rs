//! Fire-and-forget cues for the audio layer
//!
//! The simulation never owns timers. Any delay a sound needs travels with the
//! event as a tick count that the audio scheduler counts down itself.

use serde::Serialize;

/// Notable transitions emitted during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// Body left the ground. The jump sound should stay silent for
    /// `audible_after_ticks` and be dropped if the jump lands sooner.
    JumpStarted { audible_after_ticks: u32 },
    /// Body touched down again
    JumpLanded {
        length: f64,
        height: f64,
        /// Landing speed bonus was applied
        bonus: bool,
        /// Body hit an upslope head-on and stopped dead
        hard_stop: bool,
    },
    /// Height record crossed into a new milestone tier
    NewRecordTier {
        tier: u32,
        /// Position of this tone in the rising sequence of the current jump
        note: u32,
        duration_ticks: u32,
    },
}

/// C major scale starting at middle C (Hz)
const SCALE: [f64; 7] = [261.626, 293.665, 329.628, 349.228, 391.995, 440.000, 493.883];

/// Pitch of the `note`-th record tone: walks up the scale, one octave per 7 notes
pub fn note_frequency(note: u32) -> f64 {
    let octave = (note / SCALE.len() as u32).min(16);
    SCALE[note as usize % SCALE.len()] * f64::from(1u32 << octave)
}
