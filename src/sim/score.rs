//! Jump score tracking

/// Height record crossed a new milestone tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    /// `floor(record / step)`
    pub tier: u32,
    /// Index of this milestone within the current jump
    pub note: u32,
}

/// Current jump values and session records
#[derive(Debug, Clone)]
pub struct ScoreTracker {
    pub height: f64,
    pub length: f64,
    pub height_record: f64,
    pub length_record: f64,
    step: f64,
    /// Milestones reached since the body last touched the ground
    notes_this_jump: u32,
}

impl ScoreTracker {
    pub fn new(milestone_step: f64) -> Self {
        Self {
            height: 0.0,
            length: 0.0,
            height_record: 0.0,
            length_record: 0.0,
            step: milestone_step,
            notes_this_jump: 0,
        }
    }

    /// Tier index of a height value
    pub fn tier_of(&self, height: f64) -> u32 {
        if self.step > 0.0 && height > 0.0 {
            (height / self.step) as u32
        } else {
            0
        }
    }

    /// Fold in this tick's jump values; returns the milestone crossed, if any
    pub fn update(&mut self, jump_height: f64, jump_length: f64) -> Option<Milestone> {
        self.height = jump_height;
        self.length = jump_length;
        self.length_record = self.length_record.max(jump_length);

        if jump_height > self.height_record {
            let previous_tier = self.tier_of(self.height_record);
            self.height_record = jump_height;
            let tier = self.tier_of(jump_height);
            if tier > previous_tier {
                let note = self.notes_this_jump;
                self.notes_this_jump += 1;
                log::info!("New height record tier {} ({:.0})", tier, jump_height);
                return Some(Milestone { tier, note });
            }
        } else if jump_height == 0.0 {
            // Grounded: the next jump starts its tone sequence over
            self.notes_this_jump = 0;
        }
        None
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new(crate::consts::MILESTONE_STEP)
    }
}
