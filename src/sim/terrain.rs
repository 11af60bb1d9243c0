//! Procedural hill terrain
//!
//! The ground is an unbounded run of raised-cosine hills laid end to end.
//! Each hill rises from the base ground level to its peak and back, with zero
//! slope at both ends, so neighbouring hills join with matching height and
//! slope. Only the hills around the camera are kept alive; [`Terrain::advance`]
//! appends new ones ahead and evicts those left behind.

use std::collections::VecDeque;
use std::f64::consts::{PI, TAU};

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::TerrainConfig;

/// One generated hill
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hill {
    /// World x where the hill leaves the base ground level
    pub start_x: f64,
    /// Horizontal extent (> 0)
    pub width: f64,
    /// Peak height above the base ground level (>= 0)
    pub height: f64,
}

impl Hill {
    pub fn new(start_x: f64, width: f64, height: f64) -> Self {
        Self {
            start_x,
            width,
            height,
        }
    }

    /// World x where the hill returns to the base ground level
    #[inline]
    pub fn end_x(&self) -> f64 {
        self.start_x + self.width
    }

    /// World x of the peak
    #[inline]
    pub fn top_x(&self) -> f64 {
        self.start_x + self.width / 2.0
    }

    /// Whether `x` lies on this hill (both ends inclusive)
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start_x && x <= self.end_x()
    }

    /// Elevation and slope at world `x`
    pub fn profile(&self, x: f64, ground_level: f64) -> (f64, f64) {
        let phase = TAU * (x - self.start_x) / self.width;
        let elevation = ground_level + self.height / 2.0 * (1.0 - phase.cos());
        let slope = self.height / self.width * PI * phase.sin();
        (elevation, slope)
    }
}

/// The live window of hills around the camera
#[derive(Debug, Clone)]
pub struct Terrain {
    config: TerrainConfig,
    hills: VecDeque<Hill>,
    rng: Pcg32,
}

impl Terrain {
    /// Empty terrain drawing hill sizes from `rng`
    pub fn new(config: TerrainConfig, rng: Pcg32) -> Self {
        Self {
            config,
            hills: VecDeque::with_capacity(16),
            rng,
        }
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Live hills in ascending x order
    pub fn hills(&self) -> impl ExactSizeIterator<Item = &Hill> + '_ {
        self.hills.iter()
    }

    pub fn len(&self) -> usize {
        self.hills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hills.is_empty()
    }

    pub fn first(&self) -> Option<&Hill> {
        self.hills.front()
    }

    pub fn last(&self) -> Option<&Hill> {
        self.hills.back()
    }

    /// Replace the window with a single maximum-size hill whose peak sits at `center_x`
    pub fn seed_at(&mut self, center_x: f64) {
        let TerrainConfig {
            max_width,
            max_height,
            ..
        } = self.config.clamped();
        let hill = Hill::new(center_x - max_width / 2.0, max_width, max_height);
        log::debug!("Seeding terrain with hill at {:.1}..{:.1}", hill.start_x, hill.end_x());
        self.hills.clear();
        self.hills.push_back(hill);
    }

    /// Elevation and slope of the ground at `x`
    ///
    /// Falls back to flat ground at the base level when no live hill covers `x`.
    pub fn sample(&self, x: f64) -> (f64, f64) {
        let ground_level = self.config.clamped().ground_level;
        match self.hills.iter().find(|h| h.contains(x)) {
            Some(hill) => hill.profile(x, ground_level),
            None => {
                log::warn!(
                    "Terrain query miss at x={:.2} (window {:?}..{:?})",
                    x,
                    self.first().map(|h| h.start_x),
                    self.last().map(|h| h.end_x())
                );
                (ground_level, 0.0)
            }
        }
    }

    /// Slide the window so it covers `[reference_x, reference_x + visible_span]`
    pub fn advance(&mut self, reference_x: f64, visible_span: f64) {
        if !reference_x.is_finite() {
            log::warn!("Ignoring terrain advance to non-finite x");
            return;
        }
        let visible_span = if visible_span.is_finite() {
            visible_span.max(0.0)
        } else {
            0.0
        };

        if self.hills.is_empty() {
            self.seed_at(reference_x);
        }

        while self.hills.front().is_some_and(|h| h.end_x() < reference_x) {
            if let Some(hill) = self.hills.pop_front() {
                log::trace!("Evicting hill ending at {:.1}", hill.end_x());
            }
        }
        if self.hills.is_empty() {
            // Reference jumped past the whole window
            self.seed_at(reference_x);
        }

        let horizon = reference_x + visible_span;
        while let Some(last_end) = self.hills.back().map(Hill::end_x) {
            if last_end >= horizon {
                break;
            }
            let hill = self.random_hill(last_end);
            log::debug!(
                "New hill at {:.1}: width {:.1}, height {:.1}",
                hill.start_x,
                hill.width,
                hill.height
            );
            self.hills.push_back(hill);
        }
    }

    fn random_hill(&mut self, start_x: f64) -> Hill {
        // Keep generation total even for configs that skipped validation
        let TerrainConfig {
            min_width,
            max_width,
            min_height,
            max_height,
            ..
        } = self.config.clamped();

        let width = self.rng.random_range(min_width..=max_width);
        let height = self.rng.random_range(min_height..=max_height);
        Hill::new(start_x, width, height)
    }
}
