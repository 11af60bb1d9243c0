//! Player motion
//!
//! The body is a point mass with two states. Grounded, it slides along the
//! terrain as a 1-D speed along the local slope; airborne, it flies a
//! ballistic arc until it drops below the ground again.

use glam::DVec2;

use super::tick::TickInput;
use crate::config::PhysicsConfig;

/// Motion state of the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    /// Following the terrain surface
    #[default]
    Grounded,
    /// Free flight under gravity
    Airborne,
}

/// Outcome of a touchdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Jump length and height at touchdown
    pub length: f64,
    pub height: f64,
    /// Landing speed bonus was applied
    pub bonus: bool,
    /// Velocity pointed into the slope and was killed
    pub hard_stop: bool,
}

/// State change produced by [`Body::update`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    TookOff,
    Landed(Landing),
    /// Took off and came straight back down within the same tick
    Hopped(Landing),
}

/// The player's kinematic state
#[derive(Debug, Clone, Default)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    pub state: MotionState,
    /// Highest y reached during the current jump (0 while grounded)
    pub jump_height: f64,
    /// Horizontal distance covered by the current jump (0 while grounded)
    pub jump_length: f64,
    /// x at takeoff
    pub jump_start_x: f64,
}

/// Length of the slope vector `(1, slope)`
#[inline]
fn incline(slope: f64) -> f64 {
    (1.0 + slope * slope).sqrt()
}

impl Body {
    /// Body at rest at `(x, y)`
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.state == MotionState::Airborne
    }

    /// Travel direction in radians, 0 when at rest
    pub fn heading(&self) -> f64 {
        // atan2 is defined for vx == 0, unlike the slope ratio vy / vx
        self.vel.y.atan2(self.vel.x)
    }

    /// Advance one tick against the ground sample `(elevation, slope)` at the current x
    pub fn update(
        &mut self,
        physics: &PhysicsConfig,
        elevation: f64,
        slope: f64,
        input: &TickInput,
    ) -> Option<Transition> {
        let slope = if slope.is_finite() { slope } else { 0.0 };
        let elevation = if elevation.is_finite() {
            elevation
        } else {
            self.pos.y
        };
        if !self.vel.is_finite() {
            log::warn!("Resetting non-finite velocity {:?}", self.vel);
            self.vel = DVec2::ZERO;
        }
        let obl = incline(slope);

        let took_off = self.update_velocity(physics, slope, obl, input);

        self.pos += self.vel;

        let mut landing = None;
        // Touchdown needs the body strictly below the surface
        if !self.is_jumping() || self.pos.y < elevation {
            self.pos.y = elevation;
            if self.is_jumping() {
                landing = Some(self.land(physics, slope, obl));
            }
        }

        self.update_jump_score();
        match (took_off, landing) {
            (true, Some(landing)) => Some(Transition::Hopped(landing)),
            (true, None) => Some(Transition::TookOff),
            (false, Some(landing)) => Some(Transition::Landed(landing)),
            (false, None) => None,
        }
    }

    fn update_velocity(
        &mut self,
        physics: &PhysicsConfig,
        slope: f64,
        obl: f64,
        input: &TickInput,
    ) -> bool {
        let mut g = -physics.gravity;
        if input.accelerate {
            g *= physics.accelerate_factor;
        }

        if self.is_jumping() {
            self.vel.y += g;
            return false;
        }

        let speed =
            (self.vel.length() + g * slope / obl - physics.friction / obl).max(physics.min_speed);
        self.vel = DVec2::new(speed / obl, speed * slope / obl);

        if input.release && self.can_take_off(physics, slope) {
            self.take_off(physics, obl);
            return true;
        }
        false
    }

    fn can_take_off(&self, physics: &PhysicsConfig, slope: f64) -> bool {
        match physics.takeoff_min_slope {
            Some(min) => slope >= min,
            None => true,
        }
    }

    fn take_off(&mut self, physics: &PhysicsConfig, obl: f64) {
        self.state = MotionState::Airborne;
        self.jump_start_x = self.pos.x;
        self.vel.y += physics.gravity / obl;
        log::debug!("Takeoff at x={:.1} with velocity {:?}", self.pos.x, self.vel);
    }

    fn land(&mut self, physics: &PhysicsConfig, slope: f64, obl: f64) -> Landing {
        self.state = MotionState::Grounded;
        let (length, height) = (self.jump_length, self.jump_height);

        // Component of the incoming velocity along the new slope
        let mut dv = (self.vel.x + self.vel.y * slope) / obl;
        if dv < 0.0 {
            self.vel = DVec2::ZERO;
            log::debug!("Hard landing at x={:.1}", self.pos.x);
            return Landing {
                length,
                height,
                bonus: false,
                hard_stop: true,
            };
        }

        let bonus = length > physics.bonus_min_jump_length;
        if bonus {
            dv *= physics.landing_bonus;
        }
        self.vel = DVec2::new(dv / obl, dv * slope / obl);
        log::debug!(
            "Landed at x={:.1} after {:.1} (bonus: {}), speed {:.3}",
            self.pos.x,
            length,
            bonus,
            dv
        );
        Landing {
            length,
            height,
            bonus,
            hard_stop: false,
        }
    }

    fn update_jump_score(&mut self) {
        if !self.is_jumping() {
            self.jump_height = 0.0;
            self.jump_length = 0.0;
            return;
        }
        self.jump_length = self.pos.x - self.jump_start_x;
        self.jump_height = self.jump_height.max(self.pos.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND: f64 = 16.0;

    fn physics() -> PhysicsConfig {
        PhysicsConfig::default()
    }

    fn release() -> TickInput {
        TickInput {
            release: true,
            ..Default::default()
        }
    }

    fn airborne(x: f64, y: f64, vel: DVec2) -> Body {
        Body {
            pos: DVec2::new(x, y),
            vel,
            state: MotionState::Airborne,
            ..Default::default()
        }
    }

    #[test]
    fn test_jump_edge_takes_off_on_flat_ground() {
        let mut body = Body::new(0.0, GROUND);
        body.vel = DVec2::new(2.0, 0.0);
        let t = body.update(&physics(), GROUND, 0.0, &release());
        assert_eq!(t, Some(Transition::TookOff));
        assert!(body.is_jumping());
        assert_eq!(body.jump_start_x, 0.0);
        assert!(body.pos.y > GROUND);
    }

    #[test]
    fn test_held_level_does_not_take_off() {
        let mut body = Body::new(0.0, GROUND);
        let held = TickInput {
            accelerate: true,
            ..Default::default()
        };
        for _ in 0..10 {
            assert_eq!(body.update(&physics(), GROUND, 0.0, &held), None);
        }
        assert!(!body.is_jumping());
    }

    #[test]
    fn test_grounded_speed_never_below_min() {
        let p = physics();
        let mut body = Body::new(0.0, GROUND);
        for _ in 0..500 {
            body.update(&p, GROUND, 0.0, &TickInput::default());
            assert!(body.vel.x >= p.min_speed);
            assert_eq!(body.pos.y, GROUND);
        }
    }

    #[test]
    fn test_grounded_speed_floor_on_upslope() {
        let p = physics();
        let mut body = Body::new(0.0, GROUND);
        for _ in 0..200 {
            body.update(&p, GROUND + 50.0, 0.8, &TickInput::default());
            assert!(body.vel.length() >= p.min_speed - 1e-12);
            assert!((body.vel.y / body.vel.x - 0.8).abs() < 1e-12);
        }
    }

    #[test]
    fn test_accelerate_boosts_downhill() {
        let p = physics();
        let mut coasting = Body::new(0.0, GROUND);
        coasting.vel = DVec2::new(3.0, -1.5);
        let mut boosted = coasting.clone();
        let held = TickInput {
            accelerate: true,
            ..Default::default()
        };
        coasting.update(&p, GROUND, -0.5, &TickInput::default());
        boosted.update(&p, GROUND, -0.5, &held);
        assert!(boosted.vel.length() > coasting.vel.length());
    }

    #[test]
    fn test_airborne_vy_strictly_decreases() {
        let p = physics();
        let mut body = airborne(0.0, 5_000.0, DVec2::new(2.0, 3.0));
        let mut last_vy = body.vel.y;
        for _ in 0..100 {
            body.update(&p, GROUND, 0.0, &TickInput::default());
            assert!(body.is_jumping());
            assert!(body.vel.y < last_vy);
            assert_eq!(body.vel.x, 2.0);
            last_vy = body.vel.y;
        }
    }

    #[test]
    fn test_fast_fall_triples_gravity() {
        let p = physics();
        let mut body = airborne(0.0, 5_000.0, DVec2::ZERO);
        let held = TickInput {
            accelerate: true,
            ..Default::default()
        };
        body.update(&p, GROUND, 0.0, &held);
        assert!((body.vel.y + p.gravity * p.accelerate_factor).abs() < 1e-12);
    }

    #[test]
    fn test_touching_ground_exactly_stays_airborne() {
        let p = physics();
        // vy cancels to exactly zero, leaving the body level with the ground
        let mut body = airborne(0.0, GROUND, DVec2::new(2.0, p.gravity));
        assert_eq!(body.update(&p, GROUND, 0.0, &TickInput::default()), None);
        assert!(body.is_jumping());
        assert_eq!(body.pos.y, GROUND);

        let t = body.update(&p, GROUND, 0.0, &TickInput::default());
        assert!(matches!(t, Some(Transition::Landed(_))));
        assert_eq!(body.pos.y, GROUND);
    }

    #[test]
    fn test_landing_into_hill_stops_dead() {
        let mut body = airborne(100.0, GROUND + 1.0, DVec2::new(-2.0, -3.0));
        let t = body.update(&physics(), GROUND, 0.0, &TickInput::default());
        assert!(matches!(
            t,
            Some(Transition::Landed(Landing {
                hard_stop: true,
                ..
            }))
        ));
        assert_eq!(body.vel, DVec2::ZERO);
        assert!(!body.is_jumping());
    }

    #[test]
    fn test_long_jump_lands_with_bonus() {
        let p = physics();
        let mut long = airborne(300.0, GROUND + 0.5, DVec2::new(2.0, -1.0));
        long.jump_length = 300.0;
        let mut short = long.clone();
        short.jump_length = 100.0;

        let t = long.update(&p, GROUND, 0.0, &TickInput::default());
        short.update(&p, GROUND, 0.0, &TickInput::default());

        assert!(matches!(
            t,
            Some(Transition::Landed(Landing { bonus: true, length, .. })) if length == 300.0
        ));
        assert!((long.vel.x - short.vel.x * p.landing_bonus).abs() < 1e-12);
        assert!((short.vel.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_landing_follows_new_slope() {
        let slope = 0.5;
        let mut body = airborne(0.0, GROUND + 0.5, DVec2::new(3.0, -1.0));
        body.update(&physics(), GROUND, slope, &TickInput::default());
        assert!((body.vel.y / body.vel.x - slope).abs() < 1e-12);
        assert_eq!(body.pos.y, GROUND);
    }

    #[test]
    fn test_jump_score_tracks_flight_and_resets() {
        let p = physics();
        let mut body = Body::new(0.0, GROUND);
        body.vel = DVec2::new(2.0, 0.0);
        body.update(&p, GROUND, 0.0, &release());
        body.vel.y = 2.0;
        for _ in 0..10 {
            body.update(&p, GROUND, 0.0, &TickInput::default());
        }
        assert!(body.jump_length > 0.0);
        assert!((body.jump_length - (body.pos.x - body.jump_start_x)).abs() < 1e-12);
        assert!(body.jump_height >= body.pos.y);

        while body.is_jumping() {
            body.update(&p, GROUND, 0.0, &TickInput::default());
        }
        assert_eq!(body.jump_height, 0.0);
        assert_eq!(body.jump_length, 0.0);
    }

    #[test]
    fn test_takeoff_threshold_blocks_downhill_jump() {
        let p = PhysicsConfig {
            takeoff_min_slope: Some(-0.1),
            ..physics()
        };
        let mut body = Body::new(0.0, GROUND + 40.0);
        assert_eq!(body.update(&p, GROUND + 40.0, -0.6, &release()), None);
        assert!(!body.is_jumping());
        assert_eq!(body.update(&p, GROUND + 40.0, 0.2, &release()), Some(Transition::TookOff));
    }

    #[test]
    fn test_takeoff_into_steep_downslope_hops() {
        let mut body = Body::new(0.0, GROUND + 100.0);
        let t = body.update(&physics(), GROUND + 100.0, -2.0, &release());
        assert!(matches!(t, Some(Transition::Hopped(_))));
        assert!(!body.is_jumping());
        assert_eq!(body.pos.y, GROUND + 100.0);
    }

    #[test]
    fn test_non_finite_inputs_are_absorbed() {
        let p = physics();
        let mut body = Body::new(0.0, GROUND);
        body.vel = DVec2::new(f64::NAN, 1.0);
        body.update(&p, f64::NAN, f64::INFINITY, &TickInput::default());
        assert!(body.pos.is_finite());
        assert!(body.vel.is_finite());
        assert_eq!(body.vel.x, p.min_speed);
    }

    #[test]
    fn test_heading_at_rest_is_zero() {
        let body = Body::new(0.0, GROUND);
        assert_eq!(body.heading(), 0.0);
    }
}
