//! Flight integration for the released hammer
//!
//! The head is the only physically simulated point. Gravity pulls it down,
//! the field bounces it back with heavy losses, and once a bounce leaves it
//! nearly motionless it comes to rest. Spin is integrated into the
//! orientation for the tumbling look only; it never feeds back into the
//! trajectory. No air drag.
//!
//! # Example
//!
//! ```ignore
//! use hammer_throw_engine::physics::ballistics::{FlightBody, FlightConfig, FlightState, launch_velocity};
//! use glam::{Quat, Vec3};
//!
//! let config = FlightConfig::default();
//! let mut body = FlightBody::launch(
//!     Vec3::new(2.2, 1.8, 0.0),
//!     launch_velocity(20.0, 40f32.to_radians()),
//!     Vec3::new(1.0, 2.0, 3.0),
//!     Quat::IDENTITY,
//!     0.25,
//! );
//! while !matches!(body.integrate(&config, 1.0 / 60.0), FlightState::AtRest { .. }) {}
//! ```

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::collision::{Bounce, contact_height, is_at_rest, resolve_ground_bounce};
use super::types::LOCAL_DOWN;

/// Environment and contact parameters for hammer flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Downward gravity acceleration (m/s²)
    pub gravity: f32,
    /// Fraction of vertical speed kept (and reversed) on a bounce
    pub restitution: f32,
    /// Fraction of horizontal speed kept on a bounce
    pub friction: f32,
    /// Fraction of spin kept on a bounce
    pub spin_damping: f32,
    /// Speed under which a bounced head is considered at rest (m/s)
    pub rest_epsilon: f32,
    /// Longest frame the integrator accepts; longer frames are clamped (s)
    pub max_dt: f32,
    /// Longest internal integration step (s)
    pub max_substep: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            restitution: 0.3,
            friction: 0.5,
            spin_damping: 0.5,
            rest_epsilon: 0.1,
            max_dt: 0.1,
            max_substep: 1.0 / 60.0,
        }
    }
}

/// Share of the settling bound actually used as a substep ceiling
const SETTLE_MARGIN: f32 = 0.5;

impl FlightConfig {
    /// Longest substep at which bouncing still decays below `rest_epsilon`.
    ///
    /// A head hopping one substep at a time settles at a post-bounce speed of
    /// `restitution·gravity·h / (1 + restitution)`; above `rest_epsilon` it
    /// never rests. Returns `None` when no bound applies.
    pub fn settling_substep(&self) -> Option<f32> {
        if self.restitution <= 0.0 || self.gravity <= 0.0 || self.rest_epsilon <= 0.0 {
            return None;
        }
        let bound = SETTLE_MARGIN * self.rest_epsilon * (1.0 + self.restitution)
            / (self.restitution * self.gravity);
        (bound.is_finite() && bound > 0.0).then_some(bound)
    }

    /// Substep ceiling actually used by [`FlightBody::integrate`].
    pub fn effective_substep(&self, dt: f32) -> f32 {
        let configured = if self.max_substep > 0.0 { self.max_substep } else { dt };
        match self.settling_substep() {
            Some(bound) => configured.min(bound),
            None => configured,
        }
    }

    /// Clamp a frame delta into `[0, max_dt]`. Non-finite deltas become zero.
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0.0;
        }
        dt.min(self.max_dt)
    }
}

/// Result of advancing a [`FlightBody`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FlightState {
    /// Still in the air (or rolled off a bounce without settling)
    #[default]
    Flying,
    /// Touched the ground and bounced on the last step
    Bounced(Bounce),
    /// Came to rest; the session is over
    AtRest {
        /// Final resting position of the head center (meters)
        position: Vec3,
    },
}

/// The simulated hammer head plus its visual orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightBody {
    /// Head center in world space (meters)
    pub position: Vec3,
    /// Head velocity (m/s)
    pub velocity: Vec3,
    /// Angular velocity, scaled axis (rad/s)
    pub spin: Vec3,
    /// Cumulative orientation of the whole hammer
    pub orientation: Quat,
    /// Head sphere radius (meters)
    pub radius: f32,
    /// Number of ground contacts so far
    pub bounces: u32,
    /// False once the body has come to rest
    pub active: bool,
}

impl FlightBody {
    /// Start a flight from the release state.
    pub fn launch(position: Vec3, velocity: Vec3, spin: Vec3, orientation: Quat, radius: f32) -> Self {
        Self {
            position,
            velocity,
            spin,
            orientation: orientation.normalize(),
            radius,
            bounces: 0,
            active: true,
        }
    }

    /// Advance by one raw integration step of `dt` seconds.
    ///
    /// `dt` is used as given (callers clamp). Semi-implicit Euler:
    /// velocity first, then position, then the ground response.
    pub fn step(&mut self, config: &FlightConfig, dt: f32) -> FlightState {
        if !self.active {
            return FlightState::AtRest { position: self.position };
        }

        self.velocity.y -= config.gravity * dt;
        self.position += self.velocity * dt;

        let mut state = FlightState::Flying;
        if let Some(bounce) = resolve_ground_bounce(self, config) {
            self.bounces += 1;
            if is_at_rest(self.velocity, config.rest_epsilon) {
                self.settle();
                state = FlightState::AtRest { position: self.position };
            } else {
                state = FlightState::Bounced(bounce);
            }
        }

        self.orientation = (Quat::from_scaled_axis(self.spin * dt) * self.orientation).normalize();
        state
    }

    /// Advance by one frame.
    ///
    /// The frame is clamped to `max_dt` and split into equal sub-steps no
    /// longer than `max_substep` (tightened further by
    /// [`FlightConfig::settling_substep`]), so the rest test sees small
    /// per-step gravity kicks regardless of frame rate. Stops early on rest.
    pub fn integrate(&mut self, config: &FlightConfig, dt: f32) -> FlightState {
        if !self.active {
            return FlightState::AtRest { position: self.position };
        }

        let dt = config.clamp_dt(dt);
        if dt == 0.0 {
            return FlightState::Flying;
        }

        let max_substep = config.effective_substep(dt);
        let steps = (dt / max_substep).ceil().max(1.0) as u32;
        let h = dt / steps as f32;

        let mut result = FlightState::Flying;
        for _ in 0..steps {
            match self.step(config, h) {
                rest @ FlightState::AtRest { .. } => return rest,
                bounce @ FlightState::Bounced(_) => result = bounce,
                FlightState::Flying => {}
            }
        }
        result
    }

    /// Pin the head to the ground and stop all motion.
    fn settle(&mut self) {
        self.position.y = contact_height(self.radius);
        self.velocity = Vec3::ZERO;
        self.spin = Vec3::ZERO;
        self.active = false;
    }

    /// Grip position derived from the head under the current orientation.
    pub fn anchor(&self, link_length: f32) -> Vec3 {
        self.position - self.orientation * (LOCAL_DOWN * link_length)
    }

    /// Horizontal distance along the throw axis (x).
    pub fn distance(&self) -> f32 {
        self.position.x
    }
}

/// Launch velocity in the throw plane (x forward, y up).
pub fn launch_velocity(power: f32, release_angle: f32) -> Vec3 {
    Vec3::new(power * release_angle.cos(), power * release_angle.sin(), 0.0)
}

/// Drag-free horizontal range until the head center first reaches `contact_y`.
///
/// Used as an upper reference for the first flight arc. Returns `None` when
/// the arc never reaches the contact height.
pub fn vacuum_range(release: Vec3, velocity: Vec3, gravity: f32, contact_y: f32) -> Option<f32> {
    if gravity <= 0.0 {
        return None;
    }
    let drop = release.y - contact_y;
    let disc = velocity.y * velocity.y + 2.0 * gravity * drop;
    if disc < 0.0 {
        return None;
    }
    let t = (velocity.y + disc.sqrt()) / gravity;
    Some(release.x + velocity.x * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch(position: Vec3, velocity: Vec3) -> FlightBody {
        FlightBody::launch(position, velocity, Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY, 0.25)
    }

    #[test]
    fn test_flight_config_default() {
        let config = FlightConfig::default();
        assert_eq!(config.gravity, 9.8);
        assert_eq!(config.restitution, 0.3);
        assert_eq!(config.friction, 0.5);
        assert_eq!(config.rest_epsilon, 0.1);
        assert_eq!(config.max_dt, 0.1);
    }

    #[test]
    fn test_flight_state_default() {
        assert!(matches!(FlightState::default(), FlightState::Flying));
    }

    #[test]
    fn test_launch_velocity_components() {
        let v = launch_velocity(20.0, 40f32.to_radians());
        assert!((v.x - 15.3209).abs() < 1e-3, "vx = {}", v.x);
        assert!((v.y - 12.8558).abs() < 1e-3, "vy = {}", v.y);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn test_step_applies_gravity_then_moves() {
        let config = FlightConfig::default();
        let mut body = launch(Vec3::new(0.0, 10.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        body.step(&config, 0.1);
        assert!((body.velocity.y + 0.98).abs() < 1e-6);
        assert!((body.position.y - (10.0 - 0.098)).abs() < 1e-5);
        assert!((body.position.x - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_first_bounce_ratios() {
        let config = FlightConfig::default();
        let mut body = launch(Vec3::new(5.0, 0.3, 0.0), Vec3::new(10.0, -8.0, 0.0));

        let state = body.step(&config, 0.01);
        let FlightState::Bounced(bounce) = state else {
            panic!("expected a bounce, got {state:?}");
        };

        assert!((bounce.post_velocity.y + 0.3 * bounce.pre_velocity.y).abs() < 1e-5);
        assert!((bounce.post_velocity.x - 0.5 * bounce.pre_velocity.x).abs() < 1e-5);
        assert_eq!(body.position.y, 0.25);
        assert!(body.active, "first bounce is far above the rest threshold");
    }

    #[test]
    fn test_slow_bounce_comes_to_rest() {
        let config = FlightConfig::default();
        let mut body = launch(Vec3::new(30.0, 0.25, 0.0), Vec3::new(0.15, -0.2, 0.0));

        let state = body.step(&config, 0.01);

        assert_eq!(state, FlightState::AtRest { position: body.position });
        assert_eq!(body.position.y, 0.25);
        assert_eq!(body.velocity, Vec3::ZERO);
        assert_eq!(body.spin, Vec3::ZERO);
        assert!(!body.active);
    }

    #[test]
    fn test_no_rest_when_horizontal_still_fast() {
        let config = FlightConfig::default();
        let mut body = launch(Vec3::new(30.0, 0.25, 0.0), Vec3::new(1.0, -0.2, 0.0));
        let state = body.step(&config, 0.01);
        assert!(matches!(state, FlightState::Bounced(_)));
        assert!(body.active);
    }

    #[test]
    fn test_integrate_clamps_long_frames() {
        let config = FlightConfig::default();
        let mut clamped = launch(Vec3::new(0.0, 50.0, 0.0), Vec3::ZERO);
        let mut reference = clamped;

        clamped.integrate(&config, 5.0);
        reference.integrate(&config, 0.1);

        assert_eq!(clamped.position, reference.position);
        assert_eq!(clamped.velocity, reference.velocity);
    }

    #[test]
    fn test_integrate_ignores_bad_dt() {
        let config = FlightConfig::default();
        let mut body = launch(Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        let before = body;
        assert_eq!(body.integrate(&config, f32::NAN), FlightState::Flying);
        assert_eq!(body.integrate(&config, -1.0), FlightState::Flying);
        assert_eq!(body, before);
    }

    #[test]
    fn test_integrate_reaches_rest_at_coarse_frames() {
        let config = FlightConfig::default();
        let mut body = launch(Vec3::new(2.0, 1.8, 0.0), launch_velocity(20.0, 40f32.to_radians()));

        let mut rested = None;
        for _ in 0..2000 {
            if let FlightState::AtRest { position } = body.integrate(&config, 0.1) {
                rested = Some(position);
                break;
            }
        }

        let position = rested.expect("hammer should settle at 10 fps");
        assert!(position.x > 0.0 && position.x.is_finite());
        assert_eq!(position.y, 0.25);
    }

    #[test]
    fn test_default_substep_within_settling_bound() {
        let config = FlightConfig::default();
        let bound = config.settling_substep().expect("bounded");
        assert!(config.max_substep <= bound, "{} > {bound}", config.max_substep);
        assert_eq!(config.effective_substep(0.1), config.max_substep);
    }

    #[test]
    fn test_no_settling_bound_without_restitution() {
        let config = FlightConfig { restitution: 0.0, ..FlightConfig::default() };
        assert!(config.settling_substep().is_none());
    }

    fn comes_to_rest(config: &FlightConfig) -> bool {
        let mut body = launch(Vec3::new(2.0, 1.8, 0.0), launch_velocity(20.0, 40f32.to_radians()));
        (0..20_000).any(|_| matches!(body.integrate(config, 0.1), FlightState::AtRest { .. }))
    }

    #[test]
    fn test_coarse_substep_still_settles() {
        let config = FlightConfig { max_substep: 0.05, ..FlightConfig::default() };
        assert!(config.effective_substep(0.1) < 0.05);
        assert!(comes_to_rest(&config));
    }

    #[test]
    fn test_strong_gravity_still_settles() {
        let config = FlightConfig { gravity: 30.0, ..FlightConfig::default() };
        assert!(comes_to_rest(&config));
    }

    #[test]
    fn test_anchor_keeps_link_length() {
        let config = FlightConfig::default();
        let mut body = launch(Vec3::new(0.0, 3.0, 0.0), Vec3::new(5.0, 5.0, 0.0));
        for _ in 0..30 {
            body.integrate(&config, 1.0 / 60.0);
            let link = (body.anchor(1.2) - body.position).length();
            assert!((link - 1.2).abs() < 1e-4, "link length drifted to {link}");
        }
    }

    #[test]
    fn test_vacuum_range_flat_ground() {
        // Launch from contact height at 45 degrees: R = v² / g
        let v = launch_velocity(10.0, std::f32::consts::FRAC_PI_4);
        let range = vacuum_range(Vec3::new(0.0, 0.25, 0.0), v, 9.8, 0.25).unwrap();
        assert!((range - 100.0 / 9.8).abs() < 1e-3, "range = {range}");
    }

    #[test]
    fn test_vacuum_range_without_gravity() {
        assert!(vacuum_range(Vec3::Y, Vec3::X, 0.0, 0.0).is_none());
    }
}
