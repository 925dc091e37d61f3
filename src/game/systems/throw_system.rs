//! Throw state machine.
//!
//! Owns the single live throw session and drives it through
//! Idle → WindUp → Flight → Landed. The wind-up is scripted (no dynamics):
//! the body spins with quadratically increasing angle while the hammer is
//! held out at arm's length. At release the hammer head becomes a ballistic
//! [`FlightBody`] and the grip is derived from it every tick. Zero GPU
//! coupling: read the rig and hammer poses after each [`ThrowSystem::tick`].

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::game::config::{ConfigError, ThrowConfig};
use crate::game::rig::{CharacterRig, HammerPose};
use crate::physics::ballistics::{FlightBody, FlightState, launch_velocity};
use crate::physics::types::rotate_down_onto;

/// Slack when comparing accumulated wind-up time against its duration, so a
/// run of equal ticks that should sum to the duration is not one tick late.
const PHASE_TIME_EPSILON: f32 = 1e-4;

/// Phase of the throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ThrowPhase {
    #[default]
    Idle,
    WindUp,
    Flight,
    Landed,
}

impl ThrowPhase {
    /// WindUp and Flight block new throws
    pub fn is_active(self) -> bool {
        matches!(self, ThrowPhase::WindUp | ThrowPhase::Flight)
    }

    /// Stable numeric id for the render boundary
    pub fn as_u32(self) -> u32 {
        match self {
            ThrowPhase::Idle => 0,
            ThrowPhase::WindUp => 1,
            ThrowPhase::Flight => 2,
            ThrowPhase::Landed => 3,
        }
    }
}

/// Single-tick notification returned by [`ThrowSystem::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrowEvent {
    /// The hammer left the hands (release cue)
    Released,
    /// The hammer came to rest `distance` meters down the throw axis
    Landed { distance: f32 },
}

/// Mutable record of one throw attempt.
#[derive(Debug, Clone, Copy)]
pub struct ThrowSession {
    pub phase: ThrowPhase,
    /// Seconds since the current phase started
    pub elapsed: f32,
    pub power: f32,
    /// Launch velocity, set at release
    pub launch_velocity: Option<Vec3>,
    /// Simulated head, present from release on
    pub body: Option<FlightBody>,
}

impl ThrowSession {
    fn new(power: f32) -> Self {
        Self {
            phase: ThrowPhase::WindUp,
            elapsed: 0.0,
            power,
            launch_velocity: None,
            body: None,
        }
    }
}

/// Drives the throw and owns all simulation state.
pub struct ThrowSystem {
    config: ThrowConfig,
    rig: CharacterRig,
    hammer: HammerPose,
    session: Option<ThrowSession>,
    /// Scene time in seconds, advanced by every tick
    clock: f32,
    rng: StdRng,
}

impl ThrowSystem {
    /// Create an idle system with OS-seeded spin randomness.
    ///
    /// `config` is taken as given; use [`ThrowSystem::try_new`] for
    /// configs from outside the program.
    pub fn new(config: ThrowConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an idle system whose tumble is reproducible.
    pub fn with_seed(config: ThrowConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Validate `config`, then create an idle system.
    pub fn try_new(config: ThrowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Validate `config`, then create a reproducible idle system.
    pub fn try_with_seed(config: ThrowConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_seed(config, seed))
    }

    fn with_rng(config: ThrowConfig, rng: StdRng) -> Self {
        let link_length = config.hammer.link_length;
        let mut system = Self {
            config,
            rig: CharacterRig::new(),
            hammer: HammerPose::new(Vec3::ZERO, Quat::IDENTITY, link_length),
            session: None,
            clock: 0.0,
            rng,
        };
        system.apply_idle_pose();
        system
    }

    // ========================================================================
    // COMMANDS
    // ========================================================================

    /// Start a throw. Returns `true` if a new session began.
    ///
    /// Ignored for non-positive or non-finite power and while a throw is
    /// already winding up or flying.
    pub fn throw(&mut self, power: f32) -> bool {
        if !power.is_finite() || power <= 0.0 {
            debug!(power, "throw ignored: power must be positive");
            return false;
        }
        if self.phase().is_active() {
            debug!(power, phase = ?self.phase(), "throw ignored: a throw is in progress");
            return false;
        }

        debug!(power, "throw started");
        self.session = Some(ThrowSession::new(power));
        self.apply_windup_pose(0.0);
        true
    }

    /// Abort any throw and return to the idle stance.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(phase = ?session.phase, "throw reset");
        }
        self.apply_idle_pose();
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// `dt` is clamped to `[0, flight.max_dt]`; non-finite values count as
    /// zero. Returns the event that happened during this tick, if any.
    pub fn tick(&mut self, dt: f32) -> Option<ThrowEvent> {
        let dt = self.config.flight.clamp_dt(dt);
        self.clock += dt;

        let Some(mut session) = self.session else {
            self.apply_idle_pose();
            return None;
        };

        let event = match session.phase {
            ThrowPhase::WindUp => self.advance_windup(&mut session, dt),
            ThrowPhase::Flight => self.advance_flight(&mut session, dt),
            ThrowPhase::Landed | ThrowPhase::Idle => None,
        };
        self.session = Some(session);
        event
    }

    // ========================================================================
    // PHASES
    // ========================================================================

    fn advance_windup(&mut self, session: &mut ThrowSession, dt: f32) -> Option<ThrowEvent> {
        session.elapsed += dt;
        let duration = self.config.windup.duration;

        if session.elapsed + PHASE_TIME_EPSILON < duration {
            self.apply_windup_pose(session.elapsed);
            return None;
        }

        // Release from the completed wind-up pose
        self.apply_windup_pose(duration);
        let head = self.hammer.head();
        let velocity = launch_velocity(session.power, self.config.release.angle_radians());
        let spin = self.random_spin();

        session.phase = ThrowPhase::Flight;
        session.elapsed = 0.0;
        session.launch_velocity = Some(velocity);
        session.body = Some(FlightBody::launch(
            head,
            velocity,
            spin,
            self.hammer.orientation,
            self.config.hammer.head_radius,
        ));

        info!(
            power = session.power,
            vx = velocity.x,
            vy = velocity.y,
            head_x = head.x,
            head_y = head.y,
            "hammer released"
        );
        Some(ThrowEvent::Released)
    }

    fn advance_flight(&mut self, session: &mut ThrowSession, dt: f32) -> Option<ThrowEvent> {
        let body = session.body.as_mut()?;
        session.elapsed += dt;

        let state = body.integrate(&self.config.flight, dt);
        let body = *body;

        match state {
            FlightState::AtRest { position } => {
                session.phase = ThrowPhase::Landed;
                self.lay_flat(position);
                let distance = body.distance();
                info!(
                    distance,
                    bounces = body.bounces,
                    flight_time = session.elapsed,
                    "hammer landed"
                );
                Some(ThrowEvent::Landed { distance })
            }
            FlightState::Bounced(bounce) => {
                debug!(x = bounce.position.x, vy = bounce.post_velocity.y, "hammer bounced");
                self.follow_body(&body);
                None
            }
            FlightState::Flying => {
                self.follow_body(&body);
                None
            }
        }
    }

    /// Grip trails the head along the body's local up axis.
    fn follow_body(&mut self, body: &FlightBody) {
        let link_length = self.config.hammer.link_length;
        self.hammer = HammerPose::new(body.anchor(link_length), body.orientation, link_length);
    }

    fn random_spin(&mut self) -> Vec3 {
        let max = self.config.release.spin_max;
        if max <= 0.0 {
            return Vec3::ZERO;
        }
        Vec3::new(
            self.rng.gen_range(0.0..max),
            self.rng.gen_range(0.0..max),
            self.rng.gen_range(0.0..max),
        )
    }

    // ========================================================================
    // POSES
    // ========================================================================

    fn apply_idle_pose(&mut self) {
        let idle = self.config.idle;
        let sway = (self.clock * idle.sway_frequency).sin() * idle.sway_amplitude;
        self.rig.set_root(sway, idle.facing);
        self.rig.set_arms(idle.arm_pitch, idle.arm_roll);
        self.hammer = HammerPose::new(
            idle.hammer_position,
            Quat::from_rotation_x(idle.hammer_tilt),
            self.config.hammer.link_length,
        );
    }

    /// Body yaw after `elapsed` seconds of wind-up.
    pub fn windup_angle(&self, elapsed: f32) -> f32 {
        let windup = self.config.windup;
        // A degenerate wind-up counts as already complete
        let progress = if windup.duration.is_finite() && windup.duration > 0.0 {
            (elapsed / windup.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        FRAC_PI_2 - progress * progress * windup.rotations * TAU
    }

    fn apply_windup_pose(&mut self, elapsed: f32) {
        let windup = self.config.windup;
        let link_length = self.config.hammer.link_length;
        let angle = self.windup_angle(elapsed);

        self.rig.set_root(0.0, angle);
        self.rig.set_arms(windup.arm_pitch, windup.arm_roll);

        let radial = Vec3::new(angle.sin(), 0.0, angle.cos());
        let hand = radial * windup.hand_radius + Vec3::Y * windup.hand_height;
        let reach = (radial * link_length - Vec3::Y * windup.head_droop).normalize_or(Vec3::NEG_Y);

        self.hammer = HammerPose::new(hand, rotate_down_onto(reach), link_length);
    }

    /// Lay the hammer flat on the field with the head at `head`.
    fn lay_flat(&mut self, head: Vec3) {
        self.hammer = HammerPose::from_head(
            head,
            Quat::from_rotation_x(-FRAC_PI_2),
            self.config.hammer.link_length,
        );
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn phase(&self) -> ThrowPhase {
        self.session.map(|s| s.phase).unwrap_or_default()
    }

    pub fn session(&self) -> Option<&ThrowSession> {
        self.session.as_ref()
    }

    /// Power of the live session
    pub fn power(&self) -> Option<f32> {
        self.session.map(|s| s.power)
    }

    /// Launch velocity, once released
    pub fn launch_velocity(&self) -> Option<Vec3> {
        self.session.and_then(|s| s.launch_velocity)
    }

    /// Current head velocity (zero before release and after landing)
    pub fn velocity(&self) -> Vec3 {
        self.session
            .and_then(|s| s.body)
            .map(|b| b.velocity)
            .unwrap_or(Vec3::ZERO)
    }

    /// Simulated head, from release on
    pub fn flight_body(&self) -> Option<&FlightBody> {
        self.session.as_ref().and_then(|s| s.body.as_ref())
    }

    pub fn rig(&self) -> &CharacterRig {
        &self.rig
    }

    pub fn hammer(&self) -> &HammerPose {
        &self.hammer
    }

    /// Live hammer head position
    pub fn head_position(&self) -> Vec3 {
        match self.flight_body() {
            Some(body) => body.position,
            None => self.hammer.head(),
        }
    }

    pub fn anchor_position(&self) -> Vec3 {
        self.hammer.anchor
    }

    /// Final distance once landed
    pub fn distance(&self) -> Option<f32> {
        match self.session {
            Some(ThrowSession { phase: ThrowPhase::Landed, body: Some(body), .. }) => Some(body.distance()),
            _ => None,
        }
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn config(&self) -> &ThrowConfig {
        &self.config
    }
}
