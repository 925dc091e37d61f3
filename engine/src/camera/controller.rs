//! Camera Controller Module
//!
//! Throw-tracking camera. Before release it slowly orbits the throwing
//! circle; in flight it chases the hammer head from behind and above with
//! exponential smoothing while looking straight at the head; once the
//! hammer lands it holds still.
//! This is window-system agnostic - it only manages camera state and transformations.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Camera mode - determines how the pose is derived each tick
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CameraMode {
    /// Slow automatic orbit around the throwing circle (idle and wind-up)
    #[default]
    Orbit,
    /// Smoothed chase of the flying hammer head
    Follow,
    /// Frozen at the last pose (after landing)
    Hold,
}

/// Tuning for the orbit and follow behaviors
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraFollowConfig {
    /// Orbit radius around the circle center (meters)
    pub orbit_radius: f32,
    /// Orbit height above the field (meters)
    pub orbit_height: f32,
    /// Orbit angular speed (rad/s)
    pub orbit_speed: f32,
    /// Point the orbiting camera looks at
    pub orbit_target: Vec3,
    /// Ideal camera offset from the head while following: behind, above, to the side
    pub follow_offset: Vec3,
    /// Lowest ideal camera height while following (meters)
    pub follow_min_height: f32,
    /// Per-tick lerp factor toward the ideal follow position (0..1)
    pub smoothing: f32,
    /// Pose before the first update
    pub initial_position: Vec3,
    pub initial_target: Vec3,
}

impl Default for CameraFollowConfig {
    fn default() -> Self {
        Self {
            orbit_radius: 12.0,
            orbit_height: 6.0,
            orbit_speed: 0.5,
            orbit_target: Vec3::new(0.0, 1.0, 0.0),
            follow_offset: Vec3::new(-10.0, 5.0, 8.0),
            follow_min_height: 4.0,
            smoothing: 0.1,
            initial_position: Vec3::new(-8.0, 5.0, 12.0),
            initial_target: Vec3::new(0.0, 2.0, 0.0),
        }
    }
}

/// Throw camera state
///
/// Owns the camera position and look-at target. Other components read it;
/// only [`ThrowCamera::update`] and the mode-specific helpers mutate it.
#[derive(Clone, Debug)]
pub struct ThrowCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Look-at target in world space
    pub target: Vec3,
    /// Mode used on the last update
    pub mode: CameraMode,
    pub config: CameraFollowConfig,
}

impl Default for ThrowCamera {
    fn default() -> Self {
        Self::new(CameraFollowConfig::default())
    }
}

impl ThrowCamera {
    /// Create a camera at the configured initial pose
    pub fn new(config: CameraFollowConfig) -> Self {
        Self {
            position: config.initial_position,
            target: config.initial_target,
            mode: CameraMode::Orbit,
            config,
        }
    }

    /// Advance the camera for one tick.
    ///
    /// `clock` is the scene time in seconds (drives the orbit angle) and
    /// `subject` is the live hammer head position (used by follow).
    pub fn update(&mut self, mode: CameraMode, clock: f32, subject: Vec3) {
        match mode {
            CameraMode::Orbit => self.orbit(clock),
            CameraMode::Follow => self.follow(subject),
            CameraMode::Hold => {}
        }
        self.mode = mode;
    }

    /// Place the camera on the orbit circle for the given scene time
    pub fn orbit(&mut self, clock: f32) {
        let angle = clock * self.config.orbit_speed;
        self.position = Vec3::new(
            angle.sin() * self.config.orbit_radius,
            self.config.orbit_height,
            angle.cos() * self.config.orbit_radius,
        );
        self.target = self.config.orbit_target;
    }

    /// Ideal chase position for a head at `subject`
    pub fn ideal_follow_position(&self, subject: Vec3) -> Vec3 {
        let offset = self.config.follow_offset;
        Vec3::new(
            subject.x + offset.x,
            (subject.y + offset.y).max(self.config.follow_min_height),
            subject.z + offset.z,
        )
    }

    /// Move a fraction of the way toward the ideal chase position and look at the head
    pub fn follow(&mut self, subject: Vec3) {
        let ideal = self.ideal_follow_position(subject);
        let t = self.config.smoothing.clamp(0.0, 1.0);
        self.position = self.position.lerp(ideal, t);
        self.target = subject;
    }

    /// Normalized viewing direction
    pub fn get_forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Right-handed view matrix for the renderer
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pose() {
        let camera = ThrowCamera::default();
        assert_eq!(camera.position, Vec3::new(-8.0, 5.0, 12.0));
        assert_eq!(camera.target, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(camera.mode, CameraMode::Orbit);
    }

    #[test]
    fn test_orbit_stays_on_circle() {
        let mut camera = ThrowCamera::default();
        for i in 0..20 {
            camera.orbit(i as f32 * 0.37);
            let flat = Vec3::new(camera.position.x, 0.0, camera.position.z);
            assert!((flat.length() - 12.0).abs() < 1e-4);
            assert_eq!(camera.position.y, 6.0);
            assert_eq!(camera.target, Vec3::new(0.0, 1.0, 0.0));
        }
    }

    #[test]
    fn test_orbit_at_time_zero() {
        let mut camera = ThrowCamera::default();
        camera.orbit(0.0);
        assert!((camera.position - Vec3::new(0.0, 6.0, 12.0)).length() < 1e-5);
    }

    #[test]
    fn test_follow_lerps_and_looks_at_head() {
        let mut camera = ThrowCamera::default();
        camera.position = Vec3::ZERO;
        let head = Vec3::new(20.0, 3.0, 0.0);

        camera.follow(head);

        let ideal = Vec3::new(10.0, 8.0, 8.0);
        assert!((camera.position - ideal * 0.1).length() < 1e-5);
        assert_eq!(camera.target, head);
    }

    #[test]
    fn test_follow_min_height() {
        let camera = ThrowCamera::default();
        // Resting head: offset height wins over the floor
        let resting = camera.ideal_follow_position(Vec3::new(30.0, 0.25, 0.0));
        assert_eq!(resting.y, 5.25);
        // Subject far below the field: the floor applies
        let sunk = camera.ideal_follow_position(Vec3::new(30.0, -3.0, 0.0));
        assert_eq!(sunk.y, 4.0);
    }

    #[test]
    fn test_follow_converges() {
        let mut camera = ThrowCamera::default();
        let head = Vec3::new(40.0, 0.25, 0.0);
        for _ in 0..200 {
            camera.follow(head);
        }
        let ideal = camera.ideal_follow_position(head);
        assert!((camera.position - ideal).length() < 1e-3);
    }

    #[test]
    fn test_hold_keeps_pose() {
        let mut camera = ThrowCamera::default();
        camera.update(CameraMode::Follow, 0.0, Vec3::new(5.0, 5.0, 0.0));
        let (position, target) = (camera.position, camera.target);

        camera.update(CameraMode::Hold, 100.0, Vec3::new(99.0, 0.0, 0.0));

        assert_eq!(camera.position, position);
        assert_eq!(camera.target, target);
        assert_eq!(camera.mode, CameraMode::Hold);
    }

    #[test]
    fn test_forward_normalized() {
        let camera = ThrowCamera::default();
        assert!((camera.get_forward().length() - 1.0).abs() < 1e-5);
    }
}
