//! Ground contact response for the hammer head
//!
//! The field is the plane `y = 0`. The head is a sphere, so contact happens
//! when its center drops to `radius`. Contact is strongly inelastic: the
//! vertical velocity reflects with heavy loss, horizontal velocity is cut by
//! turf friction, and the visual tumble slows down.

use glam::Vec3;

use super::ballistics::{FlightBody, FlightConfig};

/// Velocities on either side of a single ground bounce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    /// Head velocity just before the contact response (m/s)
    pub pre_velocity: Vec3,
    /// Head velocity just after the contact response (m/s)
    pub post_velocity: Vec3,
    /// Contact point of the head center (meters)
    pub position: Vec3,
}

/// Height of the head center when it rests on the field.
pub fn contact_height(radius: f32) -> f32 {
    radius.max(0.0)
}

/// Whether the head center is on or below the contact height.
pub fn is_touching_ground(position: Vec3, radius: f32) -> bool {
    position.y <= contact_height(radius)
}

/// Apply the inelastic ground response if the head touches the field.
///
/// Returns the bounce that happened, or `None` while airborne.
pub fn resolve_ground_bounce(body: &mut FlightBody, config: &FlightConfig) -> Option<Bounce> {
    if !is_touching_ground(body.position, body.radius) {
        return None;
    }

    let pre_velocity = body.velocity;
    body.position.y = contact_height(body.radius);

    body.velocity.y *= -config.restitution;
    body.velocity.x *= config.friction;
    body.velocity.z *= config.friction;
    body.spin *= config.spin_damping;

    Some(Bounce {
        pre_velocity,
        post_velocity: body.velocity,
        position: body.position,
    })
}

/// Rest condition checked right after a bounce.
///
/// Both the vertical speed and the horizontal speed must be under
/// `epsilon` at the same time.
pub fn is_at_rest(velocity: Vec3, epsilon: f32) -> bool {
    let horizontal = Vec3::new(velocity.x, 0.0, velocity.z).length();
    velocity.y.abs() < epsilon && horizontal < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn body_at(position: Vec3, velocity: Vec3) -> FlightBody {
        FlightBody::launch(position, velocity, Vec3::new(4.0, 2.0, 1.0), Quat::IDENTITY, 0.25)
    }

    #[test]
    fn test_no_bounce_above_ground() {
        let config = FlightConfig::default();
        let mut body = body_at(Vec3::new(3.0, 1.0, 0.0), Vec3::new(5.0, -2.0, 0.0));
        assert!(resolve_ground_bounce(&mut body, &config).is_none());
        assert_eq!(body.velocity, Vec3::new(5.0, -2.0, 0.0));
    }

    #[test]
    fn test_bounce_scales_velocity_and_spin() {
        let config = FlightConfig::default();
        let mut body = body_at(Vec3::new(10.0, 0.1, 0.0), Vec3::new(8.0, -6.0, 0.0));

        let bounce = resolve_ground_bounce(&mut body, &config).expect("should bounce");

        assert_eq!(body.position.y, 0.25);
        assert!((body.velocity.y - 1.8).abs() < 1e-6, "vy = {}", body.velocity.y);
        assert!((body.velocity.x - 4.0).abs() < 1e-6, "vx = {}", body.velocity.x);
        assert_eq!(body.spin, Vec3::new(2.0, 1.0, 0.5));
        assert_eq!(bounce.pre_velocity, Vec3::new(8.0, -6.0, 0.0));
        assert_eq!(bounce.post_velocity, body.velocity);
    }

    #[test]
    fn test_touching_exactly_at_radius_counts() {
        assert!(is_touching_ground(Vec3::new(0.0, 0.25, 0.0), 0.25));
        assert!(!is_touching_ground(Vec3::new(0.0, 0.2501, 0.0), 0.25));
    }

    #[test]
    fn test_rest_requires_both_components() {
        assert!(is_at_rest(Vec3::new(0.05, 0.05, 0.0), 0.1));
        assert!(!is_at_rest(Vec3::new(0.5, 0.05, 0.0), 0.1));
        assert!(!is_at_rest(Vec3::new(0.05, -0.5, 0.0), 0.1));
        assert!(!is_at_rest(Vec3::new(0.1, 0.0, 0.0), 0.1));
    }
}
