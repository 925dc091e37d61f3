//! Physics module for the hammer throw
//!
//! Custom flight physics for a single thrown hammer. Built from scratch
//! without an external physics library: one simulated point (the head),
//! gravity, an inelastic ground plane and a rest test.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Angles in radians
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec3, Quat) re-exported from glam,
//!   plus the shortest-arc rotation primitive
//! - [`ballistics`] - Head flight integration and rest detection
//! - [`collision`] - Ground contact response

pub mod ballistics;
pub mod collision;
pub mod types;

// Re-export commonly used types at the physics module level
pub use ballistics::{FlightBody, FlightConfig, FlightState, launch_velocity, vacuum_range};
pub use collision::{Bounce, contact_height, is_at_rest, resolve_ground_bounce};
pub use types::{LOCAL_DOWN, Quat, Vec3, rotate_down_onto, shortest_arc};
