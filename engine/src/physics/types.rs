//! Physics type re-exports from glam
//!
//! This module provides the core mathematical types used throughout
//! the physics system, re-exported from the glam library, plus the
//! rotation primitive shared by the wind-up and flight poses.

pub use glam::{Affine3A, Quat, Vec3};

/// Local "down" axis of the hammer frame. The head hangs along it.
pub const LOCAL_DOWN: Vec3 = Vec3::NEG_Y;

/// Shortest-arc rotation taking `from` onto `to`.
///
/// Both inputs are normalized first. Degenerate inputs (zero length)
/// give the identity rotation. Anti-parallel vectors rotate half a turn
/// about an axis perpendicular to `from`.
pub fn shortest_arc(from: Vec3, to: Vec3) -> Quat {
    let from = from.normalize_or_zero();
    let to = to.normalize_or_zero();
    if from == Vec3::ZERO || to == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_arc(from, to)
}

/// Rotation that points the hammer's local down axis along `direction`.
pub fn rotate_down_onto(direction: Vec3) -> Quat {
    shortest_arc(LOCAL_DOWN, direction)
}
