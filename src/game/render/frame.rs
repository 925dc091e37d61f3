//! Frame Snapshot
//!
//! Plain-old-data copy of every transform a renderer needs for one tick,
//! laid out for direct upload to a GPU buffer.

use bytemuck::{Pod, Zeroable};
use glam::{Affine3A, Quat, Vec3};

/// Translation (xyz, w unused) plus rotation quaternion (xyzw).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct NodeTransform {
    pub translation: [f32; 4],
    pub rotation: [f32; 4],
}

impl NodeTransform {
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation: translation.extend(0.0).to_array(),
            rotation: rotation.to_array(),
        }
    }

    /// Drops any scale carried by the affine.
    pub fn from_affine(affine: &Affine3A) -> Self {
        let (_, rotation, translation) = affine.to_scale_rotation_translation();
        Self::new(translation, rotation)
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.translation[0], self.translation[1], self.translation[2])
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_array(self.rotation)
    }
}

/// All per-tick transforms of the throw scene.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct FrameTransforms {
    pub root: NodeTransform,
    pub left_arm: NodeTransform,
    pub right_arm: NodeTransform,
    /// Hammer grip and whole-hammer orientation
    pub hammer: NodeTransform,
    /// Hammer head center (w unused)
    pub hammer_head: [f32; 4],
    pub camera_position: [f32; 4],
    pub camera_target: [f32; 4],
    /// Numeric `ThrowPhase`
    pub phase: u32,
    /// Scene clock (s)
    pub time: f32,
    /// Landed distance, zero before landing
    pub distance: f32,
    pub _padding: f32,
}

static_assertions::assert_eq_size!(NodeTransform, [u8; 32]);
static_assertions::assert_eq_size!(FrameTransforms, [u8; 192]);
const _: () = assert!(std::mem::size_of::<FrameTransforms>() % 16 == 0);

impl FrameTransforms {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_transform_from_affine() {
        let rotation = Quat::from_rotation_y(0.7);
        let affine = Affine3A::from_rotation_translation(rotation, Vec3::new(1.0, 2.0, 3.0));
        let node = NodeTransform::from_affine(&affine);
        assert!((node.translation() - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
        assert!(node.rotation().dot(rotation).abs() > 1.0 - 1e-6);
        assert_eq!(node.translation[3], 0.0);
    }

    #[test]
    fn test_frame_bytes_cover_struct() {
        let frame = FrameTransforms {
            phase: 2,
            time: 1.5,
            ..FrameTransforms::default()
        };
        let bytes = frame.as_bytes();
        assert_eq!(bytes.len(), 192);
        let back: &FrameTransforms = bytemuck::from_bytes(bytes);
        assert_eq!(back.phase, 2);
        assert_eq!(back.time, 1.5);
    }
}
