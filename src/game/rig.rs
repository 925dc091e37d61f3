//! Character and Hammer Rigs
//!
//! Static geometry for the thrower mannequin and the hammer, plus the pose
//! types the throw system writes each tick. Nothing here animates on its
//! own: the rigs only know their fixed offsets and how to compose world
//! transforms from a root pose.

use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::physics::types::LOCAL_DOWN;

/// Shoulder pivot offset from the character root (x is mirrored for the left arm)
pub const ARM_PIVOT_OFFSET: Vec3 = Vec3::new(0.75, 2.7, 0.0);
/// Head group offset from the character root
pub const HEAD_OFFSET: Vec3 = Vec3::new(0.0, 3.1, 0.0);
/// Torso center offset from the character root
pub const TORSO_OFFSET: Vec3 = Vec3::new(0.0, 2.15, 0.0);
/// Default wire length between handle and head (meters)
pub const HAMMER_LINK_LENGTH: f32 = 1.2;
/// Default head sphere radius (meters)
pub const HAMMER_HEAD_RADIUS: f32 = 0.25;

/// Position, orientation and (fixed) scale of one rig node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
            scale: Vec3::ONE,
        }
    }

    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.orientation, self.position)
    }
}

/// Which arm of the mannequin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A box-shaped body part, for the renderer to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigPart {
    pub name: &'static str,
    /// Which node the part hangs off
    pub parent: RigNode,
    /// Box center relative to its parent node
    pub offset: Vec3,
    /// Full box extents
    pub size: Vec3,
}

/// Nodes of the character rig that parts can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigNode {
    Root,
    Head,
    LeftArm,
    RightArm,
}

/// Mannequin body parts, broad-shouldered thrower build.
pub static CHARACTER_PARTS: [RigPart; 7] = [
    RigPart { name: "left_leg", parent: RigNode::Root, offset: Vec3::new(-0.3, 0.75, 0.0), size: Vec3::new(0.45, 1.5, 0.45) },
    RigPart { name: "right_leg", parent: RigNode::Root, offset: Vec3::new(0.3, 0.75, 0.0), size: Vec3::new(0.45, 1.5, 0.45) },
    RigPart { name: "torso", parent: RigNode::Root, offset: TORSO_OFFSET, size: Vec3::new(1.1, 1.3, 0.6) },
    RigPart { name: "head", parent: RigNode::Head, offset: Vec3::ZERO, size: Vec3::new(0.5, 0.6, 0.5) },
    RigPart { name: "hair", parent: RigNode::Head, offset: Vec3::new(0.0, 0.3, 0.0), size: Vec3::new(0.52, 0.15, 0.52) },
    RigPart { name: "left_arm", parent: RigNode::LeftArm, offset: Vec3::new(0.0, -0.6, 0.0), size: Vec3::new(0.4, 1.2, 0.4) },
    RigPart { name: "right_arm", parent: RigNode::RightArm, offset: Vec3::new(0.0, -0.6, 0.0), size: Vec3::new(0.4, 1.2, 0.4) },
];

/// The thrower: a root pose and two shoulder pivots.
///
/// Arm pivots sit at fixed local offsets from the root; only their rotation
/// is ever changed.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRig {
    pub root: Pose,
    left_arm: Quat,
    right_arm: Quat,
}

impl Default for CharacterRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRig {
    pub fn new() -> Self {
        Self {
            root: Pose::IDENTITY,
            left_arm: Quat::IDENTITY,
            right_arm: Quat::IDENTITY,
        }
    }

    /// Set the root height and facing (yaw about +Y).
    pub fn set_root(&mut self, height: f32, yaw: f32) {
        self.root = Pose::new(Vec3::new(0.0, height, 0.0), Quat::from_rotation_y(yaw));
    }

    /// Pitch both arms by `pitch` and roll them by `roll`, mirrored for the left arm.
    pub fn set_arms(&mut self, pitch: f32, roll: f32) {
        self.right_arm = Quat::from_rotation_x(pitch) * Quat::from_rotation_z(roll);
        self.left_arm = Quat::from_rotation_x(pitch) * Quat::from_rotation_z(-roll);
    }

    /// Local offset of an arm pivot from the root
    pub fn arm_offset(side: Side) -> Vec3 {
        match side {
            Side::Right => ARM_PIVOT_OFFSET,
            Side::Left => Vec3::new(-ARM_PIVOT_OFFSET.x, ARM_PIVOT_OFFSET.y, ARM_PIVOT_OFFSET.z),
        }
    }

    /// Arm pivot pose relative to the root
    pub fn arm_local(&self, side: Side) -> Pose {
        let orientation = match side {
            Side::Left => self.left_arm,
            Side::Right => self.right_arm,
        };
        Pose::new(Self::arm_offset(side), orientation)
    }

    pub fn root_transform(&self) -> Affine3A {
        self.root.to_affine()
    }

    /// Arm pivot in world space
    pub fn arm_transform(&self, side: Side) -> Affine3A {
        self.root_transform() * self.arm_local(side).to_affine()
    }

    /// World transform of any rig node
    pub fn node_transform(&self, node: RigNode) -> Affine3A {
        match node {
            RigNode::Root => self.root_transform(),
            RigNode::Head => self.root_transform() * Affine3A::from_translation(HEAD_OFFSET),
            RigNode::LeftArm => self.arm_transform(Side::Left),
            RigNode::RightArm => self.arm_transform(Side::Right),
        }
    }

    /// World transforms of every body part box center
    pub fn part_transforms(&self) -> impl Iterator<Item = (&'static RigPart, Affine3A)> + '_ {
        CHARACTER_PARTS
            .iter()
            .map(move |part| (part, self.node_transform(part.parent) * Affine3A::from_translation(part.offset)))
    }
}

/// Hammer dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HammerGeometry {
    /// Wire length from the handle (anchor) to the head center
    pub link_length: f32,
    /// Head sphere radius
    pub head_radius: f32,
    /// Handle ring radius and tube thickness
    pub handle_radius: f32,
    pub handle_tube: f32,
    /// Wire thickness
    pub wire_radius: f32,
}

impl Default for HammerGeometry {
    fn default() -> Self {
        Self {
            link_length: HAMMER_LINK_LENGTH,
            head_radius: HAMMER_HEAD_RADIUS,
            handle_radius: 0.1,
            handle_tube: 0.02,
            wire_radius: 0.01,
        }
    }
}

/// Pose of the hammer as a rigid body: grip point and orientation.
///
/// The head always hangs `link_length` along the local down axis, so the
/// head position is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HammerPose {
    pub anchor: Vec3,
    pub orientation: Quat,
    pub link_length: f32,
}

impl HammerPose {
    pub fn new(anchor: Vec3, orientation: Quat, link_length: f32) -> Self {
        Self {
            anchor,
            orientation,
            link_length,
        }
    }

    /// Place the hammer so its head ends up at `head`.
    pub fn from_head(head: Vec3, orientation: Quat, link_length: f32) -> Self {
        Self {
            anchor: head - orientation * (LOCAL_DOWN * link_length),
            orientation,
            link_length,
        }
    }

    /// Head center in world space
    pub fn head(&self) -> Vec3 {
        self.anchor + self.orientation * (LOCAL_DOWN * self.link_length)
    }

    pub fn anchor_transform(&self) -> Affine3A {
        Pose::new(self.anchor, self.orientation).to_affine()
    }

    pub fn head_transform(&self) -> Affine3A {
        Pose::new(self.head(), self.orientation).to_affine()
    }

    /// Wire midpoint transform (the wire is centered halfway down the link)
    pub fn wire_transform(&self) -> Affine3A {
        self.anchor_transform() * Affine3A::from_translation(LOCAL_DOWN * (self.link_length * 0.5))
    }
}
