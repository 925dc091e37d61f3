//! Game Module
//!
//! The hammer throw built on top of the engine: rigs, tuning, the throw
//! state machine and the scene that composes it with camera and input.

pub mod config;
pub mod field;
pub mod render;
pub mod rig;
pub mod scenes;
pub mod systems;

pub use config::{ConfigError, InputAction, InputConfig, ThrowConfig};
pub use field::{DistanceMarker, FieldLayout, format_distance};
pub use render::{FrameTransforms, NodeTransform};
pub use rig::{CharacterRig, HammerGeometry, HammerPose, Pose, RigNode, Side};
pub use scenes::ThrowScene;
pub use systems::{ThrowEvent, ThrowPhase, ThrowSystem};
