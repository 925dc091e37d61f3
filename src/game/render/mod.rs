//! Render Boundary
//!
//! Data handed to whatever draws the scene. No GPU code lives here.

pub mod frame;

pub use frame::{FrameTransforms, NodeTransform};
