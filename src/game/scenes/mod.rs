//! Scene Module
//!
//! High-level scene compositions that wire together all game systems.

pub mod throw_scene;

pub use throw_scene::{ThrowScene, camera_mode_for};
