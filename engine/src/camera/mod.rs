//! Camera Module
//!
//! Provides the throw-tracking camera for the engine.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod controller;

pub use controller::{CameraFollowConfig, CameraMode, ThrowCamera};
