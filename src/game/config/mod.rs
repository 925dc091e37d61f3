//! Config Module
//!
//! Centralized configuration for the throw scene and its key bindings.

pub mod input_config;
pub mod throw_config;

pub use input_config::{InputAction, InputConfig};
pub use throw_config::{ConfigError, IdleConfig, ReleaseConfig, ThrowConfig, WindUpConfig};
