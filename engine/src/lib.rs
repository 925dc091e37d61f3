//! Hammer Throw Engine Library
//!
//! Simulation core for a hammer throw: a scripted wind-up, a ballistic
//! flight with ground bounces, and a camera that follows the hammer. No
//! rendering lives here; every pose is exposed as plain transforms.
//!
//! # Modules
//!
//! - [`physics`] - Flight integration, ground contact and orientation helpers
//! - [`camera`] - Orbit/follow camera controller
//! - [`input`] - Effort scoring, effort-to-power mapping and the command buffer
//! - [`game`] - Rigs, configuration, the throw state machine and the scene
//!
//! # Example
//!
//! ```rust
//! use hammer_throw_engine::game::{ThrowConfig, ThrowEvent, ThrowSystem};
//!
//! let mut system = ThrowSystem::with_seed(ThrowConfig::default(), 1);
//! system.throw(20.0);
//!
//! let mut distance = None;
//! for _ in 0..900 {
//!     if let Some(ThrowEvent::Landed { distance: d }) = system.tick(1.0 / 60.0) {
//!         distance = Some(d);
//!     }
//! }
//! assert!(distance.unwrap() > 0.0);
//! ```

pub mod camera;
pub mod input;
pub mod physics;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types
pub use camera::{CameraFollowConfig, CameraMode, ThrowCamera};
pub use game::{ThrowConfig, ThrowEvent, ThrowPhase, ThrowScene, ThrowSystem};
pub use input::{ExpressionMetrics, PowerRange, ThrowCommand, ThrowInput};
pub use physics::{FlightBody, FlightConfig, FlightState};
