//! Game systems: self-contained modules that own state and logic.

pub mod throw_system;

pub use throw_system::{ThrowEvent, ThrowPhase, ThrowSession, ThrowSystem};
