//! Input Module
//!
//! Platform-agnostic input handling for the throw: effort scoring from face
//! landmarks, the effort-to-power mapping, and the command buffer between
//! the input side and the simulation. Key bindings live in the game config
//! so this module stays decoupled from any windowing system.
//!
//! # Example
//!
//! ```rust,ignore
//! use hammer_throw_engine::input::{ExpressionMetrics, PowerRange, ThrowInput};
//!
//! let mut input = ThrowInput::new(PowerRange::default());
//! if let Some(metrics) = ExpressionMetrics::from_landmarks(&landmarks) {
//!     input.record_effort(metrics.effort_score());
//! }
//! input.request_throw();
//! let command = input.take_command();
//! ```

pub mod commands;
pub mod effort;

// Re-export commonly used types at module level
pub use commands::{CommandSlot, ThrowCommand};
pub use effort::{ExpressionMetrics, PowerRange};

/// Input adapter between the effort source and the throw simulation.
///
/// Keeps the most recent effort sample and turns throw/reset requests into
/// [`ThrowCommand`]s, buffered last-command-wins until the next tick.
#[derive(Debug, Clone, Default)]
pub struct ThrowInput {
    pub power_range: PowerRange,
    effort: f32,
    commands: CommandSlot,
}

impl ThrowInput {
    pub fn new(power_range: PowerRange) -> Self {
        Self {
            power_range,
            effort: 0.0,
            commands: CommandSlot::new(),
        }
    }

    /// Record the latest effort sample (clamped to 0..1, non-finite ignored).
    pub fn record_effort(&mut self, effort: f32) {
        if effort.is_finite() {
            self.effort = effort.clamp(0.0, 1.0);
        }
    }

    /// Latest effort sample
    pub fn effort(&self) -> f32 {
        self.effort
    }

    /// Power a throw requested right now would use
    pub fn current_power(&self) -> f32 {
        self.power_range.power_for_effort(self.effort)
    }

    /// Queue a throw at the current effort's power
    pub fn request_throw(&mut self) {
        let power = self.current_power();
        self.commands.push(ThrowCommand::Throw(power));
    }

    /// Queue a throw with an explicit power
    pub fn request_throw_with_power(&mut self, power: f32) {
        self.commands.push(ThrowCommand::Throw(power));
    }

    /// Queue a reset
    pub fn request_reset(&mut self) {
        self.commands.push(ThrowCommand::Reset);
    }

    /// Queue an already-built command
    pub fn push(&mut self, command: ThrowCommand) {
        self.commands.push(command);
    }

    /// Take the pending command, if any
    pub fn take_command(&mut self) -> Option<ThrowCommand> {
        self.commands.take()
    }

    pub fn has_pending(&self) -> bool {
        !self.commands.is_empty()
    }
}
