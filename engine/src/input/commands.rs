//! Throw Commands
//!
//! The two commands the input side can send to the throw simulation, and a
//! one-slot buffer that holds the latest one until the next tick boundary.

/// A command for the throw state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrowCommand {
    /// Start a throw with the given power
    Throw(f32),
    /// Abort any throw and return to idle
    Reset,
}

/// Holds at most one pending command. A newer command replaces an older one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CommandSlot {
    pending: Option<ThrowCommand>,
}

impl CommandSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a command, replacing anything not yet taken.
    pub fn push(&mut self, command: ThrowCommand) {
        self.pending = Some(command);
    }

    /// Take the pending command, leaving the slot empty.
    pub fn take(&mut self) -> Option<ThrowCommand> {
        self.pending.take()
    }

    pub fn peek(&self) -> Option<ThrowCommand> {
        self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_command_wins() {
        let mut slot = CommandSlot::new();
        slot.push(ThrowCommand::Throw(20.0));
        slot.push(ThrowCommand::Reset);
        assert_eq!(slot.take(), Some(ThrowCommand::Reset));
        assert!(slot.is_empty());
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut slot = CommandSlot::new();
        slot.push(ThrowCommand::Throw(12.5));
        assert_eq!(slot.peek(), Some(ThrowCommand::Throw(12.5)));
        assert!(!slot.is_empty());
    }
}
