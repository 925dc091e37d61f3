//! Input Configuration
//!
//! Key bindings for the throw scene as a data structure, so they can be
//! remapped without touching the scene.

use winit::keyboard::KeyCode;

/// Logical action a bound key triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Throw with the current effort
    Throw,
    /// Abort the throw and return to idle
    Reset,
    /// Leave the application
    Exit,
}

/// Centralized key bindings.
#[derive(Clone, Debug)]
pub struct InputConfig {
    pub throw: KeyCode,
    /// Secondary throw key
    pub throw_alt: KeyCode,
    pub reset: KeyCode,
    pub exit: KeyCode,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            throw: KeyCode::Space,
            throw_alt: KeyCode::Enter,
            reset: KeyCode::KeyR,
            exit: KeyCode::Escape,
        }
    }
}

impl InputConfig {
    /// Classify a key press. Returns `None` for unbound keys.
    pub fn action_for_key(&self, key: KeyCode) -> Option<InputAction> {
        if key == self.throw || key == self.throw_alt {
            Some(InputAction::Throw)
        } else if key == self.reset {
            Some(InputAction::Reset)
        } else if key == self.exit {
            Some(InputAction::Exit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let config = InputConfig::default();
        assert_eq!(config.action_for_key(KeyCode::Space), Some(InputAction::Throw));
        assert_eq!(config.action_for_key(KeyCode::Enter), Some(InputAction::Throw));
        assert_eq!(config.action_for_key(KeyCode::KeyR), Some(InputAction::Reset));
        assert_eq!(config.action_for_key(KeyCode::Escape), Some(InputAction::Exit));
        assert_eq!(config.action_for_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_remapped_reset() {
        let config = InputConfig {
            reset: KeyCode::Backspace,
            ..InputConfig::default()
        };
        assert_eq!(config.action_for_key(KeyCode::Backspace), Some(InputAction::Reset));
        assert_eq!(config.action_for_key(KeyCode::KeyR), None);
    }
}
