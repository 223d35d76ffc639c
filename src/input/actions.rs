//! Game action definitions and key bindings
//!
//! Three gameplay actions plus the overlay toggle, each bound to one
//! keyboard key. Defaults are the arrow keys plus F; the config file can
//! rebind them by key name.

use crate::config::{BindingsConfig, ConfigError};
use macroquad::prelude::KeyCode;

/// All actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Strafe the marker left
    MoveLeft,
    /// Strafe the marker right
    MoveRight,
    /// Start the dodge hop
    Fire,
    /// Show/hide the debug overlay
    ToggleOverlay,
}

/// Resolved action-to-key map
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    move_left: KeyCode,
    move_right: KeyCode,
    fire: KeyCode,
    toggle_overlay: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: KeyCode::Left,
            move_right: KeyCode::Right,
            fire: KeyCode::F,
            toggle_overlay: KeyCode::F1,
        }
    }
}

impl KeyBindings {
    /// Resolve named bindings from the config file.
    ///
    /// Unknown names are rejected here as well as at config validation, so
    /// a `BindingsConfig` built in code gets the same checking.
    pub fn from_config(config: &BindingsConfig) -> Result<Self, ConfigError> {
        let resolve = |name: &str| {
            parse_key_name(name)
                .ok_or_else(|| ConfigError::ValidationError(format!("unknown key name: {:?}", name)))
        };
        Ok(Self {
            move_left: resolve(&config.move_left)?,
            move_right: resolve(&config.move_right)?,
            fire: resolve(&config.fire)?,
            toggle_overlay: resolve(&config.toggle_overlay)?,
        })
    }

    /// The key bound to an action
    pub fn key_for(&self, action: Action) -> KeyCode {
        match action {
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::Fire => self.fire,
            Action::ToggleOverlay => self.toggle_overlay,
        }
    }
}

/// Parse a key name from the config file into a key code.
///
/// Accepts letters, digits, arrows, function keys and a few specials.
pub fn parse_key_name(name: &str) -> Option<KeyCode> {
    let code = match name {
        "A" => KeyCode::A,
        "B" => KeyCode::B,
        "C" => KeyCode::C,
        "D" => KeyCode::D,
        "E" => KeyCode::E,
        "F" => KeyCode::F,
        "G" => KeyCode::G,
        "H" => KeyCode::H,
        "I" => KeyCode::I,
        "J" => KeyCode::J,
        "K" => KeyCode::K,
        "L" => KeyCode::L,
        "M" => KeyCode::M,
        "N" => KeyCode::N,
        "O" => KeyCode::O,
        "P" => KeyCode::P,
        "Q" => KeyCode::Q,
        "R" => KeyCode::R,
        "S" => KeyCode::S,
        "T" => KeyCode::T,
        "U" => KeyCode::U,
        "V" => KeyCode::V,
        "W" => KeyCode::W,
        "X" => KeyCode::X,
        "Y" => KeyCode::Y,
        "Z" => KeyCode::Z,
        "0" => KeyCode::Key0,
        "1" => KeyCode::Key1,
        "2" => KeyCode::Key2,
        "3" => KeyCode::Key3,
        "4" => KeyCode::Key4,
        "5" => KeyCode::Key5,
        "6" => KeyCode::Key6,
        "7" => KeyCode::Key7,
        "8" => KeyCode::Key8,
        "9" => KeyCode::Key9,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "LeftShift" => KeyCode::LeftShift,
        "RightShift" => KeyCode::RightShift,
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        "F4" => KeyCode::F4,
        "F5" => KeyCode::F5,
        "F6" => KeyCode::F6,
        "F7" => KeyCode::F7,
        "F8" => KeyCode::F8,
        "F9" => KeyCode::F9,
        "F10" => KeyCode::F10,
        "F11" => KeyCode::F11,
        "F12" => KeyCode::F12,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_name() {
        assert_eq!(parse_key_name("Left"), Some(KeyCode::Left));
        assert_eq!(parse_key_name("F"), Some(KeyCode::F));
        assert_eq!(parse_key_name("F1"), Some(KeyCode::F1));
        assert_eq!(parse_key_name("7"), Some(KeyCode::Key7));
        assert_eq!(parse_key_name("Banana"), None);
        assert_eq!(parse_key_name(""), None);
        // names are case-sensitive
        assert_eq!(parse_key_name("left"), None);
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.key_for(Action::MoveLeft), KeyCode::Left);
        assert_eq!(bindings.key_for(Action::MoveRight), KeyCode::Right);
        assert_eq!(bindings.key_for(Action::Fire), KeyCode::F);
    }

    #[test]
    fn test_from_config_resolves_names() {
        let config = BindingsConfig {
            move_left: "A".to_string(),
            move_right: "D".to_string(),
            fire: "Space".to_string(),
            toggle_overlay: "F2".to_string(),
        };
        let bindings = KeyBindings::from_config(&config).unwrap();
        assert_eq!(bindings.key_for(Action::Fire), KeyCode::Space);
        assert_eq!(bindings.key_for(Action::MoveLeft), KeyCode::A);
    }

    #[test]
    fn test_from_config_rejects_unknown_name() {
        let config = BindingsConfig {
            fire: "NotAKey".to_string(),
            ..BindingsConfig::default()
        };
        assert!(KeyBindings::from_config(&config).is_err());
    }
}
