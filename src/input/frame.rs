//! Per-frame input snapshot
//!
//! Polled once at the top of the frame. Movement wants held state, fire and
//! the overlay toggle want press edges so holding the key doesn't retrigger.

use super::{Action, KeyBindings};
use macroquad::prelude::{is_key_down, is_key_pressed};

/// Plain-data snapshot of the action keys for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    /// Strafe-left key is held
    pub left_down: bool,
    /// Strafe-right key is held
    pub right_down: bool,
    /// Fire key went down this frame
    pub fire_pressed: bool,
    /// Overlay toggle went down this frame
    pub overlay_pressed: bool,
}

impl InputFrame {
    /// Read the current key state from the engine
    pub fn poll(bindings: &KeyBindings) -> Self {
        Self {
            left_down: is_key_down(bindings.key_for(Action::MoveLeft)),
            right_down: is_key_down(bindings.key_for(Action::MoveRight)),
            fire_pressed: is_key_pressed(bindings.key_for(Action::Fire)),
            overlay_pressed: is_key_pressed(bindings.key_for(Action::ToggleOverlay)),
        }
    }
}
