//! Play scene
//!
//! Scene state lives in an explicit struct advanced by a pure per-frame
//! tick, with no engine calls anywhere in the update path. Drawing is in
//! the render module, so the whole gameplay loop tests headless.

mod dodge;
mod enemy;
mod play;

pub use dodge::DodgeAnimation;
pub use enemy::Enemy;
pub use play::{PlayState, Player};

/// Logical viewport dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
