//! Input handling
//!
//! Keyboard input mapped through named actions, snapshotted once per frame.
//! Scene code only ever sees the snapshot, never the engine key state.

mod actions;
mod frame;

pub use actions::{parse_key_name, Action, KeyBindings};
pub use frame::InputFrame;
