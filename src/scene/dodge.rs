//! Dodge animation
//!
//! The fire action hops the marker out of its travel lane and back: a rise
//! to a fixed height and a fall back to the resting lane, each over one
//! fixed stage duration with an ease-out curve. Modeled as an explicit
//! state machine advanced by elapsed time, not chained timer callbacks.
//! Non-reentrant: a hop in flight ignores further triggers until the fall
//! completes.

use std::f32::consts::FRAC_PI_2;

/// Ease-out sine curve: fast start, decelerating toward the end
fn ease_out(t: f32) -> f32 {
    (t * FRAC_PI_2).sin()
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Rising { elapsed_ms: f32 },
    Falling { elapsed_ms: f32 },
}

/// Two-stage vertical hop for the player marker
#[derive(Debug, Clone)]
pub struct DodgeAnimation {
    phase: Phase,
    /// Vertical position of the travel lane
    rest_y: f32,
    /// Vertical position the rise ends at
    target_y: f32,
    /// Duration of each stage in milliseconds
    stage_ms: f32,
}

impl DodgeAnimation {
    pub fn new(rest_y: f32, target_y: f32, stage_ms: f32) -> Self {
        Self {
            phase: Phase::Idle,
            rest_y,
            target_y,
            stage_ms,
        }
    }

    /// True from trigger until the fall stage completes
    pub fn in_flight(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Start the hop. A no-op while a previous hop is still in flight.
    pub fn trigger(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Rising { elapsed_ms: 0.0 };
        }
    }

    /// Advance by `delta_ms` and return the marker's vertical position.
    ///
    /// Time left over at a stage boundary carries into the next stage, so a
    /// long frame cannot stall the animation at the top.
    pub fn advance(&mut self, delta_ms: f32) -> f32 {
        match self.phase {
            Phase::Idle => self.rest_y,
            Phase::Rising { elapsed_ms } => {
                let elapsed = elapsed_ms + delta_ms;
                if elapsed < self.stage_ms {
                    self.phase = Phase::Rising { elapsed_ms: elapsed };
                    lerp(self.rest_y, self.target_y, ease_out(elapsed / self.stage_ms))
                } else {
                    self.phase = Phase::Falling { elapsed_ms: 0.0 };
                    self.advance(elapsed - self.stage_ms)
                }
            }
            Phase::Falling { elapsed_ms } => {
                let elapsed = elapsed_ms + delta_ms;
                if elapsed < self.stage_ms {
                    self.phase = Phase::Falling { elapsed_ms: elapsed };
                    lerp(self.target_y, self.rest_y, ease_out(elapsed / self.stage_ms))
                } else {
                    self.phase = Phase::Idle;
                    self.rest_y
                }
            }
        }
    }
}
