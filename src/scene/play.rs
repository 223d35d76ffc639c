//! Play state and per-frame tick
//!
//! Owns everything the scene mutates frame to frame: the background scroll
//! offset, the player marker, the dodge animation and the enemy list. The
//! tick takes a plain input snapshot and the elapsed milliseconds, so the
//! full update path runs without a window.

use super::{DodgeAnimation, Enemy, Viewport};
use crate::config::GameConfig;
use crate::input::InputFrame;
use std::f32::consts::TAU;

/// The player's square marker
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub x: f32,
    /// Current vertical position; written by the dodge animation each frame
    pub y: f32,
    /// Side length of the square
    pub size: f32,
    /// Current spin angle in radians
    pub angle: f32,
}

/// All mutable scene state, advanced once per frame by [`PlayState::tick`]
#[derive(Debug, Clone)]
pub struct PlayState {
    pub viewport: Viewport,

    /// Background tiling offset; decreases by `scroll_step` every tick
    pub scroll_offset: f32,
    scroll_step: f32,

    pub player: Player,
    pub dodge: DodgeAnimation,
    pub enemies: Vec<Enemy>,

    /// Whether the debug overlay is drawn
    pub show_overlay: bool,

    /// Strafe speed in pixels per millisecond (0.1% of viewport width)
    speed: f32,
    /// Spin rate in radians per millisecond
    spin_speed: f32,
}

impl PlayState {
    /// Set up the scene: player in its travel lane at 80% of viewport
    /// height, enemies staggered from their spawn point at the right edge.
    pub fn new(viewport: Viewport, config: &GameConfig) -> Self {
        let rest_y = viewport.height * 0.8;
        let player = Player {
            x: config.player.spawn_x,
            y: rest_y,
            size: config.player.size,
            angle: 0.0,
        };
        let dodge = DodgeAnimation::new(rest_y, config.player.dodge_target_y, config.player.dodge_stage_ms);
        let enemies = (0..config.enemy.count)
            .map(|i| {
                Enemy::new(
                    config.enemy.spawn_x + i as f32 * config.enemy.spacing,
                    config.enemy.spawn_y,
                    config.enemy.sprite_size,
                    config.enemy.speed,
                )
            })
            .collect();

        Self {
            viewport,
            scroll_offset: 0.0,
            scroll_step: config.background.scroll_step,
            player,
            dodge,
            enemies,
            show_overlay: false,
            speed: viewport.width * 0.001,
            spin_speed: config.player.spin_speed,
        }
    }

    /// Advance one frame. `delta_ms` is the time since the last tick in
    /// milliseconds.
    pub fn tick(&mut self, input: &InputFrame, delta_ms: f32) {
        // The background scrolls a fixed step per frame, not per elapsed
        // time.
        self.scroll_offset -= self.scroll_step;

        if input.overlay_pressed {
            self.show_overlay = !self.show_overlay;
        }

        // Strafing and a new dodge are both locked out while a hop is in
        // flight.
        if !self.dodge.in_flight() {
            if input.left_down {
                self.player.x -= delta_ms * self.speed;
            }
            if input.right_down {
                self.player.x += delta_ms * self.speed;
            }
            if input.fire_pressed {
                self.dodge.trigger();
            }
        }

        self.player.y = self.dodge.advance(delta_ms);
        self.player.angle = (self.player.angle + self.spin_speed * delta_ms) % TAU;

        for enemy in &mut self.enemies {
            enemy.update(delta_ms, self.viewport.width);
        }
    }

    /// Remove an enemy, and with it its on-screen sprite
    #[allow(dead_code)]
    pub fn despawn_enemy(&mut self, index: usize) -> Option<Enemy> {
        if index < self.enemies.len() {
            Some(self.enemies.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        width: 480.0,
        height: 640.0,
    };

    fn state() -> PlayState {
        PlayState::new(VIEW, &GameConfig::default())
    }

    const IDLE: InputFrame = InputFrame {
        left_down: false,
        right_down: false,
        fire_pressed: false,
        overlay_pressed: false,
    };

    #[test]
    fn test_setup_positions() {
        let s = state();
        assert!((s.player.x - 100.0).abs() < 0.001);
        assert!((s.player.y - 512.0).abs() < 0.001); // 80% of 640
        assert!((s.speed - 0.48).abs() < 0.001); // 0.1% of 480
        assert_eq!(s.enemies.len(), 1);
        assert!((s.enemies[0].x - 480.0).abs() < 0.001);
        assert!((s.enemies[0].y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_scroll_step_ignores_delta() {
        let mut s = state();
        s.tick(&IDLE, 16.0);
        assert!((s.scroll_offset + 4.0).abs() < 0.001);
        s.tick(&IDLE, 33.0);
        assert!((s.scroll_offset + 8.0).abs() < 0.001);
        s.tick(&IDLE, 0.0);
        assert!((s.scroll_offset + 12.0).abs() < 0.001);
    }

    #[test]
    fn test_strafe_left_moves_by_delta_times_speed() {
        let mut s = state();
        let input = InputFrame {
            left_down: true,
            ..IDLE
        };
        s.tick(&input, 16.0);
        assert!((s.player.x - (100.0 - 16.0 * 0.48)).abs() < 0.001);
    }

    #[test]
    fn test_strafe_right_moves_by_delta_times_speed() {
        let mut s = state();
        let input = InputFrame {
            right_down: true,
            ..IDLE
        };
        s.tick(&input, 25.0);
        assert!((s.player.x - (100.0 + 25.0 * 0.48)).abs() < 0.001);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut s = state();
        let input = InputFrame {
            left_down: true,
            right_down: true,
            ..IDLE
        };
        s.tick(&input, 16.0);
        assert!((s.player.x - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_strafe_locked_while_dodging() {
        let mut s = state();
        let fire = InputFrame {
            fire_pressed: true,
            ..IDLE
        };
        s.tick(&fire, 16.0);
        assert!(s.dodge.in_flight());
        let x_at_trigger = s.player.x;

        // held movement during the hop must not move the marker
        let held = InputFrame {
            left_down: true,
            ..IDLE
        };
        for _ in 0..20 {
            s.tick(&held, 30.0);
        }
        assert!((s.player.x - x_at_trigger).abs() < 0.001);

        // both stages done (16 + 20*30 > 600ms): movement unlocks
        assert!(!s.dodge.in_flight());
        assert!((s.player.y - 512.0).abs() < 0.001);
        s.tick(&held, 16.0);
        assert!(s.player.x < x_at_trigger);
    }

    #[test]
    fn test_second_fire_during_hop_is_ignored() {
        let mut s = state();
        let fire = InputFrame {
            fire_pressed: true,
            ..IDLE
        };
        s.tick(&fire, 150.0);
        let y_mid = s.player.y;
        assert!(y_mid < 512.0);

        // fire again mid-rise: must not restart the rise
        s.tick(&fire, 150.0);
        assert!((s.player.y - 100.0).abs() < 0.001); // top of the hop

        // completes on the original 600ms schedule
        s.tick(&fire, 300.0);
        assert!(!s.dodge.in_flight());
        assert!((s.player.y - 512.0).abs() < 0.001);
    }

    #[test]
    fn test_hop_restores_rest_position_before_unlocking() {
        let mut s = state();
        let fire = InputFrame {
            fire_pressed: true,
            ..IDLE
        };
        s.tick(&fire, 0.0);
        let mut elapsed = 0.0;
        while s.dodge.in_flight() {
            s.tick(&IDLE, 50.0);
            elapsed += 50.0;
            assert!(elapsed <= 700.0, "hop must complete within two stages");
        }
        assert!((s.player.y - 512.0).abs() < 0.001);
    }

    #[test]
    fn test_marker_spins_every_frame() {
        let mut s = state();
        s.tick(&IDLE, 100.0);
        // one turn per second -> 0.1 turns in 100ms
        assert!((s.player.angle - TAU * 0.1).abs() < 0.001);
    }

    #[test]
    fn test_enemies_update_each_tick() {
        let mut s = state();
        s.tick(&IDLE, 1000.0);
        assert!((s.enemies[0].x - 380.0).abs() < 0.001);
    }

    #[test]
    fn test_despawn_enemy() {
        let mut s = state();
        assert!(s.despawn_enemy(0).is_some());
        assert!(s.enemies.is_empty());
        assert!(s.despawn_enemy(0).is_none());
    }

    #[test]
    fn test_overlay_toggles_on_press_edge() {
        let mut s = state();
        let toggle = InputFrame {
            overlay_pressed: true,
            ..IDLE
        };
        s.tick(&toggle, 16.0);
        assert!(s.show_overlay);
        s.tick(&IDLE, 16.0);
        assert!(s.show_overlay);
        s.tick(&toggle, 16.0);
        assert!(!s.show_overlay);
    }
}
