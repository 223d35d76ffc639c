//! STARSPIN: a tiny starfield arcade scene
//!
//! A spinning marker strafes left and right over a scrolling starfield,
//! hops out of its travel lane on demand, and a drone drifts across the
//! screen and wraps around. Arrows move, F dodges, F1 shows the overlay.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod input;
mod render;
mod scene;

use config::{ConfigError, GameConfig, CONFIG_PATH};
use input::{InputFrame, KeyBindings};
use macroquad::prelude::*;
use scene::{PlayState, Viewport};

fn window_conf() -> Conf {
    // The settings file decides the window; main reports any problem with
    // it, this just needs usable dimensions.
    let config = GameConfig::load(CONFIG_PATH).unwrap_or_default();
    Conf {
        window_title: format!("{} v{}", config.window.title, VERSION),
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = match GameConfig::load(CONFIG_PATH) {
        Ok(config) => {
            println!("Loaded settings from {}", CONFIG_PATH);
            config
        }
        Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("No settings file at {}, using defaults", CONFIG_PATH);
            GameConfig::default()
        }
        Err(e) => {
            eprintln!("Bad settings file {}: {}, using defaults", CONFIG_PATH, e);
            GameConfig::default()
        }
    };

    // Bindings were validated with the config; defaults can't fail
    let bindings = KeyBindings::from_config(&config.bindings).unwrap_or_default();

    let starfield = render::load_starfield(&config.background.image).await;

    let viewport = Viewport::new(config.window.width as f32, config.window.height as f32);
    let mut state = PlayState::new(viewport, &config);

    loop {
        let delta_ms = get_frame_time() * 1000.0;
        let frame = InputFrame::poll(&bindings);

        state.tick(&frame, delta_ms);
        render::draw_scene(&state, &starfield);

        next_frame().await
    }
}
