//! Scene rendering
//!
//! Draws the play state with macroquad: the tiled starfield, the spinning
//! player marker, enemy sprites and the optional debug overlay. Keeps every
//! engine draw call out of the scene module.

use crate::scene::PlayState;
use macroquad::prelude::*;
use macroquad::rand::{gen_range, srand};

/// Marker fill color (0xef2bb6)
const PLAYER_COLOR: Color = Color::new(0.937, 0.169, 0.714, 1.0);

const SPACE_COLOR: Color = Color::new(0.016, 0.024, 0.047, 1.0);

/// Load the starfield texture, or generate one if the file is missing.
pub async fn load_starfield(path: &str) -> Texture2D {
    let texture = match load_texture(path).await {
        Ok(texture) => {
            println!("Loaded starfield from {}", path);
            texture
        }
        Err(e) => {
            eprintln!("Failed to load {}: {}, generating a starfield", path, e);
            Texture2D::from_image(&generate_starfield(256, 256))
        }
    };
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// Procedural fallback: sparse stars on near-black, seeded so every run
/// gets the same sky.
fn generate_starfield(width: u16, height: u16) -> Image {
    let mut image = Image::gen_image_color(width, height, SPACE_COLOR);
    srand(7);
    for _ in 0..180 {
        let x = gen_range(0, width as u32);
        let y = gen_range(0, height as u32);
        let brightness = gen_range(0.4, 1.0);
        image.set_pixel(x, y, Color::new(brightness, brightness, brightness, 1.0));
    }
    image
}

/// Draw one frame of the scene
pub fn draw_scene(state: &PlayState, starfield: &Texture2D) {
    clear_background(SPACE_COLOR);
    draw_background(state, starfield);
    draw_enemies(state, starfield);
    draw_player(state);
    if state.show_overlay {
        draw_debug_overlay(state);
    }
}

/// Tile the starfield horizontally, shifted by the scroll offset
fn draw_background(state: &PlayState, texture: &Texture2D) {
    let tile_w = texture.width();
    // wrap the offset into [-tile_w, 0) so tiles always cover the viewport
    let start = state.scroll_offset.rem_euclid(tile_w) - tile_w;
    let mut x = start;
    while x < state.viewport.width {
        draw_texture_ex(
            texture,
            x,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(tile_w, state.viewport.height)),
                ..Default::default()
            },
        );
        x += tile_w;
    }
}

fn draw_player(state: &PlayState) {
    let p = &state.player;
    draw_rectangle_ex(
        p.x,
        p.y,
        p.size,
        p.size,
        DrawRectangleParams {
            offset: vec2(0.5, 0.5),
            rotation: p.angle,
            color: PLAYER_COLOR,
        },
    );
}

/// Enemy sprites reuse the starfield texture, cropped to a square region
fn draw_enemies(state: &PlayState, texture: &Texture2D) {
    let crop = texture.width().min(texture.height());
    for enemy in &state.enemies {
        draw_texture_ex(
            texture,
            enemy.x - enemy.width / 2.0,
            enemy.y - enemy.width / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(enemy.width, enemy.width)),
                source: Some(Rect::new(0.0, 0.0, crop, crop)),
                ..Default::default()
            },
        );
    }
}

/// Top-left HUD with frame rate and entity positions (F1)
fn draw_debug_overlay(state: &PlayState) {
    let mut y = 20.0;
    let mut line = |text: &str| {
        draw_text(text, 8.0, y, 20.0, GREEN);
        y += 18.0;
    };
    line(&format!("fps: {}", get_fps()));
    line(&format!(
        "player: ({:.1}, {:.1}) dodge: {}",
        state.player.x,
        state.player.y,
        if state.dodge.in_flight() { "in flight" } else { "idle" }
    ));
    for (i, enemy) in state.enemies.iter().enumerate() {
        line(&format!("enemy {}: ({:.1}, {:.1})", i, enemy.x, enemy.y));
    }
}
