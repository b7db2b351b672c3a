/// Rendering layer — all macroquad drawing lives here.
///
/// Each function receives an immutable view of the game state plus the
/// loaded assets.  No game logic is performed; this module only translates
/// state into draw calls.

use anyhow::Context;
use macroquad::prelude::*;

use crate::compute::{
    arrows_remaining, crossbow_position, is_game_over, ARROW_SIZE, BALLOON_SIZE, CROSSBOW_SIZE,
};
use crate::entities::GameState;

const HUD_FONT_SIZE: u16 = 30;
const BANNER_FONT_SIZE: u16 = 60;
const HUD_MARGIN_BOTTOM: f32 = 50.0;

// ── Assets ────────────────────────────────────────────────────────────────────

/// Textures and font loaded once at startup.
pub struct Assets {
    pub balloon: Texture2D,
    pub arrow: Texture2D,
    pub crossbow: Texture2D,
    pub font: Font,
}

impl Assets {
    pub async fn load() -> anyhow::Result<Self> {
        Ok(Self {
            balloon: load_texture("assets/balloon.png")
                .await
                .context("loading assets/balloon.png")?,
            arrow: load_texture("assets/arrow.png")
                .await
                .context("loading assets/arrow.png")?,
            crossbow: load_texture("assets/crossbow.png")
                .await
                .context("loading assets/crossbow.png")?,
            font: load_ttf_font("assets/font.ttf")
                .await
                .context("loading assets/font.ttf")?,
        })
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render(state: &GameState, assets: &Assets) {
    clear_background(BLACK);

    for balloon in &state.balloons {
        if balloon.alive {
            draw_sprite(&assets.balloon, balloon.x, balloon.y, BALLOON_SIZE);
        }
    }

    for arrow in &state.arrows {
        if arrow.flying {
            draw_sprite(&assets.arrow, arrow.x, arrow.y, ARROW_SIZE);
        }
    }

    let (cx, cy) = crossbow_position(state);
    draw_sprite(&assets.crossbow, cx, cy, CROSSBOW_SIZE);

    draw_hud(state, assets);

    if is_game_over(state) {
        draw_game_over(state, assets);
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Draw a texture scaled to its hitbox so what the player sees is what the
/// collision check uses.
fn draw_sprite(texture: &Texture2D, x: f32, y: f32, size: (f32, f32)) {
    draw_texture_ex(
        texture,
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(size.0, size.1)),
            ..Default::default()
        },
    );
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud(state: &GameState, assets: &Assets) {
    let y = state.height - HUD_MARGIN_BOTTOM;

    // Ammo readout — left
    draw_text_ex(
        &format!("Arrows: {}", arrows_remaining(state)),
        20.0,
        y,
        TextParams {
            font: Some(&assets.font),
            font_size: HUD_FONT_SIZE,
            color: WHITE,
            ..Default::default()
        },
    );

    // Score — right
    draw_text_ex(
        &format!("Score: {}", state.score),
        state.width - 150.0,
        y,
        TextParams {
            font: Some(&assets.font),
            font_size: HUD_FONT_SIZE,
            color: WHITE,
            ..Default::default()
        },
    );
}

// ── Game-over banner ──────────────────────────────────────────────────────────

fn draw_game_over(state: &GameState, assets: &Assets) {
    draw_text_ex(
        "Game Over",
        state.width / 2.0 - 200.0,
        state.height / 2.0 - 30.0,
        TextParams {
            font: Some(&assets.font),
            font_size: BANNER_FONT_SIZE,
            color: RED,
            ..Default::default()
        },
    );
}
