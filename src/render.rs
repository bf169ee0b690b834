//! Matrix-style renderer
//!
//! Draws a [`Snapshot`] every frame. The board is scaled to fit the
//! window and centred; cells are drawn as glyphs.

use macroquad::prelude::*;

use crate::game::{Cell, Direction, GameState, Snapshot};

const MATRIX_HEAD: Color = Color::new(0.64, 1.0, 0.64, 1.0); // bright green
const MATRIX_BODY: Color = Color::new(0.25, 0.9, 0.25, 1.0); // medium green
const MATRIX_WALL: Color = Color::new(0.08, 0.4, 0.08, 1.0); // dark green
const MATRIX_FOOD: Color = Color::new(0.9, 1.0, 0.9, 1.0); // pale bright
const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.55);

const MATRIX_GLYPHS: &[u8] = b"01<>[]{}()/\\|-=+*;:.,^~ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Stable glyph for a cell so the body doesn't flicker between frames
fn matrix_char_for_cell(c: Cell) -> char {
    let hx = (c.x as i64).wrapping_mul(73_856_093);
    let hy = (c.y as i64).wrapping_mul(19_349_663);
    let h = (hx ^ hy).unsigned_abs() as usize;
    MATRIX_GLYPHS[h % MATRIX_GLYPHS.len()] as char
}

fn head_char(heading: Direction) -> char {
    match heading {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

/// Pixel layout of the board inside the window
#[derive(Debug, Clone, Copy)]
struct Layout {
    tile: f32,
    off_x: f32,
    off_y: f32,
    width: f32,
    height: f32,
}

impl Layout {
    fn fit(grid_w: i32, grid_h: i32, max_tile: f32) -> Self {
        let sw = screen_width();
        let sh = screen_height();
        // Leave room for the HUD line above the board
        let tile = (sw / grid_w as f32)
            .min((sh - 48.0).max(1.0) / grid_h as f32)
            .min(max_tile * 2.0);
        let width = tile * grid_w as f32;
        let height = tile * grid_h as f32;
        Self { tile, off_x: (sw - width) * 0.5, off_y: (sh - height) * 0.5 + 16.0, width, height }
    }

    fn draw_glyph(&self, ch: char, cell: Cell, color: Color) {
        let x = self.off_x + cell.x as f32 * self.tile + 1.0;
        let y = self.off_y + (cell.y as f32 + 1.0) * self.tile - 1.0; // baseline
        let size = self.tile.max(6.0);
        let params = TextParams {
            font_size: size as u16,
            font_scale: 1.0,
            font_scale_aspect: 1.0,
            color,
            ..Default::default()
        };
        draw_text_ex(&ch.to_string(), x, y, params);
    }
}

pub struct Renderer {
    /// Preferred cell size in pixels
    cell_size: f32,
}

impl Renderer {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    pub fn draw(&self, snap: &Snapshot) {
        clear_background(BLACK);
        let layout = Layout::fit(snap.grid.width(), snap.grid.height(), self.cell_size);

        draw_rectangle_lines(
            layout.off_x - 2.0,
            layout.off_y - 2.0,
            layout.width + 4.0,
            layout.height + 4.0,
            2.0,
            MATRIX_WALL,
        );

        layout.draw_glyph(matrix_char_for_cell(snap.food), snap.food, MATRIX_FOOD);
        for (i, c) in snap.body.iter().enumerate() {
            if i == 0 {
                layout.draw_glyph(head_char(snap.heading), *c, MATRIX_HEAD);
            } else {
                layout.draw_glyph(matrix_char_for_cell(*c), *c, MATRIX_BODY);
            }
        }

        self.draw_hud(snap);

        match snap.state {
            GameState::Start => draw_overlay(
                "SNAKE",
                &[
                    "Enter / Space / tap: Start",
                    "Arrows / WASD / swipe: Steer",
                    "P: Pause  M: Mute  Q: Quit",
                ],
            ),
            GameState::Paused => draw_overlay("PAUSED", &["P: Resume"]),
            GameState::GameOver => {
                let final_score = format!("Final score: {}", snap.score);
                draw_overlay(
                    "GAME OVER",
                    &[final_score.as_str(), "Enter / tap: Play again", "Esc: Menu  Q: Quit"],
                )
            }
            GameState::Playing => {}
        }
    }

    fn draw_hud(&self, snap: &Snapshot) {
        draw_text(&format!("Score: {}", snap.score), 8.0, 22.0, 24.0, MATRIX_BODY);

        let best = format!("Best: {}", snap.high_score);
        let m = measure_text(&best, None, 24, 1.0);
        draw_text(&best, screen_width() - m.width - 8.0, 22.0, 24.0, MATRIX_BODY);

        if snap.muted {
            let m = measure_text("MUTED", None, 18, 1.0);
            draw_text("MUTED", (screen_width() - m.width) * 0.5, 20.0, 18.0, MATRIX_WALL);
        }
    }
}

fn draw_overlay(title: &str, lines: &[&str]) {
    let sw = screen_width();
    let sh = screen_height();
    draw_rectangle(0.0, 0.0, sw, sh, OVERLAY);

    let t = measure_text(title, None, 40, 1.0);
    let mut y = sh * 0.4;
    draw_text(title, (sw - t.width) * 0.5, y, 40.0, MATRIX_HEAD);
    y += 44.0;

    for line in lines {
        let m = measure_text(line, None, 20, 1.0);
        draw_text(line, (sw - m.width) * 0.5, y, 20.0, WHITE);
        y += 26.0;
    }
}
