//! Software rasterization of the menu and gameplay screens.
//!
//! Everything on screen is a filled rectangle: paddles, ball, the dashed
//! center line, and all text via the glyph tables.

use glam::Vec2;
use glyph_core::Aabb;

use crate::game::LocalGame;
use crate::menu::{MenuState, MENU_ITEMS};

pub const BLACK: u32 = 0x0000_0000;
pub const WHITE: u32 = 0x00FF_FFFF;
pub const GREEN: u32 = 0x0000_FF00;

/// One frame's backbuffer, row-major 0x00RRGGBB
pub struct Frame<'a> {
    pub data: &'a mut [u32],
    pub width: usize,
    pub height: usize,
}

impl Frame<'_> {
    pub fn clear(&mut self, color: u32) {
        self.data.fill(color);
    }

    /// Fill a rectangle, clipped to the buffer bounds
    pub fn fill_rect(&mut self, rect: &Aabb, color: u32) {
        let x0 = rect.min.x.max(0.0) as usize;
        let y0 = rect.min.y.max(0.0) as usize;
        let x1 = rect.max.x.clamp(0.0, self.width as f32) as usize;
        let y1 = rect.max.y.clamp(0.0, self.height as f32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            let row_start = y * self.width;
            self.data[row_start + x0..row_start + x1].fill(color);
        }
    }

    pub fn fill_rects(&mut self, rects: &[Aabb], color: u32) {
        for rect in rects {
            self.fill_rect(rect, color);
        }
    }

    pub fn draw_text(&mut self, text: &str, origin: Vec2, size: f32, spacing: f32, color: u32) {
        let mut rects = Vec::new();
        glyph_core::text_rects(text, origin, size, spacing, &mut rects);
        self.fill_rects(&rects, color);
    }

    pub fn draw_number(&mut self, value: u32, origin: Vec2, size: f32, spacing: f32, color: u32) {
        let mut rects = Vec::new();
        glyph_core::number_rects(value, origin, size, spacing, &mut rects);
        self.fill_rects(&rects, color);
    }
}

/// Menu screen: title, items behind a cursor, key hints
pub fn draw_menu(frame: &mut Frame, menu: &MenuState) {
    frame.clear(BLACK);
    let w = frame.width as f32;
    let h = frame.height as f32;

    frame.draw_text("JLPONG", Vec2::new(w / 2.0 - 120.0, 80.0), 40.0, 5.0, GREEN);

    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let cursor = if i == menu.selected() { "> " } else { "  " };
        let line = format!("{cursor}{item}");
        frame.draw_text(
            &line,
            Vec2::new(w / 2.0 - 80.0, 200.0 + i as f32 * 60.0),
            30.0,
            5.0,
            WHITE,
        );
    }

    frame.draw_text(
        "USE UP/DOWN ARROWS TO SELECT",
        Vec2::new(w / 2.0 - 230.0, h - 100.0),
        15.0,
        2.0,
        WHITE,
    );
    frame.draw_text(
        "PRESS ENTER TO CONFIRM",
        Vec2::new(w / 2.0 - 160.0, h - 70.0),
        15.0,
        2.0,
        WHITE,
    );
}

/// Gameplay screen: dashed center line, paddles, ball, scores, key hints
pub fn draw_gameplay(frame: &mut Frame, game: &LocalGame) {
    frame.clear(BLACK);
    let config = &game.config;
    let w = frame.width as f32;
    let h = frame.height as f32;

    let mut y = 0.0;
    while y < h {
        frame.fill_rect(
            &Aabb::from_origin_size(Vec2::new(w / 2.0 - 1.0, y), Vec2::new(2.0, 10.0)),
            WHITE,
        );
        y += 20.0;
    }

    for player_id in [0u8, 1u8] {
        let rect = Aabb::from_origin_size(
            Vec2::new(config.paddle_x(player_id), game.paddle_y(player_id)),
            Vec2::new(config.paddle_width, config.paddle_height),
        );
        frame.fill_rect(&rect, WHITE);
    }

    let (ball_pos, _vel) = game.ball();
    frame.fill_rect(
        &Aabb::from_origin_size(ball_pos, Vec2::splat(config.ball_size)),
        WHITE,
    );

    let digit_size = 30.0;
    let spacing = 5.0;
    frame.draw_number(
        game.score.left,
        Vec2::new(w / 4.0 - digit_size, 200.0),
        digit_size,
        spacing,
        WHITE,
    );
    frame.draw_number(
        game.score.right,
        Vec2::new(w * 3.0 / 4.0 - digit_size, 200.0),
        digit_size,
        spacing,
        WHITE,
    );

    frame.draw_text(
        "ESC TO RETURN TO MENU",
        Vec2::new(w / 2.0 - 160.0, h - 60.0),
        15.0,
        2.0,
        WHITE,
    );
    frame.draw_text(
        "PRESS SPACE TO RESET SCORE",
        Vec2::new(w / 2.0 - 190.0, h - 30.0),
        15.0,
        2.0,
        WHITE,
    );
}
