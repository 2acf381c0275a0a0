//! Menu layout as a pure function of the screen size
//!
//! Recomputed every frame, so a resize or fullscreen switch needs no extra
//! bookkeeping.

use glam::Vec2;

use crate::sim::Rect;

/// Button height for START/RESTART
const BUTTON_HEIGHT: f32 = 48.0;
const FULLSCREEN_BUTTON_HEIGHT: f32 = 40.0;
/// Buttons span this fraction of the screen width, centered
const BUTTON_WIDTH_FRACTION: f32 = 0.6;

/// Spacing between highscore rows on the game-over screen
pub const SCORE_ROW_SPACING: f32 = 18.0;
/// Offset from the "TOP 3" heading to the first row
pub const SCORE_ROW_OFFSET: f32 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    /// Baseline of the screen title
    pub title_y: f32,
    /// Baseline of the "SCORE n" line
    pub score_y: f32,
    /// Baseline of the "TOP 3" heading
    pub scores_y: f32,
    pub start: Rect,
    pub restart: Rect,
    pub fullscreen: Rect,
}

impl MenuLayout {
    pub fn for_screen(screen: Vec2) -> Self {
        let (width, height) = (screen.x, screen.y);
        let button_width = width * BUTTON_WIDTH_FRACTION;
        let button_x = width * 0.5 - button_width / 2.0;
        let title_y = height * 0.25;

        Self {
            title_y,
            score_y: title_y + 40.0,
            scores_y: title_y + 80.0,
            start: Rect::new(button_x, height * 0.55, button_width, BUTTON_HEIGHT),
            restart: Rect::new(button_x, height * 0.6, button_width, BUTTON_HEIGHT),
            fullscreen: Rect::new(button_x, height * 0.7, button_width, FULLSCREEN_BUTTON_HEIGHT),
        }
    }

    /// Baseline of the `index`-th highscore row
    pub fn score_row_y(&self, index: usize) -> f32 {
        self.scores_y + SCORE_ROW_OFFSET + index as f32 * SCORE_ROW_SPACING
    }
}
