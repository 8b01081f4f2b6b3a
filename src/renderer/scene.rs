//! Draw calls for each part of a frame

use glam::Vec2;

use super::colors;
use super::{Surface, TextAlign};
use crate::sim::{Body, Obstacle, ScoreBoard, Session, Viewport};

pub const SCORE_POS: Vec2 = Vec2::new(20.0, 40.0);
pub const SCORE_FONT_PX: f32 = 28.0;
pub const SCORE_EMPHASIS_FONT_PX: f32 = 34.0;
pub const BODY_STROKE_WIDTH: f32 = 2.0;

pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const GAME_OVER_FONT_PX: f32 = 60.0;
pub const RESTART_HINT_TEXT: &str = "Tap / Click / Press Space to Restart";
pub const RESTART_HINT_FONT_PX: f32 = 24.0;

/// Clear, then draw obstacles and the body
pub fn draw_world<S: Surface + ?Sized>(surface: &mut S, state: &Session) {
    surface.clear();
    draw_obstacles(surface, &state.obstacles, &state.viewport, state.obstacle_width(), state.gap_height());
    draw_body(surface, &state.body);
}

/// Each obstacle is a top segment down to the gap and a bottom segment from
/// the gap to the bottom edge
pub fn draw_obstacles<S: Surface + ?Sized>(
    surface: &mut S,
    obstacles: &[Obstacle],
    viewport: &Viewport,
    width: f32,
    gap: f32,
) {
    for o in obstacles {
        surface.fill_rect(o.x, 0.0, width, o.gap_top, colors::OBSTACLE);
        let bottom = o.gap_bottom(gap);
        surface.fill_rect(o.x, bottom, width, viewport.height - bottom, colors::OBSTACLE);
    }
}

pub fn draw_body<S: Surface + ?Sized>(surface: &mut S, body: &Body) {
    surface.fill_circle(
        body.pos,
        body.radius,
        colors::BODY_FILL,
        colors::BODY_STROKE,
        BODY_STROKE_WIDTH,
    );
}

/// Score text, enlarged while the emphasis window is open. Each call uses up
/// one frame of the window.
pub fn draw_score<S: Surface + ?Sized>(surface: &mut S, score: &mut ScoreBoard) {
    let font_px = if score.take_emphasis_frame() {
        SCORE_EMPHASIS_FONT_PX
    } else {
        SCORE_FONT_PX
    };
    surface.draw_text(
        &format!("Score: {}", score.value),
        SCORE_POS,
        font_px,
        colors::SCORE_TEXT,
        TextAlign::Left,
    );
}

/// Dimmed overlay with the game-over message and restart hint
pub fn draw_game_over<S: Surface + ?Sized>(surface: &mut S, viewport: &Viewport) {
    surface.fill_rect(0.0, 0.0, viewport.width, viewport.height, colors::OVERLAY);

    let center_x = viewport.width / 2.0;
    let center_y = viewport.height / 2.0;
    surface.draw_text(
        GAME_OVER_TEXT,
        Vec2::new(center_x, center_y - 20.0),
        GAME_OVER_FONT_PX,
        colors::OVERLAY_TEXT,
        TextAlign::Center,
    );
    surface.draw_text(
        RESTART_HINT_TEXT,
        Vec2::new(center_x, center_y + 30.0),
        RESTART_HINT_FONT_PX,
        colors::OVERLAY_TEXT,
        TextAlign::Center,
    );
}
