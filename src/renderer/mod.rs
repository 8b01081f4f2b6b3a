//! Rendering bridge
//!
//! The game never talks to a graphics API directly. It issues primitive draw
//! calls against a [`Surface`]: the browser build backs it with a Canvas 2D
//! context, tests and the native build with a [`RecordingSurface`].

pub mod colors;
pub mod recording;
pub mod scene;

use glam::Vec2;

pub use colors::Color;
pub use recording::{DrawCommand, RecordingSurface};

/// Horizontal anchoring of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// A 2D drawing target. Origin is top-left, y grows downward.
pub trait Surface {
    /// Erase the whole surface
    fn clear(&mut self);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Filled circle with an outline of the given width
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Color, stroke: Color, stroke_width: f32);

    fn draw_text(&mut self, text: &str, pos: Vec2, font_px: f32, color: Color, align: TextAlign);
}
