//! A surface that records draw calls instead of rasterizing them

use glam::Vec2;

use super::{Color, Surface, TextAlign};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
        stroke: Color,
        stroke_width: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        font_px: f32,
        color: Color,
        align: TextAlign,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything recorded so far, leaving the log empty
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded text draws, in order
    pub fn texts(&self) -> impl Iterator<Item = (&str, f32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, font_px, .. } => Some((text.as_str(), *font_px)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Color, stroke: Color, stroke_width: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
            stroke_width,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font_px: f32, color: Color, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font_px,
            color,
            align,
        });
    }
}
