//! Canvas 2D drawing surface

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::GameError;
use crate::renderer::colors::to_css;
use crate::renderer::{Color, Surface, TextAlign};

pub struct Canvas2d {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, GameError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GameError::Platform(format!("getContext failed: {e:?}")))?
            .ok_or_else(|| GameError::Platform("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::Platform("2d context has unexpected type".into()))?;
        Ok(Self { canvas, ctx })
    }

    /// Resize the backing store; this also clears the canvas
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for Canvas2d {
    fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ctx.set_fill_style_str(&to_css(color));
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Color, stroke: Color, stroke_width: f32) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(&to_css(fill));
        self.ctx.fill();
        self.ctx.set_stroke_style_str(&to_css(stroke));
        self.ctx.set_line_width(stroke_width as f64);
        self.ctx.stroke();
        self.ctx.close_path();
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font_px: f32, color: Color, align: TextAlign) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&to_css(color));
        self.ctx.set_font(&format!("{}px Arial", font_px));
        self.ctx.set_text_align(align.as_str());
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
        self.ctx.restore();
    }
}
