//! Colors for game elements

/// Linear RGBA, each channel in 0..=1
pub type Color = [f32; 4];

pub const OBSTACLE: Color = [0.0, 0.5, 0.0, 1.0];
pub const BODY_FILL: Color = [0.0, 0.0, 0.0, 1.0];
pub const BODY_STROKE: Color = [0.54, 0.03, 0.03, 1.0];
pub const SCORE_TEXT: Color = [0.0, 0.0, 0.0, 1.0];
pub const OVERLAY: Color = [0.0, 0.0, 0.0, 0.6];
pub const OVERLAY_TEXT: Color = [1.0, 1.0, 1.0, 1.0];

/// CSS `rgba()` string for a color
pub fn to_css(color: Color) -> String {
    let [r, g, b, a] = color;
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({},{},{},{})",
        channel(r),
        channel(g),
        channel(b),
        a.clamp(0.0, 1.0)
    )
}
