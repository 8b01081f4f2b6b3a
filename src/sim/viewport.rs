//! Drawing-surface dimensions and the constants derived from them
//!
//! Gap height and obstacle width are computed from the current size on
//! every call rather than cached, so a resize can never leave them stale.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current drawing-surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Vertical opening of every obstacle
    #[inline]
    pub fn gap_height(&self, tuning: &Tuning) -> f32 {
        (self.height * tuning.gap_fraction).round()
    }

    /// Horizontal extent of every obstacle
    #[inline]
    pub fn obstacle_width(&self, tuning: &Tuning) -> f32 {
        (self.width * tuning.obstacle_width_fraction)
            .max(tuning.min_obstacle_width)
            .round()
    }

    /// Horizontal position of the body's center
    #[inline]
    pub fn body_x(&self, tuning: &Tuning) -> f32 {
        self.width * tuning.body_x_fraction
    }
}
