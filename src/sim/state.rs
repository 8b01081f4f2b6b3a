//! Game state and core simulation types
//!
//! A [`Session`] owns everything that lives for one run: the body, the
//! obstacles, the score and the RNG used for obstacle placement.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::viewport::Viewport;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active gameplay, ticks are being scheduled
    Playing,
    /// Run ended; only an activate signal leaves this phase
    GameOver,
}

/// The controlled body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center position; x only changes on resize
    pub pos: Vec2,
    /// Vertical velocity (positive is downward)
    pub vel: f32,
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: 0.0,
            radius,
        }
    }

    /// Advance one tick under gravity. Velocity is not clamped.
    #[inline]
    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.pos.y += self.vel;
    }

    /// Instantaneous upward impulse: velocity is replaced, not added to
    #[inline]
    pub fn flap(&mut self, flap_velocity: f32) {
        self.vel = flap_velocity;
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// A top/bottom barrier pair with a passable gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Offset of the top of the gap from y = 0
    pub gap_top: f32,
    /// Set once the trailing edge has moved past the body's center
    pub passed: bool,
}

impl Obstacle {
    pub fn new(id: u32, x: f32, gap_top: f32) -> Self {
        Self {
            id,
            x,
            gap_top,
            passed: false,
        }
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }

    #[inline]
    pub fn gap_bottom(&self, gap: f32) -> f32 {
        self.gap_top + gap
    }
}

/// Score counter plus the enlarged-text countdown that follows each point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub value: u64,
    /// Frames left to draw the score enlarged
    pub emphasis_ticks: u32,
}

impl ScoreBoard {
    /// Add one point and (re)start the emphasis window
    pub fn award(&mut self, emphasis_ticks: u32) {
        self.value += 1;
        self.emphasis_ticks = emphasis_ticks;
    }

    /// Consume one emphasized frame; returns whether this frame is emphasized
    pub fn take_emphasis_frame(&mut self) -> bool {
        if self.emphasis_ticks > 0 {
            self.emphasis_ticks -= 1;
            true
        } else {
            false
        }
    }
}

/// Everything about a session except the RNG, for comparison and reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub tick: u64,
    pub score: ScoreBoard,
    pub body: Body,
    pub obstacles: Vec<Obstacle>,
    pub viewport: Viewport,
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the obstacle RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: Phase,
    /// Completed ticks since start/restart
    pub tick: u64,
    pub score: ScoreBoard,
    pub body: Body,
    /// Active obstacles, oldest (leftmost) first
    pub obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl Session {
    /// Create a fresh session on a viewport of the given size
    pub fn new(seed: u64, tuning: Tuning, width: u32, height: u32) -> Self {
        let viewport = Viewport::new(width, height);
        let body = Body::new(default_body_pos(&viewport, &tuning), tuning.body_radius);

        log::info!(
            "Session started: seed={} viewport={}x{}",
            seed,
            width,
            height
        );

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            viewport,
            phase: Phase::Playing,
            tick: 0,
            score: ScoreBoard::default(),
            body,
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Gap height for the current viewport
    #[inline]
    pub fn gap_height(&self) -> f32 {
        self.viewport.gap_height(&self.tuning)
    }

    /// Obstacle width for the current viewport
    #[inline]
    pub fn obstacle_width(&self) -> f32 {
        self.viewport.obstacle_width(&self.tuning)
    }

    /// Apply the upward impulse to the body
    pub fn flap(&mut self) {
        self.body.flap(self.tuning.flap_velocity);
    }

    /// Reset to the state of a freshly created session on the current viewport.
    ///
    /// The RNG keeps running so the next round gets a different course.
    pub fn restart(&mut self) {
        self.obstacles.clear();
        self.score = ScoreBoard::default();
        self.tick = 0;
        self.phase = Phase::Playing;
        self.body = Body::new(
            default_body_pos(&self.viewport, &self.tuning),
            self.tuning.body_radius,
        );
        log::info!("Session restarted");
    }

    /// Track a new drawing-surface size.
    ///
    /// The body keeps its proportional height (clamped to stay fully on
    /// screen with a small margin) and moves to the configured fraction of
    /// the new width. The clamp runs on every call, including a resize to
    /// the current size.
    pub fn resize(&mut self, width: u32, height: u32) {
        let next = Viewport::new(width, height);

        let prev_height = self.viewport.height;
        // same height keeps y as is so repeated calls cannot drift
        let scaled = if prev_height == next.height && prev_height > 0.0 {
            self.body.pos.y
        } else if prev_height > 0.0 {
            self.body.pos.y / prev_height * next.height
        } else {
            0.5 * next.height
        };

        let r = self.body.radius;
        let margin = self.tuning.body_edge_margin;
        // min/max rather than clamp: on a very short viewport the bounds cross
        // and the top bound wins
        let y = scaled
            .min(next.height - r - margin)
            .max(r + margin);

        self.viewport = next;
        self.body.pos = Vec2::new(next.body_x(&self.tuning), y);

        log::debug!(
            "Resized to {}x{} (gap={}, obstacle width={})",
            width,
            height,
            self.gap_height(),
            self.obstacle_width()
        );
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            tick: self.tick,
            score: self.score.clone(),
            body: self.body.clone(),
            obstacles: self.obstacles.clone(),
            viewport: self.viewport,
        }
    }
}

/// Starting position: configured fraction of the width, vertically centered
fn default_body_pos(viewport: &Viewport, tuning: &Tuning) -> Vec2 {
    Vec2::new(viewport.body_x(tuning), viewport.height / 2.0)
}
