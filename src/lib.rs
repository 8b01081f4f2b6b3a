//! Flappy Orb - a side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Simulation (body physics, obstacle spawning, collisions, scoring)
//! - `renderer`: Draw-call bridge onto an abstract 2D surface
//! - `game`: Loop driver and playing/game-over state machine
//! - `input`: Collapses keyboard/pointer/touch into a single activate signal
//! - `platform`: Browser Canvas 2D surface
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::{Activation, GameLoop, LoopControl};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied to the body every tick (units/tick²)
    pub const GRAVITY: f32 = 0.4;
    /// Vertical velocity the body is set to on activate (upward impulse)
    pub const FLAP_VELOCITY: f32 = -8.0;

    /// Leftward obstacle speed (units/tick)
    pub const OBSTACLE_SPEED: f32 = 1.8;
    /// Ticks between obstacle spawns (bigger => more horizontal distance)
    pub const SPAWN_INTERVAL: u64 = 170;
    /// Minimum distance between the gap and the top/bottom viewport edges
    pub const SPAWN_MARGIN: f32 = 100.0;

    /// Gap height as a fraction of viewport height
    pub const GAP_FRACTION: f32 = 0.32;
    /// Obstacles are never narrower than this
    pub const MIN_OBSTACLE_WIDTH: f32 = 50.0;
    /// Obstacle width as a fraction of viewport width
    pub const OBSTACLE_WIDTH_FRACTION: f32 = 0.06;

    /// Body defaults
    pub const BODY_RADIUS: f32 = 25.0;
    /// Clearance kept between the body and the viewport edges on resize
    pub const BODY_EDGE_MARGIN: f32 = 5.0;
    /// Body horizontal position as a fraction of viewport width
    pub const BODY_X_FRACTION: f32 = 1.0 / 6.0;

    /// Frames the score is drawn enlarged after a scoring event
    pub const SCORE_EMPHASIS_TICKS: u32 = 12;
}
