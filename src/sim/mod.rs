//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod scoring;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod viewport;

pub use collision::{detect_collision, hits_boundary, hits_obstacle};
pub use scoring::update_score;
pub use spawner::{advance_obstacles, choose_gap_top, prune_offscreen, spawn_if_due};
pub use state::{Body, Obstacle, Phase, ScoreBoard, Session, Snapshot};
pub use tick::{TickOutcome, advance, settle};
pub use viewport::Viewport;
