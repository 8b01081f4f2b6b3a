//! Simulation tick
//!
//! A tick is split into two halves so the loop driver can draw in between:
//! [`advance`] moves the world (spawn, scroll, gravity), [`settle`] prunes
//! and checks for collision once the frame has been drawn and scored.

use super::spawner::{advance_obstacles, prune_offscreen, spawn_if_due};
use super::state::{Phase, Session};

/// How a tick ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No collision; the tick counter advanced
    Continue,
    /// Collision this tick; the session is now in `GameOver`
    Collided,
}

/// First half of a tick: spawn, scroll obstacles, integrate the body
pub fn advance(state: &mut Session) {
    if state.phase != Phase::Playing {
        return;
    }

    spawn_if_due(state);
    advance_obstacles(state);
    state.body.integrate(state.tuning.gravity);
}

/// Second half of a tick: prune off-screen obstacles, then collision check.
///
/// A collision switches the session to `GameOver` and leaves the tick
/// counter where it was.
pub fn settle(state: &mut Session) -> TickOutcome {
    if state.phase != Phase::Playing {
        return TickOutcome::Collided;
    }

    prune_offscreen(state);

    if state.collides() {
        state.phase = Phase::GameOver;
        log::info!(
            "Game over at tick {} with score {}",
            state.tick,
            state.score.value
        );
        return TickOutcome::Collided;
    }

    state.tick += 1;
    TickOutcome::Continue
}
