//! Scoring: one point per obstacle whose trailing edge clears the body's center

use super::state::Session;

/// Mark newly passed obstacles and award a point for each; returns points awarded.
///
/// `passed` only ever goes false -> true, so an obstacle scores at most once
/// no matter how many ticks it stays on screen.
pub fn update_score(state: &mut Session) -> u32 {
    let width = state.obstacle_width();
    let center_x = state.body.pos.x;
    let emphasis = state.tuning.score_emphasis_ticks;

    let mut awarded = 0;
    for obstacle in state.obstacles.iter_mut().filter(|o| !o.passed) {
        if obstacle.right(width) < center_x {
            obstacle.passed = true;
            state.score.award(emphasis);
            awarded += 1;
        }
    }

    if awarded > 0 {
        log::debug!("Score: {}", state.score.value);
    }
    awarded
}
