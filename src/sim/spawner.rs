//! Obstacle lifecycle: spawn on a fixed cadence, scroll left, prune off-screen

use rand::Rng;

use super::state::{Obstacle, Session};

/// Pick the top of a new gap.
///
/// Normally an integer offset drawn uniformly from
/// `[margin, height - gap - margin]`. When the viewport is too short for the
/// gap plus both margins, the gap is centered vertically instead (never
/// above y = 0).
pub fn choose_gap_top<R: Rng>(rng: &mut R, height: f32, gap: f32, margin: f32) -> f32 {
    let min_top = margin;
    let max_top = height - gap - margin;

    if max_top < min_top {
        let centered = ((height - gap) / 2.0).max(0.0);
        log::warn!(
            "Viewport height {} too short for gap {} with margin {}; centering gap at {}",
            height,
            gap,
            margin,
            centered
        );
        return centered;
    }

    let steps = (max_top - min_top).floor() as u32;
    min_top + rng.random_range(0..=steps) as f32
}

/// Spawn one obstacle at the right edge when the tick counter hits the cadence
pub fn spawn_if_due(state: &mut Session) -> Option<u32> {
    if state.tick % state.tuning.spawn_interval.max(1) != 0 {
        return None;
    }

    let gap = state.gap_height();
    let gap_top = choose_gap_top(
        &mut state.rng,
        state.viewport.height,
        gap,
        state.tuning.spawn_margin,
    );
    let id = state.next_entity_id();
    state
        .obstacles
        .push(Obstacle::new(id, state.viewport.width, gap_top));

    log::debug!("Spawned obstacle {} at tick {} (gap_top={})", id, state.tick, gap_top);
    Some(id)
}

/// Scroll every obstacle left by the configured speed
pub fn advance_obstacles(state: &mut Session) {
    let speed = state.tuning.obstacle_speed;
    for obstacle in &mut state.obstacles {
        obstacle.x -= speed;
    }
}

/// Drop obstacles whose trailing edge has left the viewport; returns how many
pub fn prune_offscreen(state: &mut Session) -> usize {
    let width = state.obstacle_width();
    let before = state.obstacles.len();
    state.obstacles.retain(|o| o.right(width) > 0.0);
    before - state.obstacles.len()
}
