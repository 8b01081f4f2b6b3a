//! Idle/demo mode: a simple pilot that keeps the body near the next gap

use super::state::Session;

/// Decide whether to flap before the next tick.
///
/// Aims a little below the center of the nearest gap that is not yet fully
/// behind the body (mid-screen when there is none) and flaps only once the
/// body has stopped rising and dropped under that line.
pub fn should_flap(state: &Session) -> bool {
    let body = &state.body;
    if body.vel < 0.0 {
        return false;
    }
    body.pos.y > aim_y(state)
}

/// Height the pilot tries to hover around
pub fn aim_y(state: &Session) -> f32 {
    let width = state.obstacle_width();
    let gap = state.gap_height();
    let body_left = state.body.left();

    state
        .obstacles
        .iter()
        .filter(|o| o.right(width) >= body_left)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
        .map(|o| o.gap_top + gap / 2.0 + gap / 6.0)
        .unwrap_or(state.viewport.height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use crate::tuning::Tuning;

    #[test]
    fn test_aims_at_nearest_gap_ahead() {
        let mut s = Session::new(1, Tuning::default(), 800, 600);
        assert_eq!(aim_y(&s), 300.0);

        // already behind the body: ignored
        s.obstacles.push(Obstacle::new(1, 0.0, 100.0));
        s.obstacles.push(Obstacle::new(2, 400.0, 200.0));
        s.obstacles.push(Obstacle::new(3, 700.0, 300.0));
        // 200 + 96 + 32
        assert_eq!(aim_y(&s), 328.0);
    }

    #[test]
    fn test_flaps_only_when_falling_below_aim() {
        let mut s = Session::new(1, Tuning::default(), 800, 600);
        s.body.pos.y = 320.0;
        s.body.vel = 2.0;
        assert!(should_flap(&s));

        s.body.vel = -1.0;
        assert!(!should_flap(&s));

        s.body.pos.y = 280.0;
        s.body.vel = 2.0;
        assert!(!should_flap(&s));
    }
}
