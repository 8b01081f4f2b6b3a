//! Collision detection between the body, obstacles and the viewport bounds
//!
//! Everything here is a pure function of its arguments.

use super::state::{Body, Obstacle, Session};
use super::viewport::Viewport;

/// Body overlaps the obstacle horizontally and pokes out of its gap
pub fn hits_obstacle(body: &Body, obstacle: &Obstacle, width: f32, gap: f32) -> bool {
    let overlaps_x = body.right() > obstacle.x && body.left() < obstacle.right(width);
    let outside_gap = body.top() < obstacle.gap_top || body.bottom() > obstacle.gap_bottom(gap);
    overlaps_x && outside_gap
}

/// Body extends past the top or bottom edge of the viewport
pub fn hits_boundary(body: &Body, viewport: &Viewport) -> bool {
    body.top() < 0.0 || body.bottom() > viewport.height
}

/// Any lethal contact for the given geometry
pub fn detect_collision(
    body: &Body,
    obstacles: &[Obstacle],
    viewport: &Viewport,
    width: f32,
    gap: f32,
) -> bool {
    obstacles
        .iter()
        .any(|o| hits_obstacle(body, o, width, gap))
        || hits_boundary(body, viewport)
}

impl Session {
    /// Collision check against the session's current geometry
    pub fn collides(&self) -> bool {
        detect_collision(
            &self.body,
            &self.obstacles,
            &self.viewport,
            self.obstacle_width(),
            self.gap_height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const WIDTH: f32 = 50.0;
    const GAP: f32 = 192.0;

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), 25.0)
    }

    #[test]
    fn test_body_inside_gap_is_safe() {
        let obstacle = Obstacle::new(1, 100.0, 200.0);
        let body = body_at(133.0, 300.0);
        assert!(!hits_obstacle(&body, &obstacle, WIDTH, GAP));
    }

    #[test]
    fn test_body_clipping_top_segment() {
        let obstacle = Obstacle::new(1, 100.0, 200.0);
        // top edge at 199 is above the gap top
        assert!(hits_obstacle(&body_at(133.0, 224.0), &obstacle, WIDTH, GAP));
        assert!(!hits_obstacle(&body_at(133.0, 225.0), &obstacle, WIDTH, GAP));
    }

    #[test]
    fn test_body_clipping_bottom_segment() {
        let obstacle = Obstacle::new(1, 100.0, 200.0);
        // gap bottom is 392
        assert!(hits_obstacle(&body_at(133.0, 368.0), &obstacle, WIDTH, GAP));
        assert!(!hits_obstacle(&body_at(133.0, 367.0), &obstacle, WIDTH, GAP));
    }

    #[test]
    fn test_no_horizontal_overlap_is_safe() {
        // far above the gap but entirely left of the obstacle
        let obstacle = Obstacle::new(1, 300.0, 200.0);
        assert!(!hits_obstacle(&body_at(133.0, 50.0), &obstacle, WIDTH, GAP));
        // touching edges do not count as overlap
        let obstacle = Obstacle::new(1, 158.0, 200.0);
        assert!(!hits_obstacle(&body_at(133.0, 50.0), &obstacle, WIDTH, GAP));
        let obstacle = Obstacle::new(1, 57.0, 200.0);
        assert!(!hits_obstacle(&body_at(132.0, 50.0), &obstacle, WIDTH, GAP));
    }

    #[test]
    fn test_boundary() {
        let viewport = Viewport::new(800, 600);
        assert!(hits_boundary(&body_at(133.0, 0.0), &viewport));
        assert!(hits_boundary(&body_at(133.0, 24.9), &viewport));
        assert!(!hits_boundary(&body_at(133.0, 25.0), &viewport));
        assert!(!hits_boundary(&body_at(133.0, 575.0), &viewport));
        assert!(hits_boundary(&body_at(133.0, 575.5), &viewport));
    }

    #[test]
    fn test_detect_combines_obstacles_and_bounds() {
        let viewport = Viewport::new(800, 600);
        let obstacles = vec![
            Obstacle::new(1, 600.0, 100.0),
            Obstacle::new(2, 100.0, 200.0),
        ];
        assert!(!detect_collision(&body_at(133.0, 300.0), &obstacles, &viewport, WIDTH, GAP));
        assert!(detect_collision(&body_at(133.0, 210.0), &obstacles, &viewport, WIDTH, GAP));
        assert!(detect_collision(&body_at(400.0, 590.0), &[], &viewport, WIDTH, GAP));
    }

    proptest! {
        #[test]
        fn prop_detection_is_deterministic(
            y in -100.0f32..700.0,
            ox in -60.0f32..800.0,
            gap_top in 100.0f32..308.0,
        ) {
            let viewport = Viewport::new(800, 600);
            let body = body_at(133.0, y);
            let obstacles = vec![Obstacle::new(1, ox, gap_top)];
            let first = detect_collision(&body, &obstacles, &viewport, WIDTH, GAP);
            let second = detect_collision(&body.clone(), &obstacles.clone(), &viewport, WIDTH, GAP);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_fully_inside_gap_never_hits(ox in -60.0f32..800.0, offset in 0.0f32..142.0) {
            let obstacle = Obstacle::new(1, ox, 200.0);
            let body = body_at(133.0, 225.0 + offset);
            prop_assert!(!hits_obstacle(&body, &obstacle, WIDTH, GAP));
        }
    }
}
