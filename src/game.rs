//! Loop driver and playing/game-over state machine
//!
//! The host owns the frame scheduler. It calls [`GameLoop::frame`] once per
//! display refresh and only requests another frame when the previous one
//! returned [`LoopControl::Continue`]. The `armed` flag mirrors whether a
//! next frame is wanted, so tests can step ticks without any scheduler.

use crate::renderer::{Surface, scene};
use crate::sim::{self, Phase, Session, TickOutcome, autopilot};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Schedule the next frame
    Continue,
    /// Stop scheduling until a restart re-arms the loop
    Halt,
}

/// Effect of an activate signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Upward impulse applied to the body
    Flapped,
    /// Session reset; the host should run a frame now and resume scheduling
    Restarted,
}

pub struct GameLoop {
    session: Session,
    armed: bool,
    idle_mode: bool,
}

impl GameLoop {
    pub fn new(session: Session) -> Self {
        let armed = session.phase == Phase::Playing;
        Self {
            session,
            armed,
            idle_mode: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Whether the loop wants another frame scheduled
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn idle_mode(&self) -> bool {
        self.idle_mode
    }

    pub fn set_idle_mode(&mut self, on: bool) {
        self.idle_mode = on;
    }

    pub fn toggle_idle_mode(&mut self) -> bool {
        self.idle_mode = !self.idle_mode;
        log::info!("Idle mode: {}", self.idle_mode);
        self.idle_mode
    }

    /// Run one tick and draw it.
    ///
    /// Order: spawn/scroll/gravity, draw obstacles and body, score, draw
    /// score, prune, collision check. On collision the game-over overlay is
    /// drawn once and the loop disarms. Does nothing while disarmed.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> LoopControl {
        if !self.armed {
            return LoopControl::Halt;
        }

        if self.idle_mode && autopilot::should_flap(&self.session) {
            self.session.flap();
        }

        sim::advance(&mut self.session);
        scene::draw_world(surface, &self.session);
        sim::update_score(&mut self.session);
        scene::draw_score(surface, &mut self.session.score);

        match sim::settle(&mut self.session) {
            TickOutcome::Continue => LoopControl::Continue,
            TickOutcome::Collided => {
                self.armed = false;
                scene::draw_game_over(surface, &self.session.viewport);
                LoopControl::Halt
            }
        }
    }

    /// Apply an activate signal immediately, whatever the tick phase
    pub fn activate(&mut self) -> Activation {
        match self.session.phase {
            Phase::Playing => {
                self.session.flap();
                Activation::Flapped
            }
            Phase::GameOver => {
                self.session.restart();
                self.armed = true;
                Activation::Restarted
            }
        }
    }

    /// Forward a drawing-surface resize to the session
    pub fn resize(&mut self, width: u32, height: u32) {
        self.session.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface, scene};
    use crate::tuning::Tuning;

    fn game() -> GameLoop {
        GameLoop::new(Session::new(42, Tuning::default(), 800, 600))
    }

    fn run_until_halt(game: &mut GameLoop, surface: &mut RecordingSurface) -> u32 {
        let mut frames = 0;
        while game.frame(surface) == LoopControl::Continue {
            frames += 1;
            assert!(frames < 10_000);
        }
        frames
    }

    #[test]
    fn test_starts_armed_and_playing() {
        let g = game();
        assert!(g.is_armed());
        assert_eq!(g.session().phase, Phase::Playing);
    }

    #[test]
    fn test_frame_draw_order() {
        let mut g = game();
        let mut surface = RecordingSurface::new();
        assert_eq!(g.frame(&mut surface), LoopControl::Continue);

        // clear, two obstacle segments, body, score
        assert_eq!(surface.commands.len(), 5);
        assert_eq!(surface.commands[0], DrawCommand::Clear);
        assert!(matches!(surface.commands[1], DrawCommand::Rect { .. }));
        assert!(matches!(surface.commands[2], DrawCommand::Rect { .. }));
        assert!(matches!(surface.commands[3], DrawCommand::Circle { .. }));
        assert!(matches!(surface.commands[4], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_collision_halts_and_draws_overlay_once() {
        let mut g = game();
        let mut surface = RecordingSurface::new();
        run_until_halt(&mut g, &mut surface);

        assert!(!g.is_armed());
        assert_eq!(g.session().phase, Phase::GameOver);
        let overlays = surface.texts().filter(|(t, _)| *t == scene::GAME_OVER_TEXT).count();
        assert_eq!(overlays, 1);

        // further frames are no-ops
        let drawn = surface.commands.len();
        let tick = g.session().tick;
        assert_eq!(g.frame(&mut surface), LoopControl::Halt);
        assert_eq!(g.frame(&mut surface), LoopControl::Halt);
        assert_eq!(surface.commands.len(), drawn);
        assert_eq!(g.session().tick, tick);
    }

    #[test]
    fn test_final_frame_shows_lethal_position() {
        let mut g = game();
        let mut surface = RecordingSurface::new();
        run_until_halt(&mut g, &mut surface);

        let last_circle = surface
            .commands
            .iter()
            .rev()
            .find_map(|c| match c {
                DrawCommand::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .unwrap();
        assert_eq!(last_circle, g.session().body.pos);
        assert!(g.session().body.bottom() > 600.0);
    }

    #[test]
    fn test_activate_flaps_while_playing() {
        let mut g = game();
        let mut surface = RecordingSurface::new();
        for _ in 0..10 {
            g.frame(&mut surface);
        }
        assert!(g.session().body.vel > 0.0);
        assert_eq!(g.activate(), Activation::Flapped);
        // applied immediately, not at the next tick
        assert_eq!(g.session().body.vel, -8.0);
        assert!(g.is_armed());
    }

    #[test]
    fn test_activate_restarts_after_game_over() {
        let mut g = game();
        let mut surface = RecordingSurface::new();
        run_until_halt(&mut g, &mut surface);

        assert_eq!(g.activate(), Activation::Restarted);
        assert!(g.is_armed());
        let s = g.session();
        assert_eq!(s.phase, Phase::Playing);
        assert_eq!(s.tick, 0);
        assert_eq!(s.score.value, 0);
        assert_eq!(s.body.vel, 0.0);
        assert_eq!(s.body.pos.y, 300.0);
        assert!(s.obstacles.is_empty());

        assert_eq!(g.frame(&mut surface), LoopControl::Continue);
        assert_eq!(g.session().tick, 1);
    }

    #[test]
    fn test_idle_mode_keeps_flying() {
        let mut g = game();
        g.set_idle_mode(true);
        let mut surface = RecordingSurface::new();
        for _ in 0..600 {
            assert_eq!(g.frame(&mut surface), LoopControl::Continue);
            surface.commands.clear();
        }
        assert!(g.session().score.value >= 1);
    }

    #[test]
    fn test_resize_forwards_to_session() {
        let mut g = game();
        g.resize(1200, 900);
        assert_eq!(g.session().viewport.width, 1200.0);
        assert_eq!(g.session().body.pos.y, 450.0);
    }
}
