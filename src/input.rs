//! Input translation
//!
//! Keyboard, pointer and touch events all collapse into a single activate
//! signal, which the loop routes by phase (flap while playing, restart after
//! game over). Signals are applied at receipt, never queued.

use crate::game::{Activation, GameLoop};

/// Raw input, reduced to what the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent<'a> {
    /// Key press, identified by its physical key code (`KeyboardEvent.code`)
    Key(&'a str),
    PointerDown,
    TouchStart,
}

/// What an input event asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Activate,
    ToggleIdle,
}

/// Map a raw event to a command; `None` means the event is not handled and
/// its default host behavior should be left alone
pub fn translate(event: InputEvent<'_>) -> Option<Command> {
    match event {
        InputEvent::Key("Space" | "ArrowUp") => Some(Command::Activate),
        InputEvent::Key("KeyI") => Some(Command::ToggleIdle),
        InputEvent::Key(_) => None,
        InputEvent::PointerDown | InputEvent::TouchStart => Some(Command::Activate),
    }
}

/// Apply a command to the game immediately
pub fn dispatch(game: &mut GameLoop, command: Command) -> Option<Activation> {
    match command {
        Command::Activate => Some(game.activate()),
        Command::ToggleIdle => {
            game.toggle_idle_mode();
            None
        }
    }
}
