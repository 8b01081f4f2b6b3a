//! Errors for the fallible edges of the game (tuning input, browser setup)
//!
//! The simulation itself is total; nothing in `sim` returns an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("platform setup failed: {0}")]
    Platform(String),
}
