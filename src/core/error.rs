//! Error types for game setup and external input.

use thiserror::Error;

/// Errors surfaced by the game.
///
/// Rolling and scoring cannot fail; every variant here comes from either
/// construction-time configuration or the prompt collaborator.
#[derive(Debug, Error)]
pub enum GameError {
    /// A player-type tag that names no known player.
    #[error("unknown player type {tag:?} (expected \"human\" or \"computer\")")]
    InvalidConfiguration { tag: String },

    /// The console prompt failed.
    #[error("input failed: {0}")]
    Input(#[from] dialoguer::Error),

    /// Reading or echoing a line of input failed.
    #[error("input failed: {0}")]
    Io(#[from] std::io::Error),

    /// A prompt had no answer left to give.
    #[error("input closed while waiting for: {0}")]
    InputClosed(&'static str),
}

impl GameError {
    /// Whether this error came from the prompt rather than from setup.
    #[must_use]
    pub fn is_input_fault(&self) -> bool {
        matches!(self, GameError::Input(_) | GameError::Io(_) | GameError::InputClosed(_))
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
