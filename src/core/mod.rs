//! Core types: seats, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, GameMode, SCRIPTED_HOLD_AT, TIME_LIMIT, WIN_SCORE};
pub use error::{GameError, Result};
pub use player::{PlayerId, PlayerPair, SEATS};
pub use rng::{GameRng, DIE_FACES};
