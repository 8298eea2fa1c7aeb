//! Game configuration types.
//!
//! The scoring rules are fixed constants. What a game may configure:
//! - which kind of player sits in each seat (`"human"` or `"computer"`)
//! - `GameMode`: first to the target, or first to the target within a time limit
//! - an optional seed for reproducible dice

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::Result;
use super::player::{PlayerId, PlayerPair};
use crate::players::PlayerKind;

/// Total score that wins a round.
pub const WIN_SCORE: u32 = 100;

/// Wall-clock limit of a timed round.
pub const TIME_LIMIT: Duration = Duration::from_secs(60);

/// Turn score at which the scripted player always holds.
///
/// Close to the point where the expected gain of another roll turns negative.
pub const SCRIPTED_HOLD_AT: u32 = 25;

/// How a round ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// First player to reach the target score wins.
    #[default]
    Standard,
    /// As `Standard`, but the highest score wins once the time limit passes.
    Timed,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player-type tag per seat, in turn order.
    pub players: [String; 2],

    /// Round termination rule.
    pub mode: GameMode,

    /// Die seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: ["human".to_string(), "human".to_string()],
            mode: GameMode::Standard,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config with the given seat tags.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            players: [first.into(), second.into()],
            ..Self::default()
        }
    }

    /// Set the tag for one seat.
    #[must_use]
    pub fn with_player(mut self, player: PlayerId, tag: impl Into<String>) -> Self {
        self.players[player.index()] = tag.into();
        self
    }

    /// Switch to the timed variant.
    #[must_use]
    pub fn timed(mut self) -> Self {
        self.mode = GameMode::Timed;
        self
    }

    /// Seed the die.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resolve both seat tags.
    ///
    /// Fails with `InvalidConfiguration` on the first unknown tag.
    pub fn validate(&self) -> Result<PlayerPair<PlayerKind>> {
        PlayerPair::try_new(|p| self.players[p.index()].parse())
    }
}
