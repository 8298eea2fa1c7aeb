//! Players and their hold-or-roll strategies.

use serde::{Deserialize, Serialize};

use crate::core::{Result, SCRIPTED_HOLD_AT, WIN_SCORE};
use crate::prompt::Prompt;

/// How a player decides whether to keep rolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Ask the prompt collaborator.
    Interactive,
    /// Roll until the turn score reaches `min(25, 100 - total)`.
    Scripted,
}

/// A seated player: identity, banked score and strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    total_score: u32,
    strategy: Strategy,
}

impl Player {
    /// Create a player with a zero score.
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
            strategy,
        }
    }

    /// Create an interactive player.
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, Strategy::Interactive)
    }

    /// Create a scripted player.
    pub fn computer(name: impl Into<String>) -> Self {
        Self::new(name, Strategy::Scripted)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Whether this player has reached the winning score.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.total_score >= WIN_SCORE
    }

    /// Add held points to the banked total.
    pub fn bank(&mut self, points: u32) {
        self.total_score += points;
    }

    /// Zero the banked total for a new round.
    pub fn reset(&mut self) {
        self.total_score = 0;
    }

    /// Turn score at which the scripted strategy holds.
    ///
    /// Shrinks below the cap as the player closes in on the target.
    #[must_use]
    pub fn hold_threshold(&self) -> u32 {
        SCRIPTED_HOLD_AT.min(WIN_SCORE.saturating_sub(self.total_score))
    }

    /// Decide whether to roll again with `turn_score` points at risk.
    ///
    /// Only interactive players touch the prompt; its faults propagate.
    pub fn decide(&self, turn_score: u32, prompt: &mut dyn Prompt) -> Result<bool> {
        match self.strategy {
            Strategy::Interactive => prompt.keep_rolling(self, turn_score),
            Strategy::Scripted => Ok(turn_score < self.hold_threshold()),
        }
    }
}
