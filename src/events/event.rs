//! Observable game events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One observable thing that happened during play.
///
/// `Display` renders the single console line for the event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player's turn begins.
    TurnStarted { name: String },
    /// The die came up `roll`.
    Rolled { name: String, roll: u8 },
    /// A one was rolled; the turn score is lost.
    Busted { name: String },
    /// Running scores after a scoring roll.
    TurnScore { turn: u32, total: u32 },
    /// The player held and banked the turn score.
    Held { name: String, turn: u32, total: u32 },
    /// The player reached the target score.
    Won { name: String, score: u32 },
    /// The time limit ran out; the leader wins.
    TimeUp { name: String, score: u32 },
}

impl GameEvent {
    /// Whether this event ends a round.
    #[must_use]
    pub fn ends_round(&self) -> bool {
        matches!(self, GameEvent::Won { .. } | GameEvent::TimeUp { .. })
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::TurnStarted { name } => write!(f, "{name}'s turn:"),
            GameEvent::Rolled { name, roll } => write!(f, "{name} rolled a {roll}."),
            GameEvent::Busted { name } => {
                write!(f, "Sorry, {name}, you scored nothing this turn.")
            }
            GameEvent::TurnScore { turn, total } => {
                write!(f, "Current turn score: {turn}, Total score: {total}")
            }
            GameEvent::Held { name, turn, total } => write!(
                f,
                "{name} holds with a turn score of {turn}, total score: {total}."
            ),
            GameEvent::Won { name, score } => write!(f, "{name} wins with a score of {score}!"),
            GameEvent::TimeUp { name, score } => write!(
                f,
                "Time's up! {name} wins with the highest score of {score}!"
            ),
        }
    }
}
