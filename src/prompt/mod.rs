//! The external input collaborator.
//!
//! The game only ever asks two questions: "roll again?" for interactive
//! players, and "play another round?" after each round. Both are blocking,
//! synchronous calls behind the `Prompt` trait.
//!
//! - `ConsolePrompt`: reads answers from a terminal or piped lines
//! - `ScriptedPrompt`: replays queued answers (tests, demos)

mod console;
mod scripted;

pub use console::{parse_replay_answer, parse_roll_answer, ConsolePrompt};
pub use scripted::ScriptedPrompt;

use crate::core::Result;
use crate::players::Player;

/// Source of player decisions and replay answers.
pub trait Prompt {
    /// Ask whether `player` rolls again with `turn_score` points at risk.
    fn keep_rolling(&mut self, player: &Player, turn_score: u32) -> Result<bool>;

    /// Ask whether to play another round.
    fn play_again(&mut self) -> Result<bool>;
}
