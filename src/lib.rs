//! # pig-dice
//!
//! A two-player Pig dice game engine.
//!
//! ## Rules
//!
//! On your turn you roll a die as many times as you like, adding each roll
//! to your turn score. Roll a one and the turn ends with nothing. Hold and
//! the turn score is banked. First to 100 banked points wins the round. In
//! the timed variant a round also ends after 60 seconds, and the highest
//! score wins.
//!
//! ## Design
//!
//! - **Injected randomness**: the die is a trait; `RandomDie` wraps a seedable
//!   ChaCha RNG and `ScriptedDie` replays fixed rolls.
//! - **Closed strategies**: a player is data plus one of two strategies,
//!   interactive or scripted.
//! - **Policies over subclasses**: the timed variant is a `RoundPolicy`, not
//!   a second game loop.
//! - **Exactly two players**: seats live in a `PlayerPair`.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `dice`: Random and scripted dice
//! - `players`: Players, strategies, the tag factory
//! - `prompt`: Console and scripted input
//! - `events`: Game narration
//! - `rules`: Turns, round policies, the game loop
//! - `cli`: Arguments and logging for the `pig` binary
//!
//! ## Example
//!
//! ```
//! use pig_dice::core::GameConfig;
//! use pig_dice::events::GameEvent;
//! use pig_dice::prompt::ScriptedPrompt;
//! use pig_dice::rules::Game;
//!
//! let config = GameConfig::new("computer", "computer").with_seed(7);
//! let mut game = Game::from_config(&config).unwrap();
//! let mut events: Vec<GameEvent> = Vec::new();
//!
//! let result = game.play_round(&mut ScriptedPrompt::default(), &mut events).unwrap();
//! assert!(result.score >= 100);
//! ```

pub mod cli;
pub mod core;
pub mod dice;
pub mod events;
pub mod players;
pub mod prompt;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameMode, GameRng, PlayerId, PlayerPair, Result, TIME_LIMIT, WIN_SCORE,
};

pub use crate::dice::{Die, RandomDie, ScriptedDie};

pub use crate::players::{Player, PlayerFactory, PlayerKind, Strategy};

pub use crate::prompt::{ConsolePrompt, Prompt, ScriptedPrompt};

pub use crate::events::{ConsoleSink, EventSink, GameEvent};

pub use crate::rules::{
    Clock, Game, ManualClock, RoundEnd, RoundPolicy, RoundResult, SystemClock, TurnEngine,
    TurnOutcome,
};
