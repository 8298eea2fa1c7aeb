//! Single-turn resolution.
//!
//! A turn is a small state machine:
//!
//! ```text
//! Rolling --roll 1--------------> Busted   (turn score lost)
//! Rolling --roll 2..6, hold-----> Held     (turn score banked)
//! Rolling --roll 2..6, continue-> Rolling
//! ```
//!
//! There is no cap on the number of rolls; every roll busts with
//! probability 1/6, so a turn ends with probability 1.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Result;
use crate::dice::Die;
use crate::events::{EventSink, GameEvent};
use crate::players::Player;
use crate::prompt::Prompt;

/// Face that ends a turn with nothing.
pub const BUST_FACE: u8 = 1;

/// Rolls made during one turn. Most turns fit inline.
pub type Rolls = SmallVec<[u8; 8]>;

/// Where a turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    Rolling,
    Busted,
    Held,
}

impl TurnPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, TurnPhase::Rolling)
    }
}

/// Unbanked state of the turn in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnState {
    turn_score: u32,
    rolls: Rolls,
    phase: TurnPhase,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            turn_score: 0,
            rolls: Rolls::new(),
            phase: TurnPhase::Rolling,
        }
    }

    #[must_use]
    pub fn turn_score(&self) -> u32 {
        self.turn_score
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Record a roll. A one busts; anything else adds to the turn score.
    pub fn apply_roll(&mut self, roll: u8) -> TurnPhase {
        debug_assert_eq!(self.phase, TurnPhase::Rolling, "roll after the turn ended");
        self.rolls.push(roll);
        if roll == BUST_FACE {
            self.phase = TurnPhase::Busted;
        } else {
            self.turn_score += u32::from(roll);
        }
        self.phase
    }

    /// Stop rolling and return the points to bank.
    pub fn hold(&mut self) -> u32 {
        debug_assert_eq!(self.phase, TurnPhase::Rolling, "hold after the turn ended");
        self.phase = TurnPhase::Held;
        self.turn_score
    }

    /// Consume a finished turn.
    ///
    /// `total` is the player's banked score after the turn.
    pub fn finish(self, total: u32) -> TurnOutcome {
        match self.phase {
            TurnPhase::Busted => TurnOutcome::Busted {
                forfeited: self.turn_score,
                rolls: self.rolls,
            },
            TurnPhase::Held => TurnOutcome::Held {
                banked: self.turn_score,
                total,
                rolls: self.rolls,
            },
            TurnPhase::Rolling => unreachable!("finish called on a turn still rolling"),
        }
    }
}

/// How a turn ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Rolled a one. `forfeited` points were lost.
    Busted { forfeited: u32, rolls: Rolls },
    /// Held and banked `banked` points, giving `total`.
    Held { banked: u32, total: u32, rolls: Rolls },
}

impl TurnOutcome {
    #[must_use]
    pub fn is_bust(&self) -> bool {
        matches!(self, TurnOutcome::Busted { .. })
    }

    /// Points added to the total by this turn.
    #[must_use]
    pub fn banked(&self) -> u32 {
        match self {
            TurnOutcome::Busted { .. } => 0,
            TurnOutcome::Held { banked, .. } => *banked,
        }
    }

    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        match self {
            TurnOutcome::Busted { rolls, .. } | TurnOutcome::Held { rolls, .. } => rolls,
        }
    }
}

/// Resolves turns.
pub struct TurnEngine;

impl TurnEngine {
    /// Play one turn for `player` to completion.
    ///
    /// Only the decision prompt can fail, and its error aborts the turn
    /// without banking anything.
    pub fn play_turn(
        player: &mut Player,
        die: &mut dyn Die,
        prompt: &mut dyn Prompt,
        sink: &mut dyn EventSink,
    ) -> Result<TurnOutcome> {
        let mut turn = TurnState::new();

        loop {
            let roll = die.roll();
            sink.emit(GameEvent::Rolled {
                name: player.name().to_string(),
                roll,
            });

            if turn.apply_roll(roll) == TurnPhase::Busted {
                log::debug!("{} busts, forfeiting {}", player.name(), turn.turn_score());
                sink.emit(GameEvent::Busted {
                    name: player.name().to_string(),
                });
                break;
            }

            sink.emit(GameEvent::TurnScore {
                turn: turn.turn_score(),
                total: player.total_score(),
            });

            if !player.decide(turn.turn_score(), prompt)? {
                player.bank(turn.hold());
                log::debug!("{} holds at {}", player.name(), turn.turn_score());
                sink.emit(GameEvent::Held {
                    name: player.name().to_string(),
                    turn: turn.turn_score(),
                    total: player.total_score(),
                });
                break;
            }
        }

        Ok(turn.finish(player.total_score()))
    }
}
