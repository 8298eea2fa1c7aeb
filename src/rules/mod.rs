//! Game rules: turn resolution, round policies and the game loop.
//!
//! - `turn`: one player's turn as a Rolling/Busted/Held state machine
//! - `policy`: when a round stops starting new turns (standard or timed)
//! - `clock`: monotonic time source, swappable for tests
//! - `game`: owns both players and the die, alternates turns, runs rounds

pub mod clock;
pub mod game;
pub mod policy;
pub mod turn;

pub use clock::{Clock, ManualClock, SystemClock};
pub use game::{Game, RoundEnd, RoundResult};
pub use policy::RoundPolicy;
pub use turn::{Rolls, TurnEngine, TurnOutcome, TurnPhase, TurnState, BUST_FACE};
