//! Round termination policies.
//!
//! A round keeps going while its policy says so. Both policies stop once any
//! player reaches the target; the timed policy also stops when the limit
//! has passed. The check runs only between turns, so a turn in progress
//! always finishes.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{GameMode, PlayerPair, TIME_LIMIT};
use crate::players::Player;

/// When a round should stop starting new turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPolicy {
    /// Play until someone reaches the target score.
    #[default]
    Standard,
    /// As `Standard`, and also stop once `limit` has elapsed.
    Timed { limit: Duration },
}

impl RoundPolicy {
    /// Timed policy with the fixed round limit.
    #[must_use]
    pub const fn timed() -> Self {
        RoundPolicy::Timed { limit: TIME_LIMIT }
    }

    /// Policy for a configured game mode.
    #[must_use]
    pub const fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Standard => RoundPolicy::Standard,
            GameMode::Timed => Self::timed(),
        }
    }

    /// Time limit, if any.
    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        match self {
            RoundPolicy::Standard => None,
            RoundPolicy::Timed { limit } => Some(*limit),
        }
    }

    /// Whether another turn should start.
    #[must_use]
    pub fn keep_going(&self, elapsed: Duration, players: &PlayerPair<Player>) -> bool {
        let below_target = players.values().all(|p| !p.has_won());
        match self {
            RoundPolicy::Standard => below_target,
            RoundPolicy::Timed { limit } => below_target && elapsed < *limit,
        }
    }
}
