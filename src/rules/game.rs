//! The game loop: rounds of alternating turns between two players.

use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};
use super::policy::RoundPolicy;
use super::turn::{TurnEngine, TurnOutcome};
use crate::core::{GameConfig, PlayerId, PlayerPair, Result};
use crate::dice::{Die, RandomDie};
use crate::events::{EventSink, GameEvent};
use crate::players::{Player, PlayerFactory};
use crate::prompt::Prompt;

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEnd {
    /// The winner reached the target score.
    ReachedTarget,
    /// The time limit passed; the winner had the highest score.
    TimeUp,
}

/// Summary of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub winner: PlayerId,
    pub name: String,
    pub score: u32,
    pub end: RoundEnd,
    /// Turns played, both players combined.
    pub turns: u32,
    /// Final totals per seat.
    pub scores: PlayerPair<u32>,
}

/// Owns two players and a die and runs rounds between them.
pub struct Game<D = RandomDie, C = SystemClock> {
    players: PlayerPair<Player>,
    die: D,
    current: PlayerId,
    policy: RoundPolicy,
    clock: C,
}

impl Game<RandomDie, SystemClock> {
    /// Build a game from configuration.
    ///
    /// Both player tags are resolved before anything else is created, so an
    /// unknown tag fails here with `InvalidConfiguration`.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let kinds = config.validate()?;
        let players = PlayerPair::new(|p| PlayerFactory::build(kinds[p], p.to_string()));
        let die = match config.seed {
            Some(seed) => RandomDie::seeded(seed),
            None => RandomDie::from_entropy(),
        };
        log::info!(
            "{} vs {} ({:?}), die seed {}",
            kinds[PlayerId::FIRST],
            kinds[PlayerId::SECOND],
            config.mode,
            die.seed()
        );
        Ok(Self::new(players, die, RoundPolicy::for_mode(config.mode)))
    }
}

impl<D: Die> Game<D, SystemClock> {
    pub fn new(players: PlayerPair<Player>, die: D, policy: RoundPolicy) -> Self {
        Self {
            players,
            die,
            current: PlayerId::FIRST,
            policy,
            clock: SystemClock,
        }
    }
}

impl<D: Die, C: Clock> Game<D, C> {
    /// Replace the time source.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Game<D, C2> {
        Game {
            players: self.players,
            die: self.die,
            current: self.current,
            policy: self.policy,
            clock,
        }
    }

    #[must_use]
    pub fn players(&self) -> &PlayerPair<Player> {
        &self.players
    }

    #[must_use]
    pub fn policy(&self) -> RoundPolicy {
        self.policy
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Hand the turn to the other player.
    pub fn switch_player(&mut self) {
        self.current = self.current.other();
    }

    /// Play one turn for the current player. Does not rotate.
    pub fn play_turn(
        &mut self,
        prompt: &mut dyn Prompt,
        sink: &mut dyn EventSink,
    ) -> Result<TurnOutcome> {
        let player = &mut self.players[self.current];
        sink.emit(GameEvent::TurnStarted {
            name: player.name().to_string(),
        });
        TurnEngine::play_turn(player, &mut self.die, prompt, sink)
    }

    /// Play one round from zeroed scores to a declared winner.
    pub fn play_round(
        &mut self,
        prompt: &mut dyn Prompt,
        sink: &mut dyn EventSink,
    ) -> Result<RoundResult> {
        for (_, player) in self.players.iter_mut() {
            player.reset();
        }
        self.current = PlayerId::FIRST;
        let start = self.clock.now();
        let mut turns = 0;

        while self.keep_going(start) {
            self.play_turn(prompt, sink)?;
            turns += 1;

            let player = self.current_player();
            if player.has_won() {
                sink.emit(GameEvent::Won {
                    name: player.name().to_string(),
                    score: player.total_score(),
                });
                return Ok(self.result(self.current, RoundEnd::ReachedTarget, turns));
            }

            self.switch_player();
        }

        let leader = self.leader();
        let player = &self.players[leader];
        sink.emit(GameEvent::TimeUp {
            name: player.name().to_string(),
            score: player.total_score(),
        });
        Ok(self.result(leader, RoundEnd::TimeUp, turns))
    }

    /// Play rounds until the prompt declines another one.
    ///
    /// Returns every finished round. Prompt faults abort immediately.
    pub fn play(
        &mut self,
        prompt: &mut dyn Prompt,
        sink: &mut dyn EventSink,
    ) -> Result<Vec<RoundResult>> {
        let mut results = Vec::new();
        loop {
            results.push(self.play_round(prompt, sink)?);
            if !prompt.play_again()? {
                break;
            }
        }
        Ok(results)
    }

    fn keep_going(&self, start: std::time::Instant) -> bool {
        let elapsed = self.clock.now().saturating_duration_since(start);
        self.policy.keep_going(elapsed, &self.players)
    }

    /// Strictly highest score; ties go to the earlier seat.
    fn leader(&self) -> PlayerId {
        let mut best = PlayerId::FIRST;
        for (id, player) in self.players.iter() {
            if player.total_score() > self.players[best].total_score() {
                best = id;
            }
        }
        best
    }

    fn result(&self, winner: PlayerId, end: RoundEnd, turns: u32) -> RoundResult {
        let player = &self.players[winner];
        log::info!(
            "{} wins with {} after {} turns ({:?})",
            player.name(),
            player.total_score(),
            turns,
            end
        );
        RoundResult {
            winner,
            name: player.name().to_string(),
            score: player.total_score(),
            end,
            turns,
            scores: PlayerPair::new(|p| self.players[p].total_score()),
        }
    }
}
