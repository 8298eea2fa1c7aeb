//! Prompt that replays queued answers.

use std::collections::VecDeque;

use super::Prompt;
use crate::core::{GameError, Result};
use crate::players::Player;

/// Answers questions from two queues.
///
/// Running out of answers is an input fault, just like a closed terminal.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompt {
    decisions: VecDeque<bool>,
    replays: VecDeque<bool>,
    asked: Vec<u32>,
}

impl ScriptedPrompt {
    /// Queue roll decisions and replay answers, consumed in order.
    pub fn new(
        decisions: impl IntoIterator<Item = bool>,
        replays: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            replays: replays.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Turn scores at which a roll decision was requested.
    #[must_use]
    pub fn asked(&self) -> &[u32] {
        &self.asked
    }

    /// Roll decisions not yet consumed.
    #[must_use]
    pub fn remaining_decisions(&self) -> usize {
        self.decisions.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn keep_rolling(&mut self, _player: &Player, turn_score: u32) -> Result<bool> {
        self.asked.push(turn_score);
        self.decisions
            .pop_front()
            .ok_or(GameError::InputClosed("roll decision"))
    }

    fn play_again(&mut self) -> Result<bool> {
        self.replays
            .pop_front()
            .ok_or(GameError::InputClosed("replay answer"))
    }
}
