//! Player construction from type tags.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::{Player, Strategy};
use crate::core::{GameError, Result};

/// Kind of player a seat holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Decides at the console.
    Human,
    /// Plays the scripted threshold strategy.
    Computer,
}

impl PlayerKind {
    /// The tag that selects this kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Computer => "computer",
        }
    }

    /// Strategy a player of this kind uses.
    #[must_use]
    pub const fn strategy(self) -> Strategy {
        match self {
            PlayerKind::Human => Strategy::Interactive,
            PlayerKind::Computer => Strategy::Scripted,
        }
    }
}

impl FromStr for PlayerKind {
    type Err = GameError;

    /// Tags are matched exactly: `"Human"` is not `"human"`.
    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            _ => Err(GameError::InvalidConfiguration {
                tag: tag.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Builds players from type tags.
pub struct PlayerFactory;

impl PlayerFactory {
    /// Create a player from a type tag.
    ///
    /// ```
    /// use pig_dice::players::PlayerFactory;
    ///
    /// assert!(PlayerFactory::create("computer", "Player 1").is_ok());
    /// assert!(PlayerFactory::create("robot", "Player 2").is_err());
    /// ```
    pub fn create(tag: &str, name: impl Into<String>) -> Result<Player> {
        let kind: PlayerKind = tag.parse()?;
        Ok(Self::build(kind, name))
    }

    /// Create a player of an already-resolved kind.
    pub fn build(kind: PlayerKind, name: impl Into<String>) -> Player {
        Player::new(name, kind.strategy())
    }
}
