//! Players, strategies and the tag-based factory.
//!
//! A `Player` is plain data plus a closed `Strategy`: interactive players
//! defer to a `Prompt`, scripted players apply the threshold rule.

pub mod factory;
pub mod player;

pub use factory::{PlayerFactory, PlayerKind};
pub use player::{Player, Strategy};
