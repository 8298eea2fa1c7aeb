//! Dice for the turn engine.
//!
//! The turn engine rolls through the `Die` trait so the random source can be
//! swapped out:
//! - `RandomDie`: uniform rolls from a seedable `GameRng`
//! - `ScriptedDie`: a fixed roll sequence for tests and replays

mod die;

pub use die::{Die, RandomDie, ScriptedDie};
