//! Die implementations.

use std::collections::VecDeque;

use crate::core::{GameRng, DIE_FACES};

/// A six-sided die.
pub trait Die {
    /// Roll once. Always in `1..=6`.
    fn roll(&mut self) -> u8;
}

/// Uniformly random die backed by a seedable RNG.
#[derive(Clone, Debug)]
pub struct RandomDie {
    rng: GameRng,
}

impl RandomDie {
    /// Create a die over an existing RNG.
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a die with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Create a die seeded from entropy.
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// The seed behind this die's rolls.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Die for RandomDie {
    fn roll(&mut self) -> u8 {
        self.rng.roll_die()
    }
}

/// Die that replays a fixed sequence of rolls, cycling when it runs out.
///
/// ```
/// use pig_dice::dice::{Die, ScriptedDie};
///
/// let mut die = ScriptedDie::new([3, 4, 1]);
/// let rolls: Vec<_> = (0..4).map(|_| die.roll()).collect();
/// assert_eq!(rolls, vec![3, 4, 1, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDie {
    rolls: VecDeque<u8>,
}

impl ScriptedDie {
    /// Create a die from a non-empty sequence of faces.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        let rolls: VecDeque<u8> = rolls.into_iter().collect();
        assert!(!rolls.is_empty(), "Scripted die needs at least one roll");
        assert!(
            rolls.iter().all(|r| (1..=DIE_FACES).contains(r)),
            "Scripted rolls must be in 1..=6"
        );
        Self { rolls }
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> u8 {
        // Non-empty by construction
        let roll = self.rolls[0];
        self.rolls.rotate_left(1);
        roll
    }
}

impl<D: Die + ?Sized> Die for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}
