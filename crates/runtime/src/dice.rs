//! Dice sources for automation rolls.
//!
//! The engine never rolls on its own; a [`DiceSource`] is injected wherever a
//! 2d6 result is needed. [`RandomDice`] backs interactive play and
//! [`FixedDice`] replays a script for tests and recorded sessions.

use std::collections::VecDeque;

use combat_core::DiceRoll;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{AutomationError, Result};

/// Source of 2d6 results.
pub trait DiceSource {
    fn roll_2d6(&mut self) -> Result<DiceRoll>;
}

/// Pseudo-random dice backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Reproducible dice for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl DiceSource for RandomDice {
    fn roll_2d6(&mut self) -> Result<DiceRoll> {
        let first = self.rng.gen_range(1..=DiceRoll::FACES);
        let second = self.rng.gen_range(1..=DiceRoll::FACES);
        Ok(DiceRoll::new(first, second)?)
    }
}

/// Replays a fixed list of rolls, then reports exhaustion.
#[derive(Debug, Clone, Default)]
pub struct FixedDice {
    rolls: VecDeque<(u8, u8)>,
}

impl FixedDice {
    pub fn new(rolls: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Rolls whose faces are `total / 2` and the remainder, for scripting by total.
    pub fn totals(totals: impl IntoIterator<Item = u8>) -> Self {
        Self::new(totals.into_iter().map(|t| (t / 2, t - t / 2)))
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for FixedDice {
    fn roll_2d6(&mut self) -> Result<DiceRoll> {
        let (first, second) = self.rolls.pop_front().ok_or(AutomationError::DiceExhausted)?;
        Ok(DiceRoll::new(first, second)?)
    }
}
