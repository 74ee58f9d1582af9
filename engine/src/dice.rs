//! Six-sided dice and the per-side roll.
//!
//! A side always rolls three dice, whatever it commits. Changing the
//! committed count later only changes which of the already-rolled values
//! take part in the comparison.

use std::collections::VecDeque;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CombatError, Result};

/// Slots in a [`RollSet`].
pub const SLOTS: usize = 3;

/// Face of a single d6, always in `1..=6`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieValue(u8);

impl DieValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CombatError::InvalidDieValue(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DieValue {
    type Error = CombatError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DieValue> for u8 {
    fn from(value: DieValue) -> Self {
        value.0
    }
}

impl fmt::Display for DieValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that can produce uniform d6 faces.
pub trait DieSource {
    fn roll_die(&mut self) -> DieValue;
}

impl<S: DieSource + ?Sized> DieSource for &mut S {
    fn roll_die(&mut self) -> DieValue {
        (**self).roll_die()
    }
}

/// Seeded d6 roller.
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: ChaCha8Rng::from_entropy() }
    }
}

impl DieSource for Dice {
    fn roll_die(&mut self) -> DieValue {
        DieValue(self.rng.gen_range(DieValue::MIN..=DieValue::MAX))
    }
}

/// Replays a fixed sequence of faces, wrapping around when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    script: Vec<DieValue>,
    pending: VecDeque<DieValue>,
}

impl ScriptedDice {
    pub fn new(faces: &[u8]) -> Result<Self> {
        let script = faces
            .iter()
            .map(|&f| DieValue::new(f))
            .collect::<Result<Vec<_>>>()?;
        if script.is_empty() {
            return Err(CombatError::EmptyScript);
        }
        Ok(Self { pending: script.iter().copied().collect(), script })
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self) -> DieValue {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        // Non-empty by construction and refilled above.
        self.pending.pop_front().unwrap_or(self.script[0])
    }
}

/// Three faces rolled by one side, highest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RollSet([DieValue; SLOTS]);

impl RollSet {
    /// Sorts the draws into descending order.
    pub fn from_draws(mut draws: [DieValue; SLOTS]) -> Self {
        draws.sort_unstable_by(|a, b| b.cmp(a));
        Self(draws)
    }

    /// Builds a roll set from raw faces, rejecting anything outside `1..=6`.
    pub fn from_faces(faces: [u8; SLOTS]) -> Result<Self> {
        let [a, b, c] = faces;
        Ok(Self::from_draws([DieValue::new(a)?, DieValue::new(b)?, DieValue::new(c)?]))
    }

    pub fn values(&self) -> &[DieValue; SLOTS] {
        &self.0
    }

    pub fn get(&self, slot: usize) -> Option<DieValue> {
        self.0.get(slot).copied()
    }

    /// The first `count` values, which are the ones that count in a clash.
    pub fn committed(&self, count: crate::DiceCount) -> &[DieValue] {
        &self.0[..count.get()]
    }
}

impl std::ops::Index<usize> for RollSet {
    type Output = DieValue;

    fn index(&self, slot: usize) -> &DieValue {
        &self.0[slot]
    }
}

/// Roll three dice for a side and rank them. `count` only decides which
/// slots the caller treats as committed; all three are always drawn.
pub fn roll_side(source: &mut impl DieSource, count: crate::DiceCount) -> RollSet {
    let draws = [source.roll_die(), source.roll_die(), source.roll_die()];
    let set = RollSet::from_draws(draws);
    debug!(count = count.get(), values = ?set.values(), "rolled side");
    set
}
