//! Attacker/defender dice state: how many dice each side commits, when
//! the dice get rolled, and who wins each slot.

mod cache;
pub mod outcome;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dice::{roll_side, Dice, DieSource, RollSet, SLOTS};
use crate::error::{CombatError, Result};
use cache::EpochCache;
use outcome::{board_view, clash, slot_outcome, BoardView, Clash, SlotOutcome};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Attacker, Side::Defender];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Attacker => "attacker",
            Side::Defender => "defender",
        })
    }
}

/// Number of dice a side commits. Never zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DiceCount {
    One = 1,
    Two = 2,
    #[default]
    Three = 3,
}

impl DiceCount {
    pub fn get(self) -> usize {
        self as usize
    }

    /// Next count after the user taps `slot`.
    ///
    /// Two is the pivot: from two, slot 1 drops to one die and slot 2
    /// raises to three. From one or three any tap returns to two. Slot 0
    /// is always committed and never changes the count.
    pub fn toggled(self, slot: Slot) -> DiceCount {
        if slot.index() == 0 {
            return self;
        }
        match self {
            DiceCount::Two if slot.index() == 1 => DiceCount::One,
            DiceCount::Two => DiceCount::Three,
            DiceCount::One | DiceCount::Three => DiceCount::Two,
        }
    }

    /// Whether `slot` takes part in the comparison for this count.
    pub fn commits(self, slot: Slot) -> bool {
        slot.index() < self.get()
    }
}

impl TryFrom<u8> for DiceCount {
    type Error = CombatError;

    fn try_from(n: u8) -> Result<Self> {
        match n {
            1 => Ok(DiceCount::One),
            2 => Ok(DiceCount::Two),
            3 => Ok(DiceCount::Three),
            other => Err(CombatError::InvalidDiceCount(other)),
        }
    }
}

impl From<DiceCount> for u8 {
    fn from(count: DiceCount) -> Self {
        count as u8
    }
}

impl fmt::Display for DiceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Position of a die inside a [`RollSet`], `0..=2`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(usize);

impl Slot {
    pub fn new(index: usize) -> Result<Self> {
        if index < SLOTS {
            Ok(Self(index))
        } else {
            Err(CombatError::InvalidSlot(index))
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOTS).map(Slot)
    }

    /// Only the dice after the first respond to taps.
    pub fn is_toggleable(self) -> bool {
        self.0 > 0
    }
}

/// Counter whose increment is the only thing that triggers new rolls.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RollEpoch(u64);

impl RollEpoch {
    pub fn get(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Both sides' roll sets from the same epoch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rolls {
    pub attacker: RollSet,
    pub defender: RollSet,
}

impl Rolls {
    pub fn new(attacker: RollSet, defender: RollSet) -> Self {
        Self { attacker, defender }
    }

    fn roll(source: &mut impl DieSource, attacker: DiceCount, defender: DiceCount) -> Self {
        Self {
            attacker: roll_side(source, attacker),
            defender: roll_side(source, defender),
        }
    }

    pub fn side(&self, side: Side) -> &RollSet {
        match side {
            Side::Attacker => &self.attacker,
            Side::Defender => &self.defender,
        }
    }
}

/// One dice duel session. Owns its randomness and is driven by
/// [`trigger_roll`](Self::trigger_roll) and
/// [`toggle_count`](Self::toggle_count).
pub struct CombatController<S: DieSource = Dice> {
    source: S,
    attacker_count: DiceCount,
    defender_count: DiceCount,
    cache: EpochCache,
}

impl CombatController<Dice> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(Dice::from_seed(seed))
    }
}

impl<S: DieSource> CombatController<S> {
    /// Starts at epoch 0 with three dice per side; epoch 0 is rolled up front.
    pub fn new(source: S) -> Self {
        Self::with_counts(source, DiceCount::default(), DiceCount::default())
    }

    pub fn with_counts(mut source: S, attacker_count: DiceCount, defender_count: DiceCount) -> Self {
        let epoch = RollEpoch::default();
        let rolls = Rolls::roll(&mut source, attacker_count, defender_count);
        Self {
            source,
            attacker_count,
            defender_count,
            cache: EpochCache::new(epoch, rolls),
        }
    }

    /// Epoch of the rolls currently held.
    pub fn epoch(&self) -> RollEpoch {
        self.cache.epoch()
    }

    pub fn count(&self, side: Side) -> DiceCount {
        match side {
            Side::Attacker => self.attacker_count,
            Side::Defender => self.defender_count,
        }
    }

    pub fn rolls(&self) -> &Rolls {
        self.cache.rolls()
    }

    /// Advance the epoch and roll both sides again.
    pub fn trigger_roll(&mut self) -> RollEpoch {
        let next = self.epoch().next();
        self.sync_to(next);
        info!(epoch = next.get(), "dice rolled");
        next
    }

    /// Bring the rolls up to `epoch`. Both sides are rolled again only if
    /// `epoch` differs from the one held; returns whether that happened.
    /// Epochs older than the current one are ignored.
    pub fn sync_to(&mut self, epoch: RollEpoch) -> bool {
        let Self { source, attacker_count, defender_count, cache } = self;
        if epoch < cache.epoch() {
            return false;
        }
        cache.refresh(epoch, || Rolls::roll(source, *attacker_count, *defender_count))
    }

    /// Handle a tap on the die at `slot` for `side`. Never re-rolls.
    pub fn toggle_count(&mut self, side: Side, slot: usize) -> Result<DiceCount> {
        let slot = Slot::new(slot)?;
        let current = self.count(side);
        let next = current.toggled(slot);
        if next != current {
            info!(%side, slot = slot.index(), from = current.get(), to = next.get(), "dice count changed");
        }
        match side {
            Side::Attacker => self.attacker_count = next,
            Side::Defender => self.defender_count = next,
        }
        Ok(next)
    }

    pub fn compare_slot(&self, slot: usize) -> Result<SlotOutcome> {
        let slot = Slot::new(slot)?;
        Ok(slot_outcome(self.rolls(), self.attacker_count, self.defender_count, slot))
    }

    pub fn board(&self) -> BoardView {
        board_view(self.epoch(), self.rolls(), self.attacker_count, self.defender_count)
    }

    pub fn clash(&self) -> Clash {
        clash(self.rolls(), self.attacker_count, self.defender_count)
    }
}
