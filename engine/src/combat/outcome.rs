//! Per-slot comparison between the two sides. Everything here is a pure
//! function of the rolls and the committed counts.

use serde::Serialize;

use super::{DiceCount, RollEpoch, Rolls, Side, Slot};
use crate::dice::DieValue;

/// How a die should be drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Committed and winning its slot.
    Highlighted,
    /// Committed but losing its slot.
    Reduced,
    /// Not committed.
    CrossedOut,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DieView {
    pub value: DieValue,
    pub winning: bool,
    pub disabled: bool,
    pub toggleable: bool,
    pub emphasis: Emphasis,
}

impl DieView {
    fn new(value: DieValue, winning: bool, count: DiceCount, slot: Slot) -> Self {
        let disabled = !count.commits(slot);
        let emphasis = match (disabled, winning) {
            (true, _) => Emphasis::CrossedOut,
            (false, true) => Emphasis::Highlighted,
            (false, false) => Emphasis::Reduced,
        };
        Self { value, winning, disabled, toggleable: slot.is_toggleable(), emphasis }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotOutcome {
    pub slot: usize,
    pub attacker: DieView,
    pub defender: DieView,
}

impl SlotOutcome {
    pub fn side(&self, side: Side) -> &DieView {
        match side {
            Side::Attacker => &self.attacker,
            Side::Defender => &self.defender,
        }
    }
}

/// Attacker must beat the defender outright.
pub fn attacker_wins(attacker: DieValue, defender: DieValue) -> bool {
    attacker > defender
}

/// Defender keeps ties.
pub fn defender_wins(attacker: DieValue, defender: DieValue) -> bool {
    defender >= attacker
}

pub fn slot_outcome(
    rolls: &Rolls,
    attacker_count: DiceCount,
    defender_count: DiceCount,
    slot: Slot,
) -> SlotOutcome {
    let a = rolls.attacker[slot.index()];
    let d = rolls.defender[slot.index()];
    SlotOutcome {
        slot: slot.index(),
        attacker: DieView::new(a, attacker_wins(a, d), attacker_count, slot),
        defender: DieView::new(d, defender_wins(a, d), defender_count, slot),
    }
}

/// Everything a presentation layer needs to draw the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub epoch: RollEpoch,
    pub attacker_count: DiceCount,
    pub defender_count: DiceCount,
    pub slots: Vec<SlotOutcome>,
    pub clash: Clash,
}

pub fn board_view(
    epoch: RollEpoch,
    rolls: &Rolls,
    attacker_count: DiceCount,
    defender_count: DiceCount,
) -> BoardView {
    BoardView {
        epoch,
        attacker_count,
        defender_count,
        slots: Slot::all()
            .map(|slot| slot_outcome(rolls, attacker_count, defender_count, slot))
            .collect(),
        clash: clash(rolls, attacker_count, defender_count),
    }
}

/// Tally over the slots both sides committed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Clash {
    pub pairs: usize,
    pub attacker_wins: usize,
    pub defender_wins: usize,
}

pub fn clash(rolls: &Rolls, attacker_count: DiceCount, defender_count: DiceCount) -> Clash {
    let shared = attacker_count.min(defender_count);
    let pairs = shared.get();
    let won = rolls
        .attacker
        .committed(shared)
        .iter()
        .zip(rolls.defender.committed(shared))
        .filter(|(a, d)| attacker_wins(**a, **d))
        .count();
    Clash { pairs, attacker_wins: won, defender_wins: pairs - won }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::RollSet;

    fn die(v: u8) -> DieValue {
        DieValue::new(v).unwrap()
    }

    #[test]
    fn tie_goes_to_defender() {
        assert!(!attacker_wins(die(4), die(4)));
        assert!(defender_wins(die(4), die(4)));
    }

    #[test]
    fn exactly_one_side_wins_each_slot() {
        for a in 1..=6 {
            for d in 1..=6 {
                assert_ne!(attacker_wins(die(a), die(d)), defender_wins(die(a), die(d)));
            }
        }
    }

    #[test]
    fn emphasis_follows_flags() {
        let rolls = Rolls::new(
            RollSet::from_faces([6, 2, 2]).unwrap(),
            RollSet::from_faces([5, 3, 1]).unwrap(),
        );
        let s0 = slot_outcome(&rolls, DiceCount::Two, DiceCount::Three, Slot::new(0).unwrap());
        assert_eq!(s0.attacker.emphasis, Emphasis::Highlighted);
        assert_eq!(s0.defender.emphasis, Emphasis::Reduced);
        let s2 = slot_outcome(&rolls, DiceCount::Two, DiceCount::Three, Slot::new(2).unwrap());
        assert_eq!(s2.attacker.emphasis, Emphasis::CrossedOut);
        assert!(s2.attacker.winning);
        assert_eq!(s2.defender.emphasis, Emphasis::Reduced);
    }

    #[test]
    fn clash_counts_only_shared_slots() {
        let rolls = Rolls::new(
            RollSet::from_faces([6, 4, 2]).unwrap(),
            RollSet::from_faces([5, 5, 1]).unwrap(),
        );
        let c = clash(&rolls, DiceCount::Three, DiceCount::Two);
        assert_eq!(c, Clash { pairs: 2, attacker_wins: 1, defender_wins: 1 });
    }
}
