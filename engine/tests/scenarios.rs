use risiko_engine::{
    CombatController, DiceCount, Emphasis, RollEpoch, ScriptedDice, Side,
};

/// Controller whose first roll gives the attacker `a` and the defender `d`.
fn scripted(a: [u8; 3], d: [u8; 3], attackers: DiceCount, defenders: DiceCount) -> CombatController<ScriptedDice> {
    let faces = [a, d].concat();
    CombatController::with_counts(ScriptedDice::new(&faces).unwrap(), attackers, defenders)
}

#[test]
fn full_commit_pairs_positionally() {
    let ctl = scripted([6, 4, 2], [5, 5, 1], DiceCount::Three, DiceCount::Three);

    let s0 = ctl.compare_slot(0).unwrap();
    assert!(s0.attacker.winning);
    assert!(!s0.defender.winning);

    let s1 = ctl.compare_slot(1).unwrap();
    assert!(!s1.attacker.winning);
    assert!(s1.defender.winning);

    let s2 = ctl.compare_slot(2).unwrap();
    assert!(s2.attacker.winning);
    assert!(!s2.defender.winning);

    let clash = ctl.clash();
    assert_eq!((clash.pairs, clash.attacker_wins, clash.defender_wins), (3, 2, 1));
}

#[test]
fn single_attacker_die_disables_the_rest() {
    let ctl = scripted([6, 6, 6], [1, 1, 1], DiceCount::One, DiceCount::Three);
    let board = ctl.board();
    assert!(!board.slots[0].attacker.disabled);
    for slot in &board.slots[1..] {
        assert!(slot.attacker.disabled);
        assert_eq!(slot.attacker.emphasis, Emphasis::CrossedOut);
        // Still rolled and still compared for display.
        assert_eq!(slot.attacker.value.get(), 6);
        assert!(slot.attacker.winning);
        assert!(!slot.defender.disabled);
    }
    assert_eq!(ctl.clash().pairs, 1);
}

#[test]
fn tap_down_then_back_to_pivot() {
    let mut ctl = scripted([3, 3, 3], [3, 3, 3], DiceCount::Two, DiceCount::Three);
    ctl.toggle_count(Side::Attacker, 1).unwrap();
    assert_eq!(ctl.count(Side::Attacker), DiceCount::One);
    ctl.toggle_count(Side::Attacker, 2).unwrap();
    assert_eq!(ctl.count(Side::Attacker), DiceCount::Two);
}

#[test]
fn ties_show_defender_highlighted() {
    let ctl = scripted([4, 4, 4], [4, 4, 4], DiceCount::Three, DiceCount::Three);
    for slot in ctl.board().slots {
        assert_eq!(slot.attacker.emphasis, Emphasis::Reduced);
        assert_eq!(slot.defender.emphasis, Emphasis::Highlighted);
    }
}

#[test]
fn derivation_is_idempotent() {
    let ctl = CombatController::seeded(77);
    assert_eq!(ctl.board(), ctl.board());
    assert_eq!(ctl.compare_slot(1), ctl.compare_slot(1));
    assert_eq!(ctl.board().epoch, RollEpoch::default());
}

#[test]
fn first_slot_is_never_toggleable() {
    let ctl = CombatController::seeded(1);
    let board = ctl.board();
    assert!(!board.slots[0].attacker.toggleable);
    assert!(!board.slots[0].defender.toggleable);
    assert!(board.slots[1].attacker.toggleable);
    assert!(board.slots[2].defender.toggleable);
}
