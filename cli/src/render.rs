use std::fmt::Write;

use risiko_engine::{BoardView, DieView, Emphasis, Side};

fn mark(die: &DieView) -> char {
    match die.emphasis {
        Emphasis::Highlighted => '+',
        Emphasis::Reduced => '-',
        Emphasis::CrossedOut => 'x',
    }
}

/// Plain text board: `+` wins its slot, `-` loses it, `x` is not committed.
pub fn board_text(board: &BoardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "roll #{}", board.epoch.get());
    for side in Side::ALL {
        let count = match side {
            Side::Attacker => board.attacker_count,
            Side::Defender => board.defender_count,
        };
        let dice: Vec<String> = board
            .slots
            .iter()
            .map(|slot| {
                let die = slot.side(side);
                format!("{}{}", die.value, mark(die))
            })
            .collect();
        let _ = writeln!(out, "{side} ({count}): {}", dice.join(" "));
    }
    let _ = write!(
        out,
        "attacker wins {}, defender wins {}",
        board.clash.attacker_wins, board.clash.defender_wins
    );
    out
}
