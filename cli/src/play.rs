//! Line-driven session: each input line is one user gesture.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{anyhow, bail};
use risiko_engine::{CombatController, DieSource, Side};
use tracing::debug;

use crate::render::board_text;

const HELP: &str = "commands: r (roll), a1/a2 d1/d2 (tap a die), s (show), h (help), q (quit)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Roll,
    Tap(Side, usize),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "r" | "roll" => return Ok(Command::Roll),
            "s" | "show" => return Ok(Command::Show),
            "h" | "help" | "?" => return Ok(Command::Help),
            "q" | "quit" | "exit" => return Ok(Command::Quit),
            _ => {}
        }
        let mut chars = s.chars();
        let side = match chars.next() {
            Some('a') => Side::Attacker,
            Some('d') => Side::Defender,
            _ => bail!("unknown command '{}'", s),
        };
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            bail!("expected a die index after '{}'", &s[..1]);
        }
        let slot: usize = digits
            .parse()
            .map_err(|_| anyhow!("die index '{}' is too large", digits))?;
        Ok(Command::Tap(side, slot))
    }
}

pub struct Output {
    pub json: bool,
}

fn show<S: DieSource>(ctl: &CombatController<S>, out: &mut impl Write, opts: &Output) -> anyhow::Result<()> {
    let board = ctl.board();
    if opts.json {
        writeln!(out, "{}", serde_json::to_string(&board)?)?;
    } else {
        writeln!(out, "{}", board_text(&board))?;
    }
    Ok(())
}

/// Run until `q` or end of input. Bad lines are reported and skipped.
pub fn run<S: DieSource>(
    ctl: &mut CombatController<S>,
    input: impl BufRead,
    mut out: impl Write,
    opts: &Output,
) -> anyhow::Result<()> {
    show(ctl, &mut out, opts)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };
        debug!(?cmd, "command");
        match cmd {
            Command::Roll => {
                ctl.trigger_roll();
                show(ctl, &mut out, opts)?;
            }
            Command::Tap(side, slot) => match ctl.toggle_count(side, slot) {
                Ok(_) => show(ctl, &mut out, opts)?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Show => show(ctl, &mut out, opts)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
    }
    out.flush()?;
    Ok(())
}
