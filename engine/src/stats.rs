//! Monte Carlo estimates over many independent epochs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combat::{CombatController, DiceCount, Side, Slot};
use crate::dice::{Dice, SLOTS};

fn default_trials() -> u32 {
    1000
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationRequest {
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_trials")]
    pub trials: u32,
    #[serde(default)]
    pub attackers: DiceCount,
    #[serde(default)]
    pub defenders: DiceCount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationStats {
    pub trials: u32,
    pub attackers: DiceCount,
    pub defenders: DiceCount,
    /// Share of epochs in which the attacker wins each slot, committed or not.
    pub slot_attacker_win_rate: [f64; SLOTS],
    /// Mean number of committed slots won by each side per epoch.
    pub avg_attacker_wins: f64,
    pub avg_defender_wins: f64,
    /// Share of epochs in which the attacker wins every committed pair.
    pub attacker_sweep_rate: f64,
    pub defender_sweep_rate: f64,
}

pub fn simulate(req: &SimulationRequest) -> SimulationStats {
    let mut ctl = CombatController::with_counts(Dice::from_seed(req.seed), req.attackers, req.defenders);
    let mut slot_wins = [0u32; SLOTS];
    let mut attacker_total = 0u64;
    let mut defender_total = 0u64;
    let mut attacker_sweeps = 0u32;
    let mut defender_sweeps = 0u32;

    for _ in 0..req.trials {
        ctl.trigger_roll();
        for slot in Slot::all() {
            let a = ctl.rolls().side(Side::Attacker)[slot.index()];
            let d = ctl.rolls().side(Side::Defender)[slot.index()];
            if crate::combat::outcome::attacker_wins(a, d) {
                slot_wins[slot.index()] += 1;
            }
        }
        let clash = ctl.clash();
        attacker_total += clash.attacker_wins as u64;
        defender_total += clash.defender_wins as u64;
        if clash.attacker_wins == clash.pairs {
            attacker_sweeps += 1;
        }
        if clash.defender_wins == clash.pairs {
            defender_sweeps += 1;
        }
    }

    let trials = req.trials.max(1) as f64;
    let stats = SimulationStats {
        trials: req.trials,
        attackers: req.attackers,
        defenders: req.defenders,
        slot_attacker_win_rate: slot_wins.map(|w| w as f64 / trials),
        avg_attacker_wins: attacker_total as f64 / trials,
        avg_defender_wins: defender_total as f64 / trials,
        attacker_sweep_rate: attacker_sweeps as f64 / trials,
        defender_sweep_rate: defender_sweeps as f64 / trials,
    };
    debug!(trials = req.trials, ?stats, "simulation finished");
    stats
}
