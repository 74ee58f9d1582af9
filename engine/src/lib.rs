//! Attacker vs. defender dice duel for territory-conquest board games.
//!
//! [`dice`] rolls and ranks a side's three dice; [`combat`] owns the
//! committed counts, the roll epoch and the per-slot comparison.

pub mod combat;
pub mod config;
pub mod dice;
pub mod error;
pub mod stats;

pub use combat::outcome::{BoardView, Clash, DieView, Emphasis, SlotOutcome};
pub use combat::{CombatController, DiceCount, RollEpoch, Rolls, Side, Slot};
pub use config::{ConfigFormat, SessionConfig};
pub use dice::{roll_side, Dice, DieSource, DieValue, RollSet, ScriptedDice, SLOTS};
pub use error::CombatError;
pub use stats::{simulate, SimulationRequest, SimulationStats};
