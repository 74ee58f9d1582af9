use thiserror::Error;

/// Rejected inputs at the engine boundary. Each variant is a caller bug,
/// never a runtime condition to recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("die value {0} is outside 1..=6")]
    InvalidDieValue(u8),
    #[error("dice count {0} is outside 1..=3")]
    InvalidDiceCount(u8),
    #[error("slot index {0} is outside 0..=2")]
    InvalidSlot(usize),
    #[error("scripted dice need at least one face")]
    EmptyScript,
    #[error("invalid session config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CombatError>;
