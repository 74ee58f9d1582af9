use tracing::trace;

use super::{RollEpoch, Rolls};

/// Rolls remembered together with the epoch that produced them.
#[derive(Debug, Clone)]
pub(crate) struct EpochCache {
    epoch: RollEpoch,
    rolls: Rolls,
}

impl EpochCache {
    pub(crate) fn new(epoch: RollEpoch, rolls: Rolls) -> Self {
        Self { epoch, rolls }
    }

    /// Re-derive the rolls only if `epoch` differs from the cached one.
    /// Returns whether a new roll happened.
    pub(crate) fn refresh(&mut self, epoch: RollEpoch, roll: impl FnOnce() -> Rolls) -> bool {
        if self.epoch == epoch {
            trace!(epoch = epoch.get(), "roll cache hit");
            return false;
        }
        self.rolls = roll();
        self.epoch = epoch;
        true
    }

    pub(crate) fn epoch(&self) -> RollEpoch {
        self.epoch
    }

    pub(crate) fn rolls(&self) -> &Rolls {
        &self.rolls
    }
}
