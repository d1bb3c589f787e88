//! Pump actions: the outcome of one resolved action and its history record.

use serde::{Deserialize, Serialize};

use super::slot::Slot;

/// Result of applying one action to the accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PumpOutcome {
    /// Accumulator after the action (0 if the balloon popped).
    pub accumulator: u32,

    /// Slot knocked out by this action, if the threshold was reached.
    pub eliminated: Option<Slot>,
}

impl PumpOutcome {
    #[must_use]
    pub fn popped(&self) -> bool {
        self.eliminated.is_some()
    }
}

/// A resolved action recorded in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PumpRecord {
    /// Slot that pumped.
    pub slot: Slot,

    /// Magnitude applied.
    pub magnitude: u32,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// What the action did.
    pub outcome: PumpOutcome,
}

impl PumpRecord {
    #[must_use]
    pub fn new(slot: Slot, magnitude: u32, turn: u32, outcome: PumpOutcome) -> Self {
        Self {
            slot,
            magnitude,
            turn,
            outcome,
        }
    }
}
