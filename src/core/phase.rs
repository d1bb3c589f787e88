//! Turn phase: where the game is in its lifecycle.

use serde::{Deserialize, Serialize};

use super::slot::Slot;

/// Current point in the turn lifecycle.
///
/// `Introduction` is the only initial phase and `Concluded` the only
/// terminal one. `ActiveSlot` always names a slot that was live when the
/// phase was entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Scene is being set; nobody is at the pump yet.
    #[default]
    Introduction,
    /// A slot is at the pump.
    ActiveSlot(Slot),
    /// Game over. Frozen.
    Concluded,
}

impl TurnPhase {
    /// The slot whose turn it is, if any.
    #[must_use]
    pub fn active_slot(self) -> Option<Slot> {
        match self {
            TurnPhase::ActiveSlot(slot) => Some(slot),
            TurnPhase::Introduction | TurnPhase::Concluded => None,
        }
    }

    #[must_use]
    pub fn is_human_turn(self) -> bool {
        self == TurnPhase::ActiveSlot(Slot::HUMAN)
    }

    #[must_use]
    pub fn is_concluded(self) -> bool {
        self == TurnPhase::Concluded
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::Introduction => write!(f, "Introduction"),
            TurnPhase::ActiveSlot(slot) => write!(f, "{} turn", slot),
            TurnPhase::Concluded => write!(f, "Concluded"),
        }
    }
}
