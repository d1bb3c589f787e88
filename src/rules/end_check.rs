//! End condition: has one side been wiped out?

use serde::{Deserialize, Serialize};

use crate::core::{Liveness, Slot};

/// How a concluded game ended, from the human's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every automated slot was knocked out.
    HumanWon,
    /// The human was knocked out.
    HumanLost,
}

/// Decide whether the game is over.
///
/// Checks the automated seats first (all knocked out: human wins), then the
/// human (knocked out: loss). Returns `None` while both sides have someone
/// left.
#[must_use]
pub fn outcome(liveness: &Liveness) -> Option<Outcome> {
    let live = liveness.live_slots();
    if !live.iter().any(|slot| slot.is_automated()) {
        return Some(Outcome::HumanWon);
    }
    if !live.contains(&Slot::HUMAN) {
        return Some(Outcome::HumanLost);
    }
    None
}

/// `true` when the game has concluded.
#[must_use]
pub fn is_concluded(liveness: &Liveness) -> bool {
    outcome(liveness).is_some()
}
