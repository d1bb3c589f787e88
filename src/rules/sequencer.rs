//! Turn order: who pumps next.

use tracing::debug;

use crate::core::{EngineError, Liveness, Result, Slot, SLOT_COUNT};

/// Find the next live slot after `current`.
///
/// Scans forward from `current + 1` to the last seat, then wraps and scans
/// from seat 0 up to `current - 1`. The first live slot wins. If no other
/// slot is live, `current` itself is returned when it is still live (a full
/// lap lands back on it).
///
/// Returns `ContractViolation` when nothing is live; callers must run the
/// end check before sequencing.
///
/// ```
/// use balloon_pop::core::{Liveness, Slot};
/// use balloon_pop::rules::next_active_slot;
///
/// let liveness = Liveness::from_flags([true, true, false, true]);
/// assert_eq!(next_active_slot(&liveness, Slot::new(2)).unwrap(), Slot::new(3));
/// assert_eq!(next_active_slot(&liveness, Slot::new(3)).unwrap(), Slot::new(0));
/// ```
pub fn next_active_slot(liveness: &Liveness, current: Slot) -> Result<Slot> {
    let ahead = (current.index() + 1)..SLOT_COUNT;
    let behind = 0..current.index();

    let next = ahead
        .chain(behind)
        .filter_map(Slot::try_new)
        .find(|slot| liveness.is_live(*slot))
        .or_else(|| liveness.is_live(current).then_some(current));

    match next {
        Some(slot) => {
            debug!(from = %current, to = %slot, "next active slot");
            Ok(slot)
        }
        None => Err(EngineError::ContractViolation { from: current }),
    }
}
