//! Action resolution: pump the balloon, pop it, knock out the pumper.

use tracing::{debug, info};

use crate::core::{EngineError, GameState, PumpOutcome, PumpRecord, Result, Slot, TurnPhase};

/// Check that `slot` may act right now, without touching the state.
///
/// The phase must be exactly `ActiveSlot(slot)` and the slot must be live.
pub fn check_turn(state: &GameState, slot: Slot) -> Result<()> {
    let phase = state.phase();
    if phase != TurnPhase::ActiveSlot(slot) || !state.liveness().is_live(slot) {
        return Err(EngineError::InvalidSlotAction { slot, phase });
    }
    Ok(())
}

/// Apply an action of `magnitude` pumps for `slot`.
///
/// The accumulator grows by `magnitude`. Reaching the threshold knocks out
/// `slot` and empties the balloon for whoever pumps next. All validation
/// happens first; a rejected call leaves the state untouched.
pub fn apply_action(state: &mut GameState, slot: Slot, magnitude: u32) -> Result<PumpOutcome> {
    check_turn(state, slot)?;
    state.config().check_magnitude(magnitude)?;

    let pumped = state.accumulator().saturating_add(magnitude);
    debug!(%slot, magnitude, accumulator = pumped, "pumping balloon");

    let outcome = if pumped >= state.threshold() {
        info!(%slot, "balloon popped, knocking out");
        state.liveness_mut().knock_out(slot);
        state.set_accumulator(0);
        PumpOutcome {
            accumulator: 0,
            eliminated: Some(slot),
        }
    } else {
        state.set_accumulator(pumped);
        PumpOutcome {
            accumulator: pumped,
            eliminated: None,
        }
    };

    let turn = state.turn();
    state.record(PumpRecord::new(slot, magnitude, turn, outcome));
    Ok(outcome)
}
