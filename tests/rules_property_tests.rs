//! Property tests for the game rules.
//!
//! Checks turn sequencing, pump resolution, and the end condition over every
//! liveness combination and arbitrary accumulator values.

use balloon_pop::ai::ScriptedMagnitude;
use balloon_pop::core::{EngineError, GameConfig, Liveness, Slot, TurnPhase};
use balloon_pop::driver::{DriverStatus, TurnEngine};
use balloon_pop::presentation::NullPresentation;
use balloon_pop::rules::{is_concluded, next_active_slot, outcome, Outcome};
use proptest::prelude::*;

fn liveness_strategy() -> impl Strategy<Value = [bool; 4]> {
    prop::array::uniform4(any::<bool>())
}

fn slot_strategy() -> impl Strategy<Value = Slot> {
    (0u8..4).prop_map(Slot::new)
}

proptest! {
    /// The sequencer never lands on a knocked-out slot.
    #[test]
    fn prop_next_slot_is_live(flags in liveness_strategy(), current in slot_strategy()) {
        let liveness = Liveness::from_flags(flags);
        match next_active_slot(&liveness, current) {
            Ok(next) => prop_assert!(liveness.is_live(next)),
            Err(err) => {
                prop_assert_eq!(err, EngineError::ContractViolation { from: current });
                prop_assert_eq!(flags, [false; 4]);
            }
        }
    }

    /// The sequencer picks the nearest live slot walking forward with wraparound.
    #[test]
    fn prop_next_slot_is_first_forward(flags in liveness_strategy(), current in slot_strategy()) {
        let liveness = Liveness::from_flags(flags);
        prop_assume!(flags.iter().enumerate().any(|(i, live)| *live && i != current.index()));

        let next = next_active_slot(&liveness, current).unwrap();
        prop_assert_ne!(next, current);

        // Every slot strictly between current and next (cyclically) is knocked out.
        let mut i = (current.index() + 1) % 4;
        while i != next.index() {
            prop_assert!(!flags[i]);
            i = (i + 1) % 4;
        }
    }

    /// The end check concludes iff all AIs are out or the human is out.
    #[test]
    fn prop_end_check(flags in liveness_strategy()) {
        let liveness = Liveness::from_flags(flags);
        let expected = (!flags[1] && !flags[2] && !flags[3]) || !flags[0];
        prop_assert_eq!(is_concluded(&liveness), expected);

        match outcome(&liveness) {
            Some(Outcome::HumanWon) => prop_assert!(!flags[1] && !flags[2] && !flags[3]),
            Some(Outcome::HumanLost) => prop_assert!(!flags[0]),
            None => prop_assert!(!expected),
        }
    }

    /// A human pump either adds exactly its magnitude or pops to zero and
    /// knocks the human out.
    #[test]
    fn prop_pump_accumulates_or_pops(
        threshold in 1u32..50,
        first in 0u32..50,
        second in 0u32..50,
    ) {
        let config = GameConfig::new().with_threshold(threshold).with_max_magnitude(50);
        let mut engine = TurnEngine::new(config, NullPresentation, ScriptedMagnitude::new([0, 0, 0])).unwrap();
        engine.presentation_ready().unwrap();
        engine.settle().unwrap();

        engine.submit_human_action(first).unwrap();
        let after_first = engine.snapshot();

        if first >= threshold {
            prop_assert_eq!(after_first.accumulator, 0);
            prop_assert!(!after_first.liveness.is_live(Slot::HUMAN));
            prop_assert_eq!(after_first.phase, TurnPhase::Concluded);
            return Ok(());
        }

        prop_assert_eq!(after_first.accumulator, first);
        prop_assert_eq!(after_first.liveness.live_count(), 4);

        // AIs pump zero, so the human is back at the same accumulator.
        prop_assert_eq!(engine.settle().unwrap(), DriverStatus::AwaitingHuman);
        engine.submit_human_action(second).unwrap();
        let after_second = engine.snapshot();

        if first + second >= threshold {
            prop_assert_eq!(after_second.accumulator, 0);
            prop_assert!(!after_second.liveness.is_live(Slot::HUMAN));
        } else {
            prop_assert_eq!(after_second.accumulator, first + second);
            prop_assert!(after_second.liveness.is_live(Slot::HUMAN));
        }
    }

    /// Rejected human commands leave the observable state unchanged.
    #[test]
    fn prop_rejected_commands_do_not_mutate(magnitude in 0u32..20) {
        let mut engine = TurnEngine::new(
            GameConfig::default(),
            NullPresentation,
            ScriptedMagnitude::default(),
        ).unwrap();

        let before = engine.snapshot();
        let result = engine.submit_human_action(magnitude);
        prop_assert!(
            matches!(result, Err(EngineError::InvalidSlotAction { .. })),
            "expected InvalidSlotAction, got {:?}",
            result
        );
        prop_assert_eq!(engine.snapshot(), before);
    }
}

/// Threshold 10, accumulator 7, AI 1 pumps 5: AI 1 pops the balloon.
#[test]
fn test_ai_overshoot_scenario() {
    let mut engine = TurnEngine::new(
        GameConfig::default(),
        NullPresentation,
        ScriptedMagnitude::new([5]),
    )
    .unwrap();
    engine.presentation_ready().unwrap();
    engine.settle().unwrap();
    engine.submit_human_action(7).unwrap();

    assert_eq!(engine.snapshot().accumulator, 7);
    assert_eq!(engine.snapshot().phase, TurnPhase::ActiveSlot(Slot::new(1)));

    engine.presentation_complete().unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.accumulator, 0);
    assert!(!snapshot.liveness.is_live(Slot::new(1)));

    let last = engine.state().history().back().cloned().unwrap();
    assert_eq!(last.slot, Slot::new(1));
    assert_eq!(last.outcome.eliminated, Some(Slot::new(1)));
}
