//! Game state and its read-only snapshot.
//!
//! ## GameState
//!
//! Owns the turn phase, liveness vector, and shared accumulator. Fields are
//! private: mutation flows through the rules (`rules::resolver`,
//! `rules::sequencer`) as invoked by the turn driver.
//!
//! ## GameSnapshot
//!
//! Copy of the observable state handed to presentation and hosts.
//!
//! History uses `im` persistent vectors so cloning a state is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::PumpRecord;
use super::config::GameConfig;
use super::error::Result;
use super::phase::TurnPhase;
use super::slot::Liveness;

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    phase: TurnPhase,
    liveness: Liveness,
    accumulator: u32,
    /// Turn number (starts at 1, advanced per resolved action).
    turn: u32,
    history: Vector<PumpRecord>,
}

impl GameState {
    /// Create a fresh game: introduction phase, everyone live, empty balloon.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            phase: TurnPhase::Introduction,
            liveness: Liveness::all_live(),
            accumulator: 0,
            turn: 1,
            history: Vector::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    #[must_use]
    pub fn accumulator(&self) -> u32 {
        self.accumulator
    }

    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.config.threshold
    }

    /// Pumps left before the balloon pops. Always positive between actions.
    #[must_use]
    pub fn remaining_capacity(&self) -> u32 {
        self.config.threshold.saturating_sub(self.accumulator)
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every resolved action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PumpRecord> {
        &self.history
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            accumulator: self.accumulator,
            threshold: self.config.threshold,
            liveness: self.liveness,
            turn: self.turn,
        }
    }

    // === Mutation (crate-internal) ===

    pub(crate) fn set_phase(&mut self, phase: TurnPhase) {
        debug_assert!(!self.phase.is_concluded(), "Concluded phase is frozen");
        self.phase = phase;
    }

    pub(crate) fn liveness_mut(&mut self) -> &mut Liveness {
        &mut self.liveness
    }

    pub(crate) fn set_accumulator(&mut self, value: u32) {
        self.accumulator = value;
    }

    pub(crate) fn record(&mut self, record: PumpRecord) {
        self.history.push_back(record);
        self.turn += 1;
    }

    /// Build a state at an arbitrary point, for exercising rules in isolation.
    #[cfg(test)]
    pub(crate) fn with_parts(
        config: GameConfig,
        phase: TurnPhase,
        liveness: Liveness,
        accumulator: u32,
    ) -> Self {
        Self {
            config,
            phase,
            liveness,
            accumulator,
            turn: 1,
            history: Vector::new(),
        }
    }
}

/// Read-only view of the observable state, for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: TurnPhase,
    pub accumulator: u32,
    pub threshold: u32,
    pub liveness: Liveness,
    pub turn: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineError, PumpOutcome, Slot};

    #[test]
    fn test_game_state_new() {
        let state = GameState::new(GameConfig::default()).unwrap();

        assert_eq!(state.phase(), TurnPhase::Introduction);
        assert_eq!(state.accumulator(), 0);
        assert_eq!(state.threshold(), 10);
        assert_eq!(state.remaining_capacity(), 10);
        assert_eq!(state.turn(), 1);
        assert_eq!(state.liveness().live_count(), 4);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_game_state_rejects_bad_config() {
        let result = GameState::new(GameConfig::new().with_threshold(0));
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_record_advances_turn() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.record(PumpRecord::new(
            Slot::HUMAN,
            2,
            1,
            PumpOutcome { accumulator: 2, eliminated: None },
        ));

        assert_eq!(state.turn(), 2);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_clone_shares_history() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.record(PumpRecord::new(
            Slot::HUMAN,
            2,
            1,
            PumpOutcome { accumulator: 2, eliminated: None },
        ));

        let cloned = state.clone();
        state.set_accumulator(9);

        assert_eq!(cloned.history(), state.history());
        assert_eq!(cloned.accumulator(), 0);
    }

    #[test]
    fn test_snapshot_serde() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.set_phase(TurnPhase::ActiveSlot(Slot::new(2)));
        state.set_accumulator(4);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.phase, TurnPhase::ActiveSlot(Slot::new(2)));
        assert_eq!(snapshot.accumulator, 4);

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
