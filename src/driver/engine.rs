//! Turn lifecycle driver.
//!
//! Orchestrates each turn: resolve the action, run the end check, then
//! either conclude or sequence the next slot. Every phase boundary issues
//! presentation cues and parks a continuation until the host reports the
//! cues finished, so animations can take as long as they like while the
//! engine itself stays synchronous.
//!
//! ```
//! use balloon_pop::ai::ScriptedMagnitude;
//! use balloon_pop::core::{GameConfig, Slot, TurnPhase};
//! use balloon_pop::driver::{DriverStatus, TurnEngine};
//! use balloon_pop::presentation::NullPresentation;
//!
//! let mut engine = TurnEngine::new(
//!     GameConfig::default(),
//!     NullPresentation,
//!     ScriptedMagnitude::new([1, 1, 1]),
//! ).unwrap();
//!
//! engine.presentation_ready().unwrap();
//! assert_eq!(engine.settle().unwrap(), DriverStatus::AwaitingHuman);
//!
//! engine.submit_human_action(2).unwrap();
//! assert_eq!(engine.settle().unwrap(), DriverStatus::AwaitingHuman);
//! assert_eq!(engine.snapshot().accumulator, 5);
//! assert_eq!(engine.snapshot().phase, TurnPhase::ActiveSlot(Slot::HUMAN));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ai::MagnitudeSource;
use crate::core::{
    EngineError, GameConfig, GameSnapshot, GameState, PumpOutcome, Result, Slot, TurnPhase,
};
use crate::presentation::{Destination, Presentation};
use crate::rules::{self, Outcome};

/// What the driver is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverStatus {
    /// Waiting for the "presentation ready" signal to start the game.
    AwaitingReady,
    /// Cues were issued; waiting for the host to report they finished.
    AwaitingPresentation,
    /// The human is at the pump. Idles until a command arrives.
    AwaitingHuman,
    /// Game over.
    Concluded(Outcome),
}

/// Work to resume once the current presentation cues finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Continuation {
    /// Human reached the pump; enter the first turn.
    EnterFirstTurn,
    /// Next slot reached the pump; start its turn.
    BeginTurn,
    /// Knocked-out character left; announce the result.
    Conclude(Outcome),
}

/// The turn engine: game state plus injected collaborators.
pub struct TurnEngine<P, M> {
    state: GameState,
    presentation: P,
    magnitudes: M,
    /// Set while a boundary is being presented. Actions are refused.
    pending: Option<Continuation>,
    outcome: Option<Outcome>,
}

impl<P: Presentation, M: MagnitudeSource> TurnEngine<P, M> {
    /// Create an engine in the introduction phase with the controls hidden.
    pub fn new(config: GameConfig, mut presentation: P, magnitudes: M) -> Result<Self> {
        let state = GameState::new(config)?;
        presentation.hide_human_controls();

        Ok(Self {
            state,
            presentation,
            magnitudes,
            pending: None,
            outcome: None,
        })
    }

    // === Observation ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    /// `true` while a turn's resolution is still being presented.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.pending.is_some()
    }

    /// Final result, once concluded.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn status(&self) -> DriverStatus {
        if let Some(outcome) = self.outcome {
            return DriverStatus::Concluded(outcome);
        }
        if self.pending.is_some() {
            return DriverStatus::AwaitingPresentation;
        }
        match self.state.phase() {
            TurnPhase::Introduction => DriverStatus::AwaitingReady,
            phase if phase.is_human_turn() => DriverStatus::AwaitingHuman,
            _ => DriverStatus::AwaitingPresentation,
        }
    }

    // === Inbound signals ===

    /// The scene is set: walk the human to the pump.
    pub fn presentation_ready(&mut self) -> Result<DriverStatus> {
        let phase = self.state.phase();
        if phase != TurnPhase::Introduction || self.pending.is_some() {
            warn!(%phase, "presentation ready signal out of order");
            return Err(EngineError::UnexpectedSignal {
                signal: "presentation ready",
                phase,
            });
        }

        info!("introduction finished, beginning first turn");
        self.presentation.play_return(Slot::HUMAN, Destination::Pump);
        self.pending = Some(Continuation::EnterFirstTurn);
        Ok(DriverStatus::AwaitingPresentation)
    }

    /// Pump command from the human.
    ///
    /// Rejected with `InvalidSlotAction` unless the phase is exactly the
    /// human's turn and no earlier action is still being presented.
    /// A rejected command changes nothing; the host should re-prompt rather
    /// than retry.
    pub fn submit_human_action(&mut self, magnitude: u32) -> Result<DriverStatus> {
        self.resolve(Slot::HUMAN, magnitude)
    }

    /// The cues issued at the last boundary have finished.
    pub fn presentation_complete(&mut self) -> Result<DriverStatus> {
        let phase = self.state.phase();
        let continuation = self.pending.take().ok_or(EngineError::UnexpectedSignal {
            signal: "presentation complete",
            phase,
        })?;
        debug!(?continuation, %phase, "advancing game");

        match continuation {
            Continuation::EnterFirstTurn => {
                self.state.set_phase(TurnPhase::ActiveSlot(Slot::HUMAN));
                self.presentation.show_human_controls();
                Ok(DriverStatus::AwaitingHuman)
            }
            Continuation::BeginTurn => match phase.active_slot() {
                Some(slot) if slot.is_human() => {
                    self.presentation.show_human_controls();
                    Ok(DriverStatus::AwaitingHuman)
                }
                Some(slot) => {
                    let remaining = self.state.remaining_capacity();
                    let magnitude = self.magnitudes.generate(slot, remaining);
                    self.resolve(slot, magnitude).map_err(|err| {
                        // Keep the turn open so the host can complete again.
                        self.pending = Some(Continuation::BeginTurn);
                        err
                    })
                }
                None => Err(EngineError::UnexpectedSignal {
                    signal: "presentation complete",
                    phase,
                }),
            },
            Continuation::Conclude(outcome) => {
                info!(?outcome, "game concluded");
                self.outcome = Some(outcome);
                self.presentation
                    .game_concluded(self.state.liveness(), outcome);
                Ok(DriverStatus::Concluded(outcome))
            }
        }
    }

    /// Complete every pending boundary immediately until the human must act
    /// or the game is over. For headless hosts.
    pub fn settle(&mut self) -> Result<DriverStatus> {
        loop {
            match self.status() {
                DriverStatus::AwaitingPresentation => {
                    self.presentation_complete()?;
                }
                status => return Ok(status),
            }
        }
    }

    // === Turn lifecycle ===

    fn resolve(&mut self, slot: Slot, magnitude: u32) -> Result<DriverStatus> {
        if self.pending.is_some() {
            let phase = self.state.phase();
            warn!(%slot, %phase, "action refused while previous turn resolves");
            return Err(EngineError::InvalidSlotAction { slot, phase });
        }

        let outcome = rules::apply_action(&mut self.state, slot, magnitude).map_err(|err| {
            warn!(%slot, magnitude, %err, "action rejected");
            err
        })?;

        if slot.is_human() {
            self.presentation.hide_human_controls();
        }
        self.presentation
            .accumulator_changed(outcome.accumulator, self.state.threshold());

        self.end_turn(slot, outcome)
    }

    fn end_turn(&mut self, slot: Slot, outcome: PumpOutcome) -> Result<DriverStatus> {
        if let Some(result) = rules::outcome(self.state.liveness()) {
            info!(%slot, ?result, "game is ending");
            self.state.set_phase(TurnPhase::Concluded);
            self.presentation.play_elimination(slot);
            self.pending = Some(Continuation::Conclude(result));
            return Ok(DriverStatus::AwaitingPresentation);
        }

        let next = rules::next_active_slot(self.state.liveness(), slot)?;

        if outcome.popped() {
            self.presentation.play_elimination(slot);
        } else {
            self.presentation.play_return(slot, Destination::Home(slot));
        }
        self.presentation.play_return(next, Destination::Pump);

        info!(from = %slot, to = %next, "next turn");
        self.state.set_phase(TurnPhase::ActiveSlot(next));
        self.pending = Some(Continuation::BeginTurn);
        Ok(DriverStatus::AwaitingPresentation)
    }
}
