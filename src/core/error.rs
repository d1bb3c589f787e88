//! Engine errors.
//!
//! Every rejection is raised before any state is touched, so a caller that
//! receives an error can re-prompt against an unchanged game.

use thiserror::Error;

use super::phase::TurnPhase;
use super::slot::Slot;

/// Engine result type
pub type Result<T> = std::result::Result<T, EngineError>;

/// Engine errors
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Action for a slot that is not at the pump, is knocked out, or whose
    /// previous action is still being presented.
    #[error("invalid action for {slot} during {phase}")]
    InvalidSlotAction { slot: Slot, phase: TurnPhase },

    #[error("invalid magnitude {magnitude}: must be at most {max}")]
    InvalidMagnitude { magnitude: u32, max: u32 },

    /// Turn sequencing found no live slot. Indicates the end check was
    /// skipped upstream; not recoverable.
    #[error("contract violation: no live slot reachable from {from}")]
    ContractViolation { from: Slot },

    /// A lifecycle signal arrived while the driver was not waiting for it.
    #[error("unexpected {signal} signal during {phase}")]
    UnexpectedSignal {
        signal: &'static str,
        phase: TurnPhase,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidSlotAction {
            slot: Slot::HUMAN,
            phase: TurnPhase::ActiveSlot(Slot::new(2)),
        };
        assert_eq!(err.to_string(), "invalid action for Player during AI 2 turn");

        let err = EngineError::InvalidMagnitude { magnitude: 11, max: 10 };
        assert_eq!(err.to_string(), "invalid magnitude 11: must be at most 10");

        let err = EngineError::ContractViolation { from: Slot::new(3) };
        assert_eq!(
            err.to_string(),
            "contract violation: no live slot reachable from AI 3"
        );
    }
}
