//! # balloon-pop
//!
//! Turn engine for a four-seat balloon pump elimination mini-game.
//!
//! One human (slot 0) and three automated seats (slots 1-3) take turns
//! pumping a shared balloon. Reaching the threshold pops it and knocks out
//! whoever pumped; the balloon starts empty for the next pumper. The game
//! ends when the human is knocked out or is the last one standing.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: Cameras, animations, and UI are injected
//!    collaborators. The engine issues cues and waits for a completion
//!    signal; it never sleeps or polls.
//!
//! 2. **Illegal States Unrepresentable**: `TurnPhase::ActiveSlot` carries its
//!    slot; `Concluded` carries nothing.
//!
//! 3. **Reject, Never Ignore**: Out-of-turn or out-of-range actions return an
//!    `EngineError` and leave the state untouched.
//!
//! ## Modules
//!
//! - `core`: Slots, liveness, phase, state, configuration, RNG, errors
//! - `rules`: Turn sequencing, action resolution, end condition
//! - `ai`: Magnitude sources for automated seats
//! - `presentation`: Presentation collaborator interface
//! - `driver`: Turn lifecycle driver

pub mod core;
pub mod rules;
pub mod ai;
pub mod presentation;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameConfig, GameRng, GameSnapshot, GameState, Liveness,
    PumpOutcome, PumpRecord, Result, Slot, SlotMap, TurnPhase, DEFAULT_THRESHOLD, SLOT_COUNT,
};

pub use crate::rules::{apply_action, is_concluded, next_active_slot, outcome, Outcome};

pub use crate::ai::{FixedMagnitude, MagnitudeSource, RandomMagnitude, ScriptedMagnitude};

pub use crate::presentation::{Destination, NullPresentation, Presentation};

pub use crate::driver::{DriverStatus, TurnEngine};
