//! Core engine types: slots, liveness, phase, state, configuration, RNG, errors.
//!
//! Rules in `crate::rules` read and mutate these; nothing outside the crate
//! can mutate a `GameState` directly.

pub mod slot;
pub mod phase;
pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use slot::{Liveness, Slot, SlotMap, SLOT_COUNT};
pub use phase::TurnPhase;
pub use action::{PumpOutcome, PumpRecord};
pub use config::{GameConfig, DEFAULT_THRESHOLD};
pub use error::{EngineError, Result};
pub use rng::GameRng;
pub use state::{GameSnapshot, GameState};
