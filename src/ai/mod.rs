//! Automated seats.
//!
//! Decision heuristics live outside the engine; this module defines the
//! capability the driver queries and a few stock implementations.

pub mod magnitude;

pub use magnitude::{FixedMagnitude, MagnitudeSource, RandomMagnitude, ScriptedMagnitude};
