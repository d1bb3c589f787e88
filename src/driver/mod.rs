//! Turn lifecycle driver.
//!
//! `TurnEngine` is the only way to advance a game: it owns the
//! `GameState`, calls the rules in order, and talks to the injected
//! presentation and magnitude collaborators.

pub mod engine;

pub use engine::{DriverStatus, TurnEngine};
