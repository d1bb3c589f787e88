//! Game rules: turn order, action resolution, end condition.
//!
//! These are free functions over `GameState`; the turn driver in
//! `crate::driver` decides when each one runs.

pub mod sequencer;
pub mod resolver;
pub mod end_check;

pub use sequencer::next_active_slot;
pub use resolver::{apply_action, check_turn};
pub use end_check::{is_concluded, outcome, Outcome};
