//! Presentation collaborator.
//!
//! The engine never draws anything. It is handed a `Presentation` at
//! construction and issues cues at phase boundaries: move a character,
//! remove a knocked-out character, show or hide the human's controls.
//!
//! Cues are fire-and-forget. After issuing the cues for a boundary the
//! driver parks a continuation and waits for the host to report
//! completion (`TurnEngine::presentation_complete`), however long the
//! animations take.

use serde::{Deserialize, Serialize};

use crate::core::{Liveness, Slot};
use crate::rules::Outcome;

/// Where a character can be moved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Standing at the balloon pump.
    Pump,
    /// The slot's own waiting spot.
    Home(Slot),
}

/// Presentation hooks the turn driver calls into.
pub trait Presentation {
    /// The human may act: show the pump controls.
    fn show_human_controls(&mut self);

    /// The human may not act: hide the pump controls.
    fn hide_human_controls(&mut self);

    /// The accumulator changed after an action.
    fn accumulator_changed(&mut self, _accumulator: u32, _threshold: u32) {}

    /// Remove a knocked-out character from view.
    fn play_elimination(&mut self, slot: Slot);

    /// Move a live character to `destination`.
    fn play_return(&mut self, slot: Slot, destination: Destination);

    /// The game is over. Called exactly once.
    fn game_concluded(&mut self, liveness: &Liveness, outcome: Outcome);
}

impl<P: Presentation + ?Sized> Presentation for Box<P> {
    fn show_human_controls(&mut self) {
        (**self).show_human_controls();
    }

    fn hide_human_controls(&mut self) {
        (**self).hide_human_controls();
    }

    fn accumulator_changed(&mut self, accumulator: u32, threshold: u32) {
        (**self).accumulator_changed(accumulator, threshold);
    }

    fn play_elimination(&mut self, slot: Slot) {
        (**self).play_elimination(slot);
    }

    fn play_return(&mut self, slot: Slot, destination: Destination) {
        (**self).play_return(slot, destination);
    }

    fn game_concluded(&mut self, liveness: &Liveness, outcome: Outcome) {
        (**self).game_concluded(liveness, outcome);
    }
}

/// Headless presentation: ignores every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresentation;

impl Presentation for NullPresentation {
    fn show_human_controls(&mut self) {}

    fn hide_human_controls(&mut self) {}

    fn play_elimination(&mut self, _slot: Slot) {}

    fn play_return(&mut self, _slot: Slot, _destination: Destination) {}

    fn game_concluded(&mut self, _liveness: &Liveness, _outcome: Outcome) {}
}
