//! Magnitude sources for automated seats.
//!
//! The driver asks a `MagnitudeSource` how hard an automated slot pumps.
//! The only game state a source sees is the remaining capacity
//! (`threshold - accumulator`), so it is bounded by what is left without
//! learning the threshold itself.

use std::collections::VecDeque;

use crate::core::{GameRng, Slot, SlotMap};

// =============================================================================
// Magnitude Source
// =============================================================================

/// Capability that picks an action magnitude for an automated slot.
pub trait MagnitudeSource {
    /// Choose how many pumps `slot` applies.
    ///
    /// `slot` is an identity for sources that keep per-seat streams.
    /// `remaining_capacity` is always positive.
    fn generate(&mut self, slot: Slot, remaining_capacity: u32) -> u32;
}

impl<M: MagnitudeSource + ?Sized> MagnitudeSource for Box<M> {
    fn generate(&mut self, slot: Slot, remaining_capacity: u32) -> u32 {
        (**self).generate(slot, remaining_capacity)
    }
}

// =============================================================================
// Random
// =============================================================================

/// Uniform random pumps in `1..=min(max_pumps, remaining_capacity)`.
///
/// Each automated seat draws from its own forked stream, so one seat's
/// draws never shift another's. The human seat has no stream and always
/// gets a single pump.
#[derive(Clone, Debug)]
pub struct RandomMagnitude {
    max_pumps: u32,
    streams: SlotMap<Option<GameRng>>,
}

impl RandomMagnitude {
    /// Create a seeded source. `max_pumps` of 0 is treated as 1.
    #[must_use]
    pub fn new(seed: u64, max_pumps: u32) -> Self {
        let mut root = GameRng::new(seed);
        Self {
            max_pumps: max_pumps.max(1),
            streams: SlotMap::new(|slot| slot.is_automated().then(|| root.fork())),
        }
    }

    #[must_use]
    pub fn max_pumps(&self) -> u32 {
        self.max_pumps
    }
}

impl MagnitudeSource for RandomMagnitude {
    fn generate(&mut self, slot: Slot, remaining_capacity: u32) -> u32 {
        let upper = self.max_pumps.min(remaining_capacity).max(1);
        match &mut self.streams[slot] {
            Some(stream) => stream.gen_range_inclusive(1..=upper),
            None => 1,
        }
    }
}

// =============================================================================
// Scripted / Fixed
// =============================================================================

/// Replays a fixed queue of magnitudes, then pumps once per turn.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMagnitude {
    script: VecDeque<u32>,
}

impl ScriptedMagnitude {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Magnitudes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl MagnitudeSource for ScriptedMagnitude {
    fn generate(&mut self, _slot: Slot, _remaining_capacity: u32) -> u32 {
        self.script.pop_front().unwrap_or(1)
    }
}

/// Always pumps the same amount.
#[derive(Clone, Copy, Debug)]
pub struct FixedMagnitude(pub u32);

impl MagnitudeSource for FixedMagnitude {
    fn generate(&mut self, _slot: Slot, _remaining_capacity: u32) -> u32 {
        self.0
    }
}
