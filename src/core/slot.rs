//! Participant slots and per-slot data storage.
//!
//! ## Slot
//!
//! Type-safe seat identifier. There are exactly four seats: slot 0 is the
//! human, slots 1-3 are automated.
//!
//! ## SlotMap
//!
//! Fixed-size per-slot storage backed by an array for O(1) access.
//! Supports iteration and indexing by `Slot`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Number of seats in a game. Never changes.
pub const SLOT_COUNT: usize = 4;

/// Seat identifier in `[0, 3]`.
///
/// ```
/// use balloon_pop::core::Slot;
///
/// assert!(Slot::HUMAN.is_human());
/// assert!(Slot::new(2).is_automated());
/// assert_eq!(Slot::all().count(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Slot(u8);

impl Slot {
    /// The human-controlled seat.
    pub const HUMAN: Slot = Slot(0);

    /// Create a slot.
    ///
    /// Panics if `index` is not a valid seat.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < SLOT_COUNT, "Slot index must be 0-3");
        Self(index)
    }

    /// Create a slot, returning `None` for an out-of-range index.
    #[must_use]
    pub fn try_new(index: usize) -> Option<Self> {
        (index < SLOT_COUNT).then(|| Self(index as u8))
    }

    /// Get the raw slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn is_human(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_automated(self) -> bool {
        self.0 != 0
    }

    /// Iterate over all slots in seat order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_COUNT as u8).map(Slot)
    }

    /// Iterate over the automated slots in seat order.
    pub fn automated() -> impl Iterator<Item = Slot> {
        (1..SLOT_COUNT as u8).map(Slot)
    }
}

impl TryFrom<u8> for Slot {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Slot::try_new(index as usize).ok_or_else(|| format!("slot index {} out of range", index))
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> u8 {
        slot.0
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_human() {
            write!(f, "Player")
        } else {
            write!(f, "AI {}", self.0)
        }
    }
}

/// Per-slot data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use balloon_pop::core::{Slot, SlotMap};
///
/// let mut pumps: SlotMap<u32> = SlotMap::new(|_| 0);
/// pumps[Slot::new(1)] += 3;
/// assert_eq!(pumps[Slot::new(1)], 3);
/// assert_eq!(pumps[Slot::HUMAN], 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotMap<T> {
    data: [T; SLOT_COUNT],
}

impl<T> SlotMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Slot) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(Slot(i as u8))),
        }
    }

    /// Create a map with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, slot: Slot) -> &T {
        &self.data[slot.index()]
    }

    pub fn get_mut(&mut self, slot: Slot) -> &mut T {
        &mut self.data[slot.index()]
    }

    /// Iterate over (Slot, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Slot(i as u8), v))
    }
}

impl<T> Index<Slot> for SlotMap<T> {
    type Output = T;

    fn index(&self, slot: Slot) -> &Self::Output {
        self.get(slot)
    }
}

impl<T> IndexMut<Slot> for SlotMap<T> {
    fn index_mut(&mut self, slot: Slot) -> &mut Self::Output {
        self.get_mut(slot)
    }
}

/// Liveness vector: `true` while a slot is still in play.
///
/// Initialized all live. Only the action resolver flips entries, and only
/// from live to knocked out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Liveness(SlotMap<bool>);

impl Liveness {
    /// Every slot live.
    #[must_use]
    pub fn all_live() -> Self {
        Self(SlotMap::with_value(true))
    }

    /// Build from raw flags in seat order.
    #[must_use]
    pub fn from_flags(flags: [bool; SLOT_COUNT]) -> Self {
        Self(SlotMap::new(|slot| flags[slot.index()]))
    }

    #[must_use]
    pub fn is_live(&self, slot: Slot) -> bool {
        self.0[slot]
    }

    pub(crate) fn knock_out(&mut self, slot: Slot) {
        self.0[slot] = false;
    }

    /// Live slots in seat order.
    #[must_use]
    pub fn live_slots(&self) -> SmallVec<[Slot; SLOT_COUNT]> {
        self.0
            .iter()
            .filter(|(_, live)| **live)
            .map(|(slot, _)| slot)
            .collect()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.0.iter().filter(|(_, live)| **live).count()
    }

    /// Raw flags in seat order.
    #[must_use]
    pub fn flags(&self) -> [bool; SLOT_COUNT] {
        std::array::from_fn(|i| self.0[Slot(i as u8)])
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::all_live()
    }
}
