// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Aggregate counters maintained by the dispatch loop while lanes run.
//! They are host-side bookkeeping only; the engine itself never touches
//! them (lanes share no mutable state while running).

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// Completed placements summed over retired lanes.
    SolutionsFound,
    /// Lanes that reached `Done` and were taken out of rotation.
    LanesRetired,
    /// Bounded-advance rounds dispatched over the unfinished lane set.
    RoundsDispatched,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    /// Add `n` to the specified counter.
    pub(crate) fn add(&mut self, counter: Counters, n: u64) {
        self.stats[counter as usize] += n;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
