// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Iterative backtracking step engine.
//!
//! This module advances a [`SearchState`] through the Place/Remove state
//! machine without recursion or an implicit call stack; the record's
//! `column_masks` array *is* the stack, indexed by `col`. That structure
//! is load-bearing: it is what lets a lane be suspended after a bounded
//! number of steps and resumed later with bit-for-bit identical behavior,
//! including on execution substrates that cannot preserve registers or a
//! call stack between invocations.
//!
//! # Execution model
//!
//! Each state-machine iteration proceeds in three parts:
//!
//! 1. `Remove` first unwinds one row (or retires the lane when `col`
//!    has fallen back to `start_col`), restoring the saved candidate set.
//! 2. Both phases then isolate the lowest candidate bit and toggle its
//!    attack contribution into `rook`/`add`/`sub`. Placement and removal
//!    use the identical toggle, so they are exact inverses.
//! 3. `Place` saves the candidate set to the undo log and moves down a
//!    row, counting a solution when the board is full; `Remove` clears
//!    the replayed bit and switches back to `Place` if untried siblings
//!    remain.
//!
//! Candidates are always tried lowest-bit-first, which fixes a
//! deterministic, reproducible enumeration order.
//!
//! # Suspend / resume
//!
//! [`run`] drives a lane to completion in one call. [`advance`] is the
//! same loop with a step quota: when the quota runs out it returns
//! [`EngineStatus::Suspended`] with every field already persisted in the
//! record, and a later call resumes exactly where it stopped. Splitting a
//! run into bounded calls never changes the resulting count.

use crate::board::mask::lowest_bit;
use crate::state::{SearchState, Step};

/// What a bounded engine call observed when it returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    /// The lane exhausted its partition; `solutions` is final.
    Done,
    /// The step quota ran out first. The record is fully persisted and a
    /// subsequent call will resume it.
    Suspended,
}

/// Execute one state-machine iteration.
///
/// Must not be entered with `step == Done`; the looping callers below
/// guarantee that.
#[inline(always)]
fn tick<const Q: usize>(s: &mut SearchState<Q>) {
    if s.step == Step::Remove {
        if s.col == s.start_col() {
            // Partition exhausted.
            s.step = Step::Done;
            return;
        }
        s.col -= 1;
        s.mask = s.column_masks[s.col];
    }

    // The bit being toggled: the lowest untried candidate when placing,
    // the previously chosen bit (still lowest in the saved mask) when
    // removing. The same three XORs place and un-place a queen.
    let rext = lowest_bit(s.mask);
    s.rook ^= rext;
    s.add ^= rext << s.col;
    s.sub ^= rext << (Q - 1 - s.col);

    if s.step == Step::Place {
        s.column_masks[s.col] = s.mask;
        s.col += 1;

        if s.col == Q {
            s.solutions += 1;
            s.step = Step::Remove;
        } else {
            s.mask = SearchState::<Q>::FULL
                & !(s.rook | (s.add >> s.col) | (s.sub >> (Q - 1 - s.col)));
            if s.mask == 0 {
                // Dead end at this row.
                s.step = Step::Remove;
            }
        }
    } else {
        s.mask ^= rext;
        if s.mask != 0 {
            // An untried sibling exists at this row.
            s.step = Step::Place;
        }
    }
}

/// Run a lane to completion.
///
/// The unbounded variant of the engine: loops the state machine until the
/// lane retires. Total for every valid input; there is no error path.
pub fn run<const Q: usize>(state: &mut SearchState<Q>) {
    while state.step != Step::Done {
        tick(state);
    }
}

/// Advance a lane by at most `budget` state-machine iterations.
///
/// The bounded variant for execution environments that impose a step
/// quota per invocation. On [`EngineStatus::Suspended`] every field of
/// the record has been persisted, and re-invoking resumes with behavior
/// identical to an uninterrupted run. A `budget` of 0 suspends without
/// touching the record.
///
/// Invoking this on a lane that is already `Done` is a caller contract
/// violation (checked only in debug builds).
///
/// # Example
///
/// ```
/// use queens_search::{engine, EngineStatus, SearchState};
///
/// let mut lane = SearchState::<8>::root();
/// while engine::advance(&mut lane, 500) == EngineStatus::Suspended {}
/// assert_eq!(lane.solutions, 92);
/// ```
pub fn advance<const Q: usize>(state: &mut SearchState<Q>, budget: u64) -> EngineStatus {
    debug_assert!(
        state.step != Step::Done,
        "advance invoked on a retired lane"
    );

    let mut remaining = budget;
    while state.step != Step::Done {
        if remaining == 0 {
            return EngineStatus::Suspended;
        }
        tick(state);
        remaining -= 1;
    }
    EngineStatus::Done
}
