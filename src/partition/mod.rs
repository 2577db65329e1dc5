// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Static partitioning of the search space into lanes.
//!
//! Parallelism here is data-parallel and entirely static: the driver
//! enumerates every legal placement of the first `depth` rows and hands
//! each resulting prefix to its own lane, with `start_col = depth`.
//! Distinct prefixes root disjoint subtrees and together cover the whole
//! space, so summing per-lane `solutions` after all lanes retire yields
//! the full count with no overlap and no coordination while running.
//!
//! `depth == 0` degenerates to the single full-board lane; larger depths
//! trade fewer steps per lane for more lanes. There is no dynamic load
//! balancing: a lane keeps its subtree for life.

use crate::board::mask::{lowest_bit, Mask};
use crate::state::SearchState;

/// Enumerate one lane per legal placement of the first `depth` rows.
///
/// Lanes come back in the engine's own lowest-bit-first order, so the
/// result is deterministic for a given `Q` and `depth`. Note that a
/// depth-0 split returns the single root lane.
///
/// # Panics
///
/// Panics if `depth >= Q`; a full-length prefix is already a complete
/// placement and belongs to no lane. The driver layer validates this
/// before lanes are built (see [`crate::driver`]).
pub fn split<const Q: usize>(depth: usize) -> Vec<SearchState<Q>> {
    assert!(depth < Q, "split depth {} out of range 0..{}", depth, Q);

    let mut lanes = Vec::new();
    expand::<Q>(0, depth, 0, 0, 0, &mut lanes);
    lanes
}

/// Recursively extend a legal prefix one row at a time.
///
/// Recursion depth is bounded by `depth`, and this runs on the host side
/// only; the engine itself stays stackless.
fn expand<const Q: usize>(
    col: usize,
    depth: usize,
    rook: Mask,
    add: Mask,
    sub: Mask,
    lanes: &mut Vec<SearchState<Q>>,
) {
    if col == depth {
        lanes.push(SearchState::seeded(depth, rook, add, sub));
        return;
    }

    // Only legal candidates are extended, so no prefix is ever built and
    // then rejected.
    let mut mask =
        SearchState::<Q>::FULL & !(rook | (add >> col) | (sub >> (Q - 1 - col)));
    while mask != 0 {
        let bit = lowest_bit(mask);
        mask ^= bit;
        expand(
            col + 1,
            depth,
            rook | bit,
            add | (bit << col),
            sub | (bit << (Q - 1 - col)),
            lanes,
        );
    }
}
